//! Two-stage LLM insight generation over a week of observations.
//!
//! Stage one reads the raw entries alongside the statistical correlations
//! and names specific triggers. Stage two turns the trigger analysis into
//! the five actionable lists the summary exposes. Each stage degrades
//! independently so a single bad reply never takes down the whole summary.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::{prompts, strip_code_fences, CompletionOptions, LlmProvider};
use crate::models::{Correlation, InsightBundle, Observation};

/// Stage-one output: named triggers with supporting evidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerAnalysis {
    pub specific_triggers: Vec<SpecificTrigger>,
    pub environmental_patterns: Vec<EnvironmentalPattern>,
    pub behavioral_insights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificTrigger {
    pub trigger_name: String,
    pub category: String,
    pub evidence_strength: String,
    pub occurrences: u32,
    pub symptoms_triggered: Vec<String>,
    pub evidence_dates: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalPattern {
    pub pattern: String,
    pub strength: String,
    pub explanation: String,
}

#[derive(Clone)]
pub struct InsightSynthesizer {
    llm: LlmProvider,
}

impl InsightSynthesizer {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Runs both stages and always produces a bundle. Call failures in
    /// either stage collapse to the error fallback; a malformed stage-two
    /// reply collapses to the formatting fallback; a malformed stage-one
    /// reply continues with an empty trigger analysis.
    pub async fn generate(
        &self,
        observations: &[Observation],
        correlations: &[Correlation],
    ) -> InsightBundle {
        if !self.llm.is_available() {
            debug!("LLM unavailable, returning fallback insights");
            return error_fallback();
        }

        let entries_json = serialize_entries(observations);
        let correlations_json =
            serde_json::to_string_pretty(correlations).unwrap_or_else(|_| "[]".to_string());

        let trigger_prompt = prompts::trigger_analysis_prompt(&entries_json, &correlations_json);
        let trigger_options = CompletionOptions::deterministic(0.1, 2500);

        let trigger_reply = match self.llm.complete(&trigger_prompt, Some(&trigger_options)).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "trigger analysis call failed");
                return error_fallback();
            }
        };

        let trigger_data = parse_trigger_stage(&trigger_reply);
        debug!(
            triggers = trigger_data.specific_triggers.len(),
            "trigger analysis complete"
        );

        let trigger_json =
            serde_json::to_string_pretty(&trigger_data).unwrap_or_else(|_| "{}".to_string());
        let synthesis_prompt = prompts::insight_synthesis_prompt(&trigger_json);
        let synthesis_options = CompletionOptions::deterministic(0.2, 2000);

        let synthesis_reply = match self
            .llm
            .complete(&synthesis_prompt, Some(&synthesis_options))
            .await
        {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "insight synthesis call failed");
                return error_fallback();
            }
        };

        parse_synthesis_stage(&synthesis_reply)
    }
}

/// Serialize observations the way the trigger prompt expects: date, raw
/// text, and the day's scores grouped under `health_scores`.
fn serialize_entries(observations: &[Observation]) -> String {
    let entries: Vec<serde_json::Value> = observations
        .iter()
        .map(|o| {
            serde_json::json!({
                "date": o.date.to_string(),
                "text": o.text,
                "health_scores": {
                    "mood": o.mood,
                    "energy": o.energy,
                    "pain": o.pain,
                    "sleep_hours": o.sleep_hours,
                    "stress": o.stress,
                },
            })
        })
        .collect();

    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn parse_trigger_stage(reply: &str) -> TriggerAnalysis {
    match serde_json::from_str(strip_code_fences(reply)) {
        Ok(analysis) => analysis,
        Err(error) => {
            warn!(%error, "failed to parse trigger analysis, continuing without triggers");
            TriggerAnalysis::default()
        }
    }
}

pub(crate) fn parse_synthesis_stage(reply: &str) -> InsightBundle {
    match serde_json::from_str(strip_code_fences(reply)) {
        Ok(bundle) => bundle,
        Err(error) => {
            warn!(%error, "failed to parse insight synthesis");
            format_fallback()
        }
    }
}

/// Bundle returned when an LLM call fails or no provider is configured.
pub(crate) fn error_fallback() -> InsightBundle {
    InsightBundle {
        key_insights: vec!["Unable to generate insights due to processing error".to_string()],
        potential_triggers: vec!["Analysis error - check data quality".to_string()],
        recommendations: vec!["Verify diary entry content and try again".to_string()],
        areas_of_concern: vec!["AI processing failed".to_string()],
        positive_patterns: vec!["Unable to analyze patterns".to_string()],
    }
}

/// Bundle returned when the synthesis reply is not valid JSON.
pub(crate) fn format_fallback() -> InsightBundle {
    InsightBundle {
        key_insights: vec!["Analysis completed but formatting issue occurred".to_string()],
        potential_triggers: vec!["Check diary entries for patterns".to_string()],
        recommendations: vec!["Continue detailed logging for better insights".to_string()],
        areas_of_concern: vec!["Unable to process analysis results".to_string()],
        positive_patterns: vec!["Regular logging is beneficial".to_string()],
    }
}
