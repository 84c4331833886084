//! Turns free-text diary entries into structured health metrics.

use tracing::{debug, warn};

use crate::llm::{prompts, strip_code_fences, CompletionOptions, LlmProvider};
use crate::models::HealthMetrics;

/// Extracts numeric health metrics from diary text with a single LLM call.
///
/// Extraction is best-effort: an entry is always stored even when the
/// model is unavailable or returns garbage, so every failure path here
/// collapses to empty metrics rather than an error.
#[derive(Clone)]
pub struct MetricExtractor {
    llm: LlmProvider,
}

impl MetricExtractor {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn extract(&self, diary_text: &str) -> HealthMetrics {
        if diary_text.trim().is_empty() {
            return HealthMetrics::default();
        }

        if !self.llm.is_available() {
            debug!("LLM unavailable, storing entry without extracted metrics");
            return HealthMetrics::default();
        }

        let prompt = prompts::metric_extraction_prompt(diary_text);
        let options = CompletionOptions::deterministic(0.1, 500);

        let reply = match self.llm.complete(&prompt, Some(&options)).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "metric extraction call failed, storing entry without metrics");
                return HealthMetrics::default();
            }
        };

        match serde_json::from_str::<HealthMetrics>(strip_code_fences(&reply)) {
            Ok(metrics) => {
                debug!(
                    confidence = ?metrics.ai_confidence,
                    "extracted health metrics from diary entry"
                );
                metrics
            }
            Err(error) => {
                warn!(%error, "failed to parse extracted metrics, storing entry without metrics");
                HealthMetrics::default()
            }
        }
    }
}
