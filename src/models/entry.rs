use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single free-text diary entry as stored.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryEntry {
    pub id: String,
    pub user_id: String,
    pub entry_date: NaiveDate,
    pub entry_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Extracted metrics, when the AI extraction produced any.
    pub metrics: Option<HealthMetrics>,
}

/// Structured health metrics extracted from one diary entry.
///
/// Every field is optional: not every entry mentions every metric, and the
/// extractor returns null for anything the text does not support. This is
/// also the deserialization target for the LLM extraction reply, so missing
/// keys default to `None` rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthMetrics {
    /// Mood, 1-10 (higher is better).
    #[serde(default)]
    pub mood_score: Option<f64>,
    /// Energy, 1-10 (higher is better).
    #[serde(default)]
    pub energy_level: Option<f64>,
    /// Pain, 0-10 (lower is better).
    #[serde(default)]
    pub pain_level: Option<f64>,
    /// Sleep quality, 1-10.
    #[serde(default)]
    pub sleep_quality: Option<f64>,
    /// Hours slept.
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Stress, 0-10 (lower is better).
    #[serde(default)]
    pub stress_level: Option<f64>,
    /// Extractor self-reported confidence, 0.0-1.0.
    #[serde(default)]
    pub ai_confidence: Option<f64>,
}

impl HealthMetrics {
    /// True when no metric was extracted at all (nothing worth persisting).
    pub fn is_empty(&self) -> bool {
        self.mood_score.is_none()
            && self.energy_level.is_none()
            && self.pain_level.is_none()
            && self.sleep_quality.is_none()
            && self.sleep_hours.is_none()
            && self.stress_level.is_none()
    }
}

/// One diary day's data: the unit of analysis for the weekly pipeline.
///
/// Produced by joining entries with their extracted metrics, ordered by
/// date ascending. Immutable once fetched; the analytics pipeline never
/// writes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub entry_id: String,
    pub date: NaiveDate,
    pub text: String,
    pub mood: Option<f64>,
    pub energy: Option<f64>,
    pub pain: Option<f64>,
    pub sleep_quality: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub stress: Option<f64>,
}

impl Observation {
    /// True when mood, energy, pain and stress are all present. The
    /// correlation detector only works on these complete rows.
    pub fn has_core_metrics(&self) -> bool {
        self.mood.is_some() && self.energy.is_some() && self.pain.is_some() && self.stress.is_some()
    }
}
