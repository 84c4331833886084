use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Three-state trend classification derived by comparing first-half vs
/// second-half means of a metric's values.
///
/// The polarity is directional on the raw value, not metric-aware: for
/// metrics where lower is better (pain, stress) `Improving` means the raw
/// number went up. Downstream insight text must correct for this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
    NoData,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improving => write!(f, "improving"),
            Self::Declining => write!(f, "declining"),
            Self::Stable => write!(f, "stable"),
            Self::InsufficientData => write!(f, "insufficient_data"),
            Self::NoData => write!(f, "no_data"),
        }
    }
}

/// Mood gets the fullest treatment: median plus range alongside the average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
}

/// Average-plus-trend stats for metrics without domain-specific counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueStats {
    pub average: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainStats {
    pub average: f64,
    /// Days with pain >= 7.
    pub bad_days: usize,
    /// Days with pain == 0.
    pub pain_free_days: usize,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepStats {
    pub average_hours: f64,
    /// Days with 7+ hours.
    pub good_sleep_days: usize,
    /// Days with under 6 hours.
    pub poor_sleep_days: usize,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressStats {
    pub average: f64,
    /// Days with stress >= 7.
    pub high_stress_days: usize,
    pub trend: Trend,
}

/// Per-metric descriptive statistics over one observation window.
///
/// A metric with zero non-null observations is simply absent; that is the
/// expected sparse-data case, not an error. Recomputed fresh on every
/// request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicStats {
    pub total_entries: usize,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub mood: Option<MoodStats>,
    pub energy: Option<ValueStats>,
    pub pain: Option<PainStats>,
    pub sleep: Option<SleepStats>,
    pub stress: Option<StressStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Weak,
    Moderate,
    Strong,
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Moderate => write!(f, "moderate"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationDirection {
    Positive,
    Negative,
}

impl std::fmt::Display for CorrelationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// A statistically-flagged linear relationship between two metrics.
///
/// Only emitted when at least 3 paired non-null observations exist and
/// `|coefficient| > 0.3`.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Correlation {
    pub metric_a: String,
    pub metric_b: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
    /// Canned natural-language explanation interpreting the sign.
    pub insight: String,
}

/// Free-text insight categories produced by the external LLM.
///
/// Not derived from the statistics computation; generated by a separate
/// non-deterministic process and merged into the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct InsightBundle {
    pub key_insights: Vec<String>,
    pub potential_triggers: Vec<String>,
    pub recommendations: Vec<String>,
    pub areas_of_concern: Vec<String>,
    pub positive_patterns: Vec<String>,
}

/// The terminal, immutable aggregate of one weekly analytics run.
///
/// Constructed once per request and returned to the HTTP layer; never
/// stored.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub total_entries: usize,
    pub avg_mood: f64,
    pub avg_energy: f64,
    pub avg_pain: f64,
    pub avg_sleep_hours: f64,
    pub avg_stress: f64,
    pub mood_trend: Trend,
    pub energy_trend: Trend,
    pub pain_trend: Trend,
    pub sleep_trend: Trend,
    pub stress_trend: Trend,
    pub correlations: Vec<Correlation>,
    pub insights: InsightBundle,
    pub generated_at: DateTime<Utc>,
}

impl WeeklySummary {
    /// The canned "no data" summary returned when the observation sequence
    /// is empty. Short-circuits the whole pipeline.
    pub fn empty() -> Self {
        Self {
            period_start: None,
            period_end: None,
            total_entries: 0,
            avg_mood: 0.0,
            avg_energy: 0.0,
            avg_pain: 0.0,
            avg_sleep_hours: 0.0,
            avg_stress: 0.0,
            mood_trend: Trend::NoData,
            energy_trend: Trend::NoData,
            pain_trend: Trend::NoData,
            sleep_trend: Trend::NoData,
            stress_trend: Trend::NoData,
            correlations: Vec::new(),
            insights: InsightBundle {
                key_insights: vec!["Insufficient data for analysis.".to_string()],
                potential_triggers: Vec::new(),
                recommendations: vec!["Add more diary entries for better analysis.".to_string()],
                areas_of_concern: Vec::new(),
                positive_patterns: Vec::new(),
            },
            generated_at: Utc::now(),
        }
    }

    /// Merge statistics, correlations and the insight bundle into the final
    /// record. Absent metrics contribute a zero average and keep the
    /// `insufficient_data` trend out of the way via `NoData`.
    pub fn assemble(
        stats: BasicStats,
        correlations: Vec<Correlation>,
        insights: InsightBundle,
    ) -> Self {
        Self {
            period_start: stats.period_start,
            period_end: stats.period_end,
            total_entries: stats.total_entries,
            avg_mood: stats.mood.as_ref().map(|m| m.average).unwrap_or(0.0),
            avg_energy: stats.energy.as_ref().map(|e| e.average).unwrap_or(0.0),
            avg_pain: stats.pain.as_ref().map(|p| p.average).unwrap_or(0.0),
            avg_sleep_hours: stats.sleep.as_ref().map(|s| s.average_hours).unwrap_or(0.0),
            avg_stress: stats.stress.as_ref().map(|s| s.average).unwrap_or(0.0),
            mood_trend: stats.mood.as_ref().map(|m| m.trend).unwrap_or(Trend::NoData),
            energy_trend: stats
                .energy
                .as_ref()
                .map(|e| e.trend)
                .unwrap_or(Trend::NoData),
            pain_trend: stats.pain.as_ref().map(|p| p.trend).unwrap_or(Trend::NoData),
            sleep_trend: stats
                .sleep
                .as_ref()
                .map(|s| s.trend)
                .unwrap_or(Trend::NoData),
            stress_trend: stats
                .stress
                .as_ref()
                .map(|s| s.trend)
                .unwrap_or(Trend::NoData),
            correlations,
            insights,
            generated_at: Utc::now(),
        }
    }
}

/// One week's averages for the multi-week trends endpoint.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct WeekTrend {
    /// 1-based week index counting back from today.
    pub week: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub mood: f64,
    pub energy: f64,
    pub pain: f64,
    pub sleep: f64,
    pub stress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trend_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Trend::InsufficientData).unwrap(),
            serde_json::json!("insufficient_data")
        );
        assert_eq!(
            serde_json::to_value(Trend::NoData).unwrap(),
            serde_json::json!("no_data")
        );
    }

    #[test]
    fn empty_summary_has_canned_placeholders() {
        let summary = WeeklySummary::empty();
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.mood_trend, Trend::NoData);
        assert_eq!(summary.stress_trend, Trend::NoData);
        assert!(summary.correlations.is_empty());
        assert_eq!(
            summary.insights.key_insights,
            vec!["Insufficient data for analysis."]
        );
        assert_eq!(
            summary.insights.recommendations,
            vec!["Add more diary entries for better analysis."]
        );
        assert!(summary.insights.potential_triggers.is_empty());
    }

    #[test]
    fn assemble_defaults_missing_metrics_to_zero_and_no_data() {
        let stats = BasicStats {
            total_entries: 4,
            mood: Some(MoodStats {
                average: 6.5,
                median: 6.5,
                min: 5.0,
                max: 8.0,
                trend: Trend::Stable,
            }),
            ..Default::default()
        };

        let summary = WeeklySummary::assemble(stats, Vec::new(), InsightBundle::default());
        assert_eq!(summary.avg_mood, 6.5);
        assert_eq!(summary.mood_trend, Trend::Stable);
        assert_eq!(summary.avg_pain, 0.0);
        assert_eq!(summary.pain_trend, Trend::NoData);
    }
}
