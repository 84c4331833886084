//! Request/response shapes for the analytics endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Correlation, InsightBundle, Trend, WeekTrend, WeeklySummary};

const BETTER_HIGH_SCALE: &str = "1-10 (higher is better)";
const BETTER_LOW_SCALE: &str = "0-10 (lower is better)";
const SLEEP_SCALE: &str = "hours per night";

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SummaryQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Analysis window in weeks counting back from today. Defaults to the
    /// configured window and is clamped to the configured maximum.
    #[serde(default)]
    pub weeks: Option<u32>,
}

/// The date window one summary covers.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PeriodDto {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_entries: usize,
}

/// One metric's summary with a human-readable scale annotation.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct MetricSummaryDto {
    pub average: f64,
    pub trend: Trend,
    pub scale: String,
}

/// Sleep is reported in hours rather than on a 10-point scale.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SleepSummaryDto {
    pub average_hours: f64,
    pub trend: Trend,
    pub scale: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthMetricsDto {
    pub mood: MetricSummaryDto,
    pub energy: MetricSummaryDto,
    pub pain: MetricSummaryDto,
    pub sleep: SleepSummaryDto,
    pub stress: MetricSummaryDto,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct WeeklySummaryResponse {
    pub period: PeriodDto,
    pub health_metrics: HealthMetricsDto,
    pub correlations: Vec<Correlation>,
    pub insights: InsightBundle,
    pub generated_at: DateTime<Utc>,
}

impl From<WeeklySummary> for WeeklySummaryResponse {
    fn from(summary: WeeklySummary) -> Self {
        Self {
            period: PeriodDto {
                start_date: summary.period_start,
                end_date: summary.period_end,
                total_entries: summary.total_entries,
            },
            health_metrics: HealthMetricsDto {
                mood: MetricSummaryDto {
                    average: summary.avg_mood,
                    trend: summary.mood_trend,
                    scale: BETTER_HIGH_SCALE.to_string(),
                },
                energy: MetricSummaryDto {
                    average: summary.avg_energy,
                    trend: summary.energy_trend,
                    scale: BETTER_HIGH_SCALE.to_string(),
                },
                pain: MetricSummaryDto {
                    average: summary.avg_pain,
                    trend: summary.pain_trend,
                    scale: BETTER_LOW_SCALE.to_string(),
                },
                sleep: SleepSummaryDto {
                    average_hours: summary.avg_sleep_hours,
                    trend: summary.sleep_trend,
                    scale: SLEEP_SCALE.to_string(),
                },
                stress: MetricSummaryDto {
                    average: summary.avg_stress,
                    trend: summary.stress_trend,
                    scale: BETTER_LOW_SCALE.to_string(),
                },
            },
            correlations: summary.correlations,
            insights: summary.insights,
            generated_at: summary.generated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CorrelationsResponse {
    pub correlations: Vec<Correlation>,
    /// Number of observations in the analysis window, including rows that
    /// were too incomplete to correlate.
    pub data_points: usize,
    pub period_weeks: u32,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TrendsResponse {
    pub trends: Vec<WeekTrend>,
    pub weeks_analyzed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_summary_maps_to_no_data_response() {
        let response = WeeklySummaryResponse::from(WeeklySummary::empty());
        assert_eq!(response.period.total_entries, 0);
        assert_eq!(response.health_metrics.mood.trend, Trend::NoData);
        assert_eq!(response.health_metrics.sleep.trend, Trend::NoData);
        assert_eq!(response.health_metrics.pain.scale, BETTER_LOW_SCALE);
        assert_eq!(response.health_metrics.sleep.scale, SLEEP_SCALE);
        assert!(response.correlations.is_empty());
        assert_eq!(
            response.insights.key_insights,
            vec!["Insufficient data for analysis."]
        );
    }
}
