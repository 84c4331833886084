//! Orchestrates the weekly summary pipeline: load observations, compute
//! statistics and correlations, then ask the LLM for insights.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use tracing::{debug, info};

use crate::analytics::correlation::detect_correlations;
use crate::analytics::insights::InsightSynthesizer;
use crate::analytics::stats::calculate_basic_stats;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::llm::LlmProvider;
use crate::models::{Correlation, WeekTrend, WeeklySummary};

#[derive(Clone)]
pub struct AnalyticsEngine {
    db: Arc<dyn DatabaseBackend>,
    synthesizer: InsightSynthesizer,
}

impl AnalyticsEngine {
    pub fn new(db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        Self {
            db,
            synthesizer: InsightSynthesizer::new(llm),
        }
    }

    /// Full pipeline for one analysis window ending today.
    ///
    /// An empty window short-circuits to the canned summary before any
    /// statistics or LLM work happens.
    pub async fn generate_weekly_summary(
        &self,
        user_id: &str,
        weeks_back: u32,
    ) -> Result<WeeklySummary> {
        let (start, end) = analysis_window(weeks_back);
        let observations = self.db.observations_in_range(user_id, start, end).await?;

        info!(
            user_id,
            weeks_back,
            entries = observations.len(),
            "generating weekly summary"
        );

        if observations.is_empty() {
            return Ok(WeeklySummary::empty());
        }

        let stats = calculate_basic_stats(&observations);
        let correlations = detect_correlations(&observations);
        debug!(correlations = correlations.len(), "statistical analysis complete");

        let insights = self
            .synthesizer
            .generate(&observations, &correlations)
            .await;

        Ok(WeeklySummary::assemble(stats, correlations, insights))
    }

    /// Correlation analysis on its own, with the number of observations
    /// the window contained.
    pub async fn correlations_only(
        &self,
        user_id: &str,
        weeks_back: u32,
    ) -> Result<(Vec<Correlation>, usize)> {
        let (start, end) = analysis_window(weeks_back);
        let observations = self.db.observations_in_range(user_id, start, end).await?;
        let correlations = detect_correlations(&observations);
        Ok((correlations, observations.len()))
    }

    /// Per-week metric averages counting back from today, oldest week
    /// last. Weeks with no entries are skipped.
    pub async fn trend_series(&self, user_id: &str, weeks: u32) -> Result<Vec<WeekTrend>> {
        let today = Utc::now().date_naive();
        let mut series = Vec::new();

        for week in 1..=weeks {
            let end = today - Duration::weeks(i64::from(week) - 1);
            let start = end - Duration::weeks(1);

            let observations = self.db.observations_in_range(user_id, start, end).await?;
            if observations.is_empty() {
                continue;
            }

            let stats = calculate_basic_stats(&observations);
            series.push(WeekTrend {
                week,
                start_date: stats.period_start,
                end_date: stats.period_end,
                mood: stats.mood.as_ref().map(|m| m.average).unwrap_or(0.0),
                energy: stats.energy.as_ref().map(|e| e.average).unwrap_or(0.0),
                pain: stats.pain.as_ref().map(|p| p.average).unwrap_or(0.0),
                sleep: stats.sleep.as_ref().map(|s| s.average_hours).unwrap_or(0.0),
                stress: stats.stress.as_ref().map(|s| s.average).unwrap_or(0.0),
            });
        }

        Ok(series)
    }
}

fn analysis_window(weeks_back: u32) -> (NaiveDate, NaiveDate) {
    let end = Utc::now().date_naive();
    let start = end - Duration::weeks(i64::from(weeks_back));
    (start, end)
}
