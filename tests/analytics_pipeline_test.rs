//! End-to-end analytics pipeline tests against a real in-memory database.
//!
//! The LLM provider is left unavailable here, so insight generation is
//! expected to return its deterministic fallback lists while all the
//! statistical output stays exact.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use vitalog::analytics::AnalyticsEngine;
use vitalog::config::DatabaseConfig;
use vitalog::db::{Database, DatabaseBackend, LibSqlBackend};
use vitalog::llm::LlmProvider;
use vitalog::models::{CorrelationDirection, CorrelationStrength, Trend};

async fn seeded_backend() -> Arc<dyn DatabaseBackend> {
    common::init_test_logger();

    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        auth_token: None,
        local_path: None,
    };
    let db = Database::new(&config).await.expect("database should open");
    let backend: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(db));

    // Six days: mood and energy rise together, pain and stress fall as
    // sleep lengthens. Every pairwise correlation is exact.
    let moods = [3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let energies = moods;
    let pains = [8.0, 7.0, 6.0, 5.0, 4.0, 3.0];
    let sleep_hours = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let stresses = pains;

    let today = Utc::now().date_naive();
    for i in 0..6usize {
        let date = today - Duration::days(5 - i as i64);
        let id = format!("entry-{i}");
        let entry = common::entry(&id, "alice", date, "seeded diary entry");
        backend.create_entry(&entry).await.expect("entry stored");

        let metrics = common::metrics(
            moods[i],
            energies[i],
            pains[i],
            7.0,
            sleep_hours[i],
            stresses[i],
        );
        backend
            .save_metrics(&id, &metrics)
            .await
            .expect("metrics stored");
    }

    backend
}

#[tokio::test]
async fn weekly_summary_computes_stats_and_correlations() {
    let backend = seeded_backend().await;
    let engine = AnalyticsEngine::new(backend, LlmProvider::unavailable("test"));

    let summary = engine
        .generate_weekly_summary("alice", 1)
        .await
        .expect("summary should generate");

    assert_eq!(summary.total_entries, 6);
    assert_eq!(summary.avg_mood, 5.5);
    assert_eq!(summary.avg_pain, 5.5);
    assert_eq!(summary.avg_sleep_hours, 6.5);
    assert_eq!(summary.mood_trend, Trend::Improving);
    assert_eq!(summary.energy_trend, Trend::Improving);
    // Raw pain values fell, which reads as declining on the raw scale.
    assert_eq!(summary.pain_trend, Trend::Declining);
    assert_eq!(summary.sleep_trend, Trend::Improving);
    assert_eq!(summary.stress_trend, Trend::Declining);

    assert_eq!(summary.correlations.len(), 3);

    let sleep_pain = summary
        .correlations
        .iter()
        .find(|c| c.metric_a == "sleep_hours" && c.metric_b == "pain_level")
        .expect("sleep/pain correlation");
    assert_eq!(sleep_pain.coefficient, -1.0);
    assert_eq!(sleep_pain.strength, CorrelationStrength::Strong);
    assert_eq!(sleep_pain.direction, CorrelationDirection::Negative);

    let mood_energy = summary
        .correlations
        .iter()
        .find(|c| c.metric_a == "mood_score" && c.metric_b == "energy_level")
        .expect("mood/energy correlation");
    assert_eq!(mood_energy.coefficient, 1.0);
    assert_eq!(mood_energy.direction, CorrelationDirection::Positive);

    let stress_pain = summary
        .correlations
        .iter()
        .find(|c| c.metric_a == "stress_level" && c.metric_b == "pain_level")
        .expect("stress/pain correlation");
    assert_eq!(stress_pain.coefficient, 1.0);
}

#[tokio::test]
async fn weekly_summary_falls_back_when_llm_unavailable() {
    let backend = seeded_backend().await;
    let engine = AnalyticsEngine::new(backend, LlmProvider::unavailable("test"));

    let summary = engine
        .generate_weekly_summary("alice", 1)
        .await
        .expect("summary should generate");

    assert_eq!(
        summary.insights.key_insights,
        vec!["Unable to generate insights due to processing error"]
    );
    assert_eq!(
        summary.insights.potential_triggers,
        vec!["Analysis error - check data quality"]
    );
    assert_eq!(
        summary.insights.recommendations,
        vec!["Verify diary entry content and try again"]
    );
}

#[tokio::test]
async fn empty_window_returns_canned_summary() {
    let backend = seeded_backend().await;
    let engine = AnalyticsEngine::new(backend, LlmProvider::unavailable("test"));

    let summary = engine
        .generate_weekly_summary("nobody", 1)
        .await
        .expect("summary should generate");

    assert_eq!(summary.total_entries, 0);
    assert_eq!(summary.mood_trend, Trend::NoData);
    assert_eq!(summary.sleep_trend, Trend::NoData);
    assert!(summary.correlations.is_empty());
    assert_eq!(
        summary.insights.key_insights,
        vec!["Insufficient data for analysis."]
    );
    assert_eq!(
        summary.insights.recommendations,
        vec!["Add more diary entries for better analysis."]
    );
}

#[tokio::test]
async fn correlations_only_reports_data_points() {
    let backend = seeded_backend().await;
    let engine = AnalyticsEngine::new(backend, LlmProvider::unavailable("test"));

    let (correlations, data_points) = engine
        .correlations_only("alice", 1)
        .await
        .expect("correlations should compute");

    assert_eq!(data_points, 6);
    assert_eq!(correlations.len(), 3);
}

#[tokio::test]
async fn trend_series_covers_the_seeded_week_only() {
    let backend = seeded_backend().await;
    let engine = AnalyticsEngine::new(backend, LlmProvider::unavailable("test"));

    let series = engine
        .trend_series("alice", 4)
        .await
        .expect("trend series should compute");

    // All seeded entries fall in the most recent week; older windows are
    // empty and skipped.
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].week, 1);
    assert_eq!(series[0].mood, 5.5);
    assert_eq!(series[0].sleep, 6.5);
}
