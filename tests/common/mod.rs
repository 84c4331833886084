// Common test utilities for integration tests
use std::sync::Once;

use chrono::{NaiveDate, Utc};
use vitalog::models::{DiaryEntry, HealthMetrics};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn entry(id: &str, user_id: &str, date: NaiveDate, text: &str) -> DiaryEntry {
    let now = Utc::now();
    DiaryEntry {
        id: id.to_string(),
        user_id: user_id.to_string(),
        entry_date: date,
        entry_text: text.to_string(),
        created_at: now,
        updated_at: now,
        metrics: None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn metrics(
    mood: f64,
    energy: f64,
    pain: f64,
    sleep_quality: f64,
    sleep_hours: f64,
    stress: f64,
) -> HealthMetrics {
    HealthMetrics {
        mood_score: Some(mood),
        energy_level: Some(energy),
        pain_level: Some(pain),
        sleep_quality: Some(sleep_quality),
        sleep_hours: Some(sleep_hours),
        stress_level: Some(stress),
        ai_confidence: Some(0.9),
    }
}
