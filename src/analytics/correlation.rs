//! Pearson correlation detection between pairs of health metrics.

use crate::models::{Correlation, CorrelationDirection, CorrelationStrength, Observation};

/// Correlations weaker than this are not worth surfacing to the user.
const REPORTING_THRESHOLD: f64 = 0.3;

const STRONG_THRESHOLD: f64 = 0.7;
const MODERATE_THRESHOLD: f64 = 0.5;

/// Minimum observations (and complete rows) before a correlation window
/// is considered meaningful.
const MIN_DATA_POINTS: usize = 5;

struct PearsonResult {
    coefficient: f64,
    strength: CorrelationStrength,
    direction: CorrelationDirection,
}

/// Scans a window of observations for notable correlations between three
/// fixed metric pairs: sleep hours against pain, mood against energy, and
/// stress against pain.
///
/// Rows missing any of mood, energy, pain, or stress are excluded up
/// front. With fewer than five observations, or fewer than five complete
/// rows, no correlations are reported.
pub fn detect_correlations(observations: &[Observation]) -> Vec<Correlation> {
    let mut correlations = Vec::new();

    if observations.len() < MIN_DATA_POINTS {
        return correlations;
    }

    let valid: Vec<&Observation> = observations
        .iter()
        .filter(|o| o.has_core_metrics())
        .collect();

    if valid.len() < MIN_DATA_POINTS {
        return correlations;
    }

    // Sleep hours are optional even on complete rows, so pair them only
    // where sleep was recorded.
    let sleep_rows: Vec<&&Observation> = valid.iter().filter(|o| o.sleep_hours.is_some()).collect();
    let sleep_hours: Vec<f64> = sleep_rows.iter().filter_map(|o| o.sleep_hours).collect();
    let sleep_pain: Vec<f64> = sleep_rows.iter().filter_map(|o| o.pain).collect();

    if let Some(result) = pearson(&sleep_hours, &sleep_pain) {
        if result.coefficient.abs() > REPORTING_THRESHOLD {
            let insight = sleep_pain_insight(&result);
            correlations.push(build("sleep_hours", "pain_level", result, insight));
        }
    }

    let moods: Vec<f64> = valid.iter().filter_map(|o| o.mood).collect();
    let energies: Vec<f64> = valid.iter().filter_map(|o| o.energy).collect();

    if let Some(result) = pearson(&moods, &energies) {
        if result.coefficient.abs() > REPORTING_THRESHOLD {
            let insight = mood_energy_insight(&result);
            correlations.push(build("mood_score", "energy_level", result, insight));
        }
    }

    let stresses: Vec<f64> = valid.iter().filter_map(|o| o.stress).collect();
    let pains: Vec<f64> = valid.iter().filter_map(|o| o.pain).collect();

    if let Some(result) = pearson(&stresses, &pains) {
        if result.coefficient.abs() > REPORTING_THRESHOLD {
            let insight = stress_pain_insight(&result);
            correlations.push(build("stress_level", "pain_level", result, insight));
        }
    }

    correlations
}

/// Pearson correlation coefficient over paired samples. Returns None for
/// fewer than three pairs or when either series has zero variance.
fn pearson(x_values: &[f64], y_values: &[f64]) -> Option<PearsonResult> {
    if x_values.len() != y_values.len() || x_values.len() < 3 {
        return None;
    }

    let n = x_values.len() as f64;
    let sum_x: f64 = x_values.iter().sum();
    let sum_y: f64 = y_values.iter().sum();
    let sum_xy: f64 = x_values.iter().zip(y_values).map(|(x, y)| x * y).sum();
    let sum_x_sq: f64 = x_values.iter().map(|x| x * x).sum();
    let sum_y_sq: f64 = y_values.iter().map(|y| y * y).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x_sq - sum_x * sum_x) * (n * sum_y_sq - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        return None;
    }

    let coefficient = round3(numerator / denominator);

    let strength = if coefficient.abs() > STRONG_THRESHOLD {
        CorrelationStrength::Strong
    } else if coefficient.abs() > MODERATE_THRESHOLD {
        CorrelationStrength::Moderate
    } else {
        CorrelationStrength::Weak
    };

    let direction = if coefficient > 0.0 {
        CorrelationDirection::Positive
    } else {
        CorrelationDirection::Negative
    };

    Some(PearsonResult {
        coefficient,
        strength,
        direction,
    })
}

fn build(
    metric_a: &str,
    metric_b: &str,
    result: PearsonResult,
    insight: String,
) -> Correlation {
    Correlation {
        metric_a: metric_a.to_string(),
        metric_b: metric_b.to_string(),
        coefficient: result.coefficient,
        strength: result.strength,
        direction: result.direction,
        insight,
    }
}

fn sleep_pain_insight(result: &PearsonResult) -> String {
    let strength = &result.strength;
    match result.direction {
        CorrelationDirection::Negative => format!(
            "There's a {strength} correlation between sleep and pain levels - less sleep tends to increase pain."
        ),
        CorrelationDirection::Positive => format!(
            "There's a {strength} correlation between sleep and pain levels - more sleep tends to increase pain (unusual pattern)."
        ),
    }
}

fn mood_energy_insight(result: &PearsonResult) -> String {
    let strength = &result.strength;
    match result.direction {
        CorrelationDirection::Positive => format!(
            "There's a {strength} correlation between mood and energy - better mood coincides with higher energy levels."
        ),
        CorrelationDirection::Negative => format!(
            "There's a {strength} correlation between mood and energy - better mood coincides with lower energy (unusual pattern)."
        ),
    }
}

fn stress_pain_insight(result: &PearsonResult) -> String {
    let strength = &result.strength;
    match result.direction {
        CorrelationDirection::Positive => format!(
            "There's a {strength} correlation between stress and pain - higher stress levels coincide with increased pain."
        ),
        CorrelationDirection::Negative => format!(
            "There's a {strength} correlation between stress and pain - higher stress levels coincide with decreased pain (unusual pattern)."
        ),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
