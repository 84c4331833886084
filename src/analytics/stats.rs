//! Descriptive statistics over a window of diary observations.

use crate::models::{
    BasicStats, MoodStats, Observation, PainStats, SleepStats, StressStats, Trend, ValueStats,
};

/// Threshold on a 10-point scale below which a half-to-half shift counts
/// as noise rather than a trend.
const TREND_THRESHOLD: f64 = 0.5;

/// Pain or stress at or above this level marks a bad day.
const HIGH_SEVERITY_THRESHOLD: f64 = 7.0;

const GOOD_SLEEP_HOURS: f64 = 7.0;
const POOR_SLEEP_HOURS: f64 = 6.0;

/// Compares the mean of the first half of the series against the second.
///
/// Values arrive in chronological order. Fewer than three points cannot
/// distinguish a trend from noise.
pub fn calculate_trend(values: &[f64]) -> Trend {
    if values.len() < 3 {
        return Trend::InsufficientData;
    }

    let mid = values.len() / 2;
    let first_half = mean(&values[..mid]);
    let second_half = mean(&values[mid..]);
    let difference = second_half - first_half;

    if difference.abs() < TREND_THRESHOLD {
        Trend::Stable
    } else if difference > 0.0 {
        Trend::Improving
    } else {
        Trend::Declining
    }
}

/// Computes per-metric summary statistics for a chronologically ordered
/// window of observations. Metrics absent from every observation are
/// omitted from the result.
pub fn calculate_basic_stats(observations: &[Observation]) -> BasicStats {
    if observations.is_empty() {
        return BasicStats::default();
    }

    let mood_scores = collect(observations, |o| o.mood);
    let energy_levels = collect(observations, |o| o.energy);
    let pain_levels = collect(observations, |o| o.pain);
    let sleep_hours = collect(observations, |o| o.sleep_hours);
    let stress_levels = collect(observations, |o| o.stress);

    let mut stats = BasicStats {
        total_entries: observations.len(),
        period_start: observations.first().map(|o| o.date),
        period_end: observations.last().map(|o| o.date),
        ..Default::default()
    };

    if !mood_scores.is_empty() {
        stats.mood = Some(MoodStats {
            average: round1(mean(&mood_scores)),
            median: round1(median(&mood_scores)),
            min: mood_scores.iter().copied().fold(f64::INFINITY, f64::min),
            max: mood_scores
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            trend: calculate_trend(&mood_scores),
        });
    }

    if !energy_levels.is_empty() {
        stats.energy = Some(ValueStats {
            average: round1(mean(&energy_levels)),
            trend: calculate_trend(&energy_levels),
        });
    }

    if !pain_levels.is_empty() {
        stats.pain = Some(PainStats {
            average: round1(mean(&pain_levels)),
            bad_days: pain_levels
                .iter()
                .filter(|&&p| p >= HIGH_SEVERITY_THRESHOLD)
                .count(),
            pain_free_days: pain_levels.iter().filter(|&&p| p == 0.0).count(),
            trend: calculate_trend(&pain_levels),
        });
    }

    if !sleep_hours.is_empty() {
        stats.sleep = Some(SleepStats {
            average_hours: round1(mean(&sleep_hours)),
            good_sleep_days: sleep_hours.iter().filter(|&&s| s >= GOOD_SLEEP_HOURS).count(),
            poor_sleep_days: sleep_hours.iter().filter(|&&s| s < POOR_SLEEP_HOURS).count(),
            trend: calculate_trend(&sleep_hours),
        });
    }

    if !stress_levels.is_empty() {
        stats.stress = Some(StressStats {
            average: round1(mean(&stress_levels)),
            high_stress_days: stress_levels
                .iter()
                .filter(|&&s| s >= HIGH_SEVERITY_THRESHOLD)
                .count(),
            trend: calculate_trend(&stress_levels),
        });
    }

    stats
}

fn collect(observations: &[Observation], field: impl Fn(&Observation) -> Option<f64>) -> Vec<f64> {
    observations.iter().filter_map(field).collect()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn observation(day: u32, mood: Option<f64>, pain: Option<f64>) -> Observation {
        Observation {
            entry_id: format!("entry-{day}"),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            text: String::new(),
            mood,
            energy: None,
            pain,
            sleep_quality: None,
            sleep_hours: None,
            stress: None,
        }
    }

    #[test]
    fn trend_needs_three_values() {
        assert_eq!(calculate_trend(&[5.0, 6.0]), Trend::InsufficientData);
        assert_eq!(calculate_trend(&[]), Trend::InsufficientData);
    }

    #[test]
    fn trend_compares_half_means() {
        // Halves average 5.0 and 7.0, a clear rise.
        assert_eq!(
            calculate_trend(&[5.0, 5.0, 5.0, 8.0, 8.0]),
            Trend::Improving
        );
        assert_eq!(
            calculate_trend(&[8.0, 8.0, 5.0, 5.0, 5.0]),
            Trend::Declining
        );
        assert_eq!(calculate_trend(&[5.0, 5.2, 5.1, 5.3]), Trend::Stable);
    }

    #[test]
    fn trend_shift_below_half_point_is_stable() {
        assert_eq!(calculate_trend(&[5.0, 5.0, 5.4, 5.4]), Trend::Stable);
    }

    #[test]
    fn empty_input_gives_default_stats() {
        let stats = calculate_basic_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.mood.is_none());
        assert!(stats.pain.is_none());
    }

    #[test]
    fn mood_stats_cover_average_median_and_extremes() {
        let observations: Vec<Observation> = [3.0, 7.0, 5.0, 8.0, 6.0]
            .iter()
            .enumerate()
            .map(|(i, &mood)| observation(i as u32 + 1, Some(mood), None))
            .collect();

        let stats = calculate_basic_stats(&observations);
        let mood = stats.mood.expect("mood stats should be present");
        assert_eq!(mood.average, 5.8);
        assert_eq!(mood.median, 6.0);
        assert_eq!(mood.min, 3.0);
        assert_eq!(mood.max, 8.0);
    }

    #[test]
    fn pain_day_counters() {
        let observations: Vec<Observation> = [8.0, 7.0, 9.0, 8.0, 2.0, 1.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &pain)| observation(i as u32 + 1, None, Some(pain)))
            .collect();

        let stats = calculate_basic_stats(&observations);
        let pain = stats.pain.expect("pain stats should be present");
        assert_eq!(pain.bad_days, 4);
        assert_eq!(pain.pain_free_days, 1);
        assert_eq!(pain.average, 5.0);
        assert_eq!(pain.trend, Trend::Declining);
    }

    #[test]
    fn absent_metric_is_omitted() {
        let observations = vec![observation(1, Some(5.0), None)];
        let stats = calculate_basic_stats(&observations);
        assert!(stats.mood.is_some());
        assert!(stats.pain.is_none());
        assert!(stats.sleep.is_none());
        assert!(stats.stress.is_none());
    }

    #[test]
    fn period_bounds_follow_observation_order() {
        let observations = vec![observation(1, Some(5.0), None), observation(7, Some(6.0), None)];
        let stats = calculate_basic_stats(&observations);
        assert_eq!(stats.period_start, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(stats.period_end, NaiveDate::from_ymd_opt(2024, 6, 7));
    }
}
