mod entry;
mod summary;

pub use entry::{DiaryEntry, HealthMetrics, Observation};
pub use summary::{
    BasicStats, Correlation, CorrelationDirection, CorrelationStrength, InsightBundle, MoodStats,
    PainStats, SleepStats, StressStats, Trend, ValueStats, WeekTrend, WeeklySummary,
};
