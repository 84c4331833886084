pub mod correlation;
pub mod engine;
pub mod insights;
pub mod stats;

pub use engine::AnalyticsEngine;
pub use insights::InsightSynthesizer;
