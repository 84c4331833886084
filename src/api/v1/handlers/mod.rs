pub mod analytics;
pub mod entries;
pub(crate) mod health;

pub use health::health_check;
