mod entries;
mod metrics;

pub use entries::EntryRepository;
pub use metrics::MetricsRepository;
