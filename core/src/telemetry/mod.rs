pub mod log;
pub mod metrics;

pub use self::log::StageLogger;
pub use metrics::FilterStats;
