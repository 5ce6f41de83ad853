//! Core point pipeline for the GPS track cleaner.
//!
//! Points are pulled one at a time through a chain of `PointSource`
//! decorators: ingestion, the speed filter, then the noise filter, and finally
//! an exporter drains the chain.

pub mod export;
pub mod ingest;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{FilterConfig, GeoPoint, PointSource, SourceError, SourceResult};
