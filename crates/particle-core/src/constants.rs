//! Static values of the pipeline core.
//!
//! These participate in the framed configuration report that external
//! output steps persist alongside computed results, so a stats file can be
//! traced back to the core version and step configuration that produced it.

/// Version of the core, embedded in [`crate::Pipeline::configuration_report`].
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Step names executed during pipeline construction when the caller does not
/// override the initial-step set. A name listed here but absent from a
/// registry is simply never triggered.
pub const DEFAULT_INITIAL_STEPS: [&str; 3] = ["initial", "classifier", "create background"];
