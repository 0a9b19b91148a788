//! particle-adapters: reference steps for the pipeline core.
//!
//! This crate provides deterministic, in-memory implementations of the
//! conventional step sequence (classifier load, background creation and
//! rolling correction, synthetic frame load, threshold segmentation,
//! statistics extraction). They exist to exercise the step contract in
//! integration tests and demos without instrument files on disk; real
//! instrument loaders and models are external collaborators implementing
//! the same traits.

pub mod steps;

pub use steps::background::{CorrectBackground, CreateBackground};
pub use steps::classify::{BrightnessBandClassifier, LoadClassifier};
pub use steps::load::{timestamp_from_filename, SyntheticLoad};
pub use steps::segment::Segment;
pub use steps::stats::CalculateStats;
