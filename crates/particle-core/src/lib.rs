//! particle-core: sequential particle-image pipeline orchestrator.
//!
//! The engine executes a named, ordered sequence of processing steps over
//! one shared mutable [`PipelineData`] container. Steps named in the
//! initial-step set run once, at [`Pipeline`] construction; the remaining
//! steps re-run on every [`Pipeline::run`] call. The numerical content of
//! steps (background correction, segmentation, statistics, reconstruction)
//! lives in external crates consumed through the [`step`] contract; the
//! core only sequences, threads shared state and describes its own
//! configuration.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod step;

pub use engine::{Pipeline, PipelineBuilder};
pub use errors::PipelineError;
pub use model::{BinaryMask, Classifier, ClassifierHandle, DataKey, ImageFrame, ImageStack, ParticleTable,
                PipelineData, StatsOutput, TableRow};
pub use step::{steps_to_string, ProducerStep, ReturnData, Step, StepKind, StepRegistry, TransformStep};
