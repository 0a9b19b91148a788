//! Core pipeline errors (simple, cloneable).

use thiserror::Error;

use crate::model::DataKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A step or the engine read a container slot that was never written.
    #[error("no value stored under '{0}' in the pipeline data")]
    MissingData(DataKey),
    /// Failure inside a step's own logic; propagated unchanged to the caller.
    #[error("step execution: {0}")]
    StepExecution(String),
    #[error("internal: {0}")]
    Internal(String),
}
