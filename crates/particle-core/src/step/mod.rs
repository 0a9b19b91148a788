//! Step definitions.
//!
//! A step is one unit of the processing sequence. This module defines:
//! - The two call shapes a step can take ([`TransformStep`],
//!   [`ProducerStep`]) and the tagged [`Step`] stored in the registry.
//! - [`StepRegistry`]: the ordered name → step mapping.
//! - [`steps_to_string`]: the human-readable descriptor of a registry.
//! - [`ReturnData`]: the debug passthrough step.

mod contract;
mod describe;
mod passthrough;
mod registry;

pub use contract::{ProducerStep, Step, StepKind, TransformStep};
pub use describe::steps_to_string;
pub use passthrough::ReturnData;
pub use registry::StepRegistry;
