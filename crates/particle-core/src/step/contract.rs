//! The step contract: two call shapes selected by explicit tagging.

use std::fmt;

use crate::errors::PipelineError;
use crate::model::{ClassifierHandle, PipelineData};

/// General shape of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Transform,
    Producer,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Transform => "transform",
            StepKind::Producer => "producer",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A step invoked with mutable access to the shared container.
///
/// `process` may read and write any slot; mutating in place is the common
/// case and `*data = other` is a legal full replacement. `&mut self` is
/// deliberate: a step may hold internal state that evolves across
/// invocations on the same pipeline (a rolling background model, say).
///
/// `Debug` is required so the steps descriptor can dump the step's
/// configuration; steps holding bulky state should implement it by hand
/// with a summary.
pub trait TransformStep: fmt::Debug {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError>;
}

/// A step invoked with no arguments; the engine itself stores the returned
/// handle under the classifier slot, in whichever phase the step is
/// scheduled.
pub trait ProducerStep: fmt::Debug {
    fn produce(&mut self) -> Result<ClassifierHandle, PipelineError>;
}

/// Registry entry: the tag selects the call shape, not the step's name.
pub enum Step {
    Transform(Box<dyn TransformStep>),
    Producer(Box<dyn ProducerStep>),
}

impl Step {
    pub fn transform<T: TransformStep + 'static>(step: T) -> Self {
        Step::Transform(Box::new(step))
    }

    pub fn producer<P: ProducerStep + 'static>(step: P) -> Self {
        Step::Producer(Box::new(step))
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Step::Transform(_) => StepKind::Transform,
            Step::Producer(_) => StepKind::Producer,
        }
    }
}

impl fmt::Debug for Step {
    // Delegate to the concrete step so descriptor dumps show its type name
    // and configuration fields rather than the enum wrapper.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Transform(step) => step.fmt(f),
            Step::Producer(step) => step.fmt(f),
        }
    }
}
