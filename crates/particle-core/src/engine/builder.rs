//! Builder for [`Pipeline`].
//!
//! Accumulates named steps in declared order and hands the finished
//! registry to the pipeline constructor; `build` therefore runs the
//! initialization phase. The initial-step set defaults to
//! [`crate::constants::DEFAULT_INITIAL_STEPS`] unless overridden.
//!
//! ```ignore
//! let pipeline = Pipeline::builder()
//!     .producer("classifier", LoadClassifier::new("model.bin"))
//!     .transform("load", SyntheticLoad::new(64, 64))
//!     .transform("segmentation", Segment { threshold: 0.5 })
//!     .transform("statextract", CalculateStats::new())
//!     .initial_steps(["classifier"])
//!     .build()?;
//! ```

use crate::errors::PipelineError;
use crate::step::{ProducerStep, Step, StepRegistry, TransformStep};

use super::Pipeline;

#[derive(Debug, Default)]
pub struct PipelineBuilder {
    registry: StepRegistry,
    initial_steps: Option<Vec<String>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-tagged step under `name`.
    pub fn step(mut self, name: impl Into<String>, step: Step) -> Self {
        self.registry.insert(name, step);
        self
    }

    /// Append a transform step under `name`.
    pub fn transform(self, name: impl Into<String>, step: impl TransformStep + 'static) -> Self {
        self.step(name, Step::transform(step))
    }

    /// Append a producer step under `name`.
    pub fn producer(self, name: impl Into<String>, step: impl ProducerStep + 'static) -> Self {
        self.step(name, Step::producer(step))
    }

    /// Override the initial-step set for this pipeline.
    pub fn initial_steps<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.initial_steps = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Construct the pipeline, running the initialization phase.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        match self.initial_steps {
            Some(names) => Pipeline::with_initial_steps(self.registry, names),
            None => Pipeline::new(self.registry),
        }
    }
}
