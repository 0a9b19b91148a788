//! Core Pipeline implementation.

use std::collections::HashSet;

use log::{debug, info};

use crate::constants::{CORE_VERSION, DEFAULT_INITIAL_STEPS};
use crate::errors::PipelineError;
use crate::model::{PipelineData, StatsOutput};
use crate::step::{steps_to_string, Step, StepRegistry};

use super::PipelineBuilder;

/// Sequential processing-pipeline engine.
///
/// Holds the ordered step registry and the single data container shared by
/// every step. Steps whose names are in the initial-step set run exactly
/// once, during construction, in declared order; all other steps run once
/// per [`Pipeline::run`] call, in declared order, over the same container.
///
/// Execution is strictly single-threaded and sequential: each step runs to
/// completion before the next begins, and a failing step aborts the current
/// construction or run with its error unchanged. Mutations made by steps
/// that completed before the failure remain in the container.
pub struct Pipeline {
    registry: StepRegistry,
    initial_steps: HashSet<String>,
    data: PipelineData,
}

impl Pipeline {
    /// New builder accumulating named steps.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Construct with the conventional initial-step names
    /// ([`DEFAULT_INITIAL_STEPS`]) and run the initialization phase.
    pub fn new(registry: StepRegistry) -> Result<Self, PipelineError> {
        Self::with_initial_steps(registry, DEFAULT_INITIAL_STEPS)
    }

    /// Construct with a caller-provided initial-step set and run the
    /// initialization phase. Names absent from the registry are silently
    /// ignored (membership against a missing entry is simply false).
    pub fn with_initial_steps<I, S>(registry: StepRegistry, initial_steps: I) -> Result<Self, PipelineError>
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let initial_steps: HashSet<String> = initial_steps.into_iter().map(Into::into).collect();
        let mut pipeline = Self { registry,
                                  initial_steps,
                                  data: PipelineData::default() };
        pipeline.run_initial_phase()?;
        Ok(pipeline)
    }

    /// Run the initialization phase: every registry step in declared order
    /// whose name is in the initial set, exactly once. Never re-entered for
    /// the lifetime of the pipeline.
    fn run_initial_phase(&mut self) -> Result<(), PipelineError> {
        info!("initialising pipeline");
        for (name, step) in self.registry.iter_mut() {
            if !self.initial_steps.contains(name) {
                continue;
            }
            debug!("running initial step '{}'", name);
            dispatch(step, &mut self.data)?;
        }
        info!("pipeline ready with data: {:?}", self.data.populated_keys());
        Ok(())
    }

    /// Execute the run phase over `source`, an opaque handle forwarded
    /// verbatim into the container's filename slot for a load step to
    /// resolve.
    ///
    /// Overwrites the filename and steps-descriptor slots, then invokes
    /// every non-initial step in declared order. Returns the value left in
    /// the stats slot; its absence after the last step is a
    /// [`PipelineError::MissingData`] failure.
    ///
    /// Repeated calls reuse the same container and the same step
    /// instances, so state a step accumulates internally or in the
    /// container persists across invocations.
    pub fn run(&mut self, source: &str) -> Result<StatsOutput, PipelineError> {
        self.data.filename = Some(source.to_string());
        self.data.steps_string = Some(steps_to_string(&self.registry));

        for (name, step) in self.registry.iter_mut() {
            if self.initial_steps.contains(name) {
                continue;
            }
            debug!("calling step '{}' with data: {:?}", name, self.data.populated_keys());
            dispatch(step, &mut self.data)?;
        }

        self.data.require_stats().cloned()
    }

    /// The shared data container in its current state.
    pub fn data(&self) -> &PipelineData {
        &self.data
    }

    /// The step registry (read-only; order and membership are fixed at
    /// construction).
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Whether `name` belongs to the initial-step set of this pipeline.
    pub fn is_initial_step(&self, name: &str) -> bool {
        self.initial_steps.contains(name)
    }

    /// Steps descriptor for the current registry (see
    /// [`steps_to_string`]).
    pub fn describe_steps(&self) -> String {
        steps_to_string(&self.registry)
    }

    /// Framed, versioned configuration report for interactive inspection
    /// and for writing alongside persisted results.
    pub fn configuration_report(&self) -> String {
        format!("\n-- Pipeline configuration --\n\nparticle-core version: {}\n{}\n---------------------------------\n",
                CORE_VERSION,
                self.describe_steps())
    }
}

/// Invoke one step by its tag. Producer results are stored under the
/// classifier slot by the engine, not by the step.
fn dispatch(step: &mut Step, data: &mut PipelineData) -> Result<(), PipelineError> {
    match step {
        Step::Transform(step) => step.process(data),
        Step::Producer(step) => {
            data.classifier = Some(step.produce()?);
            Ok(())
        }
    }
}
