//! Debug passthrough step.

use crate::errors::PipelineError;
use crate::model::{PipelineData, StatsOutput};

use super::TransformStep;

/// Substituted as the terminal step during development to inspect the full
/// accumulated state through the normal `run` return path: stores a
/// snapshot of the whole container under the stats slot and leaves every
/// other slot untouched.
///
/// The snapshot is taken before the stats slot is overwritten, so it still
/// carries whatever value that slot held at the point of capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnData;

impl ReturnData {
    pub fn new() -> Self {
        Self
    }
}

impl TransformStep for ReturnData {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        let snapshot = data.clone();
        data.stats = Some(StatsOutput::Snapshot(Box::new(snapshot)));
        Ok(())
    }
}
