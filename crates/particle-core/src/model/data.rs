//! The shared data container and its slot vocabulary.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::errors::PipelineError;

use super::{BinaryMask, ClassifierHandle, ImageFrame, ImageStack, ParticleTable};

/// Names of the documented container slots. Used for missing-data errors
/// and for introspection of which slots are currently populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKey {
    Imraw,
    Imc,
    Imbg,
    Bgstack,
    Imbw,
    ImStack,
    Imss,
    Filename,
    Timestamp,
    Classifier,
    Stats,
    StepsString,
}

impl DataKey {
    pub const ALL: [DataKey; 12] = [DataKey::Imraw,
                                    DataKey::Imc,
                                    DataKey::Imbg,
                                    DataKey::Bgstack,
                                    DataKey::Imbw,
                                    DataKey::ImStack,
                                    DataKey::Imss,
                                    DataKey::Filename,
                                    DataKey::Timestamp,
                                    DataKey::Classifier,
                                    DataKey::Stats,
                                    DataKey::StepsString];

    pub fn name(self) -> &'static str {
        match self {
            DataKey::Imraw => "imraw",
            DataKey::Imc => "imc",
            DataKey::Imbg => "imbg",
            DataKey::Bgstack => "bgstack",
            DataKey::Imbw => "imbw",
            DataKey::ImStack => "im_stack",
            DataKey::Imss => "imss",
            DataKey::Filename => "filename",
            DataKey::Timestamp => "timestamp",
            DataKey::Classifier => "classifier",
            DataKey::Stats => "stats",
            DataKey::StepsString => "steps_string",
        }
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of the stats slot: the run result read back by the engine.
#[derive(Debug, Clone)]
pub enum StatsOutput {
    /// Particle statistics written by an extraction step.
    Particles(ParticleTable),
    /// Snapshot of the entire container, written by [`crate::ReturnData`]
    /// when substituted as the terminal step for debugging.
    Snapshot(Box<PipelineData>),
}

impl StatsOutput {
    pub fn as_particles(&self) -> Option<&ParticleTable> {
        match self {
            StatsOutput::Particles(table) => Some(table),
            StatsOutput::Snapshot(_) => None,
        }
    }

    pub fn as_snapshot(&self) -> Option<&PipelineData> {
        match self {
            StatsOutput::Snapshot(data) => Some(data),
            StatsOutput::Particles(_) => None,
        }
    }
}

/// Data container passed between pipeline steps.
///
/// A single instance lives for the whole lifetime of a [`crate::Pipeline`]:
/// created empty at construction, populated by the initial steps, then
/// further populated and overwritten by the run-phase steps on every
/// invocation. It is never reset between runs; only `filename` and
/// `steps_string` are rewritten by `run` itself.
///
/// Every slot is optional. A step may read slots written by any earlier
/// step and must not assume a slot exists without checking, although by
/// convention it relies on prior steps having run in declared order.
#[derive(Debug, Clone, Default)]
pub struct PipelineData {
    /// Raw uncorrected image, written by a load step.
    pub imraw: Option<ImageFrame>,
    /// Composite image of focussed particles ready for segmentation,
    /// obtained from a background-correction step.
    pub imc: Option<ImageFrame>,
    /// Background image used to correct `imraw` into `imc`.
    pub imbg: Option<ImageFrame>,
    /// Stack of images making up the background (static or moving).
    pub bgstack: Option<ImageStack>,
    /// Segmented binary image identifying particles from water.
    pub imbw: Option<BinaryMask>,
    /// Stack of reconstructed images (holographic flows).
    pub im_stack: Option<ImageStack>,
    /// Stack-summary image used to locate possible particles.
    pub imss: Option<ImageFrame>,
    /// Invocation identifier handed to `run`, overwritten on every call.
    pub filename: Option<String>,
    /// Acquisition timestamp, written by a load step.
    pub timestamp: Option<DateTime<Utc>>,
    /// Handle returned by the producer step.
    pub classifier: Option<ClassifierHandle>,
    /// Run result read back by the engine after the run phase.
    pub stats: Option<StatsOutput>,
    /// Steps descriptor computed fresh on every run, for persisting as
    /// run metadata by output steps.
    pub steps_string: Option<String>,
}

impl PipelineData {
    pub fn is_populated(&self, key: DataKey) -> bool {
        match key {
            DataKey::Imraw => self.imraw.is_some(),
            DataKey::Imc => self.imc.is_some(),
            DataKey::Imbg => self.imbg.is_some(),
            DataKey::Bgstack => self.bgstack.is_some(),
            DataKey::Imbw => self.imbw.is_some(),
            DataKey::ImStack => self.im_stack.is_some(),
            DataKey::Imss => self.imss.is_some(),
            DataKey::Filename => self.filename.is_some(),
            DataKey::Timestamp => self.timestamp.is_some(),
            DataKey::Classifier => self.classifier.is_some(),
            DataKey::Stats => self.stats.is_some(),
            DataKey::StepsString => self.steps_string.is_some(),
        }
    }

    /// Slots currently holding a value, in vocabulary order.
    pub fn populated_keys(&self) -> Vec<DataKey> {
        DataKey::ALL.iter().copied().filter(|k| self.is_populated(*k)).collect()
    }

    /// Borrow the stats slot, failing with the missing-data error when no
    /// step has populated it yet.
    pub fn require_stats(&self) -> Result<&StatsOutput, PipelineError> {
        self.stats.as_ref().ok_or(PipelineError::MissingData(DataKey::Stats))
    }
}
