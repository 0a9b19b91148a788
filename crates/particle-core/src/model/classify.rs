//! Classifier handle stored in the container.
//!
//! A producer step loads the classifier once (model load is expensive) and
//! the engine stores the handle under the classifier slot; statistics steps
//! consult it per particle. The core knows nothing about the model behind
//! the trait.

use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::PipelineError;

use super::ImageFrame;

/// Object-safe classification contract.
pub trait Classifier: Debug + Send + Sync {
    /// Class labels, index-aligned with the scores from [`Classifier::classify`].
    fn labels(&self) -> &[String];

    /// Score one region of interest; returns one score per label.
    fn classify(&self, roi: &ImageFrame) -> Result<Vec<f64>, PipelineError>;
}

/// Shared handle kept in the container and cloned into snapshots cheaply.
pub type ClassifierHandle = Arc<dyn Classifier>;
