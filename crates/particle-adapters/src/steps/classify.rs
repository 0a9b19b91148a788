//! Classifier producer step and a deterministic toy classifier.

use std::sync::Arc;

use log::debug;

use particle_core::{Classifier, ClassifierHandle, ImageFrame, PipelineError, ProducerStep};

/// Deterministic stand-in for a trained model: scores each label by how
/// close the region's mean brightness sits to the label's brightness band
/// centre. Real models are external collaborators implementing
/// [`Classifier`].
#[derive(Debug, Clone)]
pub struct BrightnessBandClassifier {
    labels: Vec<String>,
}

impl BrightnessBandClassifier {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn with_default_labels() -> Self {
        Self::new(vec!["particle".to_string(), "bubble".to_string(), "detritus".to_string()])
    }
}

impl Classifier for BrightnessBandClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(&self, roi: &ImageFrame) -> Result<Vec<f64>, PipelineError> {
        if self.labels.is_empty() {
            return Err(PipelineError::StepExecution("classifier has no labels".to_string()));
        }
        if roi.pixels.is_empty() {
            return Err(PipelineError::StepExecution("empty region of interest".to_string()));
        }
        let mean = f64::from(roi.pixels.iter().sum::<f32>()) / roi.pixels.len() as f64;
        let bands = self.labels.len() as f64;
        let scores = (0..self.labels.len()).map(|i| {
                                               let centre = (i as f64 + 0.5) / bands;
                                               (1.0 - (mean - centre).abs()).max(0.0)
                                           })
                                           .collect();
        Ok(scores)
    }
}

/// Producer step standing in for an expensive one-time model load; the
/// engine stores the returned handle under the classifier slot.
#[derive(Debug, Clone)]
pub struct LoadClassifier {
    pub model_path: String,
}

impl LoadClassifier {
    pub fn new(model_path: impl Into<String>) -> Self {
        Self { model_path: model_path.into() }
    }
}

impl ProducerStep for LoadClassifier {
    fn produce(&mut self) -> Result<ClassifierHandle, PipelineError> {
        debug!("loading classifier model from '{}'", self.model_path);
        Ok(Arc::new(BrightnessBandClassifier::with_default_labels()))
    }
}
