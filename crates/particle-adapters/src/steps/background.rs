//! Background model steps: stack creation and rolling correction.

use std::fmt;

use particle_core::{DataKey, ImageFrame, ImageStack, PipelineData, PipelineError, TransformStep};

/// Mean of the stack frames. Fails on an empty stack or mixed shapes.
fn mean_frame(stack: &ImageStack) -> Result<ImageFrame, PipelineError> {
    let first = stack.frames
                     .first()
                     .ok_or_else(|| PipelineError::StepExecution("empty background stack".to_string()))?;
    let mut acc = vec![0.0f32; first.pixels.len()];
    for frame in &stack.frames {
        if !frame.same_shape(first) {
            return Err(PipelineError::StepExecution("background stack frames differ in shape".to_string()));
        }
        for (a, p) in acc.iter_mut().zip(&frame.pixels) {
            *a += p;
        }
    }
    let count = stack.len() as f32;
    for a in acc.iter_mut() {
        *a /= count;
    }
    Ok(ImageFrame::new(first.width, first.height, first.channels, acc))
}

/// Seeds the background model: writes the configured stack under `bgstack`
/// and its mean under `imbg`. Conventionally an initial step, run once at
/// pipeline construction.
#[derive(Clone)]
pub struct CreateBackground {
    frames: ImageStack,
}

impl CreateBackground {
    pub fn new(frames: ImageStack) -> Self {
        Self { frames }
    }

    /// Flat background stack: `count` copies of a constant single-channel
    /// frame at `level`.
    pub fn flat(width: usize, height: usize, level: f32, count: usize) -> Self {
        let frame = ImageFrame::filled(width, height, 1, level);
        Self { frames: ImageStack::new(vec![frame; count]) }
    }
}

impl fmt::Debug for CreateBackground {
    // Summarized; full pixel dumps would swamp the steps descriptor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateBackground").field("frames", &self.frames.len()).finish()
    }
}

impl TransformStep for CreateBackground {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        data.imbg = Some(mean_frame(&self.frames)?);
        data.bgstack = Some(self.frames.clone());
        Ok(())
    }
}

/// Rolling background correction: shifts the oldest frame out of `bgstack`,
/// pushes the current raw frame, recomputes `imbg` and writes the corrected
/// composite under `imc` (brightness-preserving subtraction, clamped to
/// [0, 1]). The stack lives in the container, so the rolling state keeps
/// accumulating across successive runs on the same pipeline.
#[derive(Debug, Clone)]
pub struct CorrectBackground {
    /// Number of frames retained in the rolling stack.
    pub window: usize,
}

impl CorrectBackground {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl TransformStep for CorrectBackground {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        let imraw = data.imraw.clone().ok_or(PipelineError::MissingData(DataKey::Imraw))?;
        let bgstack = data.bgstack.as_mut().ok_or(PipelineError::MissingData(DataKey::Bgstack))?;

        while bgstack.len() >= self.window.max(1) {
            bgstack.frames.remove(0);
        }
        bgstack.push(imraw.clone());

        let imbg = mean_frame(bgstack)?;
        let bg_level = imbg.pixels.iter().sum::<f32>() / imbg.pixels.len() as f32;
        let corrected: Vec<f32> = imraw.pixels
                                       .iter()
                                       .zip(&imbg.pixels)
                                       .map(|(raw, bg)| (raw - bg + bg_level).clamp(0.0, 1.0))
                                       .collect();
        data.imc = Some(ImageFrame::new(imraw.width, imraw.height, imraw.channels, corrected));
        data.imbg = Some(imbg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_dark_pixel(level: f32) -> ImageFrame {
        let mut frame = ImageFrame::filled(4, 4, 1, level);
        frame.pixels[5] = 0.1;
        frame
    }

    #[test]
    fn create_background_writes_stack_and_mean() {
        let mut step = CreateBackground::flat(4, 4, 0.8, 3);
        let mut data = PipelineData::default();
        step.process(&mut data).expect("process");

        assert_eq!(data.bgstack.as_ref().map(ImageStack::len), Some(3));
        let imbg = data.imbg.expect("imbg");
        assert!(imbg.pixels.iter().all(|p| (p - 0.8).abs() < 1e-6));
    }

    #[test]
    fn empty_stack_is_a_step_error() {
        let mut step = CreateBackground::new(ImageStack::default());
        let mut data = PipelineData::default();
        assert!(matches!(step.process(&mut data), Err(PipelineError::StepExecution(_))));
    }

    #[test]
    fn correct_background_rolls_the_stack_and_keeps_particles_dark() {
        let mut data = PipelineData::default();
        CreateBackground::flat(4, 4, 0.8, 3).process(&mut data).expect("seed");
        data.imraw = Some(frame_with_dark_pixel(0.8));

        let mut step = CorrectBackground::new(3);
        step.process(&mut data).expect("process");

        let bgstack = data.bgstack.as_ref().expect("bgstack");
        assert_eq!(bgstack.len(), 3, "window respected");
        assert_eq!(bgstack.frames.last(), data.imraw.as_ref(), "raw frame pushed");

        let imc = data.imc.as_ref().expect("imc");
        assert!(imc.pixels[5] < 0.5, "particle stays dark after correction");
        assert!(imc.pixels[0] > 0.7, "background stays bright after correction");
    }

    #[test]
    fn missing_bgstack_is_a_missing_data_error() {
        let mut data = PipelineData::default();
        data.imraw = Some(ImageFrame::filled(4, 4, 1, 0.8));
        let mut step = CorrectBackground::new(3);
        assert_eq!(step.process(&mut data),
                   Err(PipelineError::MissingData(DataKey::Bgstack)));
    }
}
