//! Threshold segmentation.

use particle_core::{BinaryMask, DataKey, PipelineData, PipelineError, TransformStep};

/// Marks pixels darker than `threshold` in `imc` as particle candidates and
/// writes the binary image under `imbw`. Channels are averaged per pixel
/// before thresholding.
#[derive(Debug, Clone)]
pub struct Segment {
    pub threshold: f32,
}

impl Segment {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl TransformStep for Segment {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        let imc = data.imc.as_ref().ok_or(PipelineError::MissingData(DataKey::Imc))?;
        let channels = imc.channels.max(1);
        let mut pixels = Vec::with_capacity(imc.width * imc.height);
        for i in 0..imc.width * imc.height {
            let mut acc = 0.0f32;
            for c in 0..channels {
                acc += imc.pixels[i * channels + c];
            }
            pixels.push(acc / (channels as f32) < self.threshold);
        }
        data.imbw = Some(BinaryMask::new(imc.width, imc.height, pixels));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use particle_core::ImageFrame;

    #[test]
    fn pixels_below_threshold_become_particles() {
        let mut frame = ImageFrame::filled(3, 1, 1, 0.9);
        frame.pixels[1] = 0.2;
        let mut data = PipelineData::default();
        data.imc = Some(frame);

        Segment::new(0.5).process(&mut data).expect("process");
        let mask = data.imbw.expect("imbw");
        assert_eq!(mask.pixels, vec![false, true, false]);
    }

    #[test]
    fn missing_composite_image_is_an_error() {
        let mut data = PipelineData::default();
        assert_eq!(Segment::new(0.5).process(&mut data),
                   Err(PipelineError::MissingData(DataKey::Imc)));
    }
}
