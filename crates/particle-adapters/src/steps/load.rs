//! Synthetic frame loader.
//!
//! Deterministic stand-in for an instrument loader: the frame content is
//! derived from the filename so tests and demos need no image files on
//! disk. Writes `imraw` and `timestamp`.

use chrono::{DateTime, NaiveDateTime, Utc};

use particle_core::{DataKey, ImageFrame, PipelineData, PipelineError, TransformStep};

/// Parse an acquisition timestamp from filenames of the form
/// `D<YYYYmmdd>T<HHMMSS.micro>.<ext>`, e.g. `D20230504T120000.125000.silc`.
/// Returns `None` when the name does not follow the convention.
pub fn timestamp_from_filename(filename: &str) -> Option<DateTime<Utc>> {
    let stem = std::path::Path::new(filename).file_stem()?.to_str()?;
    let raw = stem.strip_prefix('D')?;
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%S%.f").ok()?;
    Some(parsed.and_utc())
}

/// Renders one flat bright field with a single dark square whose position
/// follows a byte hash of the filename, so distinct files yield distinct
/// frames and re-loading a file reproduces it exactly.
#[derive(Debug, Clone)]
pub struct SyntheticLoad {
    pub width: usize,
    pub height: usize,
}

impl SyntheticLoad {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    fn render(&self, filename: &str) -> ImageFrame {
        let seed = filename.bytes()
                           .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
        let mut frame = ImageFrame::filled(self.width, self.height, 1, 0.8);

        // One dark particle, kept off the borders.
        let side = (self.width.min(self.height) / 8).max(2);
        let row0 = 1 + (seed as usize) % self.height.saturating_sub(side + 2).max(1);
        let col0 = 1 + ((seed >> 8) as usize) % self.width.saturating_sub(side + 2).max(1);
        for row in row0..(row0 + side).min(self.height) {
            for col in col0..(col0 + side).min(self.width) {
                frame.pixels[row * self.width + col] = 0.1;
            }
        }
        frame
    }
}

impl TransformStep for SyntheticLoad {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        let filename = data.filename.clone().ok_or(PipelineError::MissingData(DataKey::Filename))?;
        data.timestamp = timestamp_from_filename(&filename);
        data.imraw = Some(self.render(&filename));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Datelike, Timelike};

    #[test]
    fn timestamp_parses_silcam_style_names() {
        let ts = timestamp_from_filename("D20230504T120001.125000.silc").expect("parse");
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 5, 4));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 0, 1));
    }

    #[test]
    fn timestamp_rejects_unconventional_names() {
        assert!(timestamp_from_filename("background.png").is_none());
        assert!(timestamp_from_filename("20230504T120001.silc").is_none());
    }

    #[test]
    fn render_is_deterministic_and_contains_a_dark_particle() {
        let mut step = SyntheticLoad::new(32, 32);
        let mut data = PipelineData::default();
        data.filename = Some("D20230504T120000.000000.silc".to_string());

        step.process(&mut data).expect("process");
        let first = data.imraw.clone().expect("imraw");
        assert!(first.pixels.iter().any(|p| *p < 0.5), "dark particle present");
        assert!(data.timestamp.is_some());

        step.process(&mut data).expect("process again");
        assert_eq!(data.imraw.as_ref(), Some(&first), "same filename, same frame");
    }

    #[test]
    fn missing_filename_is_an_error() {
        let mut step = SyntheticLoad::new(8, 8);
        let mut data = PipelineData::default();
        assert_eq!(step.process(&mut data),
                   Err(PipelineError::MissingData(DataKey::Filename)));
    }
}
