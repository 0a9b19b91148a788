//! Particle statistics extraction.

use serde_json::json;

use particle_core::{BinaryMask, DataKey, ImageFrame, ParticleTable, PipelineData, PipelineError, StatsOutput,
                    TableRow, TransformStep};

/// Measures every connected particle region in `imbw` and writes a table
/// under the stats slot: area, bounding box, centroid and equivalent
/// diameter per particle, plus the best classifier label when a handle and
/// `imc` are both available.
#[derive(Debug, Clone, Default)]
pub struct CalculateStats;

impl CalculateStats {
    pub fn new() -> Self {
        Self
    }
}

/// 4-connected region labelling in row-major scan order (deterministic).
fn regions(mask: &BinaryMask) -> Vec<Vec<usize>> {
    let (w, h) = (mask.width, mask.height);
    let mut seen = vec![false; w * h];
    let mut found = Vec::new();
    for start in 0..w * h {
        if !mask.pixels[start] || seen[start] {
            continue;
        }
        let mut region = Vec::new();
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(idx) = stack.pop() {
            region.push(idx);
            let row = idx / w;
            let col = idx % w;
            let mut neighbours = [None; 4];
            if row > 0 {
                neighbours[0] = Some(idx - w);
            }
            if row + 1 < h {
                neighbours[1] = Some(idx + w);
            }
            if col > 0 {
                neighbours[2] = Some(idx - 1);
            }
            if col + 1 < w {
                neighbours[3] = Some(idx + 1);
            }
            for n in neighbours.into_iter().flatten() {
                if mask.pixels[n] && !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            }
        }
        region.sort_unstable();
        found.push(region);
    }
    found
}

/// Inclusive bounding-box crop of `frame`.
fn crop(frame: &ImageFrame, min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> ImageFrame {
    let channels = frame.channels;
    let mut pixels = Vec::with_capacity((max_row - min_row + 1) * (max_col - min_col + 1) * channels);
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let base = (row * frame.width + col) * channels;
            pixels.extend_from_slice(&frame.pixels[base..base + channels]);
        }
    }
    ImageFrame::new(max_col - min_col + 1, max_row - min_row + 1, channels, pixels)
}

impl TransformStep for CalculateStats {
    fn process(&mut self, data: &mut PipelineData) -> Result<(), PipelineError> {
        let mask = data.imbw.as_ref().ok_or(PipelineError::MissingData(DataKey::Imbw))?;
        let mut table = ParticleTable::new();

        for region in regions(mask) {
            let area = region.len();
            let mut min_row = usize::MAX;
            let mut max_row = 0;
            let mut min_col = usize::MAX;
            let mut max_col = 0;
            let mut row_sum = 0.0f64;
            let mut col_sum = 0.0f64;
            for &idx in &region {
                let row = idx / mask.width;
                let col = idx % mask.width;
                min_row = min_row.min(row);
                max_row = max_row.max(row);
                min_col = min_col.min(col);
                max_col = max_col.max(col);
                row_sum += row as f64;
                col_sum += col as f64;
            }

            let mut row = TableRow::new();
            row.insert("area".to_string(), json!(area));
            row.insert("minr".to_string(), json!(min_row));
            row.insert("minc".to_string(), json!(min_col));
            row.insert("maxr".to_string(), json!(max_row));
            row.insert("maxc".to_string(), json!(max_col));
            row.insert("cx".to_string(), json!(col_sum / area as f64));
            row.insert("cy".to_string(), json!(row_sum / area as f64));
            row.insert("equivalent_diameter".to_string(),
                       json!((4.0 * area as f64 / std::f64::consts::PI).sqrt()));

            if let (Some(classifier), Some(imc)) = (&data.classifier, &data.imc) {
                let roi = crop(imc, min_row, min_col, max_row, max_col);
                let scores = classifier.classify(&roi)?;
                let best = classifier.labels()
                                     .iter()
                                     .zip(&scores)
                                     .max_by(|a, b| a.1.total_cmp(b.1))
                                     .map(|(label, _)| label.clone());
                if let Some(label) = best {
                    row.insert("class".to_string(), json!(label));
                }
            }

            table.push_row(row);
        }

        data.stats = Some(StatsOutput::Particles(table));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_separate_regions_yield_two_rows() {
        // 5x3 mask with an L-shaped region on the left and a lone pixel on
        // the right.
        let pixels = vec![true, false, false, false, true,
                          true, true, false, false, false,
                          false, false, false, false, false];
        let mut data = PipelineData::default();
        data.imbw = Some(BinaryMask::new(5, 3, pixels));

        CalculateStats::new().process(&mut data).expect("process");
        let stats = data.stats.expect("stats");
        let table = stats.as_particles().expect("particle table");
        assert_eq!(table.len(), 2);

        let areas: Vec<u64> = table.rows.iter().map(|r| r["area"].as_u64().unwrap()).collect();
        assert_eq!(areas, vec![3, 1], "row-major scan order");
        assert_eq!(table.rows[0]["minr"].as_u64(), Some(0));
        assert_eq!(table.rows[0]["maxr"].as_u64(), Some(1));
        assert_eq!(table.rows[1]["minc"].as_u64(), Some(4));
    }

    #[test]
    fn empty_mask_yields_an_empty_table() {
        let mut data = PipelineData::default();
        data.imbw = Some(BinaryMask::new(4, 4, vec![false; 16]));

        CalculateStats::new().process(&mut data).expect("process");
        let stats = data.stats.expect("stats");
        assert!(stats.as_particles().expect("particle table").is_empty());
    }

    #[test]
    fn missing_mask_is_an_error() {
        let mut data = PipelineData::default();
        assert_eq!(CalculateStats::new().process(&mut data),
                   Err(PipelineError::MissingData(DataKey::Imbw)));
    }
}
