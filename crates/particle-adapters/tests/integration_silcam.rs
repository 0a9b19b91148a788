//! Integration: silcam-style pipeline over synthetic frames.
//!
//! Builds the conventional step sequence end to end and checks the
//! contract the steps share through the container: background seeded at
//! construction, rolling accumulation across runs, statistics with
//! classifier labels on every run.

use particle_adapters::{CalculateStats, CorrectBackground, CreateBackground, LoadClassifier, Segment, SyntheticLoad};
use particle_core::Pipeline;

fn build_pipeline() -> Pipeline {
    Pipeline::builder().producer("classifier", LoadClassifier::new("models/toy-bands.bin"))
                       .transform("create background", CreateBackground::flat(32, 32, 0.8, 5))
                       .transform("load", SyntheticLoad::new(32, 32))
                       .transform("correct background", CorrectBackground::new(5))
                       .transform("segmentation", Segment::new(0.5))
                       .transform("statextract", CalculateStats::new())
                       .build()
                       .expect("pipeline construction")
}

#[test]
fn construction_runs_the_conventional_initial_steps() {
    let pipeline = build_pipeline();
    assert!(pipeline.data().classifier.is_some(), "classifier loaded once");
    assert_eq!(pipeline.data().bgstack.as_ref().map(|s| s.len()), Some(5), "background seeded");
    assert!(pipeline.data().imraw.is_none(), "run-phase steps untouched at construction");
}

#[test]
fn run_extracts_classified_particles_from_a_synthetic_frame() {
    let mut pipeline = build_pipeline();
    let stats = pipeline.run("D20230504T120000.000000.silc").expect("run");
    let table = stats.as_particles().expect("particle table");

    assert!(!table.is_empty(), "the synthetic frame carries one dark particle");
    assert!(table.rows[0].contains_key("area"));
    assert!(table.rows[0].contains_key("equivalent_diameter"));
    assert_eq!(table.rows[0]["class"].as_str(), Some("particle"), "dark region lands in the darkest band");

    assert_eq!(pipeline.data().filename.as_deref(), Some("D20230504T120000.000000.silc"));
    assert!(pipeline.data().timestamp.is_some(), "timestamp parsed from the filename");
    assert!(pipeline.data()
                    .steps_string
                    .as_deref()
                    .is_some_and(|s| s.contains("statextract")),
            "descriptor written for downstream metadata steps");
}

#[test]
fn rolling_background_accumulates_across_runs() {
    let mut pipeline = build_pipeline();
    pipeline.run("D20230504T120000.000000.silc").expect("first run");
    let after_first = pipeline.data().bgstack.clone().expect("bgstack");

    pipeline.run("D20230504T120001.000000.silc").expect("second run");
    let after_second = pipeline.data().bgstack.clone().expect("bgstack");

    assert_eq!(after_second.len(), 5, "window bounds the stack");
    assert_ne!(after_first, after_second, "two accumulations, not a reset between runs");
    assert_eq!(after_second.frames.last(), pipeline.data().imraw.as_ref(),
               "newest stack frame is the latest raw frame");
}
