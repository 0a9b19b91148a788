//! Demo: a silcam-style pipeline over synthetic frames.
//!
//! Prints the framed configuration report, then processes a short batch of
//! filenames through the same pipeline instance so the rolling background
//! accumulates across runs.

use particle_adapters::{CalculateStats, CorrectBackground, CreateBackground, LoadClassifier, Segment,
                        SyntheticLoad};
use particle_core::{Pipeline, StatsOutput};

fn main() {
    let mut pipeline = Pipeline::builder().producer("classifier", LoadClassifier::new("models/toy-bands.bin"))
                                          .transform("create background", CreateBackground::flat(64, 64, 0.8, 10))
                                          .transform("load", SyntheticLoad::new(64, 64))
                                          .transform("correct background", CorrectBackground::new(10))
                                          .transform("segmentation", Segment::new(0.5))
                                          .transform("statextract", CalculateStats::new())
                                          .build()
                                          .expect("pipeline construction");

    println!("{}", pipeline.configuration_report());

    let batch = ["D20230504T120000.000000.silc",
                 "D20230504T120001.000000.silc",
                 "D20230504T120002.000000.silc"];

    for filename in batch {
        match pipeline.run(filename) {
            Ok(StatsOutput::Particles(table)) => {
                println!("{filename}: {} particle(s), columns {:?}", table.len(), table.column_names());
            }
            Ok(StatsOutput::Snapshot(_)) => println!("{filename}: debug snapshot"),
            Err(err) => {
                eprintln!("{filename}: {err}");
                std::process::exit(1);
            }
        }
    }
}
