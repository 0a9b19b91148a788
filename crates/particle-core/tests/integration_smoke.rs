//! Integration smoke: engine semantics exercised with the adapter steps.

use particle_adapters::{CorrectBackground, SyntheticLoad};
use particle_core::{DataKey, Pipeline, PipelineError, ReturnData};

#[test]
fn return_data_terminal_step_exposes_accumulated_state() {
    let mut pipeline = Pipeline::builder().transform("load", SyntheticLoad::new(16, 16))
                                          .transform("output", ReturnData::new())
                                          .initial_steps(Vec::<String>::new())
                                          .build()
                                          .expect("construction");

    let result = pipeline.run("D20230504T120000.000000.silc").expect("run");
    let snapshot = result.as_snapshot().expect("snapshot");

    assert!(snapshot.imraw.is_some(), "state accumulated by earlier steps is visible");
    assert_eq!(snapshot.filename.as_deref(), Some("D20230504T120000.000000.silc"));
    assert!(snapshot.steps_string
                    .as_deref()
                    .is_some_and(|s| s.contains("1) Step: load") && s.contains("2) Step: output")));
}

#[test]
fn failing_step_aborts_the_run_and_keeps_prior_mutations() {
    // No background was ever created, so the correction step fails; the
    // load step's writes stay in the container.
    let mut pipeline = Pipeline::builder().transform("load", SyntheticLoad::new(16, 16))
                                          .transform("correct background", CorrectBackground::new(5))
                                          .initial_steps(Vec::<String>::new())
                                          .build()
                                          .expect("construction");

    let err = pipeline.run("D20230504T120000.000000.silc").unwrap_err();
    assert_eq!(err, PipelineError::MissingData(DataKey::Bgstack));

    assert!(pipeline.data().imraw.is_some(), "completed steps' mutations remain");
    assert!(pipeline.data().imc.is_none(), "failing step committed nothing");
}

#[test]
fn configuration_report_frames_the_descriptor_with_the_core_version() {
    let pipeline = Pipeline::builder().transform("load", SyntheticLoad::new(8, 8))
                                      .initial_steps(Vec::<String>::new())
                                      .build()
                                      .expect("construction");

    let report = pipeline.configuration_report();
    assert!(report.contains("-- Pipeline configuration --"));
    assert!(report.contains(particle_core::constants::CORE_VERSION));
    assert!(report.contains("1) Step: load"));
}
