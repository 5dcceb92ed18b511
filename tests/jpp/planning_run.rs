use crate::support::{EchoProvider, test_config};
use std::sync::Arc;
use wargate::app::artifacts::{BRIEF_FILE, GUIDANCE_FILE, MEETING_FILE};
use wargate::app::{PlanningRequest, run_planning};
use wargate::jpp::JppPhase;

fn request(legacy: bool) -> PlanningRequest {
    PlanningRequest {
        scenario: "Deter Country X.".into(),
        operation: "Operation Iron Gate".into(),
        phases: vec![JppPhase::PlanningInitiation],
        legacy,
    }
}

#[tokio::test]
async fn jpp_run_renders_report_and_saves_transcripts() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(tmp.path());
    let report = run_planning(&config, Arc::new(EchoProvider::default()), &request(false))
        .await
        .unwrap();

    assert!(report.contains("Operation: Operation Iron Gate"));
    assert!(report.contains("PHASE 1: PLANNING INITIATION"));
    assert!(report.contains("[No slides generated]"));

    let dir = tmp.path().join("Operation_Iron_Gate").join("PlanningInitiation");
    for file in [MEETING_FILE, BRIEF_FILE, GUIDANCE_FILE] {
        assert!(dir.join(file).is_file(), "missing {file}");
    }
}

#[tokio::test]
async fn transcripts_can_be_disabled() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(tmp.path());
    config.output.save_transcripts = false;
    run_planning(&config, Arc::new(EchoProvider::default()), &request(false))
        .await
        .unwrap();
    assert!(!tmp.path().join("Operation_Iron_Gate").exists());
}

#[tokio::test]
async fn image_failures_do_not_abort_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(tmp.path());
    config.image.enabled = true;
    config.image.api_key = None;
    let report = run_planning(&config, Arc::new(EchoProvider::default()), &request(false))
        .await
        .unwrap();
    assert!(report.contains("END OF PLANNING OUTPUT"));
}

#[tokio::test]
async fn legacy_switch_uses_sequential_planner() {
    let tmp = tempfile::tempdir().unwrap();
    let report = run_planning(
        &test_config(tmp.path()),
        Arc::new(EchoProvider::default()),
        &request(true),
    )
    .await
    .unwrap();
    assert!(report.contains("JOINT STAFF OPERATIONAL PLANNING OUTPUT"));
    assert!(report.contains("FINAL OPERATION ORDER"));
}
