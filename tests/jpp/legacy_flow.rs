use crate::support::{EchoProvider, test_config};
use std::sync::Arc;
use wargate::legacy::{SequentialPlanner, render_planning_output};

#[tokio::test]
async fn sequential_planner_produces_banner_report() {
    let tmp = tempfile::tempdir().unwrap();
    let provider = Arc::new(EchoProvider::default());
    let mut planner = SequentialPlanner::from_config(&test_config(tmp.path()), provider.clone());

    let outcome = planner.run("Defend Allied Nation Y.").await.unwrap();
    let report = render_planning_output(&outcome);

    assert_eq!(provider.call_count(), 61);
    assert_eq!(outcome.final_order, "ECHO: Issue the FINAL OPER");
    assert!(report.contains("JOINT STAFF OPERATIONAL PLANNING OUTPUT"));
    assert!(report.contains("=== RED TEAM ANALYSIS ===\nECHO: You are the RED TEAM\n\n=== LEGAL REVIEW ==="));
    assert!(report.contains("END OF PLANNING OUTPUT"));
}
