#[path = "jpp/support.rs"]
mod support;

#[path = "jpp/legacy_flow.rs"]
mod legacy_flow;
#[path = "jpp/phase_flow.rs"]
mod phase_flow;
#[path = "jpp/planning_run.rs"]
mod planning_run;
