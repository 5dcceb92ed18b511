//! The sequential planner: six fixed consultation rounds and a
//! final operation order, without meetings or briefs.

pub mod planner;
pub mod prompts;
pub mod report;

pub use planner::{
    CoaAnalysis, CoaComparison, CoaDevelopment, MissionAnalysis, PlanDevelopment,
    PlanningOutcome, SequentialPlanner, StaffInput, format_staff_inputs,
};
pub use report::render_planning_output;
