pub mod artifacts;
pub mod dispatch;
pub mod scenario;

pub use dispatch::{PlanningRequest, dispatch, run_planning};
pub use scenario::{DEFAULT_SCENARIO, resolve_scenario};
