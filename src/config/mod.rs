mod env_overrides;
mod loader;
pub mod schema;

pub use schema::{
    AgentConfig, Config, ImageConfig, MeetingConfig, OutputConfig, ReliabilityConfig,
};
