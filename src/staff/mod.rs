//! The joint staff: roles, their standing configuration, generated personas
//! and the agents that speak for them.

pub mod agent;
pub mod persona;
pub mod personality;
pub mod role;
pub mod table;

pub use agent::{AgentBackend, StaffAgent};
pub use persona::{Branch, Persona, PersonaGenerator, Rank};
pub use personality::{Personality, standard_personality};
pub use role::{MEETING_PARTICIPANTS, StaffRole};
pub use table::{StaffProfile, StaffTable};
