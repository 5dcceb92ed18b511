//! Joint Planning Process: phase definitions, turn scheduling, prompt
//! assembly and the four-step phase pipeline.

mod brief;
mod guidance;
mod meeting;
pub mod orchestrator;
pub mod phase;
pub mod prompts;
pub mod report;
pub mod schedule;
mod slides;
pub mod types;

pub use brief::commander_asks;
pub use guidance::{extract_priority_tasks, extract_section_guidance, summarize_brief};
pub use meeting::extract_decisions;
pub use orchestrator::{MeetingOrchestrator, phase_digest};
pub use phase::{ALL_PHASES, JppPhase, PhaseConfig};
pub use report::{ReportHeader, render_report};
pub use schedule::{ScheduleTemplate, schedule};
pub use slides::parse_slides;
pub use types::{
    BriefResult, DialogueTurn, GuidanceResult, MeetingResult, NullObserver, PhaseObserver,
    PhaseResult, SlideContent, render_transcript,
};
