use crate::staff::{Persona, StaffRole};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One spoken contribution in a meeting, brief, or guidance session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Short designation, e.g. "COL Smith".
    pub speaker: String,
    pub role: StaffRole,
    pub role_display: String,
    pub branch: String,
    pub rank: String,
    pub text: String,
    pub turn_number: usize,
    pub is_commander: bool,
}

impl DialogueTurn {
    pub fn new(role: StaffRole, persona: &Persona, text: String, turn_number: usize) -> Self {
        Self {
            speaker: persona.short_designation(),
            role,
            role_display: role.display_name().to_string(),
            branch: persona.branch.to_string(),
            rank: persona.rank.abbrev.to_string(),
            text,
            turn_number,
            is_commander: role == StaffRole::Commander,
        }
    }

    /// Transcript line: `**COL Smith (J3 - Operations)**: text`.
    pub fn transcript_line(&self) -> String {
        format!("**{} ({})**: {}", self.speaker, self.role_display, self.text)
    }
}

/// Join turns into the transcript form stored on [`MeetingResult`].
pub fn render_transcript(turns: &[DialogueTurn]) -> String {
    turns
        .iter()
        .map(DialogueTurn::transcript_line)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingResult {
    pub phase_name: String,
    pub turns: Vec<DialogueTurn>,
    pub transcript: String,
    pub decisions: Vec<String>,
    /// Reserved for structured products; always empty today.
    pub products: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    pub bullets: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefResult {
    pub turns: Vec<DialogueTurn>,
    pub questions_asked: Vec<String>,
    pub clarifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidanceResult {
    pub guidance_text: String,
    pub priority_tasks: Vec<String>,
    /// Section key (`j2`, `cyber`, ...) to the guidance aimed at it.
    pub guidance_by_section: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase_name: String,
    pub meeting: MeetingResult,
    pub slides: Vec<SlideContent>,
    pub brief: BriefResult,
    pub guidance: GuidanceResult,
}

/// Receives progress from a running phase.
///
/// Every method has a no-op default, so observers implement only the hooks
/// they render.
pub trait PhaseObserver {
    /// Called once per turn, in generation order.
    fn on_turn(&mut self, _turn: &DialogueTurn) {}

    /// Called before each sub-step with `"a"`..`"d"` and a description.
    fn on_substep(&mut self, _step: &str, _description: &str) {}

    /// Called after a phase completes during a multi-phase run.
    fn on_phase_complete(&mut self, _result: &PhaseResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PhaseObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::PersonaGenerator;

    #[test]
    fn turn_carries_persona_fields() {
        let persona = PersonaGenerator::new(Some(3)).generate(StaffRole::Commander);
        let turn = DialogueTurn::new(StaffRole::Commander, &persona, "Proceed.".into(), 1);
        assert!(turn.is_commander);
        assert_eq!(turn.role_display, "Commander");
        assert_eq!(turn.speaker, persona.short_designation());
        assert_eq!(turn.rank, persona.rank.abbrev);
    }

    #[test]
    fn transcript_joins_lines_with_blank_lines() {
        let persona = PersonaGenerator::new(Some(3)).generate(StaffRole::J3);
        let turns = vec![
            DialogueTurn::new(StaffRole::J3, &persona, "First.".into(), 1),
            DialogueTurn::new(StaffRole::J3, &persona, "Second.".into(), 2),
        ];
        let speaker = persona.short_designation();
        assert_eq!(
            render_transcript(&turns),
            format!(
                "**{speaker} (J3 - Operations)**: First.\n\n**{speaker} (J3 - Operations)**: Second."
            )
        );
        assert_eq!(render_transcript(&[]), "");
    }
}
