use super::orchestrator::MeetingOrchestrator;
use super::phase::JppPhase;
use super::prompts::guidance_prompt;
use super::types::{BriefResult, DialogueTurn, GuidanceResult, MeetingResult, PhaseObserver};
use crate::staff::StaffRole;
use crate::utils::truncate_chars;
use std::collections::BTreeMap;

/// Section key and the lower-case keywords that address it.
const SECTION_PATTERNS: [(&str, &[&str]); 8] = [
    ("j2", &["j2", "intel", "intelligence"]),
    ("j3", &["j3", "ops", "operations"]),
    ("j4", &["j4", "log", "logistics"]),
    ("j5", &["j5", "plans"]),
    ("j6", &["j6", "comms", "communications"]),
    ("cyber", &["cyber", "ew"]),
    ("fires", &["fires"]),
    ("sja", &["sja", "legal"]),
];

impl MeetingOrchestrator {
    /// The Commander closes the phase with guidance for the next one.
    pub async fn issue_commander_guidance(
        &mut self,
        phase: JppPhase,
        scenario: &str,
        meeting: &MeetingResult,
        brief: &BriefResult,
        observer: &mut dyn PhaseObserver,
    ) -> anyhow::Result<GuidanceResult> {
        let commander = self.agent(StaffRole::Commander);
        let personality = self.table().personality_prompt(StaffRole::Commander);
        let meeting_summary =
            truncate_chars(&meeting.transcript, self.settings.guidance_transcript_chars);
        let brief_summary = summarize_brief(
            brief,
            self.settings.brief_summary_turns,
            self.settings.brief_excerpt_chars,
        );

        let prompt = guidance_prompt(
            phase,
            &personality,
            scenario,
            meeting_summary,
            &brief_summary,
        );
        let guidance_text = self
            .invoke_agent(&commander, &prompt, self.product_temperature())
            .await?;

        let turn = DialogueTurn::new(
            StaffRole::Commander,
            commander.persona(),
            guidance_text.clone(),
            1,
        );
        observer.on_turn(&turn);

        let priority_tasks = extract_priority_tasks(&guidance_text, self.settings.max_priority_tasks);
        let guidance_by_section = extract_section_guidance(&guidance_text);
        tracing::info!(
            phase = phase.name(),
            priority_tasks = priority_tasks.len(),
            sections = guidance_by_section.len(),
            "Commander guidance issued"
        );

        Ok(GuidanceResult {
            guidance_text,
            priority_tasks,
            guidance_by_section,
        })
    }
}

/// `"{speaker}: {excerpt}..."` for the first `max_turns` brief turns.
pub fn summarize_brief(brief: &BriefResult, max_turns: usize, excerpt_chars: usize) -> String {
    brief
        .turns
        .iter()
        .take(max_turns)
        .map(|turn| {
            format!(
                "{}: {}...",
                turn.speaker,
                truncate_chars(&turn.text, excerpt_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bullet lines following a line that mentions "priority" or "task".
///
/// The section stays open across blank lines and closes at the first
/// non-bullet text once at least one task has been collected.
pub fn extract_priority_tasks(guidance: &str, limit: usize) -> Vec<String> {
    let mut tasks = Vec::new();
    let mut in_section = false;

    for line in guidance.lines() {
        let lower = line.to_lowercase();
        let trimmed = line.trim();
        if lower.contains("priority") || lower.contains("task") {
            in_section = true;
        } else if in_section && let Some(task) = trimmed.strip_prefix('-') {
            tasks.push(task.trim().to_string());
        } else if in_section && !trimmed.is_empty() && !tasks.is_empty() {
            in_section = false;
        }
    }
    tasks.truncate(limit);
    tasks
}

/// Guidance addressed to a staff section: any line with a section keyword
/// and a colon maps that section to the text after the first colon. Later
/// lines overwrite earlier ones.
pub fn extract_section_guidance(guidance: &str) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    for line in guidance.lines() {
        let Some((_, after)) = line.split_once(':') else {
            continue;
        };
        let lower = line.to_lowercase();
        for (section, patterns) in SECTION_PATTERNS {
            if patterns.iter().any(|p| lower.contains(p)) {
                sections.insert(section.to_string(), after.trim().to_string());
            }
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::PersonaGenerator;

    const GUIDANCE: &str = "\
1. COMMANDER'S ASSESSMENT: Solid work, gaps remain.
2. DECISIONS: We accept the southern axis.
3. PRIORITY TASKS:
- Refine the collection plan
- Validate fuel consumption rates

- Confirm bridging assets
4. RISK GUIDANCE: Accept risk in the north.
- not collected
J2: Focus collection on the 3rd Guards Army.
Logistics: pre-position Class III forward.";

    #[test]
    fn priority_tasks_follow_the_header() {
        let tasks = extract_priority_tasks(GUIDANCE, 8);
        assert_eq!(
            tasks,
            vec![
                "Refine the collection plan",
                "Validate fuel consumption rates",
                "Confirm bridging assets",
            ]
        );
    }

    #[test]
    fn priority_tasks_are_capped() {
        let text = format!(
            "Priority tasks:\n{}",
            (0..12).map(|i| format!("- t{i}")).collect::<Vec<_>>().join("\n")
        );
        assert_eq!(extract_priority_tasks(&text, 8).len(), 8);
    }

    #[test]
    fn no_priority_header_no_tasks() {
        assert!(extract_priority_tasks("- orphan\n- bullets", 8).is_empty());
    }

    #[test]
    fn section_guidance_uses_text_after_first_colon() {
        let sections = extract_section_guidance(GUIDANCE);
        assert_eq!(
            sections.get("j2").map(String::as_str),
            Some("Focus collection on the 3rd Guards Army.")
        );
        assert_eq!(
            sections.get("j4").map(String::as_str),
            Some("pre-position Class III forward.")
        );
    }

    #[test]
    fn keywords_without_colon_are_ignored() {
        assert!(extract_section_guidance("J2 should look harder").is_empty());
    }

    #[test]
    fn brief_summary_truncates_and_limits() {
        let persona = PersonaGenerator::new(Some(1)).generate(StaffRole::J3);
        let brief = BriefResult {
            turns: (0..8)
                .map(|i| DialogueTurn::new(StaffRole::J3, &persona, "y".repeat(300), i + 1))
                .collect(),
            ..BriefResult::default()
        };
        let summary = summarize_brief(&brief, 6, 200);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            format!("{}: {}...", persona.short_designation(), "y".repeat(200))
        );
    }
}
