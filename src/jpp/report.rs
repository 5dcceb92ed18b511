//! Plain-text report for a Joint Planning Process run.

use super::types::PhaseResult;
use std::fmt::Write;

const RULE: &str = "================================================================================";
const HASH_RULE: &str =
    "################################################################################";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{RULE}\n{title:^80}\n{RULE}");
}

/// Metadata printed in the report header.
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub operation: &'a str,
    pub run_id: &'a str,
    pub generated_at: chrono::DateTime<chrono::Local>,
    pub scenario: &'a str,
}

pub fn render_report(header: &ReportHeader<'_>, phases: &[PhaseResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HASH_RULE}");
    let _ = writeln!(out, "#{:^78}#", "PROJECT WARGATE");
    let _ = writeln!(out, "#{:^78}#", "JOINT PLANNING PROCESS OUTPUT");
    let _ = writeln!(out, "{HASH_RULE}");
    let _ = writeln!(out, "Operation: {}", header.operation);
    let _ = writeln!(out, "Run ID:    {}", header.run_id);
    let _ = writeln!(
        out,
        "Generated: {}",
        header.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Phases:    {}", phases.len());

    banner(&mut out, "SCENARIO");
    let _ = writeln!(out, "{}", header.scenario.trim());

    for (idx, phase) in phases.iter().enumerate() {
        render_phase(&mut out, idx + 1, phase);
    }

    let _ = writeln!(out, "\n{HASH_RULE}");
    let _ = writeln!(out, "#{:^78}#", "END OF PLANNING OUTPUT");
    let _ = writeln!(out, "{HASH_RULE}");
    out
}

fn render_phase(out: &mut String, number: usize, phase: &PhaseResult) {
    banner(
        out,
        &format!("PHASE {number}: {}", phase.phase_name.to_uppercase()),
    );
    let _ = writeln!(
        out,
        "Staff meeting: {} turns | Brief: {} turns",
        phase.meeting.turns.len(),
        phase.brief.turns.len()
    );

    let _ = writeln!(out, "\n--- BRIEFING SLIDES ---");
    if phase.slides.is_empty() {
        let _ = writeln!(out, "[No slides generated]");
    }
    for (idx, slide) in phase.slides.iter().enumerate() {
        let _ = writeln!(out, "\n[{}] {}", idx + 1, slide.title);
        for bullet in &slide.bullets {
            let _ = writeln!(out, "  - {bullet}");
        }
        if !slide.notes.is_empty() {
            let _ = writeln!(out, "  Notes: {}", slide.notes);
        }
    }

    if !phase.meeting.decisions.is_empty() {
        let _ = writeln!(out, "\n--- KEY DECISIONS ---");
        for decision in &phase.meeting.decisions {
            let _ = writeln!(out, "- {decision}");
        }
    }

    if !phase.brief.questions_asked.is_empty() {
        let _ = writeln!(out, "\n--- COMMANDER Q&A ---");
        for (idx, question) in phase.brief.questions_asked.iter().enumerate() {
            let _ = writeln!(out, "\nQ{}: {}", idx + 1, question.trim());
            if let Some(answer) = phase.brief.clarifications.get(idx) {
                let _ = writeln!(out, "A{}: {}", idx + 1, answer.trim());
            }
        }
    }

    let _ = writeln!(out, "\n--- COMMANDER'S GUIDANCE ---");
    let _ = writeln!(out, "{}", phase.guidance.guidance_text.trim());

    if !phase.guidance.priority_tasks.is_empty() {
        let _ = writeln!(out, "\n--- PRIORITY TASKS ---");
        for (idx, task) in phase.guidance.priority_tasks.iter().enumerate() {
            let _ = writeln!(out, "{}. {task}", idx + 1);
        }
    }

    if !phase.guidance.guidance_by_section.is_empty() {
        let _ = writeln!(out, "\n--- GUIDANCE BY SECTION ---");
        for (section, text) in &phase.guidance.guidance_by_section {
            let _ = writeln!(out, "{}: {text}", section.to_uppercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jpp::types::{BriefResult, GuidanceResult, MeetingResult, SlideContent};
    use std::collections::BTreeMap;

    fn phase() -> PhaseResult {
        PhaseResult {
            phase_name: "Mission Analysis".into(),
            meeting: MeetingResult {
                decisions: vec!["We will screen the border.".into()],
                ..MeetingResult::default()
            },
            slides: vec![SlideContent {
                title: "Restated Mission".into(),
                bullets: vec!["Deter, then defend".into()],
                notes: "Brief in 2 minutes".into(),
            }],
            brief: BriefResult {
                turns: vec![],
                questions_asked: vec!["What is the enemy's most dangerous COA?".into()],
                clarifications: vec!["A two-axis thrust.".into()],
            },
            guidance: GuidanceResult {
                guidance_text: "Proceed to COA development.".into(),
                priority_tasks: vec!["Refine CCIRs".into()],
                guidance_by_section: BTreeMap::from([(
                    "j2".to_string(),
                    "Confirm the second echelon.".to_string(),
                )]),
            },
        }
    }

    #[test]
    fn report_contains_every_section() {
        let header = ReportHeader {
            operation: "Operation Test",
            run_id: "run-1",
            generated_at: chrono::Local::now(),
            scenario: "  Deter aggression.  ",
        };
        let report = render_report(&header, &[phase()]);
        assert!(report.contains("PROJECT WARGATE"));
        assert!(report.contains("Operation: Operation Test"));
        assert!(report.contains("PHASE 1: MISSION ANALYSIS"));
        assert!(report.contains("\nDeter aggression.\n"));
        assert!(report.contains("[1] Restated Mission\n  - Deter, then defend\n  Notes: Brief in 2 minutes"));
        assert!(report.contains("- We will screen the border."));
        assert!(report.contains("Q1: What is the enemy's most dangerous COA?\nA1: A two-axis thrust."));
        assert!(report.contains("1. Refine CCIRs"));
        assert!(report.contains("J2: Confirm the second echelon."));
        assert!(report.trim_end().ends_with(HASH_RULE));
    }

    #[test]
    fn empty_slides_are_marked() {
        let mut result = phase();
        result.slides.clear();
        let header = ReportHeader {
            operation: "Op",
            run_id: "r",
            generated_at: chrono::Local::now(),
            scenario: "S",
        };
        assert!(render_report(&header, &[result]).contains("[No slides generated]"));
    }
}
