use crate::support::{CapturingProvider, EchoProvider, RecordingObserver, test_config};
use std::sync::Arc;
use wargate::jpp::{
    JppPhase, MeetingOrchestrator, NullObserver, commander_asks, phase_digest, render_transcript,
    schedule,
};
use wargate::staff::StaffRole;

#[tokio::test]
async fn planning_initiation_runs_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let provider = Arc::new(EchoProvider::default());
    let config = test_config(tmp.path());
    let mut orchestrator = MeetingOrchestrator::from_config(&config, provider.clone());
    let mut observer = RecordingObserver::default();

    let result = orchestrator
        .run_full_phase(
            JppPhase::PlanningInitiation,
            "Country X masses troops on the border.",
            "",
            &mut observer,
        )
        .await
        .unwrap();

    let expected = schedule(JppPhase::PlanningInitiation);
    assert_eq!(result.phase_name, "Planning Initiation");
    assert_eq!(result.meeting.turns.len(), expected.len());
    for (turn, role) in result.meeting.turns.iter().zip(&expected) {
        assert_eq!(turn.role, *role);
        assert!(turn.text.starts_with("ECHO: "));
    }
    assert!(result.slides.is_empty(), "echo replies carry no SLIDE markers");
    assert!(!result.guidance.guidance_text.is_empty());

    let steps: Vec<&str> = observer.substeps.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(steps, ["a", "b", "c", "d"]);
    assert_eq!(observer.substeps[0].1, "Planning Initiation - Staff Meeting");
    assert_eq!(
        observer.turns.len(),
        result.meeting.turns.len() + result.brief.turns.len() + 1
    );
    assert!(observer.turns.last().unwrap().is_commander);
}

#[tokio::test]
async fn brief_follows_question_cadence() {
    let tmp = tempfile::tempdir().unwrap();
    let provider = Arc::new(EchoProvider::default());
    let mut orchestrator = MeetingOrchestrator::from_config(&test_config(tmp.path()), provider);

    let phase = JppPhase::MissionAnalysis;
    let leads = phase.config().lead_roles;
    let brief = orchestrator
        .run_commander_brief(phase, &[], &mut NullObserver)
        .await
        .unwrap();

    let asked = (0..leads.len()).filter(|&i| commander_asks(i, leads.len())).count();
    assert_eq!(brief.questions_asked.len(), asked);
    assert_eq!(brief.clarifications.len(), asked);
    assert_eq!(brief.turns.len(), leads.len() + 2 * asked);
    assert_eq!(brief.turns[0].role, leads[0]);
    assert_eq!(brief.turns[1].role, StaffRole::Commander);
    let numbers: Vec<usize> = brief.turns.iter().map(|t| t.turn_number).collect();
    assert_eq!(numbers, (1..=brief.turns.len()).collect::<Vec<_>>());
}

#[tokio::test]
async fn personas_are_stable_across_phases() {
    let tmp = tempfile::tempdir().unwrap();
    let provider = Arc::new(EchoProvider::default());
    let mut orchestrator = MeetingOrchestrator::from_config(&test_config(tmp.path()), provider);
    let mut observer = RecordingObserver::default();

    let results = orchestrator
        .run_all_phases(
            "Scenario",
            &[JppPhase::PlanningInitiation, JppPhase::MissionAnalysis],
            &mut observer,
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(observer.completed, ["Planning Initiation", "Mission Analysis"]);

    let j2_speakers: std::collections::HashSet<&str> = results
        .iter()
        .flat_map(|r| r.meeting.turns.iter())
        .filter(|t| t.role == StaffRole::J2)
        .map(|t| t.speaker.as_str())
        .collect();
    assert_eq!(j2_speakers.len(), 1);
    assert!(!orchestrator.active_roles().is_empty());
}

#[tokio::test]
async fn meeting_prompts_see_a_ten_turn_window_and_the_prior_context() {
    let tmp = tempfile::tempdir().unwrap();
    let provider = Arc::new(CapturingProvider::default());
    let mut orchestrator = MeetingOrchestrator::from_config(&test_config(tmp.path()), provider.clone());

    let meeting = orchestrator
        .run_staff_meeting(JppPhase::MissionAnalysis, "Scenario", "EARLIER-PHASES", &mut NullObserver)
        .await
        .unwrap();

    let prompts = provider.messages();
    assert_eq!(prompts.len(), meeting.turns.len());
    assert!(prompts.len() >= 12);
    for (idx, turn) in meeting.turns.iter().enumerate() {
        assert_eq!(turn.text, format!("<<reply {}>>", idx + 1));
    }
    for prompt in &prompts {
        assert!(prompt.contains("=== PRIOR PLANNING CONTEXT ===\nEARLIER-PHASES\n"));
    }

    let twelfth = &prompts[11];
    assert!(twelfth.contains("<<reply 2>>"));
    assert!(twelfth.contains("<<reply 11>>"));
    assert!(!twelfth.contains("<<reply 1>>"));
    assert!(prompts[0].contains("[Meeting just started"));

    assert_eq!(meeting.transcript, render_transcript(&meeting.turns));
}

#[tokio::test]
async fn next_phase_starts_from_the_previous_digest() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(tmp.path());
    let provider = Arc::new(CapturingProvider::default());
    let mut orchestrator = MeetingOrchestrator::from_config(&config, provider.clone());

    let results = orchestrator
        .run_all_phases(
            "Scenario",
            &[JppPhase::PlanningInitiation, JppPhase::MissionAnalysis],
            &mut NullObserver,
        )
        .await
        .unwrap();

    let prompts = provider.messages();
    let meeting_prompts = |name: &str| -> Vec<&String> {
        let needle = format!("\"{name}\" phase of the Joint Planning Process");
        prompts.iter().filter(|p| p.contains(&needle)).collect()
    };

    let first = meeting_prompts("Planning Initiation");
    assert_eq!(first.len(), results[0].meeting.turns.len());
    for prompt in first {
        assert!(prompt.contains("=== PRIOR PLANNING CONTEXT ===\nThis is the first phase; no prior context."));
    }

    let digest = phase_digest(&results[0], config.meeting.phase_digest_chars);
    assert!(digest.starts_with("=== Planning Initiation ==="));
    let second = meeting_prompts("Mission Analysis");
    assert_eq!(second.len(), results[1].meeting.turns.len());
    for prompt in second {
        assert!(prompt.contains(&format!("=== PRIOR PLANNING CONTEXT ===\n{digest}\n")));
    }
}
