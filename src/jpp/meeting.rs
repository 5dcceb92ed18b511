use super::orchestrator::MeetingOrchestrator;
use super::phase::JppPhase;
use super::prompts::{MeetingTurnContext, meeting_prompt};
use super::types::{DialogueTurn, MeetingResult, PhaseObserver, render_transcript};
use std::collections::HashMap;

/// Lower-case phrases that flag a transcript line as a decision.
const DECISION_MARKERS: [&str; 7] = [
    "we will",
    "we should",
    "i recommend",
    "the staff recommends",
    "our assessment is",
    "decision:",
    "recommendation:",
];

impl MeetingOrchestrator {
    /// Multi-turn staff meeting for `phase`.
    ///
    /// Each speaker sees the scenario, the prior context and a sliding
    /// window of the most recent turns. Turns reach `observer` in order.
    pub async fn run_staff_meeting(
        &mut self,
        phase: JppPhase,
        scenario: &str,
        prior_context: &str,
        observer: &mut dyn PhaseObserver,
    ) -> anyhow::Result<MeetingResult> {
        let order = self.template().schedule(phase);
        let window = self.settings.context_window_turns;
        let temperature = self.settings.dialogue_temperature;
        let mut turns: Vec<DialogueTurn> = Vec::with_capacity(order.len());
        let mut transcript_parts: Vec<String> = Vec::with_capacity(order.len());

        tracing::info!(phase = phase.name(), turns = order.len(), "Staff meeting started");

        for (idx, role) in order.into_iter().enumerate() {
            let turn_number = idx + 1;
            let agent = self.agent(role);
            let personality = self.table().personality_prompt(role);
            let recent = transcript_parts[transcript_parts.len().saturating_sub(window)..].join("\n\n");

            let prompt = meeting_prompt(&MeetingTurnContext {
                phase,
                role,
                turn_number,
                scenario,
                prior_context,
                conversation_so_far: &recent,
                persona: agent.persona(),
                personality: &personality,
            });

            let text = self.invoke_agent(&agent, &prompt, temperature).await?;
            let turn = DialogueTurn::new(role, agent.persona(), text, turn_number);
            tracing::debug!(turn = turn_number, speaker = %turn.speaker, role = %role, "Meeting turn");

            transcript_parts.push(turn.transcript_line());
            observer.on_turn(&turn);
            turns.push(turn);
            self.pace().await;
        }

        let transcript = render_transcript(&turns);
        let decisions = extract_decisions(&transcript, self.settings.max_decisions);

        Ok(MeetingResult {
            phase_name: phase.name().to_string(),
            turns,
            transcript,
            decisions,
            products: HashMap::new(),
        })
    }
}

/// Lines carrying decision language, trimmed, first `limit` kept.
pub fn extract_decisions(transcript: &str, limit: usize) -> Vec<String> {
    transcript
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            DECISION_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(|line| line.trim().to_string())
        .take(limit)
        .collect()
}
