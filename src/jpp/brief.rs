use super::orchestrator::MeetingOrchestrator;
use super::phase::JppPhase;
use super::prompts::{
    answer_prompt, brief_prompt, commander_question_prompt, commander_system_prompt,
    slides_for_role,
};
use super::types::{BriefResult, DialogueTurn, PhaseObserver, SlideContent};
use crate::staff::StaffRole;

/// Whether the Commander questions the briefer at `idx` of `total`: every
/// other briefer starting with the first, and always the last.
pub fn commander_asks(idx: usize, total: usize) -> bool {
    idx % 2 == 0 || idx + 1 == total
}

impl MeetingOrchestrator {
    /// Lead roles brief their share of the slides; the Commander probes.
    ///
    /// Turn numbers restart at 1 and run across briefs, questions and
    /// answers in the order they are spoken.
    pub async fn run_commander_brief(
        &mut self,
        phase: JppPhase,
        slides: &[SlideContent],
        observer: &mut dyn PhaseObserver,
    ) -> anyhow::Result<BriefResult> {
        let leads = phase.config().lead_roles;
        let temperature = self.settings.dialogue_temperature;
        let commander = self.agent(StaffRole::Commander);
        let commander_system = commander_system_prompt(commander.persona());

        let mut result = BriefResult::default();
        let mut questions_so_far = String::new();

        for (idx, &role) in leads.iter().enumerate() {
            let agent = self.agent(role);
            let personality = self.table().personality_prompt(role);
            let content = slides_for_role(slides, idx, leads.len());

            let prompt = brief_prompt(
                phase,
                role,
                agent.persona(),
                &personality,
                &content,
                &questions_so_far,
            );
            let brief = self.invoke_agent(&agent, &prompt, temperature).await?;
            let turn = DialogueTurn::new(
                role,
                agent.persona(),
                brief.clone(),
                result.turns.len() + 1,
            );
            self.emit(&mut result, turn, observer).await;

            if !commander_asks(idx, leads.len()) {
                continue;
            }

            let question = self
                .call_llm(
                    "commander_question",
                    &commander_system,
                    &commander_question_prompt(role, &brief),
                )
                .await?;
            let turn = DialogueTurn::new(
                StaffRole::Commander,
                commander.persona(),
                question.clone(),
                result.turns.len() + 1,
            );
            self.emit(&mut result, turn, observer).await;
            questions_so_far.push_str(&format!("\nCommander asked: {question}\n"));
            result.questions_asked.push(question.clone());

            let answer = self
                .invoke_agent(&agent, &answer_prompt(&question), temperature)
                .await?;
            let turn = DialogueTurn::new(
                role,
                agent.persona(),
                answer.clone(),
                result.turns.len() + 1,
            );
            self.emit(&mut result, turn, observer).await;
            questions_so_far.push_str(&format!(
                "{} answered: {answer}\n",
                agent.persona().short_designation()
            ));
            result.clarifications.push(answer);
        }

        tracing::info!(
            phase = phase.name(),
            turns = result.turns.len(),
            questions = result.questions_asked.len(),
            "Commander brief complete"
        );
        Ok(result)
    }

    async fn emit(
        &self,
        result: &mut BriefResult,
        turn: DialogueTurn,
        observer: &mut dyn PhaseObserver,
    ) {
        tracing::debug!(turn = turn.turn_number, speaker = %turn.speaker, "Brief turn");
        observer.on_turn(&turn);
        result.turns.push(turn);
        self.pace().await;
    }
}
