//! Phase pipeline: staff meeting, slides, commander brief, commander guidance.

use super::phase::JppPhase;
use super::schedule::ScheduleTemplate;
use super::types::{PhaseObserver, PhaseResult};
use crate::config::{Config, MeetingConfig};
use crate::llm::{Provider, RetryPolicy, invoke_with_retry};
use crate::staff::{AgentBackend, Persona, PersonaGenerator, StaffAgent, StaffRole, StaffTable};
use crate::tools::retriever_registry;
use crate::utils::truncate_with_ellipsis;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Drives staff agents through the Joint Planning Process.
///
/// Agents are built lazily on first use and cached for the orchestrator's
/// lifetime, so a role keeps the same persona across every phase.
pub struct MeetingOrchestrator {
    backend: AgentBackend,
    table: Arc<StaffTable>,
    personas: PersonaGenerator,
    template: ScheduleTemplate,
    pub(crate) settings: MeetingConfig,
    pub(crate) retry: RetryPolicy,
    agents: HashMap<StaffRole, Arc<StaffAgent>>,
}

impl MeetingOrchestrator {
    pub fn new(
        backend: AgentBackend,
        table: Arc<StaffTable>,
        personas: PersonaGenerator,
        settings: MeetingConfig,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            backend,
            table,
            personas,
            template: ScheduleTemplate::default(),
            settings,
            retry,
            agents: HashMap::new(),
        }
    }

    /// Standard staff, retriever tools and settings from `config`.
    pub fn from_config(config: &Config, provider: Arc<dyn Provider>) -> Self {
        let backend = AgentBackend {
            provider,
            registry: Arc::new(retriever_registry()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tool_iterations: config.agent.max_tool_iterations,
        };
        Self::new(
            backend,
            Arc::new(StaffTable::standard()),
            PersonaGenerator::new(config.persona_seed),
            config.meeting.clone(),
            RetryPolicy::from(&config.reliability),
        )
    }

    #[must_use]
    pub fn with_template(mut self, template: ScheduleTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &ScheduleTemplate {
        &self.template
    }

    pub fn table(&self) -> &StaffTable {
        &self.table
    }

    /// Cached agent for `role`, created on first request.
    pub fn agent(&mut self, role: StaffRole) -> Arc<StaffAgent> {
        if let Some(agent) = self.agents.get(&role) {
            return Arc::clone(agent);
        }
        let persona = self.personas.generate(role);
        tracing::debug!(role = %role, persona = %persona.full_designation(), "Creating staff agent");
        let agent = Arc::new(StaffAgent::new(
            role,
            persona,
            &self.table.profile(role),
            self.backend.clone(),
        ));
        self.agents.insert(role, Arc::clone(&agent));
        agent
    }

    pub fn persona(&mut self, role: StaffRole) -> Persona {
        self.agent(role).persona().clone()
    }

    /// Roles with a live agent, in role order.
    pub fn active_roles(&self) -> Vec<StaffRole> {
        let mut roles: Vec<StaffRole> = self.agents.keys().copied().collect();
        roles.sort();
        roles
    }

    /// Agent call wrapped in the retry policy.
    pub(crate) async fn invoke_agent(
        &self,
        agent: &StaffAgent,
        prompt: &str,
        temperature: f64,
    ) -> anyhow::Result<String> {
        let label = agent.role().key();
        invoke_with_retry(self.retry, &label, move || {
            agent.invoke_at(prompt, temperature)
        })
        .await
    }

    /// Direct provider call, bypassing any agent's tools.
    pub(crate) async fn call_llm(
        &self,
        label: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> anyhow::Result<String> {
        let provider = self.backend.provider.as_ref();
        let model = self.backend.model.as_str();
        let temperature = self.backend.temperature;
        invoke_with_retry(self.retry, label, move || {
            provider.chat_with_system(Some(system_prompt), user_prompt, model, temperature)
        })
        .await
    }

    pub(crate) fn product_temperature(&self) -> f64 {
        self.backend.temperature
    }

    /// Pause between rendered turns.
    pub(crate) async fn pace(&self) {
        if self.settings.turn_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.turn_delay_ms)).await;
        }
    }

    /// Run the four sub-steps of `phase` in order.
    pub async fn run_full_phase(
        &mut self,
        phase: JppPhase,
        scenario: &str,
        prior_context: &str,
        observer: &mut dyn PhaseObserver,
    ) -> anyhow::Result<PhaseResult> {
        let name = phase.name();
        tracing::info!(phase = name, "Starting phase");

        observer.on_substep("a", &format!("{name} - Staff Meeting"));
        let meeting = self
            .run_staff_meeting(phase, scenario, prior_context, observer)
            .await?;

        observer.on_substep("b", &format!("{name} - Generating Slides"));
        let slides = self.generate_slides(phase, &meeting).await?;

        observer.on_substep("c", &format!("{name} - Briefing Commander"));
        let brief = self
            .run_commander_brief(phase, &slides, observer)
            .await?;

        observer.on_substep("d", &format!("{name} - Commander Guidance"));
        let guidance = self
            .issue_commander_guidance(phase, scenario, &meeting, &brief, observer)
            .await?;

        tracing::info!(
            phase = name,
            turns = meeting.turns.len(),
            slides = slides.len(),
            priority_tasks = guidance.priority_tasks.len(),
            "Phase complete"
        );

        Ok(PhaseResult {
            phase_name: name.to_string(),
            meeting,
            slides,
            brief,
            guidance,
        })
    }

    /// Run `phases` in order, threading each result forward as prior context.
    ///
    /// The context only grows: each completed phase appends its digest.
    pub async fn run_all_phases(
        &mut self,
        scenario: &str,
        phases: &[JppPhase],
        observer: &mut dyn PhaseObserver,
    ) -> anyhow::Result<Vec<PhaseResult>> {
        let mut prior_context = String::new();
        let mut results = Vec::with_capacity(phases.len());

        for &phase in phases {
            let result = self
                .run_full_phase(phase, scenario, &prior_context, observer)
                .await?;
            if !prior_context.is_empty() {
                prior_context.push_str("\n\n");
            }
            prior_context.push_str(&phase_digest(&result, self.settings.phase_digest_chars));
            observer.on_phase_complete(&result);
            results.push(result);
        }
        Ok(results)
    }
}

/// Compact summary of a finished phase for the next phase's prompts, at
/// most `max_chars` characters including the trailing `...`.
pub fn phase_digest(result: &PhaseResult, max_chars: usize) -> String {
    let mut digest = format!(
        "=== {} ===\nCOMMANDER'S GUIDANCE:\n{}",
        result.phase_name, result.guidance.guidance_text
    );
    if !result.meeting.decisions.is_empty() {
        digest.push_str("\n\nKEY DECISIONS:");
        for decision in &result.meeting.decisions {
            digest.push_str("\n- ");
            digest.push_str(decision);
        }
    }
    if !result.guidance.priority_tasks.is_empty() {
        digest.push_str("\n\nPRIORITY TASKS:");
        for task in &result.guidance.priority_tasks {
            digest.push_str("\n- ");
            digest.push_str(task);
        }
    }
    digest.push_str("\n\nDISCUSSION EXCERPT:\n");
    digest.push_str(&result.meeting.transcript);
    if digest.chars().count() <= max_chars {
        return digest;
    }
    truncate_with_ellipsis(&digest, max_chars.saturating_sub(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jpp::types::{BriefResult, GuidanceResult, MeetingResult};

    fn result(name: &str, guidance: &str, transcript: &str) -> PhaseResult {
        PhaseResult {
            phase_name: name.into(),
            meeting: MeetingResult {
                phase_name: name.into(),
                transcript: transcript.into(),
                decisions: vec!["We will hold the river line.".into()],
                ..MeetingResult::default()
            },
            slides: vec![],
            brief: BriefResult::default(),
            guidance: GuidanceResult {
                guidance_text: guidance.into(),
                priority_tasks: vec!["J2 refine collection plan".into()],
                ..GuidanceResult::default()
            },
        }
    }

    #[test]
    fn digest_lists_guidance_decisions_and_tasks() {
        let digest = phase_digest(&result("Mission Analysis", "Proceed.", "talk"), 3_000);
        assert!(digest.starts_with("=== Mission Analysis ===\nCOMMANDER'S GUIDANCE:\nProceed."));
        assert!(digest.contains("KEY DECISIONS:\n- We will hold the river line."));
        assert!(digest.contains("PRIORITY TASKS:\n- J2 refine collection plan"));
        assert!(digest.ends_with("DISCUSSION EXCERPT:\ntalk"));
    }

    #[test]
    fn digest_respects_budget() {
        let long = "x".repeat(10_000);
        let digest = phase_digest(&result("P", "G", &long), 500);
        assert_eq!(digest.chars().count(), 500);
        assert!(digest.ends_with("..."));
    }

    #[test]
    fn digest_at_budget_is_untouched() {
        let full = phase_digest(&result("P", "G", "talk"), 3_000);
        let exact = phase_digest(&result("P", "G", "talk"), full.chars().count());
        assert_eq!(exact, full);
    }
}
