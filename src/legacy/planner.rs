use super::prompts;
use crate::config::Config;
use crate::llm::{Provider, RetryPolicy, invoke_with_retry};
use crate::staff::{AgentBackend, PersonaGenerator, StaffAgent, StaffRole, StaffTable};
use crate::tools::retriever_registry;
use crate::utils::truncate_with_ellipsis;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

const FUNCTIONAL_ROLES: [StaffRole; 7] = [
    StaffRole::J1,
    StaffRole::J4,
    StaffRole::J6,
    StaffRole::Fires,
    StaffRole::Engineer,
    StaffRole::Protection,
    StaffRole::CyberEw,
];

const WARGAME_ROLES: [StaffRole; 4] = [
    StaffRole::J4,
    StaffRole::Fires,
    StaffRole::CyberEw,
    StaffRole::Protection,
];

const ANNEX_ROLES: [StaffRole; 9] = [
    StaffRole::J1,
    StaffRole::J2,
    StaffRole::J4,
    StaffRole::J6,
    StaffRole::Fires,
    StaffRole::CyberEw,
    StaffRole::Engineer,
    StaffRole::Protection,
    StaffRole::Pao,
];

/// One staff section's response to a shared prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffInput {
    pub role: StaffRole,
    pub response: String,
}

/// `### {ROLE_KEY} INPUT:` blocks in consultation order.
pub fn format_staff_inputs(inputs: &[StaffInput]) -> String {
    inputs
        .iter()
        .map(|input| {
            format!(
                "\n### {} INPUT:\n{}",
                input.role.key().to_uppercase(),
                input.response
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default)]
pub struct MissionAnalysis {
    pub staff_analysis: Vec<StaffInput>,
    pub threat_assessment: String,
    pub commander_guidance: String,
}

#[derive(Debug, Clone, Default)]
pub struct CoaDevelopment {
    pub concepts: String,
    pub details: String,
    pub functional_inputs: Vec<StaffInput>,
}

#[derive(Debug, Clone, Default)]
pub struct CoaAnalysis {
    pub red_team: String,
    pub execution_risk: String,
    pub wargame_inputs: Vec<StaffInput>,
    pub legal_review: String,
}

#[derive(Debug, Clone, Default)]
pub struct CoaComparison {
    pub staff_comparisons: Vec<StaffInput>,
    pub synthesis: String,
}

#[derive(Debug, Clone, Default)]
pub struct PlanDevelopment {
    pub base_plan: String,
    pub annexes: Vec<StaffInput>,
}

/// Everything the sequential planner produced for one scenario.
#[derive(Debug, Clone, Default)]
pub struct PlanningOutcome {
    pub scenario: String,
    pub mission_analysis: MissionAnalysis,
    pub coa_development: CoaDevelopment,
    pub coa_analysis: CoaAnalysis,
    pub coa_comparison: CoaComparison,
    pub commander_decision: String,
    pub plan_development: PlanDevelopment,
    pub final_order: String,
}

/// Sequential six-phase planner: each phase consults a fixed set of staff
/// sections with one prompt and hands the answers to the next phase.
pub struct SequentialPlanner {
    backend: AgentBackend,
    table: Arc<StaffTable>,
    personas: PersonaGenerator,
    retry: RetryPolicy,
    agents: HashMap<StaffRole, Arc<StaffAgent>>,
}

impl SequentialPlanner {
    pub fn new(
        backend: AgentBackend,
        table: Arc<StaffTable>,
        personas: PersonaGenerator,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            backend,
            table,
            personas,
            retry,
            agents: HashMap::new(),
        }
    }

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
            RetryPolicy::from(&config.reliability),
        )
    }

    fn agent(&mut self, role: StaffRole) -> Arc<StaffAgent> {
        if let Some(agent) = self.agents.get(&role) {
            return Arc::clone(agent);
        }
        let persona = self.personas.generate(role);
        let agent = Arc::new(StaffAgent::new(
            role,
            persona,
            &self.table.profile(role),
            self.backend.clone(),
        ));
        self.agents.insert(role, Arc::clone(&agent));
        agent
    }

    async fn consult(&mut self, role: StaffRole, prompt: &str) -> anyhow::Result<String> {
        let agent = self.agent(role);
        let label = role.key();
        let agent = agent.as_ref();
        let response =
            invoke_with_retry(self.retry, &label, move || agent.invoke(prompt)).await?;
        tracing::debug!(
            role = %role,
            response = %truncate_with_ellipsis(&response, 500),
            "Staff response"
        );
        Ok(response)
    }

    async fn collect(
        &mut self,
        phase: &str,
        roles: &[StaffRole],
        prompt: &str,
    ) -> anyhow::Result<Vec<StaffInput>> {
        let mut inputs = Vec::with_capacity(roles.len());
        for &role in roles {
            tracing::info!(phase, role = %role, "Consulting staff");
            let response = self.consult(role, prompt).await?;
            inputs.push(StaffInput { role, response });
        }
        Ok(inputs)
    }

    pub async fn mission_analysis(&mut self, scenario: &str) -> anyhow::Result<MissionAnalysis> {
        let phase = "mission_analysis";
        let all: Vec<StaffRole> = StaffRole::iter().collect();
        let staff_analysis = self
            .collect(phase, &all, &prompts::mission_analysis(scenario))
            .await?;

        tracing::info!(phase, "J2 threat assessment");
        let threat_assessment = self
            .consult(StaffRole::J2, &prompts::threat_assessment(scenario))
            .await?;

        tracing::info!(phase, "Commander initial guidance");
        let commander_guidance = self
            .consult(
                StaffRole::Commander,
                &prompts::initial_guidance(&format_staff_inputs(&staff_analysis), &threat_assessment),
            )
            .await?;

        Ok(MissionAnalysis {
            staff_analysis,
            threat_assessment,
            commander_guidance,
        })
    }

    pub async fn coa_development(
        &mut self,
        scenario: &str,
        analysis: &MissionAnalysis,
    ) -> anyhow::Result<CoaDevelopment> {
        let phase = "coa_development";
        let context = prompts::coa_context(
            scenario,
            &analysis.commander_guidance,
            &analysis.threat_assessment,
        );

        tracing::info!(phase, "J5 developing COA concepts");
        let concepts = self
            .consult(StaffRole::J5, &prompts::coa_concepts(&context))
            .await?;

        tracing::info!(phase, "J3 adding operational detail");
        let details = self
            .consult(StaffRole::J3, &prompts::coa_details(&context, &concepts))
            .await?;

        let functional_inputs = self
            .collect(
                phase,
                &FUNCTIONAL_ROLES,
                &prompts::functional_review(&context, &details),
            )
            .await?;

        Ok(CoaDevelopment {
            concepts,
            details,
            functional_inputs,
        })
    }

    pub async fn coa_analysis(&mut self, development: &CoaDevelopment) -> anyhow::Result<CoaAnalysis> {
        let phase = "coa_analysis";
        let context = prompts::analysis_context(&development.concepts, &development.details);

        tracing::info!(phase, "J2 red team");
        let red_team = self
            .consult(StaffRole::J2, &prompts::red_team(&context))
            .await?;

        tracing::info!(phase, "J3 execution risk");
        let execution_risk = self
            .consult(StaffRole::J3, &prompts::execution_risk(&context, &red_team))
            .await?;

        let wargame_inputs = self
            .collect(phase, &WARGAME_ROLES, &prompts::wargame(&context, &red_team))
            .await?;

        tracing::info!(phase, "SJA legal review");
        let legal_review = self
            .consult(StaffRole::Sja, &prompts::legal_review(&context, &red_team))
            .await?;

        Ok(CoaAnalysis {
            red_team,
            execution_risk,
            wargame_inputs,
            legal_review,
        })
    }

    pub async fn coa_comparison(
        &mut self,
        development: &CoaDevelopment,
        analysis: &CoaAnalysis,
    ) -> anyhow::Result<CoaComparison> {
        let phase = "coa_comparison";
        let all: Vec<StaffRole> = StaffRole::iter().collect();
        let staff_comparisons = self
            .collect(
                phase,
                &all,
                &prompts::comparison(
                    &development.concepts,
                    &analysis.red_team,
                    &analysis.legal_review,
                ),
            )
            .await?;

        tracing::info!(phase, "J5 synthesizing comparison");
        let synthesis = self
            .consult(
                StaffRole::J5,
                &prompts::comparison_synthesis(&format_staff_inputs(&staff_comparisons)),
            )
            .await?;

        Ok(CoaComparison {
            staff_comparisons,
            synthesis,
        })
    }

    pub async fn coa_selection(
        &mut self,
        comparison: &CoaComparison,
        analysis: &CoaAnalysis,
    ) -> anyhow::Result<String> {
        tracing::info!(phase = "coa_selection", "Commander selecting COA");
        self.consult(
            StaffRole::Commander,
            &prompts::coa_selection(
                &comparison.synthesis,
                &analysis.red_team,
                &analysis.legal_review,
            ),
        )
        .await
    }

    pub async fn plan_development(
        &mut self,
        decision: &str,
        development: &CoaDevelopment,
    ) -> anyhow::Result<PlanDevelopment> {
        let phase = "plan_development";
        tracing::info!(phase, "J3 developing base plan");
        let base_plan = self
            .consult(
                StaffRole::J3,
                &prompts::base_plan(decision, &development.details),
            )
            .await?;

        let annexes = self
            .collect(phase, &ANNEX_ROLES, &prompts::annex(&base_plan))
            .await?;

        Ok(PlanDevelopment { base_plan, annexes })
    }

    /// Run every phase and the Commander's final order.
    pub async fn run(&mut self, scenario: &str) -> anyhow::Result<PlanningOutcome> {
        tracing::info!("Sequential planning initiated");
        let mission_analysis = self.mission_analysis(scenario).await?;
        let coa_development = self.coa_development(scenario, &mission_analysis).await?;
        let coa_analysis = self.coa_analysis(&coa_development).await?;
        let coa_comparison = self
            .coa_comparison(&coa_development, &coa_analysis)
            .await?;
        let commander_decision = self.coa_selection(&coa_comparison, &coa_analysis).await?;
        let plan_development = self
            .plan_development(&commander_decision, &coa_development)
            .await?;

        tracing::info!("Commander issuing final operation order");
        let final_order = self
            .consult(
                StaffRole::Commander,
                &prompts::final_order(
                    scenario,
                    &commander_decision,
                    &plan_development.base_plan,
                    &format_staff_inputs(&plan_development.annexes),
                ),
            )
            .await?;

        Ok(PlanningOutcome {
            scenario: scenario.to_string(),
            mission_analysis,
            coa_development,
            coa_analysis,
            coa_comparison,
            commander_decision,
            plan_development,
            final_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::PersonaGenerator;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers with the first line of each prompt and records every call.
    struct FirstLine {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Provider for FirstLine {
        fn name(&self) -> &str {
            "first-line"
        }

        async fn chat_with_system(
            &self,
            _system_prompt: Option<&str>,
            message: &str,
            _model: &str,
            _temperature: f64,
        ) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(message.to_string());
            Ok(message.lines().next().unwrap_or_default().to_string())
        }
    }

    fn planner(provider: Arc<FirstLine>) -> SequentialPlanner {
        let backend = AgentBackend {
            provider,
            registry: Arc::new(retriever_registry()),
            model: "test".into(),
            temperature: 0.7,
            max_tool_iterations: 5,
        };
        SequentialPlanner::new(
            backend,
            Arc::new(StaffTable::standard()),
            PersonaGenerator::new(Some(3)),
            RetryPolicy::new(0, Duration::ZERO),
        )
    }

    #[test]
    fn staff_inputs_format_with_upper_keys() {
        let text = format_staff_inputs(&[
            StaffInput {
                role: StaffRole::J2,
                response: "threat".into(),
            },
            StaffInput {
                role: StaffRole::Sja,
                response: "legal".into(),
            },
        ]);
        assert_eq!(
            text,
            "\n### J2_INTELLIGENCE INPUT:\nthreat\n\n### SJA_LEGAL INPUT:\nlegal"
        );
    }

    #[tokio::test]
    async fn full_run_consults_every_section_in_order() {
        let provider = Arc::new(FirstLine {
            prompts: Mutex::new(Vec::new()),
        });
        let mut planner = planner(Arc::clone(&provider));
        let outcome = planner.run("Defend the border.").await.unwrap();

        // 17 + 9 + 7 + 16 + 1 + 10 + 1
        assert_eq!(provider.prompts.lock().unwrap().len(), 61);
        assert_eq!(outcome.mission_analysis.staff_analysis.len(), 15);
        assert_eq!(outcome.coa_development.functional_inputs.len(), 7);
        assert_eq!(outcome.coa_analysis.wargame_inputs.len(), 4);
        assert_eq!(outcome.plan_development.annexes.len(), 9);
        assert_eq!(
            outcome.commander_decision,
            "You must now SELECT the Course of Action."
        );
        assert_eq!(outcome.final_order, "Issue the FINAL OPERATION ORDER.");
    }

    #[tokio::test]
    async fn commander_guidance_sees_staff_and_threat() {
        let provider = Arc::new(FirstLine {
            prompts: Mutex::new(Vec::new()),
        });
        let mut planner = planner(Arc::clone(&provider));
        planner.mission_analysis("Scenario text").await.unwrap();

        let prompts = provider.prompts.lock().unwrap();
        let guidance = prompts.last().unwrap();
        assert!(guidance.contains("### J5_PLANS INPUT:"));
        assert!(guidance.contains(
            "=== J2 THREAT ASSESSMENT ===\nBased on the scenario and your mission analysis"
        ));
    }
}
