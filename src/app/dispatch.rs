use crate::app::artifacts::save_phase_transcripts;
use crate::app::scenario::resolve_scenario;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::ReportError;
use crate::jpp::{
    ALL_PHASES, DialogueTurn, JppPhase, MeetingOrchestrator, PhaseObserver, PhaseResult,
    ReportHeader, render_report,
};
use crate::legacy::{SequentialPlanner, render_planning_output};
use crate::llm::{OpenAiProvider, Provider};
use crate::media::{ImageClient, render_phase_image};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// What to plan and how.
#[derive(Debug, Clone)]
pub struct PlanningRequest {
    pub scenario: String,
    pub operation: String,
    pub phases: Vec<JppPhase>,
    pub legacy: bool,
}

impl PlanningRequest {
    pub fn from_cli(cli: &Cli, scenario: String) -> Self {
        let count = cli.phases.map_or(ALL_PHASES.len(), usize::from);
        Self {
            scenario,
            operation: cli.operation.clone(),
            phases: ALL_PHASES.iter().copied().take(count).collect(),
            legacy: cli.legacy,
        }
    }
}

/// Logs sub-step boundaries and writes each phase's transcripts as soon
/// as it completes.
struct RunObserver<'a> {
    log_root: Option<&'a Path>,
    operation: &'a str,
    phases: &'a [JppPhase],
    completed: usize,
}

impl PhaseObserver for RunObserver<'_> {
    fn on_turn(&mut self, turn: &DialogueTurn) {
        tracing::debug!(speaker = %turn.speaker, role = %turn.role_display, "{}", turn.text);
    }

    fn on_substep(&mut self, step: &str, description: &str) {
        info!(step, "{description}");
    }

    fn on_phase_complete(&mut self, result: &PhaseResult) {
        let phase = self.phases.get(self.completed).copied();
        self.completed += 1;
        let (Some(root), Some(phase)) = (self.log_root, phase) else {
            return;
        };
        if let Err(err) = save_phase_transcripts(root, self.operation, phase, result) {
            tracing::warn!(phase = phase.name(), error = %err, "Could not save transcripts");
        }
    }
}

/// Run the requested planner and return the rendered text report.
pub async fn run_planning(
    config: &Config,
    provider: Arc<dyn Provider>,
    request: &PlanningRequest,
) -> Result<String> {
    if request.legacy {
        info!("Running sequential planner");
        let mut planner = SequentialPlanner::from_config(config, provider);
        let outcome = planner.run(&request.scenario).await?;
        return Ok(render_planning_output(&outcome));
    }

    let run_id = uuid::Uuid::new_v4().to_string();
    info!(
        run_id = %run_id,
        operation = %request.operation,
        phases = request.phases.len(),
        "Joint planning initiated"
    );

    let log_root = config
        .output
        .save_transcripts
        .then_some(config.output.log_dir.as_path());
    let mut observer = RunObserver {
        log_root,
        operation: &request.operation,
        phases: &request.phases,
        completed: 0,
    };
    let mut orchestrator = MeetingOrchestrator::from_config(config, provider);
    let results = orchestrator
        .run_all_phases(&request.scenario, &request.phases, &mut observer)
        .await?;

    if config.image.enabled {
        render_images(config, &request.operation, &request.phases, &results).await;
    }

    let header = ReportHeader {
        operation: &request.operation,
        run_id: &run_id,
        generated_at: chrono::Local::now(),
        scenario: &request.scenario,
    };
    Ok(render_report(&header, &results))
}

async fn render_images(
    config: &Config,
    operation: &str,
    phases: &[JppPhase],
    results: &[PhaseResult],
) {
    let client = match ImageClient::from_config(&config.image) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "Image generation unavailable, skipping infographics");
            return;
        }
    };
    for (&phase, result) in phases.iter().zip(results) {
        render_phase_image(&client, phase, result, operation, &config.output.log_dir).await;
    }
}

fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, report).map_err(|err| ReportError::Write {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
            eprintln!("\nOutput written to: {}", path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}

/// Resolve the scenario, build the provider, plan, and emit the report.
pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let scenario = resolve_scenario(cli.scenario.as_deref(), cli.scenario_file.as_deref())?;
    let provider: Arc<dyn Provider> = Arc::new(OpenAiProvider::from_config(&config)?);
    let request = PlanningRequest::from_cli(&cli, scenario);

    let report = run_planning(&config, provider, &request).await?;
    write_report(&report, cli.output.as_deref())
}
