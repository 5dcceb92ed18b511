use crate::config::Config;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// `WARGATE` - joint staff planning with LLM-driven staff officers.
#[derive(Parser, Debug)]
#[command(name = "wargate")]
#[command(version)]
#[command(about = "Simulate a joint staff working a scenario through the Joint Planning Process.", long_about = None)]
#[command(group(ArgGroup::new("input").args(["scenario", "scenario_file"])))]
#[command(group(ArgGroup::new("verbosity").args(["quiet", "verbose"])))]
pub struct Cli {
    /// Scenario text
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Read the scenario from a file
    #[arg(short = 'f', long)]
    pub scenario_file: Option<PathBuf>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long, value_parser = parse_temperature)]
    pub temperature: Option<f64>,

    /// Seed for reproducible staff personas
    #[arg(long)]
    pub persona_seed: Option<u64>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every turn and staff response
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the final report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use the sequential six-phase planner instead of staff meetings
    #[arg(long)]
    pub legacy: bool,

    /// Run only the first N planning phases (1-7)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    pub phases: Option<u8>,

    /// Operation name used in the report and artifact folders
    #[arg(long, default_value = "Operation WARGATE")]
    pub operation: String,

    /// Generate a summary infographic per phase (needs GEMINI_API_KEY)
    #[arg(long)]
    pub images: bool,
}

fn parse_temperature(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be within 0.0..=2.0 (got {value})"))
    }
}

impl Cli {
    /// CLI flags win over file and environment values.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(seed) = self.persona_seed {
            config.persona_seed = Some(seed);
        }
        if self.images {
            config.image.enabled = true;
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::WARN
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
