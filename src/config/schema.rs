use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub persona_seed: Option<u64>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub reliability: ReliabilityConfig,

    #[serde(default)]
    pub meeting: MeetingConfig,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_model() -> String {
    "gpt-4.1".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            persona_seed: None,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            reliability: ReliabilityConfig::default(),
            meeting: MeetingConfig::default(),
            agent: AgentConfig::default(),
            image: ImageConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        for (name, value) in [
            ("temperature", self.temperature),
            ("meeting.dialogue_temperature", self.meeting.dialogue_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be within 0.0..=2.0 (got {value})"
                )));
            }
        }
        if self.meeting.context_window_turns == 0 {
            return Err(ConfigError::Validation(
                "meeting.context_window_turns must be at least 1".into(),
            ));
        }
        if self.agent.max_tool_iterations == 0 {
            return Err(ConfigError::Validation(
                "agent.max_tool_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    2_000
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingConfig {
    /// Temperature used for staff dialogue (more varied speech than products)
    #[serde(default = "default_dialogue_temperature")]
    pub dialogue_temperature: f64,
    /// Pause after each turn callback, for live renderers
    #[serde(default)]
    pub turn_delay_ms: u64,
    #[serde(default = "default_context_window_turns")]
    pub context_window_turns: usize,
    #[serde(default = "default_slide_transcript_chars")]
    pub slide_transcript_chars: usize,
    #[serde(default = "default_guidance_transcript_chars")]
    pub guidance_transcript_chars: usize,
    #[serde(default = "default_brief_summary_turns")]
    pub brief_summary_turns: usize,
    #[serde(default = "default_brief_excerpt_chars")]
    pub brief_excerpt_chars: usize,
    #[serde(default = "default_max_decisions")]
    pub max_decisions: usize,
    #[serde(default = "default_max_priority_tasks")]
    pub max_priority_tasks: usize,
    #[serde(default = "default_phase_digest_chars")]
    pub phase_digest_chars: usize,
}

fn default_dialogue_temperature() -> f64 {
    0.8
}

fn default_context_window_turns() -> usize {
    10
}

fn default_slide_transcript_chars() -> usize {
    8_000
}

fn default_guidance_transcript_chars() -> usize {
    4_000
}

fn default_brief_summary_turns() -> usize {
    6
}

fn default_brief_excerpt_chars() -> usize {
    200
}

fn default_max_decisions() -> usize {
    10
}

fn default_max_priority_tasks() -> usize {
    8
}

fn default_phase_digest_chars() -> usize {
    3_000
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            dialogue_temperature: default_dialogue_temperature(),
            turn_delay_ms: 0,
            context_window_turns: default_context_window_turns(),
            slide_transcript_chars: default_slide_transcript_chars(),
            guidance_transcript_chars: default_guidance_transcript_chars(),
            brief_summary_turns: default_brief_summary_turns(),
            brief_excerpt_chars: default_brief_excerpt_chars(),
            max_decisions: default_max_decisions(),
            max_priority_tasks: default_max_priority_tasks(),
            phase_digest_chars: default_phase_digest_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_max_tool_iterations")]
    pub max_tool_iterations: u32,
}

fn default_max_tool_iterations() -> u32 {
    5
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tool_iterations: default_max_tool_iterations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    /// "gemini-2.5-flash-image" | "gemini-3-pro-image-preview"
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_image_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".into()
}

fn default_image_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

fn default_aspect_ratio() -> String {
    "16:9".into()
}

fn default_image_timeout_secs() -> u64 {
    60
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: default_image_model(),
            base_url: default_image_base_url(),
            aspect_ratio: default_aspect_ratio(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            timeout_secs: default_image_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_true")]
    pub save_transcripts: bool,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("wargate_logs")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            save_transcripts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.meeting.context_window_turns, 10);
        assert_eq!(config.meeting.slide_transcript_chars, 8_000);
        assert_eq!(config.reliability.max_retries, 3);
        assert_eq!(config.agent.max_tool_iterations, 5);
        assert!(!config.image.enabled);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
model = "gpt-4o"
persona_seed = 42

[meeting]
turn_delay_ms = 300
"#,
        )
        .unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.persona_seed, Some(42));
        assert_eq!(config.meeting.turn_delay_ms, 300);
        assert_eq!(config.meeting.guidance_transcript_chars, 4_000);
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = Config {
            temperature: 2.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_context_window() {
        let mut config = Config::default();
        config.meeting.context_window_turns = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("context_window_turns"));
    }
}
