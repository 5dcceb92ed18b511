#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use wargate::Config;
use wargate::jpp::{DialogueTurn, PhaseObserver, PhaseResult};
use wargate::llm::Provider;
use wargate::utils::truncate_chars;

/// Replies `"ECHO: "` plus the first 20 characters of every prompt.
#[derive(Default)]
pub struct EchoProvider {
    pub calls: AtomicUsize,
    pub systems: Mutex<Vec<Option<String>>>,
}

impl EchoProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        _model: &str,
        _temperature: f64,
    ) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.systems
            .lock()
            .unwrap()
            .push(system_prompt.map(str::to_string));
        Ok(format!("ECHO: {}", truncate_chars(message, 20)))
    }
}

/// Numbers every reply `<<reply N>>` and keeps each prompt it receives.
#[derive(Default)]
pub struct CapturingProvider {
    pub messages: Mutex<Vec<String>>,
}

impl CapturingProvider {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for CapturingProvider {
    fn name(&self) -> &str {
        "capture"
    }

    async fn chat_with_system(
        &self,
        _system_prompt: Option<&str>,
        message: &str,
        _model: &str,
        _temperature: f64,
    ) -> anyhow::Result<String> {
        let mut messages = self.messages.lock().unwrap();
        messages.push(message.to_string());
        Ok(format!("<<reply {}>>", messages.len()))
    }
}

/// Records every observer callback.
#[derive(Default)]
pub struct RecordingObserver {
    pub turns: Vec<DialogueTurn>,
    pub substeps: Vec<(String, String)>,
    pub completed: Vec<String>,
}

impl PhaseObserver for RecordingObserver {
    fn on_turn(&mut self, turn: &DialogueTurn) {
        self.turns.push(turn.clone());
    }

    fn on_substep(&mut self, step: &str, description: &str) {
        self.substeps.push((step.to_string(), description.to_string()));
    }

    fn on_phase_complete(&mut self, result: &PhaseResult) {
        self.completed.push(result.phase_name.clone());
    }
}

/// Deterministic personas, no pacing, artifacts under `log_dir`.
pub fn test_config(log_dir: &std::path::Path) -> Config {
    let mut config = Config {
        api_key: Some("sk-test".into()),
        persona_seed: Some(42),
        ..Config::default()
    };
    config.meeting.turn_delay_ms = 0;
    config.output.log_dir = log_dir.to_path_buf();
    config
}
