use super::persona::Persona;
use super::role::StaffRole;
use super::table::StaffProfile;
use crate::llm::{ContentBlock, MessageRole, Provider, ProviderMessage, ProviderResponse};
use crate::tools::{ToolRegistry, ToolSpec};
use anyhow::Context;
use std::sync::Arc;

/// Absolute upper bound on tool-loop iterations, regardless of configuration.
pub(crate) const TOOL_LOOP_HARD_CAP: u32 = 25;

/// Shared handles every agent is built from.
#[derive(Clone)]
pub struct AgentBackend {
    pub provider: Arc<dyn Provider>,
    pub registry: Arc<ToolRegistry>,
    pub model: String,
    pub temperature: f64,
    pub max_tool_iterations: u32,
}

/// One staff officer: a role, a persona, and a tool-using LLM wrapper.
pub struct StaffAgent {
    role: StaffRole,
    persona: Persona,
    system_prompt: String,
    tools: Vec<ToolSpec>,
    backend: AgentBackend,
}

impl StaffAgent {
    pub fn new(
        role: StaffRole,
        persona: Persona,
        profile: &StaffProfile,
        backend: AgentBackend,
    ) -> Self {
        let system_prompt = format!(
            "{}\n\nYOUR IDENTITY:\nYou are {}, serving as the {}. {}",
            profile.system_prompt,
            persona.full_designation(),
            role.title(),
            persona.culture_description()
        );
        let tools = backend.registry.specs_for(&profile.tool_names());
        Self {
            role,
            persona,
            system_prompt,
            tools,
            backend,
        }
    }

    pub fn role(&self) -> StaffRole {
        self.role
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.backend.provider
    }

    pub fn model(&self) -> &str {
        &self.backend.model
    }

    /// Run `input` through the agent and return its final text.
    ///
    /// Providers with tool calling get a bounded loop: each requested
    /// retriever runs and its output is fed back until the model answers in
    /// plain text or the iteration cap is reached. Other providers get a
    /// single plain completion.
    pub async fn invoke(&self, input: &str) -> anyhow::Result<String> {
        self.invoke_at(input, self.backend.temperature).await
    }

    pub async fn invoke_at(&self, input: &str, temperature: f64) -> anyhow::Result<String> {
        let provider = &self.backend.provider;
        if self.tools.is_empty() || !provider.supports_tool_calling() {
            return provider
                .chat_with_system(
                    Some(&self.system_prompt),
                    input,
                    &self.backend.model,
                    temperature,
                )
                .await
                .with_context(|| format!("{} completion failed", self.role.key()));
        }

        let max_iterations = self.backend.max_tool_iterations.min(TOOL_LOOP_HARD_CAP);
        let mut messages = vec![ProviderMessage::user(input)];
        let mut iteration = 0;

        loop {
            if iteration >= max_iterations {
                tracing::debug!(role = %self.role, iteration, "Tool loop hit iteration cap");
                return Ok(extract_last_text(&messages));
            }

            let response = provider
                .chat_with_tools(
                    Some(&self.system_prompt),
                    &messages,
                    &self.tools,
                    &self.backend.model,
                    temperature,
                )
                .await
                .with_context(|| format!("{} completion failed", self.role.key()))?;
            messages.push(response.to_assistant_message());
            iteration += 1;

            if !response.has_tool_use() {
                return Ok(response.text);
            }
            self.execute_tool_calls(&response, &mut messages).await;
        }
    }

    async fn execute_tool_calls(
        &self,
        response: &ProviderResponse,
        messages: &mut Vec<ProviderMessage>,
    ) {
        for (id, name, input) in response.tool_calls() {
            tracing::debug!(role = %self.role, tool = name, "Agent requested tool");
            let (content, is_error) = match self.backend.registry.execute(name, input.clone()).await
            {
                Ok(result) => (result.as_model_text().to_string(), !result.success),
                Err(e) => (format!("Tool error: {e:#}"), true),
            };
            messages.push(ProviderMessage::tool_result(id, content, is_error));
        }
    }
}

impl std::fmt::Debug for StaffAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaffAgent")
            .field("role", &self.role)
            .field("persona", &self.persona.short_designation())
            .field("tools", &self.tools.len())
            .finish_non_exhaustive()
    }
}

/// Text of the most recent assistant message, or empty.
fn extract_last_text(messages: &[ProviderMessage]) -> String {
    messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::Assistant)
        .map(|m| {
            m.content
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
