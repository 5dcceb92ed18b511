use super::http_client::build_provider_client;
use super::scrub::{api_error, scrub_secret_patterns};
use super::traits::Provider;
use super::types::{ContentBlock, MessageRole, ProviderMessage, ProviderResponse, StopReason};
use crate::config::Config;
use crate::error::{ConfigError, LlmError};
use crate::tools::ToolSpec;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROVIDER: &str = "openai";

/// Chat-completions client for OpenAI and compatible endpoints.
pub struct OpenAiProvider {
    /// Pre-computed `"Bearer <key>"` header value.
    auth_header: String,
    endpoint: String,
    max_tokens: Option<u32>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<OpenAiTool>>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

impl Message {
    fn text(role: &'static str, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_call_id: None,
            tool_calls: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct OpenAiTool {
    r#type: &'static str,
    function: OpenAiFunction,
}

#[derive(Debug, Serialize)]
struct OpenAiFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiToolCall {
    id: String,
    r#type: String,
    function: OpenAiToolCallFunction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiToolCallFunction {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64, max_tokens: Option<u32>) -> Self {
        Self {
            auth_header: format!("Bearer {api_key}"),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            max_tokens,
            client: build_provider_client(timeout_secs),
        }
    }

    /// Build from config; a missing key is a configuration error, not a
    /// provider failure.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey {
                provider: PROVIDER,
                env_var: "OPENAI_API_KEY",
            })?;
        Ok(Self::new(
            api_key,
            &config.base_url,
            config.request_timeout_secs,
            Some(config.max_tokens),
        ))
    }

    fn build_request(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system_prompt {
            messages.push(Message::text("system", sys));
        }
        messages.push(Message::text("user", message));

        ChatRequest {
            model: model.to_string(),
            messages,
            temperature,
            max_tokens: self.max_tokens,
            tools: None,
        }
    }

    fn map_provider_message(provider_message: &ProviderMessage) -> Vec<Message> {
        let mut text_parts = Vec::new();
        let mut tool_calls = Vec::new();
        let mut tool_messages = Vec::new();

        for block in &provider_message.content {
            match block {
                ContentBlock::Text { text } => text_parts.push(text.as_str()),
                ContentBlock::ToolUse { id, name, input } => tool_calls.push(OpenAiToolCall {
                    id: id.clone(),
                    r#type: "function".to_string(),
                    function: OpenAiToolCallFunction {
                        name: name.clone(),
                        arguments: input.to_string(),
                    },
                }),
                ContentBlock::ToolResult {
                    tool_use_id,
                    content,
                    ..
                } => tool_messages.push(Message {
                    role: "tool",
                    content: Some(content.clone()),
                    tool_call_id: Some(tool_use_id.clone()),
                    tool_calls: None,
                }),
            }
        }

        let text = (!text_parts.is_empty()).then(|| text_parts.join("\n"));
        let mut messages = Vec::new();
        match provider_message.role {
            MessageRole::Assistant => {
                if text.is_some() || !tool_calls.is_empty() {
                    messages.push(Message {
                        role: "assistant",
                        content: text,
                        tool_call_id: None,
                        tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
                    });
                }
            }
            MessageRole::User => messages.extend(text.map(|t| Message::text("user", t))),
            MessageRole::System => messages.extend(text.map(|t| Message::text("system", t))),
        }
        messages.extend(tool_messages);
        messages
    }

    fn build_tools_request(
        &self,
        system_prompt: Option<&str>,
        messages: &[ProviderMessage],
        tools: &[ToolSpec],
        model: &str,
        temperature: f64,
    ) -> ChatRequest {
        let mut openai_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system_prompt {
            openai_messages.push(Message::text("system", sys));
        }
        for provider_message in messages {
            openai_messages.extend(Self::map_provider_message(provider_message));
        }

        let tools = (!tools.is_empty()).then(|| {
            tools
                .iter()
                .map(|tool| OpenAiTool {
                    r#type: "function",
                    function: OpenAiFunction {
                        name: tool.name.clone(),
                        description: tool.description.clone(),
                        parameters: tool.parameters.clone(),
                    },
                })
                .collect()
        });

        ChatRequest {
            model: model.to_string(),
            messages: openai_messages,
            temperature,
            max_tokens: self.max_tokens,
            tools,
        }
    }

    fn map_finish_reason(finish_reason: Option<&str>) -> StopReason {
        match finish_reason {
            Some("stop") => StopReason::EndTurn,
            Some("tool_calls") => StopReason::ToolUse,
            Some("length") => StopReason::MaxTokens,
            Some(_) | None => StopReason::Error,
        }
    }

    fn parse_tool_calls(tool_calls: Vec<OpenAiToolCall>) -> anyhow::Result<Vec<ContentBlock>> {
        tool_calls
            .into_iter()
            .map(|call| {
                let input: Value = serde_json::from_str(&call.function.arguments).map_err(|e| {
                    LlmError::Malformed {
                        provider: PROVIDER.into(),
                        message: format!(
                            "tool call arguments for {} were not valid JSON: {e}",
                            call.function.name
                        ),
                    }
                })?;
                Ok(ContentBlock::ToolUse {
                    id: call.id,
                    name: call.function.name,
                    input,
                })
            })
            .collect()
    }

    async fn send(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.auth_header)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::from_reqwest(PROVIDER, &e))?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER, response).await.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LlmError::from_reqwest(PROVIDER, &e))?;
        let parsed = serde_json::from_slice(&body)
            .map_err(|e| LlmError::Malformed {
                provider: PROVIDER.into(),
                message: e.to_string(),
            })
            .context("OpenAI response JSON decode failed")?;
        Ok(parsed)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String> {
        let request = self.build_request(system_prompt, message, model, temperature);
        let response = self.send(&request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                LlmError::EmptyResponse {
                    provider: PROVIDER.into(),
                }
                .into()
            })
    }

    async fn chat_with_tools(
        &self,
        system_prompt: Option<&str>,
        messages: &[ProviderMessage],
        tools: &[ToolSpec],
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<ProviderResponse> {
        let request = self.build_tools_request(system_prompt, messages, tools, model, temperature);
        let response = self.send(&request).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                provider: PROVIDER.into(),
            })?;

        let text = scrub_secret_patterns(&choice.message.content.unwrap_or_default()).into_owned();
        let mut content_blocks =
            Self::parse_tool_calls(choice.message.tool_calls.unwrap_or_default())?;
        if !text.is_empty() {
            content_blocks.insert(0, ContentBlock::Text { text: text.clone() });
        }

        let mut provider_response = ProviderResponse::text_only(text);
        if let Some(usage) = response.usage {
            provider_response =
                provider_response.with_usage(usage.prompt_tokens, usage.completion_tokens);
        }
        if let Some(api_model) = response.model {
            provider_response = provider_response.with_model(api_model);
        }
        provider_response.content_blocks = content_blocks;
        provider_response.stop_reason =
            Some(Self::map_finish_reason(choice.finish_reason.as_deref()));
        Ok(provider_response)
    }

    fn supports_tool_calling(&self) -> bool {
        true
    }
}
