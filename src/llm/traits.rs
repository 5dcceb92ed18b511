use super::types::{ContentBlock, MessageRole, ProviderMessage, ProviderResponse};
use crate::tools::ToolSpec;
use async_trait::async_trait;

/// Flatten a message history into labelled plain text for providers that
/// only accept a single prompt string. Tool blocks are dropped.
pub fn messages_to_text(messages: &[ProviderMessage]) -> String {
    messages
        .iter()
        .filter_map(|msg| {
            let label = match msg.role {
                MessageRole::User => "User:",
                MessageRole::Assistant => "Assistant:",
                MessageRole::System => "System:",
            };
            let text: Vec<&str> = msg
                .content
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            (!text.is_empty()).then(|| format!("{label} {}", text.join(" ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider identifier used in logs and errors.
    fn name(&self) -> &str;

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String>;

    /// Chat with structured tool support.
    /// Default: flattens the history to text and ignores the tools.
    async fn chat_with_tools(
        &self,
        system_prompt: Option<&str>,
        messages: &[ProviderMessage],
        _tools: &[ToolSpec],
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<ProviderResponse> {
        let text = messages_to_text(messages);
        let reply = self
            .chat_with_system(system_prompt, &text, model, temperature)
            .await?;
        Ok(ProviderResponse::text_only(reply))
    }

    fn supports_tool_calling(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Provider for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        async fn chat_with_system(
            &self,
            _system_prompt: Option<&str>,
            message: &str,
            _model: &str,
            _temperature: f64,
        ) -> anyhow::Result<String> {
            self.seen.lock().unwrap().push(message.to_string());
            Ok("ack".into())
        }
    }

    #[test]
    fn messages_to_text_skips_tool_blocks() {
        let messages = vec![
            ProviderMessage::user("Brief the threat"),
            ProviderMessage::tool_result("call_1", "stub", false),
            ProviderMessage {
                role: MessageRole::Assistant,
                content: vec![ContentBlock::Text {
                    text: "Enemy has two corps.".into(),
                }],
            },
        ];
        assert_eq!(
            messages_to_text(&messages),
            "User: Brief the threat\nAssistant: Enemy has two corps."
        );
    }

    #[test]
    fn messages_to_text_handles_empty() {
        assert_eq!(messages_to_text(&[]), "");
    }

    #[tokio::test]
    async fn default_chat_with_tools_flattens_history() {
        let provider = Recorder {
            seen: Mutex::new(Vec::new()),
        };
        let resp = provider
            .chat_with_tools(None, &[ProviderMessage::user("hello")], &[], "m", 0.0)
            .await
            .unwrap();
        assert_eq!(resp.text, "ack");
        assert!(!resp.has_tool_use());
        assert_eq!(provider.seen.lock().unwrap().as_slice(), ["User: hello"]);
        assert!(!provider.supports_tool_calling());
    }
}
