pub mod http_client;
pub mod openai;
pub mod retry;
pub mod scrub;
pub mod traits;
pub mod types;

pub use openai::OpenAiProvider;
pub use retry::{RetryPolicy, invoke_with_retry, is_transient};
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{Provider, messages_to_text};
pub use types::{ContentBlock, MessageRole, ProviderMessage, ProviderResponse, StopReason};
