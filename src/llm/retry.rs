use crate::config::ReliabilityConfig;
use crate::error::{ImageError, LlmError, TransportKind};
use std::future::Future;
use std::time::Duration;

/// Image API statuses that are retried.
const RETRYABLE_IMAGE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Lower-cased fragments that mark an error message as a network hiccup.
const TRANSIENT_MARKERS: [&str; 7] = [
    "timeout",
    "connectionerror",
    "remoteprotocolerror",
    "peer closed connection",
    "incomplete chunked read",
    "connection reset",
    "network",
];

/// Exponential backoff settings for one call site.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}

impl From<&ReliabilityConfig> for RetryPolicy {
    fn from(config: &ReliabilityConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(config.initial_backoff_ms),
        )
    }
}

/// Whether `err` is worth retrying.
///
/// Timeouts, connect and body failures are retried on their kind alone and
/// provider API errors never are. Everything else, including transport
/// errors of kind `Other`, falls back to message matching over the whole
/// context chain.
pub fn is_transient(err: &anyhow::Error) -> bool {
    for cause in err.chain() {
        if let Some(llm) = cause.downcast_ref::<LlmError>() {
            match llm {
                LlmError::Transport { kind, .. } if *kind != TransportKind::Other => return true,
                LlmError::Api { .. } => return false,
                LlmError::Transport { .. }
                | LlmError::EmptyResponse { .. }
                | LlmError::Malformed { .. } => break,
            }
        }
        if let Some(image) = cause.downcast_ref::<ImageError>() {
            return match image {
                ImageError::Api { status, .. } => RETRYABLE_IMAGE_STATUSES.contains(status),
                ImageError::Transport(_) => true,
                ImageError::MissingData(_) | ImageError::Decode(_) => false,
            };
        }
        if let Some(req) = cause.downcast_ref::<reqwest::Error>()
            && (req.is_timeout() || req.is_connect() || req.is_body())
        {
            return true;
        }
    }

    let text = format!("{err:#}").to_ascii_lowercase();
    TRANSIENT_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Run `call` until it succeeds, retrying transient failures with doubling
/// delay. Permanent failures and the last transient failure are returned
/// unchanged.
pub async fn invoke_with_retry<T, F, Fut>(
    policy: RetryPolicy,
    label: &str,
    mut call: F,
) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 0;

    loop {
        match call().await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!(call = label, attempt, "Call recovered after retries");
                }
                return Ok(value);
            }
            Err(err) => {
                if attempt >= policy.max_retries || !is_transient(&err) {
                    return Err(err);
                }
                attempt += 1;
                tracing::warn!(
                    call = label,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
            }
        }
    }
}
