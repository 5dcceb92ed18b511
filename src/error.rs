use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for WARGATE.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum WargateError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Image generation ────────────────────────────────────────────────
    #[error("image: {0}")]
    Image(#[from] ImageError),

    // ── Report / artifacts ──────────────────────────────────────────────
    #[error("report: {0}")]
    Report(#[from] ReportError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{provider} API key not configured (set {env_var})")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

/// Which part of the HTTP exchange failed before a response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Body,
    Other,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("provider {provider} network error ({kind:?}): {message}")]
    Transport {
        provider: String,
        kind: TransportKind,
        message: String,
    },

    #[error("provider {provider} returned no content")]
    EmptyResponse { provider: String },

    #[error("malformed response from {provider}: {message}")]
    Malformed { provider: String, message: String },
}

impl LlmError {
    /// Map a `reqwest` failure onto a transport error for `provider`.
    pub fn from_reqwest(provider: &str, err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportKind::Body
        } else {
            TransportKind::Other
        };
        Self::Transport {
            provider: provider.to_string(),
            kind,
            message: source_chain(err),
        }
    }
}

/// `err` and every error in its `source()` chain, joined with `": "`.
///
/// `reqwest` keeps the useful part ("connection closed before message
/// completed") in the sources, not in its own message.
pub fn source_chain(err: &dyn std::error::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(cause) = current {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        current = cause.source();
    }
    parts.join(": ")
}

// ─── Image generation errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("image request failed: {0}")]
    Transport(String),

    #[error("no image data in response: {0}")]
    MissingData(&'static str),

    #[error("image payload is not valid base64: {0}")]
    Decode(String),
}

// ─── Report errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WargateError>;
