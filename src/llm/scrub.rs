use crate::error::LlmError;
use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Token prefixes of the keys this tool handles (OpenAI and Google).
const KEY_PREFIXES: [&str; 3] = ["sk-", "AIza", "ya29."];

/// Markers after which the following token is a credential.
const KEY_MARKERS: [&str; 6] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "x-goog-api-key: ",
    "api_key=",
    "key=",
    "\"api_key\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '/' | '=')
}

fn redact_after(scrubbed: &mut String, marker: &str) {
    let mut from = 0;
    while let Some(rel) = scrubbed[from..].find(marker) {
        let start = from + rel;
        let value_start = start + marker.len();
        let value_len: usize = scrubbed[value_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .map(char::len_utf8)
            .sum();

        if value_len == 0 {
            from = value_start;
            continue;
        }

        scrubbed.replace_range(start..value_start + value_len, REDACTED);
        from = start + REDACTED.len();
    }
}

/// Replace API keys and bearer tokens in `input` with `[REDACTED]`.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let hit = KEY_PREFIXES
        .iter()
        .chain(KEY_MARKERS.iter())
        .any(|p| input.contains(p));
    if !hit {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for pattern in KEY_PREFIXES.iter().chain(KEY_MARKERS.iter()) {
        redact_after(&mut scrubbed, pattern);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and cap the length of a provider error body.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);
    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }
    let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
    format!("{truncated}...")
}

/// Build an [`LlmError::Api`] from a non-success HTTP response.
pub async fn api_error(provider: &str, response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read provider error body>".to_string());
    LlmError::Api {
        provider: provider.to_string(),
        status,
        message: sanitize_api_error(&body),
    }
}
