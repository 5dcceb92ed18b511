use crate::error::ReportError;
use crate::jpp::JppPhase;
use std::path::{Path, PathBuf};

pub const INFOGRAPHIC_FILE: &str = "Phase_Summary_Infographic.png";

/// Runs of non-alphanumerics become one `_`; leading and trailing `_` are
/// dropped. An empty result falls back to `Operation`.
pub fn sanitize_operation_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "Operation".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<log_root>/<sanitized operation>/<PhaseFolder>`, created if missing.
pub fn phase_dir(log_root: &Path, operation: &str, phase: JppPhase) -> Result<PathBuf, ReportError> {
    let dir = log_root
        .join(sanitize_operation_name(operation))
        .join(phase.config().folder);
    std::fs::create_dir_all(&dir).map_err(|err| ReportError::Write {
        path: dir.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(dir)
}

pub fn save_phase_image(
    image: &[u8],
    log_root: &Path,
    operation: &str,
    phase: JppPhase,
) -> Result<PathBuf, ReportError> {
    let path = phase_dir(log_root, operation, phase)?.join(INFOGRAPHIC_FILE);
    std::fs::write(&path, image).map_err(|err| ReportError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    tracing::info!(path = %path.display(), bytes = image.len(), "Saved phase infographic");
    Ok(path)
}
