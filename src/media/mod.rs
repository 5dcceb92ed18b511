//! Optional phase infographics: prompt building, the image API client and
//! on-disk layout.

pub mod client;
pub mod infographic;
pub mod storage;

pub use client::ImageClient;
pub use infographic::{InfographicContent, PhaseDelta, infographic_prompt};
pub use storage::{INFOGRAPHIC_FILE, phase_dir, sanitize_operation_name, save_phase_image};

use crate::jpp::{JppPhase, PhaseResult};
use std::path::{Path, PathBuf};

/// Generate and save the infographic for one phase.
///
/// Failures are logged and swallowed: images never abort a planning run.
pub async fn render_phase_image(
    client: &ImageClient,
    phase: JppPhase,
    result: &PhaseResult,
    operation: &str,
    log_root: &Path,
) -> Option<PathBuf> {
    let prompt = infographic_prompt(&InfographicContent::from_phase(result), operation);
    let image = match client.generate(&prompt).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(phase = phase.name(), error = %format!("{err:#}"), "Infographic generation failed");
            return None;
        }
    };
    match save_phase_image(&image, log_root, operation, phase) {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!(phase = phase.name(), error = %err, "Infographic could not be saved");
            None
        }
    }
}
