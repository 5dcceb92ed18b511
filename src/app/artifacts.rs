//! Per-phase markdown written next to the infographics.

use crate::error::ReportError;
use crate::jpp::{JppPhase, PhaseResult, render_transcript};
use crate::media::phase_dir;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const MEETING_FILE: &str = "Staff_Meeting_Transcript.md";
pub const BRIEF_FILE: &str = "Commander_Brief_Transcript.md";
pub const GUIDANCE_FILE: &str = "Commander_Guidance.md";

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|err| ReportError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

pub fn meeting_markdown(result: &PhaseResult) -> String {
    let mut out = format!("# {} - Staff Meeting\n\n", result.phase_name);
    out.push_str(&result.meeting.transcript);
    out.push('\n');
    if !result.meeting.decisions.is_empty() {
        out.push_str("\n## Key Decisions\n\n");
        for decision in &result.meeting.decisions {
            let _ = writeln!(out, "- {decision}");
        }
    }
    out
}

pub fn guidance_markdown(result: &PhaseResult) -> String {
    let guidance = &result.guidance;
    let mut out = format!(
        "# {} - Commander's Guidance\n\n{}\n",
        result.phase_name,
        guidance.guidance_text.trim()
    );
    if !guidance.priority_tasks.is_empty() {
        out.push_str("\n## Priority Tasks\n\n");
        for (idx, task) in guidance.priority_tasks.iter().enumerate() {
            let _ = writeln!(out, "{}. {task}", idx + 1);
        }
    }
    if !guidance.guidance_by_section.is_empty() {
        out.push_str("\n## Guidance by Section\n\n");
        for (section, text) in &guidance.guidance_by_section {
            let _ = writeln!(out, "- **{}**: {text}", section.to_uppercase());
        }
    }
    out
}

/// Write meeting, brief and guidance markdown for one phase; returns the
/// files written.
pub fn save_phase_transcripts(
    log_root: &Path,
    operation: &str,
    phase: JppPhase,
    result: &PhaseResult,
) -> Result<Vec<PathBuf>, ReportError> {
    let dir = phase_dir(log_root, operation, phase)?;
    let brief = format!(
        "# {} - Commander Brief\n\n{}\n",
        result.phase_name,
        render_transcript(&result.brief.turns)
    );

    let files = [
        (MEETING_FILE, meeting_markdown(result)),
        (BRIEF_FILE, brief),
        (GUIDANCE_FILE, guidance_markdown(result)),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = dir.join(name);
        write_file(&path, &contents)?;
        written.push(path);
    }
    tracing::debug!(phase = phase.name(), dir = %dir.display(), "Saved phase transcripts");
    Ok(written)
}
