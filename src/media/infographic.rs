//! Turns a finished phase into an image prompt for a one-slide summary.

use crate::jpp::PhaseResult;
use crate::utils::truncate_chars;

const COA_KEYWORDS: [&str; 2] = ["COA", "COURSE"];

/// What a phase contributed, reduced to short strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseDelta {
    pub what_learned: String,
    pub what_changed: String,
    pub tensions: String,
    pub coas: String,
}

impl PhaseDelta {
    /// Decisions are what was learned, slide titles what changed, and the
    /// Commander's questions the open tensions. COA material comes from
    /// slides whose title names a COA.
    pub fn from_phase(result: &PhaseResult) -> Self {
        let coas = result
            .slides
            .iter()
            .filter(|slide| is_coa_text(&slide.title))
            .flat_map(|slide| slide.bullets.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            what_learned: result.meeting.decisions.join("; "),
            what_changed: result
                .slides
                .iter()
                .map(|slide| slide.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            tensions: result.brief.questions_asked.join(" / "),
            coas,
        }
    }
}

fn is_coa_text(text: &str) -> bool {
    let upper = text.to_uppercase();
    COA_KEYWORDS.iter().any(|k| upper.contains(k))
}

/// Structured infographic content for one phase.
#[derive(Debug, Clone, Default)]
pub struct InfographicContent {
    pub phase: String,
    pub key_insights: String,
    pub evolution: String,
    pub risks_tensions: String,
    pub coas: String,
    pub is_coa_phase: bool,
    pub priority_tasks: Vec<String>,
    pub commander_direction: String,
}

impl InfographicContent {
    pub fn from_phase(result: &PhaseResult) -> Self {
        let delta = PhaseDelta::from_phase(result);
        Self {
            phase: result.phase_name.clone(),
            key_insights: delta.what_learned,
            evolution: delta.what_changed,
            risks_tensions: delta.tensions,
            coas: delta.coas,
            is_coa_phase: is_coa_text(&result.phase_name),
            priority_tasks: result.guidance.priority_tasks.iter().take(4).cloned().collect(),
            commander_direction: truncate_chars(&result.guidance.guidance_text, 200).to_string(),
        }
    }
}

const COA_INSTRUCTIONS: &str = "
IMPORTANT FOR THIS COA PHASE:
- Give prominent visual treatment to the COURSES OF ACTION section
- Each COA should be clearly distinguishable (use numbered boxes or columns)
- Highlight any recommended or approved COA with a distinct visual indicator
";

pub fn infographic_prompt(content: &InfographicContent, operation: &str) -> String {
    let detail_len = if content.is_coa_phase { 150 } else { 100 };
    let mut bullets = Vec::new();

    if content.is_coa_phase && !content.coas.is_empty() {
        bullets.push(format!(
            "COURSES OF ACTION: {}",
            truncate_chars(&content.coas, 300)
        ));
    }
    if !content.key_insights.is_empty() {
        bullets.push(format!(
            "KEY INSIGHT: {}",
            truncate_chars(&content.key_insights, detail_len)
        ));
    }
    if !content.evolution.is_empty() {
        bullets.push(format!(
            "EVOLUTION: {}",
            truncate_chars(&content.evolution, detail_len)
        ));
    }
    if !content.risks_tensions.is_empty() {
        bullets.push(format!(
            "RISKS: {}",
            truncate_chars(&content.risks_tensions, 100)
        ));
    }
    if !content.priority_tasks.is_empty() {
        let tasks: Vec<&str> = content
            .priority_tasks
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        bullets.push(format!("PRIORITY TASKS: {}", tasks.join(", ")));
    }
    if !content.commander_direction.is_empty() {
        bullets.push(format!(
            "CMDR DIRECTION: {}",
            truncate_chars(&content.commander_direction, 80)
        ));
    }

    let bullets_text = bullets
        .iter()
        .map(|b| format!("- {b}"))
        .collect::<Vec<_>>()
        .join("\n");
    let coa_instructions = if content.is_coa_phase {
        COA_INSTRUCTIONS
    } else {
        ""
    };
    let phase = &content.phase;

    format!(
        "Create a clean, professional military briefing infographic.

STYLE REQUIREMENTS:
- Clean government/military briefing style
- Dark professional background (navy blue or charcoal)
- Light text for readability
- Simple geometric icons (no complex graphics)
- 16:9 aspect ratio (widescreen slide format)
- Bold, clear typography
- Organized in 3-4 distinct sections/boxes
{coa_instructions}
CONTENT TO DISPLAY:

HEADER:
\"{operation}\" - Phase: {phase}

MAIN CONTENT (render as separate boxes/sections):
{bullets_text}

FOOTER:
\"Project WARGATE - Joint Planning Process\"

Make it look like a professional military staff briefing slide - simple, clear, and authoritative.
Use military-style visual language: clean lines, structured layout, minimal decoration.
Text should be clearly readable. Use icons sparingly to represent concepts."
    )
}
