use anyhow::{Context, Result};
use std::path::Path;

pub const DEFAULT_SCENARIO: &str = "
SITUATION: A near-peer adversary (Country X) has massed approximately 150,000 troops
along the eastern border of Allied Nation Y, a NATO member. Intelligence indicates:

- 3x Combined Arms Armies with tank and motorized rifle divisions
- Significant artillery and rocket forces in forward positions
- Air defense umbrella established with S-400 and Pantsir systems
- Electronic warfare and cyber units actively probing allied networks
- Naval forces exercising in the adjacent sea, including amphibious capability
- Strategic messaging campaign underway to justify potential intervention

Allied Nation Y has limited defensive capability: 2 brigade combat teams, aging air force,
and limited air defense. NATO Article 5 would be invoked if attacked.

JFC has been directed to develop options for:
1. Deterrence operations to prevent invasion
2. Defensive operations if deterrence fails
3. Options for defeating adversary forces and restoring territorial integrity

Constraints: No first use of nuclear weapons. Minimize civilian casualties.
Operations must remain within allied territory unless attack occurs.

Time available for planning: 48 hours
";

/// Scenario text from a file, inline text, or the demonstration default,
/// in that order of preference.
pub fn resolve_scenario(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()));
    }
    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        return Ok(text.to_string());
    }
    eprintln!("No scenario provided. Using default demonstration scenario.\n");
    Ok(DEFAULT_SCENARIO.to_string())
}
