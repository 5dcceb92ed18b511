use super::planner::PlanningOutcome;
use std::fmt::Write;

const RULE: &str = "================================================================================";
const HASH_RULE: &str =
    "################################################################################";

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "\n{RULE}\n{title:^80}\n{RULE}\n{body}");
}

/// Banner-formatted plan summary ending with the final operation order.
pub fn render_planning_output(outcome: &PlanningOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HASH_RULE}");
    let _ = writeln!(out, "#{:^78}#", "PROJECT WARGATE");
    let _ = writeln!(out, "#{:^78}#", "JOINT STAFF OPERATIONAL PLANNING OUTPUT");
    let _ = writeln!(out, "{HASH_RULE}");

    section(
        &mut out,
        "MISSION ANALYSIS SUMMARY",
        &outcome.mission_analysis.commander_guidance,
    );
    section(
        &mut out,
        "THREAT ASSESSMENT",
        &outcome.mission_analysis.threat_assessment,
    );
    section(
        &mut out,
        "COURSES OF ACTION DEVELOPED",
        &outcome.coa_development.concepts,
    );
    section(
        &mut out,
        "COA ANALYSIS (WARGAMING)",
        &format!(
            "=== RED TEAM ANALYSIS ===\n{}\n\n=== LEGAL REVIEW ===\n{}",
            outcome.coa_analysis.red_team, outcome.coa_analysis.legal_review
        ),
    );
    section(&mut out, "COA COMPARISON", &outcome.coa_comparison.synthesis);
    section(&mut out, "COMMANDER'S DECISION", &outcome.commander_decision);
    section(&mut out, "FINAL OPERATION ORDER", &outcome.final_order);

    let _ = writeln!(out, "\n{HASH_RULE}");
    let _ = writeln!(out, "#{:^78}#", "END OF PLANNING OUTPUT");
    let _ = writeln!(out, "{HASH_RULE}");
    out
}
