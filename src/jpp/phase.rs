use crate::staff::StaffRole;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The seven Joint Planning Process phases, in execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JppPhase {
    PlanningInitiation,
    MissionAnalysis,
    CoaDevelopment,
    CoaAnalysis,
    CoaComparison,
    CoaApproval,
    PlanDevelopment,
}

pub const ALL_PHASES: [JppPhase; 7] = [
    JppPhase::PlanningInitiation,
    JppPhase::MissionAnalysis,
    JppPhase::CoaDevelopment,
    JppPhase::CoaAnalysis,
    JppPhase::CoaComparison,
    JppPhase::CoaApproval,
    JppPhase::PlanDevelopment,
];

/// Static meeting configuration for one phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseConfig {
    pub name: &'static str,
    pub topic: &'static str,
    pub lead_roles: &'static [StaffRole],
    pub key_outputs: &'static [&'static str],
    pub min_turns: usize,
    pub focus_areas: &'static [&'static str],
    /// Directory name used for per-phase artifacts.
    pub folder: &'static str,
}

const PLANNING_INITIATION: PhaseConfig = PhaseConfig {
    name: "Planning Initiation",
    topic: "Establish planning organization, review strategic guidance, and frame the problem",
    lead_roles: &[StaffRole::J5, StaffRole::J3, StaffRole::J2],
    key_outputs: &[
        "Problem Statement",
        "Planning Timeline",
        "Initial CCIRs",
        "Key Assumptions",
    ],
    min_turns: 15,
    focus_areas: &[
        "Strategic guidance interpretation",
        "Problem framing and operational environment",
        "Planning constraints and restraints",
        "Initial staff organization",
    ],
    folder: "PlanningInitiation",
};

const MISSION_ANALYSIS: PhaseConfig = PhaseConfig {
    name: "Mission Analysis",
    topic: "Analyze the mission, develop facts/assumptions, and produce restated mission",
    lead_roles: &[StaffRole::J2, StaffRole::J3, StaffRole::J5],
    key_outputs: &["METT-TC Analysis", "Restated Mission", "CCIRs", "Assumptions"],
    min_turns: 20,
    focus_areas: &[
        "METT-TC analysis (Mission, Enemy, Terrain, Troops, Time, Civil)",
        "Facts and assumptions",
        "Specified and implied tasks",
        "Constraints and limitations",
        "Restated mission development",
    ],
    folder: "MissionAnalysis",
};

const COA_DEVELOPMENT: PhaseConfig = PhaseConfig {
    name: "COA Development",
    topic: "Develop multiple distinct courses of action",
    lead_roles: &[StaffRole::J5, StaffRole::J3, StaffRole::Fires],
    key_outputs: &["COA Statements", "COA Sketches", "Initial Risk Assessment"],
    min_turns: 25,
    focus_areas: &[
        "Brainstorming operational approaches",
        "Defining main effort and supporting efforts",
        "Phasing and synchronization",
        "Resource requirements per COA",
        "Ensuring COAs are FEASIBLE, ACCEPTABLE, SUITABLE, DISTINGUISHABLE",
    ],
    folder: "COADevelopment",
};

const COA_ANALYSIS: PhaseConfig = PhaseConfig {
    name: "COA Analysis & Wargaming",
    topic: "Wargame each COA against enemy COAs to identify strengths, weaknesses, and modifications",
    lead_roles: &[StaffRole::J2, StaffRole::J3, StaffRole::Fires],
    key_outputs: &[
        "Wargame Results",
        "Decision Points",
        "Critical Events",
        "Modified COAs",
    ],
    min_turns: 25,
    focus_areas: &[
        "Action-reaction-counteraction wargaming",
        "Identifying decision points",
        "Critical events and synchronization",
        "Branches and sequels",
        "Risk identification",
    ],
    folder: "COAAnalysis",
};

const COA_COMPARISON: PhaseConfig = PhaseConfig {
    name: "COA Comparison",
    topic: "Compare COAs against evaluation criteria to identify preferred COA",
    lead_roles: &[StaffRole::J5, StaffRole::J3, StaffRole::Sja],
    key_outputs: &[
        "Comparison Matrix",
        "Advantages/Disadvantages",
        "Staff Recommendation",
    ],
    min_turns: 20,
    focus_areas: &[
        "Evaluation criteria development",
        "Scoring each COA against criteria",
        "Risk comparison",
        "Staff recommendation formulation",
    ],
    folder: "COAComparison",
};

const COA_APPROVAL: PhaseConfig = PhaseConfig {
    name: "COA Approval",
    topic: "Present COAs to commander for decision and approval",
    lead_roles: &[StaffRole::J5, StaffRole::J3, StaffRole::Commander],
    key_outputs: &["Decision Brief", "Commander's Decision", "Refined Intent"],
    min_turns: 15,
    focus_areas: &[
        "Final COA presentation",
        "Risk acceptance discussion",
        "Commander's decision rationale",
        "Refined commander's intent",
    ],
    folder: "COAApproval",
};

const PLAN_DEVELOPMENT: PhaseConfig = PhaseConfig {
    name: "Plan/Order Development",
    topic: "Develop detailed plan or order based on approved COA",
    lead_roles: &[StaffRole::J3, StaffRole::J5, StaffRole::J4],
    key_outputs: &["Draft OPORD", "Annexes Outline", "Synchronization Matrix"],
    min_turns: 25,
    focus_areas: &[
        "OPORD format and content",
        "Annex development by staff section",
        "Synchronization and integration",
        "Transition to execution",
    ],
    folder: "PlanDevelopment",
};

impl JppPhase {
    pub fn config(self) -> &'static PhaseConfig {
        match self {
            Self::PlanningInitiation => &PLANNING_INITIATION,
            Self::MissionAnalysis => &MISSION_ANALYSIS,
            Self::CoaDevelopment => &COA_DEVELOPMENT,
            Self::CoaAnalysis => &COA_ANALYSIS,
            Self::CoaComparison => &COA_COMPARISON,
            Self::CoaApproval => &COA_APPROVAL,
            Self::PlanDevelopment => &PLAN_DEVELOPMENT,
        }
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// 1-based position in the process.
    pub fn number(self) -> usize {
        ALL_PHASES
            .iter()
            .position(|p| *p == self)
            .map_or(0, |idx| idx + 1)
    }

    pub fn next(self) -> Option<Self> {
        ALL_PHASES.get(self.number()).copied()
    }

    /// Phase by 1-based number.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| ALL_PHASES.get(idx))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn phases_are_numbered_in_order() {
        for (idx, phase) in JppPhase::iter().enumerate() {
            assert_eq!(phase.number(), idx + 1);
            assert_eq!(JppPhase::from_number(idx + 1), Some(phase));
        }
        assert_eq!(JppPhase::from_number(0), None);
        assert_eq!(JppPhase::from_number(8), None);
    }

    #[test]
    fn next_walks_the_process() {
        assert_eq!(
            JppPhase::PlanningInitiation.next(),
            Some(JppPhase::MissionAnalysis)
        );
        assert_eq!(JppPhase::PlanDevelopment.next(), None);
    }

    #[test]
    fn every_phase_has_leads_and_a_floor() {
        for phase in ALL_PHASES {
            let config = phase.config();
            assert!((2..=3).contains(&config.lead_roles.len()));
            assert!((15..=25).contains(&config.min_turns));
            assert!(!config.key_outputs.is_empty());
        }
    }

    #[test]
    fn coa_approval_is_led_in_part_by_the_commander() {
        assert!(
            JppPhase::CoaApproval
                .config()
                .lead_roles
                .contains(&StaffRole::Commander)
        );
        assert_eq!(JppPhase::CoaAnalysis.name(), "COA Analysis & Wargaming");
    }
}
