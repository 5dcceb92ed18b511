use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The fifteen functional staff positions.
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
pub enum StaffRole {
    #[serde(rename = "commander")]
    #[strum(serialize = "commander")]
    Commander,
    #[serde(rename = "j1_personnel")]
    #[strum(serialize = "j1_personnel")]
    J1,
    #[serde(rename = "j2_intelligence")]
    #[strum(serialize = "j2_intelligence")]
    J2,
    #[serde(rename = "j3_operations")]
    #[strum(serialize = "j3_operations")]
    J3,
    #[serde(rename = "j4_logistics")]
    #[strum(serialize = "j4_logistics")]
    J4,
    #[serde(rename = "j5_plans")]
    #[strum(serialize = "j5_plans")]
    J5,
    #[serde(rename = "j6_communications")]
    #[strum(serialize = "j6_communications")]
    J6,
    #[serde(rename = "j7_training")]
    #[strum(serialize = "j7_training")]
    J7,
    #[serde(rename = "j8_resources")]
    #[strum(serialize = "j8_resources")]
    J8,
    #[serde(rename = "cyber_ew_oic")]
    #[strum(serialize = "cyber_ew_oic")]
    CyberEw,
    #[serde(rename = "fires_oic")]
    #[strum(serialize = "fires_oic")]
    Fires,
    #[serde(rename = "engineer_oic")]
    #[strum(serialize = "engineer_oic")]
    Engineer,
    #[serde(rename = "protection_oic")]
    #[strum(serialize = "protection_oic")]
    Protection,
    #[serde(rename = "sja_legal")]
    #[strum(serialize = "sja_legal")]
    Sja,
    #[serde(rename = "pao_io")]
    #[strum(serialize = "pao_io")]
    Pao,
}

/// Roles that sit at the staff meeting table, in speaking-priority order.
/// The Commander is absent: it is addressed separately in briefs and guidance.
pub const MEETING_PARTICIPANTS: [StaffRole; 11] = [
    StaffRole::J5,
    StaffRole::J2,
    StaffRole::J3,
    StaffRole::J4,
    StaffRole::J6,
    StaffRole::CyberEw,
    StaffRole::Fires,
    StaffRole::Engineer,
    StaffRole::Protection,
    StaffRole::Sja,
    StaffRole::Pao,
];

impl StaffRole {
    /// Stable snake_case key, e.g. `j2_intelligence`.
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Display label used in transcripts, e.g. `J2 - Intelligence`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Commander => "Commander",
            Self::J1 => "J1 - Personnel",
            Self::J2 => "J2 - Intelligence",
            Self::J3 => "J3 - Operations",
            Self::J4 => "J4 - Logistics",
            Self::J5 => "J5 - Plans",
            Self::J6 => "J6 - Communications",
            Self::J7 => "J7 - Training",
            Self::J8 => "J8 - Resources",
            Self::CyberEw => "Cyber/EW",
            Self::Fires => "Fires",
            Self::Engineer => "Engineer",
            Self::Protection => "Protection",
            Self::Sja => "SJA - Legal",
            Self::Pao => "PAO - Information",
        }
    }

    /// Position title used when addressing the agent in its own prompt.
    pub fn title(self) -> &'static str {
        match self {
            Self::Commander => "Commander",
            Self::J1 => "J1 Personnel Officer",
            Self::J2 => "J2 Intelligence Officer",
            Self::J3 => "J3 Operations Officer",
            Self::J4 => "J4 Logistics Officer",
            Self::J5 => "J5 Plans Officer",
            Self::J6 => "J6 Communications Officer",
            Self::J7 => "J7 Training Officer",
            Self::J8 => "J8 Resources Officer",
            Self::CyberEw => "Cyber/EW Officer in Charge",
            Self::Fires => "Fires Officer in Charge",
            Self::Engineer => "Engineer Officer in Charge",
            Self::Protection => "Protection Officer in Charge",
            Self::Sja => "Staff Judge Advocate",
            Self::Pao => "Public Affairs / IO Officer",
        }
    }

    pub fn is_meeting_participant(self) -> bool {
        MEETING_PARTICIPANTS.contains(&self)
    }
}
