//! Service identity for each staff officer.
//!
//! With a seed the persona is a pure function of `(seed, role)`: the first
//! bytes of `SHA-256("{seed}:{role_key}")` pick branch, grade and name.
//! Without a seed the thread RNG is used.

use super::role::StaffRole;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Branch {
    #[strum(serialize = "US Army")]
    Army,
    #[strum(serialize = "US Navy")]
    Navy,
    #[strum(serialize = "US Air Force")]
    AirForce,
    #[strum(serialize = "US Marine Corps")]
    MarineCorps,
    #[strum(serialize = "US Space Force")]
    SpaceForce,
}

const BRANCHES: [Branch; 5] = [
    Branch::Army,
    Branch::Navy,
    Branch::AirForce,
    Branch::MarineCorps,
    Branch::SpaceForce,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub grade: &'static str,
    pub abbrev: &'static str,
    pub title: &'static str,
}

const fn rank(grade: &'static str, abbrev: &'static str, title: &'static str) -> Rank {
    Rank {
        grade,
        abbrev,
        title,
    }
}

/// Officer grades O-4 through O-8 for each branch.
const ARMY_RANKS: [Rank; 5] = [
    rank("O-4", "MAJ", "Major"),
    rank("O-5", "LTC", "Lieutenant Colonel"),
    rank("O-6", "COL", "Colonel"),
    rank("O-7", "BG", "Brigadier General"),
    rank("O-8", "MG", "Major General"),
];

const NAVY_RANKS: [Rank; 5] = [
    rank("O-4", "LCDR", "Lieutenant Commander"),
    rank("O-5", "CDR", "Commander"),
    rank("O-6", "CAPT", "Captain"),
    rank("O-7", "RDML", "Rear Admiral"),
    rank("O-8", "RADM", "Rear Admiral"),
];

const AIR_FORCE_RANKS: [Rank; 5] = [
    rank("O-4", "Maj", "Major"),
    rank("O-5", "Lt Col", "Lieutenant Colonel"),
    rank("O-6", "Col", "Colonel"),
    rank("O-7", "Brig Gen", "Brigadier General"),
    rank("O-8", "Maj Gen", "Major General"),
];

const MARINE_RANKS: [Rank; 5] = [
    rank("O-4", "Maj", "Major"),
    rank("O-5", "LtCol", "Lieutenant Colonel"),
    rank("O-6", "Col", "Colonel"),
    rank("O-7", "BGen", "Brigadier General"),
    rank("O-8", "MajGen", "Major General"),
];

impl Branch {
    fn ranks(self) -> &'static [Rank; 5] {
        match self {
            Self::Army => &ARMY_RANKS,
            Self::Navy => &NAVY_RANKS,
            Self::AirForce | Self::SpaceForce => &AIR_FORCE_RANKS,
            Self::MarineCorps => &MARINE_RANKS,
        }
    }

    /// Short description of the service culture an officer brings to the table.
    pub fn culture(self) -> &'static str {
        match self {
            Self::Army => {
                "You bring an Army perspective: land power, sustained ground operations, \
                 mission command, and the conviction that wars are won by controlling terrain \
                 and people."
            }
            Self::Navy => {
                "You bring a Navy perspective: sea control, maritime logistics, distributed \
                 operations at range, and a habit of thinking in terms of fleets, sea lanes, \
                 and time-distance."
            }
            Self::AirForce => {
                "You bring an Air Force perspective: air superiority first, speed and range, \
                 centralized control with decentralized execution, and effects delivered \
                 across the whole theater."
            }
            Self::MarineCorps => {
                "You bring a Marine Corps perspective: expeditionary readiness, combined arms \
                 at the small-unit level, bias for action, and comfort operating in austere \
                 littoral environments."
            }
            Self::SpaceForce => {
                "You bring a Space Force perspective: space domain awareness, PNT and SATCOM \
                 dependencies, and the reminder that every modern operation leans on contested \
                 orbital infrastructure."
            }
        }
    }
}

const FIRST_NAMES: [&str; 32] = [
    "James", "Maria", "Robert", "Jennifer", "Michael", "Linda", "David", "Patricia", "Daniel",
    "Elizabeth", "Marcus", "Sarah", "Anthony", "Karen", "Kevin", "Nicole", "Brian", "Angela",
    "Thomas", "Rachel", "Andre", "Michelle", "Steven", "Laura", "Carlos", "Denise", "Eric",
    "Monica", "Gregory", "Alicia", "Jason", "Teresa",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
    "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson",
    "Baker", "Hall", "Campbell",
];

/// Generated identity attached to one staff role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub branch: Branch,
    pub rank: Rank,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

impl Persona {
    /// "Colonel Jane Smith, US Army"
    pub fn full_designation(&self) -> String {
        format!(
            "{} {} {}, {}",
            self.rank.title, self.first_name, self.last_name, self.branch
        )
    }

    /// "COL Smith"
    pub fn short_designation(&self) -> String {
        format!("{} {}", self.rank.abbrev, self.last_name)
    }

    pub fn culture_description(&self) -> &'static str {
        self.branch.culture()
    }
}

/// Indices into the rank table allowed for a role: flag officers command,
/// field-grade officers staff.
fn grade_range(role: StaffRole) -> std::ops::Range<usize> {
    if role == StaffRole::Commander {
        3..5
    } else {
        0..3
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaGenerator {
    seed: Option<u64>,
}

impl PersonaGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&self, role: StaffRole) -> Persona {
        let grades = grade_range(role);
        let draws = match self.seed {
            Some(seed) => {
                let digest = Sha256::digest(format!("{seed}:{}", role.key()).as_bytes());
                let word = |i: usize| usize::from(u16::from_be_bytes([digest[i], digest[i + 1]]));
                [
                    word(0) % BRANCHES.len(),
                    word(2) % grades.len(),
                    word(4) % FIRST_NAMES.len(),
                    word(6) % LAST_NAMES.len(),
                ]
            }
            None => {
                let mut rng = rand::rng();
                [
                    rng.random_range(0..BRANCHES.len()),
                    rng.random_range(0..grades.len()),
                    rng.random_range(0..FIRST_NAMES.len()),
                    rng.random_range(0..LAST_NAMES.len()),
                ]
            }
        };

        let branch = BRANCHES[draws[0]];
        Persona {
            branch,
            rank: branch.ranks()[grades.start + draws[1]],
            first_name: FIRST_NAMES[draws[2]],
            last_name: LAST_NAMES[draws[3]],
        }
    }
}
