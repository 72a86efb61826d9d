use serde::{Deserialize, Serialize};

/// The fixed, ordered set of islands. Unlocking proceeds in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Island {
    Earth,
    Water,
    Wind,
    Fire,
    Elemental,
}

impl Island {
    pub const ALL: [Island; 5] = [
        Island::Earth,
        Island::Water,
        Island::Wind,
        Island::Fire,
        Island::Elemental,
    ];

    /// Completing this island unlocks everything.
    pub const CAPSTONE: Island = Island::Elemental;

    pub const COUNT: usize = Self::ALL.len();

    /// Position in the unlock order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in persisted progress and on the JS side.
    pub fn id(self) -> &'static str {
        match self {
            Island::Earth => "earth",
            Island::Water => "water",
            Island::Wind => "wind",
            Island::Fire => "fire",
            Island::Elemental => "elemental",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|island| island.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Island::Earth => "Earth",
            Island::Water => "Water",
            Island::Wind => "Wind",
            Island::Fire => "Fire",
            Island::Elemental => "Elemental",
        }
    }
}

/// Per-island round parameters. Static data, never mutated during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandRule {
    /// Exact character count a word needs to enter the pool (0 = any length).
    pub length: usize,
    /// Words drawn per round.
    pub count: usize,
    /// Round duration in whole seconds.
    pub time_limit_secs: u32,
}

impl IslandRule {
    pub fn accepts(&self, word: &str) -> bool {
        self.length == 0 || word.chars().count() == self.length
    }
}
