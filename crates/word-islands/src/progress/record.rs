use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::catalog::island::Island;

/// Storage key the progress record lives under.
pub const PROGRESS_KEY: &str = "wordIslandProgress";

/// Unlock and completion state that outlives a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    /// Islands with `index < unlocked_count` can be entered. Always in 1..=Island::COUNT.
    pub unlocked_count: usize,
    /// Islands finished successfully at least once.
    pub completed: BTreeSet<Island>,
}

/// Wire shape of the stored value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedProgress {
    unlocked_islands: u32,
    #[serde(default)]
    completed_islands: Vec<String>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            unlocked_count: 1,
            completed: BTreeSet::new(),
        }
    }
}

impl ProgressRecord {
    /// Parse a stored value. `None` means the value is unusable and the caller
    /// should start from defaults.
    ///
    /// Out-of-range counts are clamped and unknown island ids are dropped.
    pub fn from_json(json: &str) -> Option<Self> {
        let persisted: PersistedProgress = serde_json::from_str(json).ok()?;
        let mut completed = BTreeSet::new();
        for id in &persisted.completed_islands {
            match Island::from_id(id) {
                Some(island) => {
                    completed.insert(island);
                }
                None => log::warn!("progress: dropping unknown island id {:?}", id),
            }
        }
        Some(Self {
            unlocked_count: (persisted.unlocked_islands as usize).clamp(1, Island::COUNT),
            completed,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let persisted = PersistedProgress {
            unlocked_islands: self.unlocked_count as u32,
            completed_islands: self.completed.iter().map(|i| i.id().to_string()).collect(),
        };
        serde_json::to_string(&persisted)
    }

    pub fn is_unlocked(&self, island: Island) -> bool {
        island.index() < self.unlocked_count
    }

    pub fn is_completed(&self, island: Island) -> bool {
        self.completed.contains(&island)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
