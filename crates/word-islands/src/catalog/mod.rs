// catalog/mod.rs
//
// Static island data: ordering, per-island rules and word lists.
// Island behaviour is pure data here, never code.

pub mod island;
pub mod manifest;
pub mod word_bank;

pub use island::{Island, IslandRule};
pub use manifest::{CatalogManifest, IslandEntry};
pub use word_bank::WordBank;

use std::collections::HashMap;

/// Rule table plus word bank, the two halves of a manifest.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: HashMap<Island, IslandRule>,
    bank: WordBank,
}

impl Catalog {
    /// Islands absent from the manifest keep the built-in rule and get no words.
    pub fn from_manifest(manifest: &CatalogManifest) -> Self {
        let builtin = CatalogManifest::builtin();
        let rules = Island::ALL
            .into_iter()
            .filter_map(|island| {
                manifest
                    .islands
                    .get(&island)
                    .or_else(|| builtin.islands.get(&island))
                    .map(|entry| (island, entry.rule()))
            })
            .collect();
        Self {
            rules,
            bank: WordBank::from_manifest(manifest),
        }
    }

    pub fn builtin() -> Self {
        Self::from_manifest(&CatalogManifest::builtin())
    }

    pub fn rule(&self, island: Island) -> IslandRule {
        self.rules.get(&island).copied().unwrap_or(IslandRule {
            length: 0,
            count: 0,
            time_limit_secs: 0,
        })
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
