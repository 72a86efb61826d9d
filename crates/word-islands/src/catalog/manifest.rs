use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::catalog::island::{Island, IslandRule};

/// Word lists and round rules for every island.
/// Loaded from a JSON file at runtime, or taken from the built-in set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub islands: BTreeMap<Island, IslandEntry>,
}

/// One island's rule plus its candidate words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IslandEntry {
    /// Required word length (0 or absent = any length).
    #[serde(default)]
    pub length: usize,
    /// Words per round.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seconds per round.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u32,
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_count() -> usize {
    5
}

fn default_time_limit() -> u32 {
    60
}

impl IslandEntry {
    pub fn rule(&self) -> IslandRule {
        IslandRule {
            length: self.length,
            count: self.count,
            time_limit_secs: self.time_limit_secs,
        }
    }
}

fn entry(length: usize, count: usize, time_limit_secs: u32, words: &[&str]) -> IslandEntry {
    IslandEntry {
        length,
        count,
        time_limit_secs,
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The shipped word bank. Pools hold more words than a round draws so
    /// replays differ.
    pub fn builtin() -> Self {
        let mut islands = BTreeMap::new();
        islands.insert(
            Island::Earth,
            entry(5, 5, 60, &[
                "plant", "rocks", "stone", "dirt", "moss", "roots", "grass", "mines", "field",
            ]),
        );
        islands.insert(
            Island::Water,
            entry(6, 5, 75, &[
                "oceanic", "current", "bubble", "whales", "trouts", "stream", "rivers", "tide",
                "shores",
            ]),
        );
        islands.insert(
            Island::Wind,
            entry(6, 5, 90, &[
                "breeze", "gusty", "draft", "whirl", "zephyr", "galeon", "whoosh", "stormy",
                "hollow",
            ]),
        );
        islands.insert(
            Island::Fire,
            entry(9, 5, 120, &[
                "volcanoes", "scorching", "pyromania", "campfires", "inferno", "lightning",
                "combusted",
            ]),
        );
        islands.insert(
            Island::Elemental,
            entry(7, 5, 150, &[
                "element", "essence", "balance", "harmony", "tempest", "crystal", "eclipse",
                "thunder",
            ]),
        );
        Self { islands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "islands": {
                "earth": { "length": 3, "count": 3, "time_limit_secs": 60, "words": ["cat", "dog", "ant"] }
            }
        }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        assert_eq!(manifest.islands.len(), 1);
        let earth = &manifest.islands[&Island::Earth];
        assert_eq!(earth.rule(), IslandRule { length: 3, count: 3, time_limit_secs: 60 });
        assert_eq!(earth.words, vec!["cat", "dog", "ant"]);
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let json = r#"{ "islands": { "wind": { "words": ["gust"] } } }"#;
        let manifest = CatalogManifest::from_json(json).unwrap();
        let rule = manifest.islands[&Island::Wind].rule();
        assert_eq!(rule.length, 0);
        assert_eq!(rule.count, 5);
        assert_eq!(rule.time_limit_secs, 60);
    }

    #[test]
    fn unknown_island_is_rejected() {
        let json = r#"{ "islands": { "lava": { "words": [] } } }"#;
        assert!(CatalogManifest::from_json(json).is_err());
    }

    #[test]
    fn builtin_pools_cover_their_rounds() {
        let manifest = CatalogManifest::builtin();
        assert_eq!(manifest.islands.len(), Island::COUNT);
        for (island, entry) in &manifest.islands {
            let rule = entry.rule();
            let fitting = entry.words.iter().filter(|w| rule.accepts(w)).count();
            assert!(fitting >= rule.count, "{:?} only has {} usable words", island, fitting);
        }
    }
}
