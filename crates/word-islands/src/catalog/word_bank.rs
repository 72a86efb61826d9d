use std::collections::HashMap;

use crate::catalog::island::{Island, IslandRule};
use crate::catalog::manifest::CatalogManifest;

/// Read-only candidate words per island, built from a `CatalogManifest`.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: HashMap<Island, Vec<String>>,
}

impl WordBank {
    /// Build a bank from a parsed manifest. Words are stored trimmed and lowercase.
    pub fn from_manifest(manifest: &CatalogManifest) -> Self {
        let mut words = HashMap::with_capacity(manifest.islands.len());
        for (island, entry) in &manifest.islands {
            let list = entry
                .words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            words.insert(*island, list);
        }
        Self { words }
    }

    /// All words for an island (empty when the island has none).
    pub fn words(&self, island: Island) -> &[String] {
        self.words.get(&island).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Words usable under `rule`, in bank order.
    pub fn pool(&self, island: Island, rule: &IslandRule) -> Vec<String> {
        self.words(island)
            .iter()
            .filter(|w| rule.accepts(w))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> WordBank {
        let json = r#"{
            "islands": {
                "earth": { "words": ["Stone ", "moss", "plant", ""] }
            }
        }"#;
        WordBank::from_manifest(&CatalogManifest::from_json(json).unwrap())
    }

    #[test]
    fn words_are_normalized() {
        assert_eq!(bank().words(Island::Earth), ["stone", "moss", "plant"]);
    }

    #[test]
    fn missing_island_is_empty() {
        assert!(bank().words(Island::Fire).is_empty());
    }

    #[test]
    fn pool_filters_by_length() {
        let rule = IslandRule { length: 5, count: 2, time_limit_secs: 30 };
        assert_eq!(bank().pool(Island::Earth, &rule), vec!["stone", "plant"]);
    }
}
