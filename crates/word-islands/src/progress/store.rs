use crate::api::types::IslandStatus;
use crate::catalog::island::Island;
use crate::progress::record::{ProgressRecord, PROGRESS_KEY};
use crate::progress::storage::KeyValueStore;

/// Receiver of successful round completions.
pub trait CompletionRecorder {
    fn record_completion(&mut self, island: Island) -> ProgressRecord;
}

/// Unlock count after `island` is completed, given the new completed total.
///
/// The capstone opens everything; otherwise finishing k distinct islands opens
/// slot k+1. Never lowers the current count.
pub fn unlocked_after(current: usize, completed_count: usize, island: Island) -> usize {
    if island == Island::CAPSTONE {
        return Island::COUNT;
    }
    current.max(completed_count + 1).min(Island::COUNT)
}

/// Owns the progress record and keeps it in sync with storage.
pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    key: String,
    record: ProgressRecord,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PROGRESS_KEY)
    }

    /// Store reading and writing under a custom key.
    pub fn with_key(storage: S, key: &str) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            record: ProgressRecord::default(),
        };
        store.load();
        store
    }

    /// Re-read the stored record. Missing or malformed values yield the defaults.
    pub fn load(&mut self) -> ProgressRecord {
        self.record = match self.storage.get(&self.key) {
            Some(raw) => ProgressRecord::from_json(&raw).unwrap_or_else(|| {
                log::warn!("progress: stored value under {:?} is malformed, starting fresh", self.key);
                ProgressRecord::default()
            }),
            None => ProgressRecord::default(),
        };
        self.record.clone()
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn is_unlocked(&self, island: Island) -> bool {
        self.record.is_unlocked(island)
    }

    /// Map view data: one entry per island, in unlock order.
    pub fn statuses(&self) -> Vec<IslandStatus> {
        Island::ALL
            .into_iter()
            .map(|island| IslandStatus {
                island,
                name: island.name().to_string(),
                unlocked: self.record.is_unlocked(island),
                completed: self.record.is_completed(island),
            })
            .collect()
    }

    /// Overwrite stored progress with the defaults.
    pub fn reset(&mut self) -> ProgressRecord {
        self.record = ProgressRecord::default();
        self.persist();
        log::info!("progress: reset");
        self.record.clone()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        match self.record.to_json() {
            Ok(json) => self.storage.set(&self.key, &json),
            Err(err) => log::warn!("progress: could not encode record: {}", err),
        }
    }
}

impl<S: KeyValueStore> CompletionRecorder for ProgressStore<S> {
    fn record_completion(&mut self, island: Island) -> ProgressRecord {
        self.record.completed.insert(island);
        self.record.unlocked_count = unlocked_after(
            self.record.unlocked_count,
            self.record.completed_count(),
            island,
        );
        self.persist();
        log::info!(
            "progress: completed {}, {} of {} islands unlocked",
            island.id(),
            self.record.unlocked_count,
            Island::COUNT
        );
        self.record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::storage::MemoryStore;

    fn stored(store: &ProgressStore<MemoryStore>) -> ProgressRecord {
        let raw = store.storage().get(PROGRESS_KEY).expect("record should be stored");
        ProgressRecord::from_json(&raw).unwrap()
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let store = ProgressStore::new(MemoryStore::new());
        assert_eq!(*store.record(), ProgressRecord::default());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn malformed_storage_loads_defaults() {
        let store = ProgressStore::new(MemoryStore::with_value(PROGRESS_KEY, "{oops"));
        assert_eq!(*store.record(), ProgressRecord::default());
    }

    #[test]
    fn existing_progress_is_loaded() {
        let raw = r#"{"unlockedIslands":3,"completedIslands":["earth","water"]}"#;
        let store = ProgressStore::new(MemoryStore::with_value(PROGRESS_KEY, raw));
        assert!(store.is_unlocked(Island::Wind));
        assert!(!store.is_unlocked(Island::Fire));
    }

    #[test]
    fn completion_unlocks_next_and_persists() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let record = store.record_completion(Island::Earth);
        assert_eq!(record.unlocked_count, 2);
        assert_eq!(stored(&store), record);
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn completing_twice_is_idempotent() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.record_completion(Island::Earth);
        let record = store.record_completion(Island::Earth);
        assert_eq!(record.completed_count(), 1);
        assert_eq!(record.unlocked_count, 2);
        assert_eq!(stored(&store).completed_count(), 1);
        // Every call still rewrites storage
        assert_eq!(store.storage().writes(), 2);
    }

    #[test]
    fn capstone_unlocks_everything() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let record = store.record_completion(Island::Elemental);
        assert_eq!(record.unlocked_count, Island::COUNT);
        for island in Island::ALL {
            assert!(store.is_unlocked(island));
        }
    }

    #[test]
    fn unlocks_never_decrease() {
        let raw = r#"{"unlockedIslands":4,"completedIslands":[]}"#;
        let mut store = ProgressStore::new(MemoryStore::with_value(PROGRESS_KEY, raw));
        let sequence = [
            Island::Earth,
            Island::Earth,
            Island::Fire,
            Island::Water,
            Island::Wind,
            Island::Earth,
        ];
        let mut last = store.record().unlocked_count;
        for island in sequence {
            let now = store.record_completion(island).unlocked_count;
            assert!(now >= last, "{} dropped to {}", last, now);
            assert!(now <= Island::COUNT);
            last = now;
        }
        assert_eq!(last, Island::COUNT);
    }

    #[test]
    fn unlocks_never_decrease_for_any_short_sequence() {
        let mut sequences: Vec<Vec<Island>> = vec![Vec::new()];
        let mut frontier = sequences.clone();
        for _ in 0..4 {
            frontier = frontier
                .iter()
                .flat_map(|seq| {
                    Island::ALL.into_iter().map(move |island| {
                        let mut next = seq.clone();
                        next.push(island);
                        next
                    })
                })
                .collect();
            sequences.extend(frontier.iter().cloned());
        }
        assert_eq!(sequences.len(), 1 + 5 + 25 + 125 + 625);

        for sequence in &sequences {
            let mut store = ProgressStore::new(MemoryStore::new());
            let mut last = store.record().unlocked_count;
            for &island in sequence {
                let now = store.record_completion(island).unlocked_count;
                assert!(now >= last, "{:?}: {} dropped to {}", sequence, last, now);
                assert!(now <= Island::COUNT);
                last = now;
            }
        }
    }

    #[test]
    fn unlock_rule_table() {
        assert_eq!(unlocked_after(1, 1, Island::Earth), 2);
        assert_eq!(unlocked_after(2, 2, Island::Water), 3);
        assert_eq!(unlocked_after(5, 1, Island::Earth), 5);
        assert_eq!(unlocked_after(4, 4, Island::Fire), 5);
        assert_eq!(unlocked_after(1, 1, Island::Elemental), 5);
    }

    #[test]
    fn statuses_follow_record() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.record_completion(Island::Earth);
        let statuses = store.statuses();
        assert_eq!(statuses.len(), Island::COUNT);
        assert!(statuses[0].unlocked && statuses[0].completed);
        assert!(statuses[1].unlocked && !statuses[1].completed);
        assert!(!statuses[2].unlocked);
        assert_eq!(statuses[4].name, "Elemental");
    }

    #[test]
    fn reset_restores_defaults_in_storage() {
        let mut store = ProgressStore::new(MemoryStore::new());
        store.record_completion(Island::Elemental);
        store.reset();
        assert_eq!(stored(&store), ProgressRecord::default());
    }

    #[test]
    fn custom_key_is_respected() {
        let mut store = ProgressStore::with_key(MemoryStore::new(), "alt");
        store.record_completion(Island::Earth);
        assert!(store.storage().get("alt").is_some());
        assert!(store.storage().get(PROGRESS_KEY).is_none());
    }
}
