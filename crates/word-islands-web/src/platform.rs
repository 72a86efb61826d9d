use word_islands::{Clock, KeyValueStore, MemoryStore};

/// `window.localStorage` with a write-through session cache. When storage is
/// missing (private mode, no window) or a write fails, progress still lasts
/// for the rest of the page session.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
    session: MemoryStore,
}

impl LocalStorage {
    pub fn new() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => Self { storage: Some(storage), session: MemoryStore::new() },
            None => {
                log::warn!("localStorage unavailable, progress will last for this session only");
                Self::detached()
            }
        }
    }

    /// Session-only store with no browser storage behind it.
    fn detached() -> Self {
        Self { storage: None, session: MemoryStore::new() }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.session.get(key) {
            return Some(value);
        }
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.session.set(key, value);
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write to {:?} failed: {:?}", key, err);
        }
    }
}

/// Browser wall clock (`Date.now()`).
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Fresh RNG seed per page load.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use word_islands::{
        EngineContext, Game, InputEvent, InputQueue, Island, ManualClock, Scene, WordIslands,
        PROGRESS_KEY,
    };

    #[test]
    fn detached_store_keeps_session_writes() {
        let mut store = LocalStorage::detached();
        assert_eq!(store.get(PROGRESS_KEY), None);
        store.set(PROGRESS_KEY, "{}");
        assert_eq!(store.get(PROGRESS_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn progress_survives_the_map_reload_without_browser_storage() {
        let clock = Rc::new(ManualClock::new(0));
        let mut game = WordIslands::new(LocalStorage::detached(), clock.clone(), 3);
        let mut ctx = EngineContext::new();
        let mut input = InputQueue::new();
        game.init(&mut ctx);

        let mut send = |game: &mut WordIslands<LocalStorage>, event: InputEvent| {
            input.push(event);
            game.update(&mut ctx, &input);
            input.drain();
        };

        send(&mut game, InputEvent::EnterIsland { island: Island::Earth });
        let targets: Vec<String> = game
            .round()
            .map(|r| r.words().iter().map(|w| w.target.clone()).collect())
            .unwrap_or_default();
        assert!(!targets.is_empty());
        for (index, text) in targets.into_iter().enumerate() {
            send(&mut game, InputEvent::SubmitGuess { index, text });
        }

        // Deferred return to the map reloads progress from storage
        clock.advance_secs(3);
        send(&mut game, InputEvent::CheckAnswers);
        assert!(game.scene().is_map());
        assert_eq!(game.progress().record().unlocked_count, 2);

        send(&mut game, InputEvent::EnterIsland { island: Island::Water });
        assert!(matches!(game.scene(), Scene::Island { island: Island::Water, .. }));
    }
}
