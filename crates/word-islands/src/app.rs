use std::rc::Rc;

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{GameEvent, RoundId};
use crate::catalog::{Catalog, CatalogManifest, Island};
use crate::core::clock::Clock;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::Deferred;
use crate::input::queue::{InputEvent, InputQueue};
use crate::progress::storage::KeyValueStore;
use crate::progress::store::ProgressStore;
use crate::round::controller::{RoundController, RoundPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    ReturnToMap { round: RoundId },
}

/// Word Islands: the map scene and the island scene sharing one progress store.
pub struct WordIslands<S: KeyValueStore> {
    config: GameConfig,
    catalog: Catalog,
    progress: ProgressStore<S>,
    clock: Rc<dyn Clock>,
    rng: Rng,
    scene: Scene,
    round: Option<RoundController>,
    next_round: u32,
    deferred: Deferred<DeferredAction>,
}

impl<S: KeyValueStore> WordIslands<S> {
    pub fn new(storage: S, clock: Rc<dyn Clock>, seed: u64) -> Self {
        Self::with_config(storage, clock, seed, GameConfig::default())
    }

    pub fn with_config(storage: S, clock: Rc<dyn Clock>, seed: u64, config: GameConfig) -> Self {
        Self {
            progress: ProgressStore::with_key(storage, &config.storage_key),
            config,
            catalog: Catalog::builtin(),
            clock,
            rng: Rng::new(seed),
            scene: Scene::Map,
            round: None,
            next_round: 1,
            deferred: Deferred::new(),
        }
    }

    /// Replace the word bank and rules. Takes effect from the next round.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = CatalogManifest::from_json(json)?;
        self.set_catalog(Catalog::from_manifest(&manifest));
        Ok(())
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn round(&self) -> Option<&RoundController> {
        self.round.as_ref()
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    fn show_map(&mut self, ctx: &mut EngineContext) {
        self.scene = Scene::Map;
        self.round = None;
        self.progress.load();
        ctx.emit_event(GameEvent::ShowMap { islands: self.progress.statuses() });
    }

    fn enter_island(&mut self, island: Island, ctx: &mut EngineContext) {
        if !self.scene.is_map() {
            log::debug!("enter {}: not on the map, ignored", island.id());
            return;
        }
        if !self.progress.is_unlocked(island) {
            log::debug!("enter {}: island is locked, ignored", island.id());
            return;
        }

        let id = RoundId(self.next_round);
        self.next_round += 1;
        let rule = self.catalog.rule(island);
        let round = RoundController::start(
            id,
            island,
            rule,
            self.catalog.bank(),
            self.clock.clone(),
            &mut self.rng,
        );
        ctx.emit_event(GameEvent::ShowIsland {
            island,
            name: island.name().to_string(),
            time_limit_secs: rule.time_limit_secs,
            scrambled: round.scrambled(),
        });
        self.scene = Scene::Island { island, round: id };
        self.round = Some(round);
    }

    /// Run `step` against the active round and schedule the trip back to the
    /// map if it just ended.
    fn with_round<F>(&mut self, ctx: &mut EngineContext, step: F)
    where
        F: FnOnce(&mut RoundController, &mut EngineContext, &mut ProgressStore<S>),
    {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let was_active = round.phase() == RoundPhase::Active;
        step(round, ctx, &mut self.progress);
        if was_active && round.is_finished() {
            let due = self.clock.now_ms() + self.config.return_to_map_delay_ms;
            self.deferred.schedule(due, DeferredAction::ReturnToMap { round: round.id() });
        }
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        match event {
            InputEvent::EnterIsland { island } => self.enter_island(*island, ctx),
            InputEvent::SetGuess { index, text } => {
                if let Some(round) = self.round.as_mut() {
                    round.set_input(*index, text);
                }
            }
            InputEvent::SubmitGuess { index, text } => {
                self.with_round(ctx, |round, ctx, progress| {
                    round.submit_guess(*index, text, ctx, progress);
                });
            }
            InputEvent::CheckAnswers => {
                self.with_round(ctx, |round, ctx, progress| {
                    round.check_answers(ctx, progress);
                });
            }
            InputEvent::BackToMap => {
                if !self.scene.is_map() {
                    self.show_map(ctx);
                }
            }
            InputEvent::ResetProgress => {
                if self.scene.is_map() {
                    self.progress.reset();
                    ctx.emit_event(GameEvent::ShowMap { islands: self.progress.statuses() });
                }
            }
        }
    }

    fn fire_deferred(&mut self, ctx: &mut EngineContext) {
        for action in self.deferred.take_due(self.clock.now_ms()) {
            match action {
                DeferredAction::ReturnToMap { round } => {
                    // The player may already have left on their own
                    if self.scene.shows_round(round) {
                        self.show_map(ctx);
                    }
                }
            }
        }
    }
}

impl<S: KeyValueStore> Game for WordIslands<S> {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.show_map(ctx);
        log::info!(
            "word islands: {} of {} islands unlocked",
            self.progress.record().unlocked_count,
            Island::COUNT
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_input(event, ctx);
        }
        self.fire_deferred(ctx);
    }

    fn tick(&mut self, ctx: &mut EngineContext) {
        self.with_round(ctx, |round, ctx, progress| {
            round.tick(ctx, progress);
        });
    }
}
