use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::progress::record::PROGRESS_KEY;

/// Configuration for the runner and game, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seconds between timer ticks (default: 1).
    pub tick_secs: f32,
    /// Pause between a round ending and the automatic return to the map.
    pub return_to_map_delay_ms: u64,
    /// Key the progress record is stored under.
    pub storage_key: String,
    /// Expected upper bound of events per frame (buffer capacity hint).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_secs: 1.0,
            return_to_map_delay_ms: 2_000,
            storage_key: PROGRESS_KEY.to_string(),
            max_events: 64,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and announce the first scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame step: consume queued input and fire due deferred actions.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Fixed-cadence step (once per `tick_secs`).
    fn tick(&mut self, ctx: &mut EngineContext);
}

/// Mutable access to runner state, passed to every `Game` hook.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_capacity(GameConfig::default().max_events)
    }

    pub fn with_capacity(max_events: usize) -> Self {
        Self {
            events: Vec::with_capacity(max_events),
        }
    }

    /// Emit a game event to be forwarded to the presentation layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand over everything emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
