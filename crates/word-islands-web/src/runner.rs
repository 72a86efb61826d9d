use word_islands::{
    encode_events, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
};

/// Generic game runner that wires up the frame loop.
///
/// The exported game keeps a `thread_local!` GameRunner and exposes free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// JSON batch of the events from the last init or frame.
    events_json: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.tick_secs);

        Self {
            game,
            ctx: EngineContext::with_capacity(config.max_events),
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
            events_json: encode_events(&[]),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.timestep = FixedTimestep::new(self.config.tick_secs);
        self.ctx.clear_frame_data();
        self.game.init(&mut self.ctx);
        self.events_json = encode_events(&self.ctx.events);
        self.initialized = true;
    }

    /// Push an input event into the queue. Handled on the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input and due deferred actions, then as
    /// many timer ticks as the elapsed time covers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.tick(&mut self.ctx);
        }

        self.events_json = encode_events(&self.ctx.events);
    }

    pub fn events_json(&self) -> &str {
        &self.events_json
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn tick_secs(&self) -> f32 {
        self.config.tick_secs
    }
}
