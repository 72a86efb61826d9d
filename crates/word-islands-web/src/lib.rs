pub mod platform;
pub mod runner;

pub use platform::{JsClock, LocalStorage};
pub use runner::GameRunner;

/// Generate the `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports (game_init, game_tick, input handlers, event batch accessor)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// word_islands_web::export_game!(MyGame, "my-game", MyGame::new());
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `word_islands::Game`
/// - `$game_name`: A string literal used in the initialization log message
/// - `$make`: Expression building the game, evaluated inside `game_init`
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal, $make:expr) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game: $game_type = $make;
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// Events from the last init or tick, as a JSON array.
        #[wasm_bindgen]
        pub fn game_take_events() -> String {
            with_runner(|r| r.events_json().to_string())
        }

        #[wasm_bindgen]
        pub fn game_enter_island(id: &str) {
            match word_islands::Island::from_id(id) {
                Some(island) => {
                    with_runner(|r| r.push_input(word_islands::InputEvent::EnterIsland { island }))
                }
                None => log::warn!("{}: unknown island {:?}", $game_name, id),
            }
        }

        #[wasm_bindgen]
        pub fn game_set_guess(index: u32, text: &str) {
            let text = text.to_string();
            with_runner(|r| {
                r.push_input(word_islands::InputEvent::SetGuess { index: index as usize, text })
            });
        }

        #[wasm_bindgen]
        pub fn game_submit_guess(index: u32, text: &str) {
            let text = text.to_string();
            with_runner(|r| {
                r.push_input(word_islands::InputEvent::SubmitGuess { index: index as usize, text })
            });
        }

        #[wasm_bindgen]
        pub fn game_check_answers() {
            with_runner(|r| r.push_input(word_islands::InputEvent::CheckAnswers));
        }

        #[wasm_bindgen]
        pub fn game_back_to_map() {
            with_runner(|r| r.push_input(word_islands::InputEvent::BackToMap));
        }

        #[wasm_bindgen]
        pub fn game_reset_progress() {
            with_runner(|r| r.push_input(word_islands::InputEvent::ResetProgress));
        }

        #[wasm_bindgen]
        pub fn get_protocol_version() -> u32 {
            word_islands::PROTOCOL_VERSION
        }

        #[wasm_bindgen]
        pub fn get_tick_secs() -> f32 {
            with_runner(|r| r.tick_secs())
        }
    };
}

mod word_islands_game {
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use word_islands::WordIslands;

    use crate::platform::{random_seed, JsClock, LocalStorage};

    crate::export_game!(
        WordIslands<LocalStorage>,
        "word-islands",
        WordIslands::new(LocalStorage::new(), Rc::new(JsClock), random_seed())
    );

    /// Replace the built-in word bank with a catalog manifest.
    /// Returns false (and keeps the current catalog) if the JSON is invalid.
    #[wasm_bindgen]
    pub fn game_load_catalog(json: &str) -> bool {
        with_runner(|r| match r.game_mut().load_catalog_json(json) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("word-islands: catalog rejected: {}", err);
                false
            }
        })
    }
}
