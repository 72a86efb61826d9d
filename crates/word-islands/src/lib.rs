pub mod api;
pub mod app;
pub mod bridge;
pub mod catalog;
pub mod core;
pub mod input;
pub mod progress;
pub mod round;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{GameEvent, IslandStatus, RoundId};
pub use app::WordIslands;
pub use bridge::protocol::{encode_events, PROTOCOL_VERSION};
pub use catalog::{Catalog, CatalogManifest, Island, IslandRule, WordBank};
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::{Deferred, FixedTimestep};
pub use input::queue::{InputEvent, InputQueue};
pub use progress::{CompletionRecorder, KeyValueStore, MemoryStore, ProgressRecord, ProgressStore, PROGRESS_KEY};
pub use round::{GuessResult, RoundController, RoundPhase, RoundWord};
