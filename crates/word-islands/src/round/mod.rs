pub mod controller;
pub mod matching;
pub mod scramble;

pub use controller::{GuessResult, RoundController, RoundPhase, RoundWord};
pub use matching::{is_match, normalize};
pub use scramble::{sample_without_replacement, scramble};
