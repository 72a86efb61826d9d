use crate::catalog::island::Island;

/// Input event types the game understands.
/// Pushed by the UI layer; the game never reads widgets directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The player picked an island on the map.
    EnterIsland { island: Island },
    /// Current contents of the input box for word `index`.
    SetGuess { index: usize, text: String },
    /// A guess submitted for word `index` (one-word-at-a-time play).
    SubmitGuess { index: usize, text: String },
    /// Evaluate all current inputs now (Enter key).
    CheckAnswers,
    /// Leave the island for the map.
    BackToMap,
    /// Wipe stored progress (map only).
    ResetProgress,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
