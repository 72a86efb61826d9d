/// Event batch wire format.
/// Must stay in sync with the TypeScript side.
///
/// Each frame the runner hands JS one JSON array:
/// ```text
/// [ { "kind": "show_map", "islands": [...] }, { "kind": "timer", "remaining_secs": 42 }, ... ]
/// ```
/// Events appear in emission order. An empty frame is `[]`.

use crate::api::types::GameEvent;

/// Protocol version reported to JS at init.
pub const PROTOCOL_VERSION: u32 = 1;

/// Empty batch, also the fallback if encoding ever fails.
pub const EMPTY_BATCH: &str = "[]";

/// Encode a frame's events for JS.
pub fn encode_events(events: &[GameEvent]) -> String {
    if events.is_empty() {
        return EMPTY_BATCH.to_string();
    }
    serde_json::to_string(events).unwrap_or_else(|err| {
        log::warn!("protocol: dropping {} events: {}", events.len(), err);
        EMPTY_BATCH.to_string()
    })
}
