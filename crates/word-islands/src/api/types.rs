use serde::Serialize;

use crate::catalog::island::Island;

/// Identifies one play-through of an island. Deferred actions carry it so a
/// stale action can recognise that its round is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoundId(pub u32);

/// Availability of one island on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IslandStatus {
    pub island: Island,
    pub name: String,
    pub unlocked: bool,
    pub completed: bool,
}

/// A request from the game logic to the presentation layer.
/// Serialized as `{"kind": "...", ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// Navigate to the map and draw these islands.
    ShowMap { islands: Vec<IslandStatus> },
    /// Navigate to an island round with its scrambled words, in input order.
    ShowIsland {
        island: Island,
        name: String,
        time_limit_secs: u32,
        scrambled: Vec<String>,
    },
    /// Countdown display update.
    Timer { remaining_secs: u32 },
    /// Hide the input and label of a solved word.
    WordSolved { index: usize },
    /// Short status text for the player.
    Feedback { text: String },
    /// The active round reached a terminal state.
    RoundEnded { island: Island, success: bool },
    /// The persisted record changed.
    ProgressChanged {
        unlocked_count: usize,
        completed: Vec<Island>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kind_tag() {
        let json = serde_json::to_string(&GameEvent::WordSolved { index: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"word_solved","index":2}"#);

        let json = serde_json::to_string(&GameEvent::RoundEnded {
            island: Island::Water,
            success: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"round_ended","island":"water","success":true}"#);
    }

    #[test]
    fn status_serializes_island_id() {
        let status = IslandStatus {
            island: Island::Earth,
            name: "Earth".to_string(),
            unlocked: true,
            completed: false,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"island":"earth","name":"Earth","unlocked":true,"completed":false}"#
        );
    }
}
