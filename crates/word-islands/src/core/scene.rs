use crate::api::types::RoundId;
use crate::catalog::island::Island;

/// The one scene currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Map,
    Island { island: Island, round: RoundId },
}

impl Scene {
    pub fn is_map(&self) -> bool {
        matches!(self, Scene::Map)
    }

    /// Whether this scene is showing the given round.
    pub fn shows_round(&self, id: RoundId) -> bool {
        matches!(self, Scene::Island { round, .. } if *round == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::Map
    }
}
