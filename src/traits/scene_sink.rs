use glam::Vec3;

use crate::animation::{KeyframeSequence, Transform};
use crate::math::Color;

/// A token the host should create.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSpawn {
    /// Ground-plane position of the token's cell.
    pub position: Vec3,
    pub color: Color,
    /// Pose to show when there is no animation.
    pub rest: Transform,
    /// Landing animation, absent for tokens that are already on the board at start.
    pub animation: Option<KeyframeSequence>,
}

/// Host rendering engine - receives requests for visible entities
pub trait SceneSink {
    /// Whether token mesh data has finished loading.
    /// Spawn requests are held back until this returns true.
    fn is_ready(&self) -> bool {
        true
    }

    /// Create a token entity
    fn spawn_token(&mut self, token: TokenSpawn);

    /// Show the "board complete" message
    fn show_completion_message(&mut self);
}

/// Sink that records every request, for headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub ready: bool,
    pub spawned: Vec<TokenSpawn>,
    pub completion_messages: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    /// Sink whose token mesh is still loading.
    pub fn loading() -> Self {
        Self::default()
    }
}

impl SceneSink for RecordingSink {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn spawn_token(&mut self, token: TokenSpawn) {
        self.spawned.push(token);
    }

    fn show_completion_message(&mut self) {
        self.completion_messages += 1;
    }
}
