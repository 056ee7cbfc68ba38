//! Per-tick game events for the presentation layer
//!
//! Events accumulate inside the engine during `tick` and command execution
//! and are drained by collaborators once per frame. Emission is a plain
//! `Vec::push`, so a slow subscriber can never stall the simulation; the
//! haptics layer reacts to [`GameEvent::PlayerDamaged`] fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::forms::EnemyKindId;

/// Something noteworthy that happened during the last tick or command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player took contact or other damage this tick
    PlayerDamaged { amount: f32 },
    /// An enemy was destroyed and converted into a core
    EnemyShattered { kind: EnemyKindId },
    /// Player health reached zero
    GameOver,
}
