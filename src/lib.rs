//! Shatterform - an arena survival game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, entity lifecycle, state machine)
//! - `forms`: Static data tables for player forms and enemy kinds
//! - `snapshot`: Read-only views handed to the rendering/input layer
//! - `events`: Per-tick notifications (damage, kills) for haptics and effects
//!
//! The engine is a single owned aggregate ([`GameEngine`]) advanced by a
//! fixed-step [`tick`]. The presentation layer calls the public command
//! operations and reads snapshots between ticks; it never mutates state
//! directly.

pub mod events;
pub mod forms;
pub mod sim;
pub mod snapshot;

pub use events::GameEvent;
pub use forms::{Archetype, EnemyKindId, FormId};
pub use sim::{ControlMode, GameEngine, SessionPhase, tick};
pub use snapshot::format_survival_time;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena movement bounds for the player (world units)
    pub const ARENA_MIN_X: f32 = -8.0;
    pub const ARENA_MAX_X: f32 = 8.0;
    pub const ARENA_MIN_Y: f32 = -8.0;
    pub const ARENA_MAX_Y: f32 = 8.0;

    /// Extended bounds beyond which projectiles despawn
    pub const DESPAWN_BOUNDS: f32 = 15.0;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Number of form inventory slots
    pub const FORM_SLOTS: usize = 3;

    /// Enemies closer than this stop moving and attack instead
    pub const CONTACT_DISTANCE: f32 = 0.5;
    /// Minimum interval between contact attacks from the same enemy
    pub const ENEMY_ATTACK_INTERVAL_MS: f64 = 1000.0;

    /// Spawner policy
    pub const SPAWN_INTERVAL_MS: f64 = 3000.0;
    pub const SPAWN_RING_RADIUS: f32 = 8.0;
    pub const MAX_ENEMIES: usize = 10;

    /// Projectile defaults
    pub const PROJECTILE_HIT_RADIUS: f32 = 0.5;
    pub const PROJECTILE_LIFETIME_TICKS: u32 = 120;
    /// Minimum interval between shots while the fire input is held,
    /// independent of the form's melee cooldown
    pub const FIRE_INTERVAL_MS: f64 = 250.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector from `from` toward `to` (zero vector if coincident)
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Clamp a point into an axis-aligned box, each axis independently
#[inline]
pub fn clamp_to_bounds(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    p.clamp(min, max)
}

/// Clamp a point into the player's arena bounds
#[inline]
pub fn clamp_to_arena(p: Vec2) -> Vec2 {
    clamp_to_bounds(
        p,
        Vec2::new(consts::ARENA_MIN_X, consts::ARENA_MIN_Y),
        Vec2::new(consts::ARENA_MAX_X, consts::ARENA_MAX_Y),
    )
}
