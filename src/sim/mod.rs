//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (Vec storage, ids monotonically increasing)
//! - No rendering or platform dependencies

pub mod combat;
pub mod commands;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{
    ControlMode, Core, CoreId, Enemy, EnemyId, EntityRegistry, GameEngine, GameSession,
    PlayerState, Projectile, ProjectileId, ProjectileSpec, SessionPhase,
};
pub use tick::tick;
