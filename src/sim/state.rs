//! Game state and core simulation types
//!
//! Everything the engine mutates lives here: the entity registry, the
//! player, the session state machine, and the [`GameEngine`] aggregate
//! that owns them all. Collaborators never hold references into these
//! collections; they address entities by id.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::events::GameEvent;
use crate::forms::{EnemyKindId, FormId};

/// Unique enemy id, monotonically increasing, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Unique projectile id, monotonically increasing, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// Unique core id, monotonically increasing, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoreId(pub u32);

/// A hostile entity pursuing the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKindId,
    pub position: Vec2,
    pub health: f32,
    /// Sim-clock ms of the last contact attack (None = never attacked)
    pub last_attack_ms: Option<f64>,
}

/// A fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
    /// Ticks until expiry
    pub lifetime_ticks: u32,
    pub color: String,
    /// Set once the projectile has dealt its damage; a consumed projectile
    /// never hits again
    pub consumed: bool,
}

/// Parameters for spawning a projectile
#[derive(Debug, Clone)]
pub struct ProjectileSpec {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
    pub color: String,
}

/// Loot dropped by a shattered enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Core {
    pub id: CoreId,
    pub kind: EnemyKindId,
    pub position: Vec2,
}

/// Owns the authoritative entity collections
///
/// Vec-backed for stable iteration order: projectiles iterate oldest-first
/// so lifetime expiry is deterministic. Removal by id is idempotent -
/// removing an id that is already gone is a no-op, which matches the
/// at-least-once removal calls from combat resolution.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) cores: Vec<Core>,
    next_enemy_id: u32,
    next_projectile_id: u32,
    next_core_id: u32,
}

impl EntityRegistry {
    pub fn spawn_enemy(&mut self, kind: EnemyKindId, position: Vec2) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(Enemy {
            id,
            kind,
            position,
            health: kind.data().max_health,
            last_attack_ms: None,
        });
        id
    }

    pub fn remove_enemy(&mut self, id: EnemyId) {
        self.enemies.retain(|e| e.id != id);
    }

    pub fn spawn_projectile(&mut self, spec: ProjectileSpec) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;
        self.projectiles.push(Projectile {
            id,
            position: spec.position,
            velocity: spec.velocity,
            damage: spec.damage,
            lifetime_ticks: PROJECTILE_LIFETIME_TICKS,
            color: spec.color,
            consumed: false,
        });
        id
    }

    pub fn remove_projectile(&mut self, id: ProjectileId) {
        self.projectiles.retain(|p| p.id != id);
    }

    pub fn spawn_core(&mut self, kind: EnemyKindId, position: Vec2) -> CoreId {
        let id = CoreId(self.next_core_id);
        self.next_core_id += 1;
        self.cores.push(Core { id, kind, position });
        id
    }

    pub fn remove_core(&mut self, id: CoreId) {
        self.cores.retain(|c| c.id != id);
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub active_form: FormId,
    /// Fixed-size form inventory; slot 0 starts with the base form
    pub slots: [Option<FormId>; FORM_SLOTS],
    /// Sim-clock ms of the last melee activation
    pub last_attack_ms: Option<f64>,
    /// Sim-clock ms of the last projectile launch
    pub last_fire_ms: Option<f64>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            active_form: FormId::Base,
            slots: [Some(FormId::Base), None, None],
            last_attack_ms: None,
            last_fire_ms: None,
        }
    }
}

/// Which high-level state the session is in
///
/// A single enum, so the two pause flavors are mutually exclusive by
/// construction. Manual pause takes priority; whether a core choice is
/// still pending is tracked separately in [`GameSession::choice_pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Simulation advancing
    Running,
    /// Hard pause after a kill: the player must assign the new core to a slot
    ChoicePause,
    /// Player-requested pause
    ManualPause,
    /// Player health reached zero; only `restart` leaves this state
    GameOver,
}

/// What the primary input widget drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    Move,
    Shoot,
}

/// Per-run session bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: SessionPhase,
    pub control_mode: ControlMode,
    /// Ticks advanced while Running
    pub time_ticks: u64,
    /// Accumulated survival time in ms; frozen whenever the phase is not
    /// Running, so it is final once the session hits GameOver
    pub elapsed_ms: f64,
    /// Enemies destroyed this run
    pub shattered: u32,
    /// True between an enemy kill and the core-slot assignment
    pub(crate) choice_pending: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Running,
            control_mode: ControlMode::Move,
            time_ticks: 0,
            elapsed_ms: 0.0,
            shattered: 0,
            choice_pending: false,
        }
    }
}

/// The owned simulation aggregate
///
/// One `GameEngine` per run. All mutation goes through [`crate::sim::tick`]
/// and the public command methods; the presentation layer reads snapshots
/// between ticks. There is no global instance.
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) player: PlayerState,
    pub(crate) registry: EntityRegistry,
    pub(crate) session: GameSession,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) spawn_timer_ms: f64,
}

impl GameEngine {
    /// Create a fresh engine with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: PlayerState::default(),
            registry: EntityRegistry::default(),
            session: GameSession::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            spawn_timer_ms: 0.0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    /// Drain the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current sim-clock time in ms (frozen while paused or game-over)
    pub(crate) fn now_ms(&self) -> f64 {
        self.session.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_registry_removal_is_idempotent() {
        let mut registry = EntityRegistry::default();
        let id = registry.spawn_enemy(EnemyKindId::Striker, Vec2::ZERO);
        registry.remove_enemy(id);
        assert!(registry.enemies().is_empty());
        // Second removal of the same id is a no-op, not an error
        registry.remove_enemy(id);
        assert!(registry.enemies().is_empty());
    }

    #[test]
    fn test_projectiles_iterate_in_insertion_order() {
        let mut registry = EntityRegistry::default();
        for i in 0..4 {
            registry.spawn_projectile(ProjectileSpec {
                position: Vec2::new(i as f32, 0.0),
                velocity: Vec2::ZERO,
                damage: 1.0,
                color: "#FFFFFF".to_string(),
            });
        }
        let ids: Vec<u32> = registry.projectiles().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut registry = EntityRegistry::default();
        let first = registry.spawn_enemy(EnemyKindId::Tank, Vec2::ZERO);
        registry.remove_enemy(first);
        let second = registry.spawn_enemy(EnemyKindId::Tank, Vec2::ZERO);
        assert_ne!(first, second);
        assert!(second.0 > first.0);
    }

    #[test]
    fn test_id_counters_are_scoped_per_kind() {
        let mut registry = EntityRegistry::default();
        let enemy = registry.spawn_enemy(EnemyKindId::Striker, Vec2::ZERO);
        let core = registry.spawn_core(EnemyKindId::Striker, Vec2::ZERO);
        // Each entity kind allocates from its own counter
        assert_eq!(enemy.0, 0);
        assert_eq!(core.0, 0);
    }

    #[test]
    fn test_player_defaults() {
        let player = PlayerState::default();
        assert_eq!(player.position, Vec2::ZERO);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert_eq!(player.active_form, FormId::Base);
        assert_eq!(player.slots, [Some(FormId::Base), None, None]);
    }

    #[test]
    fn test_spawned_enemy_has_kind_health() {
        let mut registry = EntityRegistry::default();
        let id = registry.spawn_enemy(EnemyKindId::Tank, Vec2::new(3.0, 0.0));
        let enemy = registry.enemy_mut(id).unwrap();
        assert_eq!(enemy.health, EnemyKindId::Tank.data().max_health);
        assert_eq!(enemy.last_attack_ms, None);
    }

    proptest! {
        #[test]
        fn prop_enemy_ids_strictly_increase(count in 1usize..50) {
            let mut registry = EntityRegistry::default();
            let mut prev: Option<u32> = None;
            for _ in 0..count {
                let id = registry.spawn_enemy(EnemyKindId::Ranged, Vec2::ZERO);
                if let Some(p) = prev {
                    prop_assert!(id.0 > p);
                }
                prev = Some(id.0);
            }
        }
    }
}
