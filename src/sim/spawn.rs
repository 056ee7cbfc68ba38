//! Enemy lifecycle: periodic spawning and post-attack repositioning
//!
//! Spawn attempts fire on a fixed interval while the session is running,
//! place a uniformly-random kind on the spawn ring, and respect the live
//! enemy cap. An enemy that lands a contact attack warps back out to the
//! same ring, keeping its id, kind, and remaining health.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::forms::EnemyKindId;

use super::state::{EnemyId, GameEngine, SessionPhase};

/// Advance the spawn timer and spawn enemies as the interval elapses
pub(crate) fn update(engine: &mut GameEngine, dt: f32) {
    if engine.session.phase != SessionPhase::Running {
        return;
    }
    engine.spawn_timer_ms += f64::from(dt) * 1000.0;
    while engine.spawn_timer_ms >= SPAWN_INTERVAL_MS {
        engine.spawn_timer_ms -= SPAWN_INTERVAL_MS;
        try_spawn(engine);
    }
}

fn try_spawn(engine: &mut GameEngine) {
    if engine.registry.enemies().len() >= MAX_ENEMIES {
        return;
    }
    let kind = EnemyKindId::ALL[engine.rng.random_range(0..EnemyKindId::ALL.len())];
    let position = ring_position(engine);
    let id = engine.registry.spawn_enemy(kind, position);
    log::info!("spawned {:?} #{} at {:?}", kind, id.0, position);
}

/// Warp an enemy back to a random point on the spawn ring
pub(crate) fn reposition_on_ring(engine: &mut GameEngine, id: EnemyId) {
    let position = ring_position(engine);
    if let Some(enemy) = engine.registry.enemy_mut(id) {
        enemy.position = position;
    }
}

fn ring_position(engine: &mut GameEngine) -> Vec2 {
    let angle = engine.rng.random_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin()) * SPAWN_RING_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;

    #[test]
    fn test_spawner_fires_on_interval() {
        let mut engine = GameEngine::new(3);
        // Just under one interval: nothing yet
        update(&mut engine, (SPAWN_INTERVAL_MS / 1000.0 - 0.1) as f32);
        assert!(engine.registry.enemies().is_empty());
        // Crossing the interval spawns exactly one enemy
        update(&mut engine, 0.2);
        assert_eq!(engine.registry.enemies().len(), 1);
    }

    #[test]
    fn test_spawned_enemy_sits_on_ring() {
        let mut engine = GameEngine::new(3);
        update(&mut engine, (SPAWN_INTERVAL_MS / 1000.0) as f32 + 0.01);
        let enemy = &engine.registry.enemies()[0];
        let r = distance(enemy.position, Vec2::ZERO);
        assert!((r - SPAWN_RING_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_spawner_respects_cap() {
        let mut engine = GameEngine::new(3);
        for _ in 0..MAX_ENEMIES {
            engine.registry.spawn_enemy(EnemyKindId::Striker, Vec2::ZERO);
        }
        update(&mut engine, (SPAWN_INTERVAL_MS / 1000.0) as f32 * 5.0);
        assert_eq!(engine.registry.enemies().len(), MAX_ENEMIES);
    }

    #[test]
    fn test_spawner_suppressed_while_paused() {
        let mut engine = GameEngine::new(3);
        engine.toggle_pause();
        update(&mut engine, (SPAWN_INTERVAL_MS / 1000.0) as f32 * 2.0);
        assert!(engine.registry.enemies().is_empty());
    }

    #[test]
    fn test_reposition_keeps_identity_and_health() {
        let mut engine = GameEngine::new(3);
        let id = engine
            .registry
            .spawn_enemy(EnemyKindId::Tank, Vec2::new(0.2, 0.0));
        engine.registry.enemy_mut(id).unwrap().health = 17.0;

        reposition_on_ring(&mut engine, id);
        let enemy = engine.registry.enemy_mut(id).unwrap();
        assert_eq!(enemy.health, 17.0);
        assert_eq!(enemy.kind, EnemyKindId::Tank);
        let r = enemy.position.length();
        assert!((r - SPAWN_RING_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_reposition_unknown_id_is_noop() {
        let mut engine = GameEngine::new(3);
        reposition_on_ring(&mut engine, EnemyId(99));
        assert!(engine.registry.enemies().is_empty());
    }

    #[test]
    fn test_spawn_kind_is_deterministic_per_seed() {
        let run = |seed: u64| {
            let mut engine = GameEngine::new(seed);
            for _ in 0..6 {
                update(&mut engine, (SPAWN_INTERVAL_MS / 1000.0) as f32 + 0.01);
            }
            engine
                .registry
                .enemies()
                .iter()
                .map(|e| (e.kind, e.position.x.to_bits(), e.position.y.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(77), run(77));
    }
}
