//! Fixed timestep simulation tick
//!
//! One call per rendered frame. Ordering within a tick:
//! state gating, then enemy movement/AI (including contact damage), then
//! projectile integration and expiry, then projectile hit resolution and
//! death conversion, then the spawn timer, then a defensive bounds clamp
//! on the player. Expiry runs before hit detection: a projectile on its
//! final tick despawns without registering a hit.

use crate::consts::*;
use crate::{clamp_to_arena, direction, distance};

use super::spawn;
use super::state::{EnemyId, GameEngine, SessionPhase};

/// Advance the simulation by one fixed timestep.
///
/// A non-positive `dt` (possible if the driving loop derives deltas from a
/// skewed wall clock) is treated as zero elapsed time. All pause states and
/// GameOver freeze the sim clock entirely.
pub fn tick(engine: &mut GameEngine, dt: f32) {
    let dt = dt.max(0.0);
    if engine.session.phase != SessionPhase::Running {
        return;
    }

    engine.session.time_ticks += 1;
    engine.session.elapsed_ms += f64::from(dt) * 1000.0;

    ai_step(engine, dt);
    if engine.session.phase != SessionPhase::Running {
        // Player died to contact damage; nothing else moves this tick
        return;
    }

    advance_projectiles(engine, dt);
    engine.resolve_projectile_hits();

    spawn::update(engine, dt);

    engine.player.position = clamp_to_arena(engine.player.position);
}

/// Move every enemy toward the player; enemies in contact range attack
/// instead, at most once per attack interval, then warp back to the ring.
fn ai_step(engine: &mut GameEngine, dt: f32) {
    let target = engine.player.position;
    let now = engine.now_ms();
    let mut attackers: Vec<(EnemyId, f32)> = Vec::new();

    for enemy in engine.registry.enemies.iter_mut() {
        let kind = enemy.kind.data();
        if distance(enemy.position, target) > CONTACT_DISTANCE {
            enemy.position += direction(enemy.position, target) * kind.speed * dt;
        } else if enemy
            .last_attack_ms
            .is_none_or(|t| now - t >= ENEMY_ATTACK_INTERVAL_MS)
        {
            enemy.last_attack_ms = Some(now);
            attackers.push((enemy.id, kind.contact_damage));
        }
    }

    for (id, damage) in attackers {
        engine.take_damage(damage);
        spawn::reposition_on_ring(engine, id);
    }
}

/// Integrate projectile positions and drop expired or out-of-bounds ones
fn advance_projectiles(engine: &mut GameEngine, dt: f32) {
    engine.registry.projectiles.retain_mut(|p| {
        p.position += p.velocity * dt;
        p.lifetime_ticks = p.lifetime_ticks.saturating_sub(1);
        p.lifetime_ticks > 0
            && p.position.x.abs() <= DESPAWN_BOUNDS
            && p.position.y.abs() <= DESPAWN_BOUNDS
    });
}
