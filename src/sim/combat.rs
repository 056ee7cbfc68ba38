//! Combat resolution
//!
//! Owns all damage application. Entities never carry callbacks back into
//! resolver logic: melee, projectile hits, and death conversion all go
//! through id-indexed registry access from here.

use glam::Vec2;

use crate::consts::*;
use crate::distance;
use crate::events::GameEvent;

use super::state::{EntityRegistry, GameEngine, ProjectileSpec, SessionPhase};

impl GameEngine {
    /// Melee attack: hit every enemy within the active form's range.
    ///
    /// Area effect, not single-target. Gated by the form's cooldown; an
    /// activation inside the cooldown window is ignored entirely.
    pub fn attack_melee(&mut self) {
        if self.session.phase != SessionPhase::Running {
            return;
        }
        let form = self.player.active_form.data();
        let now = self.now_ms();
        if self
            .player
            .last_attack_ms
            .is_some_and(|t| now - t < form.attack_cooldown_ms)
        {
            return;
        }
        self.player.last_attack_ms = Some(now);

        let origin = self.player.position;
        let mut hits = 0;
        for enemy in self.registry.enemies.iter_mut() {
            if distance(origin, enemy.position) <= form.melee_range {
                enemy.health -= form.damage;
                hits += 1;
            }
        }
        if hits > 0 {
            log::debug!("melee hit {} enemies for {}", hits, form.damage);
        }
        self.resolve_deaths();
    }

    /// Launch a projectile in the given direction.
    ///
    /// Throttled by the fixed re-fire interval rather than the form
    /// cooldown, so holding the fire input produces a steady stream. A zero
    /// direction vector is ignored.
    pub fn fire_projectile(&mut self, dx: f32, dy: f32) {
        if self.session.phase != SessionPhase::Running {
            return;
        }
        let dir = Vec2::new(dx, dy).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let now = self.now_ms();
        if self
            .player
            .last_fire_ms
            .is_some_and(|t| now - t < FIRE_INTERVAL_MS)
        {
            return;
        }
        self.player.last_fire_ms = Some(now);

        let form = self.player.active_form.data();
        self.registry.spawn_projectile(ProjectileSpec {
            position: self.player.position,
            velocity: dir * form.projectile_speed,
            damage: form.damage,
            color: form.color.to_string(),
        });
    }

    /// Test every live projectile against every enemy and apply damage.
    ///
    /// A projectile hits at most one enemy ever: the consumed flag is set
    /// on the first enemy found in radius, and consumed projectiles are
    /// removed at the end of the pass.
    pub(crate) fn resolve_projectile_hits(&mut self) {
        let EntityRegistry {
            projectiles,
            enemies,
            ..
        } = &mut self.registry;

        for projectile in projectiles.iter_mut() {
            if projectile.consumed {
                continue;
            }
            for enemy in enemies.iter_mut() {
                if distance(projectile.position, enemy.position) < PROJECTILE_HIT_RADIUS {
                    projectile.consumed = true;
                    enemy.health -= projectile.damage;
                    break;
                }
            }
        }
        self.registry.projectiles.retain(|p| !p.consumed);
        self.resolve_deaths();
    }

    /// Convert every enemy at or below zero health into a core.
    ///
    /// Each death removes the enemy, drops a core at its last position,
    /// bumps the shattered counter, and hard-pauses the session for the
    /// slot choice.
    pub(crate) fn resolve_deaths(&mut self) {
        let dead: Vec<_> = self
            .registry
            .enemies
            .iter()
            .filter(|e| e.health <= 0.0)
            .map(|e| (e.id, e.kind, e.position))
            .collect();

        for (id, kind, position) in dead {
            self.registry.remove_enemy(id);
            self.registry.spawn_core(kind, position);
            self.session.shattered += 1;
            self.events.push(GameEvent::EnemyShattered { kind });
            if self.session.phase == SessionPhase::Running {
                self.session.phase = SessionPhase::ChoicePause;
                self.session.choice_pending = true;
            }
            log::info!("shattered {:?} at {:?} (total {})", kind, position, self.session.shattered);
        }
    }
}
