//! Read-only snapshots for the presentation layer
//!
//! The renderer, input widgets, and haptics layer only ever see these
//! copies, taken once per external frame. Mutation goes back through the
//! engine's command operations; nothing here hands out references into
//! live simulation state.

use glam::Vec2;
use serde::Serialize;

use crate::forms::{EnemyKindId, FormId};
use crate::sim::{ControlMode, CoreId, EnemyId, GameEngine, ProjectileId, SessionPhase};

/// Player view: position, vitals, and the form inventory
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub active_form: FormId,
    pub form_slots: [Option<FormId>; 3],
}

/// Enemy view for rendering
#[derive(Debug, Clone, Serialize)]
pub struct EnemySnapshot {
    pub id: EnemyId,
    pub kind: EnemyKindId,
    pub position: Vec2,
}

/// Projectile view for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ProjectileSnapshot {
    pub id: ProjectileId,
    pub position: Vec2,
    pub color: String,
}

/// Pending core view for the "choose a slot" UI
#[derive(Debug, Clone, Serialize)]
pub struct CoreSnapshot {
    pub id: CoreId,
    pub kind: EnemyKindId,
    pub position: Vec2,
}

/// Session view: state machine, run stats, control mode
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    /// Survival time in ms, frozen while paused and final after game over
    pub elapsed_ms: f64,
    pub shattered: u32,
    pub control_mode: ControlMode,
}

impl GameEngine {
    pub fn player_snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.player.position,
            health: self.player.health,
            max_health: self.player.max_health,
            active_form: self.player.active_form,
            form_slots: self.player.slots,
        }
    }

    pub fn enemy_snapshots(&self) -> Vec<EnemySnapshot> {
        self.registry
            .enemies()
            .iter()
            .map(|e| EnemySnapshot {
                id: e.id,
                kind: e.kind,
                position: e.position,
            })
            .collect()
    }

    pub fn projectile_snapshots(&self) -> Vec<ProjectileSnapshot> {
        self.registry
            .projectiles()
            .iter()
            .map(|p| ProjectileSnapshot {
                id: p.id,
                position: p.position,
                color: p.color.clone(),
            })
            .collect()
    }

    pub fn core_snapshots(&self) -> Vec<CoreSnapshot> {
        self.registry
            .cores()
            .iter()
            .map(|c| CoreSnapshot {
                id: c.id,
                kind: c.kind,
                position: c.position,
            })
            .collect()
    }

    pub fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.session.phase,
            elapsed_ms: self.session.elapsed_ms,
            shattered: self.session.shattered,
            control_mode: self.session.control_mode,
        }
    }
}

/// Render a survival time for the stats display.
///
/// Whole seconds below one minute ("42s"), minutes and leftover seconds
/// above ("2m 5s"). Negative inputs render as zero.
pub fn format_survival_time(ms: f64) -> String {
    let total_seconds = (ms.max(0.0) / 1000.0).floor() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::tick;

    #[test]
    fn test_format_survival_time_policy() {
        assert_eq!(format_survival_time(42_300.0), "42s");
        assert_eq!(format_survival_time(125_400.0), "2m 5s");
    }

    #[test]
    fn test_format_survival_time_edges() {
        assert_eq!(format_survival_time(0.0), "0s");
        assert_eq!(format_survival_time(999.0), "0s");
        assert_eq!(format_survival_time(60_000.0), "1m 0s");
        assert_eq!(format_survival_time(-500.0), "0s");
    }

    #[test]
    fn test_snapshots_reflect_state() {
        let mut engine = GameEngine::new(11);
        engine.move_player(1.0, -2.0);
        engine.fire_projectile(1.0, 0.0);
        tick(&mut engine, SIM_DT);

        let player = engine.player_snapshot();
        assert_eq!(player.position, glam::Vec2::new(1.0, -2.0));
        assert_eq!(player.active_form, FormId::Base);

        let projectiles = engine.projectile_snapshots();
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].color, FormId::Base.data().color);

        let session = engine.session_snapshot();
        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.shattered, 0);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut engine = GameEngine::new(11);
        let before = engine.player_snapshot();
        engine.move_player(2.0, 0.0);
        // The earlier snapshot is unaffected by later mutation
        assert_eq!(before.position, glam::Vec2::ZERO);
    }
}
