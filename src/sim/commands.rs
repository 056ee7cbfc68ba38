//! Public command operations
//!
//! These are the engine's write surface for the input layer: joystick
//! movement, form switching, core absorption, pause and restart. Every
//! command validates its inputs and degrades to a silent no-op on bad
//! indices or a gating phase - the simulation loop must never be crashed
//! by a stray tap.

use glam::Vec2;

use crate::clamp_to_arena;
use crate::events::GameEvent;
use crate::forms::EnemyKindId;

use super::state::{ControlMode, GameEngine, SessionPhase};

impl GameEngine {
    /// Move the player by a delta, clamped into the arena bounds.
    ///
    /// The delta is applied verbatim; scaling by the active form's speed is
    /// the input layer's job. No-op unless the session is running.
    pub fn move_player(&mut self, dx: f32, dy: f32) {
        if self.session.phase != SessionPhase::Running {
            return;
        }
        self.player.position = clamp_to_arena(self.player.position + Vec2::new(dx, dy));
    }

    /// Activate the form stored in `slot`.
    ///
    /// Fails silently if the index is out of range or the slot is empty.
    /// Health is a property of the player, not the form - it is never
    /// reset or rescaled by a switch.
    pub fn switch_form(&mut self, slot: usize) {
        if self.session.phase != SessionPhase::Running {
            return;
        }
        let Some(Some(form)) = self.player.slots.get(slot).copied() else {
            return;
        };
        self.player.active_form = form;
        log::debug!("switched to form {:?}", form);
    }

    /// Assign the form unlocked by a core of `kind` to `slot` and remove
    /// one such core from the pending pool.
    ///
    /// Absorption is not strictly gated on the choice pause: the slot
    /// assignment happens in any live phase, but only the ChoicePause path
    /// auto-resumes the simulation.
    pub fn absorb_core(&mut self, kind: EnemyKindId, slot: usize) {
        if self.session.phase == SessionPhase::GameOver {
            return;
        }
        if slot >= self.player.slots.len() {
            return;
        }
        let form = kind.unlocks();
        self.player.slots[slot] = Some(form);

        // If the overwritten slot held the active form, the player stays in
        // that slot and morphs into the new form
        let active = self.player.active_form;
        if !self.player.slots.contains(&Some(active)) {
            self.player.active_form = form;
        }

        if let Some(core_id) = self
            .registry
            .cores()
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.id)
        {
            self.registry.remove_core(core_id);
        }

        self.session.choice_pending = false;
        if self.session.phase == SessionPhase::ChoicePause {
            self.session.phase = SessionPhase::Running;
        }
        log::info!("absorbed {:?} core into slot {}", kind, slot);
    }

    /// Apply damage to the player, clamped at zero health.
    ///
    /// Reaching zero atomically transitions the session to GameOver and
    /// freezes survival time (the sim clock stops advancing). Negative
    /// amounts have no effect, and repeated calls at zero health are
    /// idempotent.
    pub(crate) fn take_damage(&mut self, amount: f32) {
        if amount <= 0.0 || self.session.phase == SessionPhase::GameOver {
            return;
        }
        self.player.health = (self.player.health - amount).max(0.0);
        self.events.push(GameEvent::PlayerDamaged { amount });
        if self.player.health <= 0.0 {
            self.session.phase = SessionPhase::GameOver;
            self.events.push(GameEvent::GameOver);
            log::info!(
                "game over: survived {:.0} ms, shattered {}",
                self.session.elapsed_ms,
                self.session.shattered
            );
        }
    }

    /// Toggle the manual pause. Available any time except GameOver.
    ///
    /// Resuming returns to ChoicePause when a core choice is still pending,
    /// otherwise to Running.
    pub fn toggle_pause(&mut self) {
        match self.session.phase {
            SessionPhase::GameOver => {}
            SessionPhase::ManualPause => {
                self.session.phase = if self.session.choice_pending {
                    SessionPhase::ChoicePause
                } else {
                    SessionPhase::Running
                };
            }
            SessionPhase::Running | SessionPhase::ChoicePause => {
                self.session.phase = SessionPhase::ManualPause;
            }
        }
    }

    /// Flip the primary input widget between movement and shooting
    pub fn toggle_control_mode(&mut self) {
        self.session.control_mode = match self.session.control_mode {
            ControlMode::Move => ControlMode::Shoot,
            ControlMode::Shoot => ControlMode::Move,
        };
    }

    /// Re-initialize the whole session: empty entity collections, default
    /// player, fresh clock and counters. Available from any phase.
    pub fn restart(&mut self) {
        let seed = self.seed.wrapping_add(1);
        *self = Self::new(seed);
        log::info!("restarted with seed {}", seed);
    }
}
