//! Shatterform headless demo driver
//!
//! Runs a scripted session against the engine at the fixed timestep and
//! logs what happens. Useful for profiling the simulation and for eyeballing
//! the state machine without a rendering front end.

use glam::Vec2;

use shatterform::consts::*;
use shatterform::sim::{GameEngine, SessionPhase, tick};
use shatterform::{GameEvent, direction, format_survival_time};

/// How long the demo plays before giving up (sim time)
const DEMO_MAX_TICKS: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("starting demo session with seed {seed}");

    let mut engine = GameEngine::new(seed);
    let mut next_slot = 1usize;

    for tick_index in 0..DEMO_MAX_TICKS {
        drive(&mut engine, tick_index, &mut next_slot);
        tick(&mut engine, SIM_DT);

        for event in engine.drain_events() {
            match event {
                GameEvent::PlayerDamaged { amount } => {
                    log::debug!("ouch: {amount} damage");
                }
                GameEvent::EnemyShattered { kind } => {
                    log::info!("shattered a {kind:?}");
                }
                GameEvent::GameOver => log::info!("the arena wins"),
            }
        }

        if engine.phase() == SessionPhase::GameOver {
            break;
        }
    }

    let session = engine.session_snapshot();
    log::info!(
        "demo finished: {} survived, {} shattered",
        format_survival_time(session.elapsed_ms),
        session.shattered
    );
    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}

/// A deliberately simple bot: chase the nearest enemy, swing on cooldown,
/// pepper projectiles, and absorb cores as soon as they drop.
fn drive(engine: &mut GameEngine, tick_index: u64, next_slot: &mut usize) {
    if engine.phase() == SessionPhase::ChoicePause {
        if let Some(core) = engine.core_snapshots().first() {
            let kind = core.kind;
            let slot = *next_slot;
            engine.absorb_core(kind, slot);
            engine.switch_form(slot);
            *next_slot = 1 + (slot % 2);
        }
        return;
    }

    let player = engine.player_snapshot();
    let Some(nearest) = engine
        .enemy_snapshots()
        .into_iter()
        .min_by(|a, b| {
            let da = a.position.distance(player.position);
            let db = b.position.distance(player.position);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return;
    };

    let speed = player.active_form.data().speed;
    let step = direction(player.position, nearest.position) * speed * SIM_DT;
    engine.move_player(step.x, step.y);

    engine.attack_melee();
    if tick_index % 20 == 0 {
        let aim: Vec2 = nearest.position - player.position;
        engine.fire_projectile(aim.x, aim.y);
    }
}
