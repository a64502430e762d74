//! Per-frame simulation steps and phase transitions
//!
//! The frame driver (`crate::frame::run_frame`) calls the gameplay steps in
//! draw order; the transitions here are shared by every host.

use super::collision::overlaps;
use super::difficulty::enemy_speed;
use super::input::InputLatch;
use super::spawn::spawn_collectible;
use super::state::{GameEvent, GamePhase, GameSession, SpriteVariant};
use super::timer::DeferredEvent;
use crate::consts::*;

/// Start a new run (only from `Idle`)
///
/// Returns false and leaves everything untouched in any other phase.
pub fn start(session: &mut GameSession, now_ms: f64) -> bool {
    if session.phase != GamePhase::Idle {
        log::debug!("Start ignored in {:?}", session.phase);
        return false;
    }

    session.generation = session.generation.wrapping_add(1);
    session.score = 0;
    session.collectibles.clear();
    session.player.reset();
    session.randomize_enemy();
    session.enemy.speed = ENEMY_BASE_SPEED;

    let first = spawn_collectible(&mut session.rng, session.bounds);
    session.collectibles.push(first);

    session.run_started_at = Some(now_ms);
    session.frame_count = 0;
    session.phase = GamePhase::Running;

    session.push_event(GameEvent::RunStarted);
    session.push_event(GameEvent::ScoreChanged(0));
    log::info!(
        "Run {} started, enemy at ({:.0}, {:.0})",
        session.generation,
        session.enemy.pos.x,
        session.enemy.pos.y
    );
    true
}

/// Ramp the enemy speed, move it toward the player and report contact
pub fn advance_enemy(session: &mut GameSession, now_ms: f64) -> bool {
    session.enemy.speed = enemy_speed(session.elapsed_secs(now_ms));
    let target = session.player.pos;
    session.enemy.chase(target);
    overlaps(&session.player.rect(), &session.enemy.rect())
}

/// Player/enemy contact: Running -> Dying
///
/// A no-op outside `Running`, so repeated triggers are harmless.
pub fn on_enemy_contact(session: &mut GameSession, now_ms: f64) -> bool {
    if session.phase != GamePhase::Running {
        return false;
    }

    session.phase = GamePhase::Dying;
    session.player.sprite = SpriteVariant::Fallen;
    session.push_event(GameEvent::PlayerHit);
    session
        .timers
        .schedule(now_ms, DEATH_PAUSE_MS, session.generation, DeferredEvent::BeginFall);

    log::info!(
        "Caught after {:.1}s ({} frames) with score {}",
        session.elapsed_secs(now_ms),
        session.frame_count,
        session.score
    );
    true
}

/// Remove every collectible the player touches, scoring and respawning one each
///
/// Returns the number picked up this frame.
pub fn collect_pickups(session: &mut GameSession) -> u32 {
    let player = session.player.rect();
    let before = session.collectibles.len();
    session.collectibles.retain(|c| !overlaps(&player, &c.rect()));
    let picked = (before - session.collectibles.len()) as u32;

    for _ in 0..picked {
        session.score += 1;
        let next = spawn_collectible(&mut session.rng, session.bounds);
        session.collectibles.push(next);
    }

    if picked > 0 {
        session.push_event(GameEvent::ScoreChanged(session.score));
        log::debug!("Picked up {} (score {})", picked, session.score);
    }
    picked
}

/// Move the player along each held direction, clamped to the playfield
pub fn apply_input(session: &mut GameSession, input: &InputLatch) {
    let max = session.player.max_pos(session.bounds);
    let player = &mut session.player;

    if input.up {
        player.pos.y = (player.pos.y - player.speed).max(0.0);
    }
    if input.down {
        player.pos.y = (player.pos.y + player.speed).min(max.y);
    }
    if input.left {
        player.pos.x = (player.pos.x - player.speed).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + player.speed).min(max.x);
    }
}

/// Dying -> Falling
pub fn begin_fall(session: &mut GameSession) -> bool {
    if session.phase != GamePhase::Dying {
        return false;
    }
    session.phase = GamePhase::Falling;
    session.push_event(GameEvent::FallStarted);
    true
}

/// Drop the player one step; once off screen, schedule the game over banner
pub fn step_fall(session: &mut GameSession, now_ms: f64) {
    if session.phase != GamePhase::Falling || session.player.pos.y >= session.bounds.y {
        return;
    }

    session.player.pos.y += PLAYER_FALL_SPEED;
    if session.player.pos.y >= session.bounds.y {
        session.timers.schedule(
            now_ms,
            GAME_OVER_DELAY_MS,
            session.generation,
            DeferredEvent::ShowGameOver,
        );
    }
}

fn show_game_over(session: &mut GameSession, now_ms: f64) {
    if session.phase != GamePhase::Falling {
        return;
    }
    session.phase = GamePhase::GameOverDisplay;
    session.push_event(GameEvent::GameOverShown {
        score: session.score,
    });
    session.timers.schedule(
        now_ms,
        GAME_OVER_DISPLAY_MS,
        session.generation,
        DeferredEvent::DismissGameOver,
    );
    log::info!("{}", session.game_over_message());
}

fn dismiss_game_over(session: &mut GameSession) {
    if session.phase != GamePhase::GameOverDisplay {
        return;
    }
    session.phase = GamePhase::Idle;
    session.run_started_at = None;
    session.push_event(GameEvent::GameOverDismissed);
}

/// Fire due deferred events for the current run; stale ones are dropped
///
/// Returns how many fired.
pub fn fire_timers(session: &mut GameSession, now_ms: f64) -> usize {
    let mut fired = 0;
    for deferred in session.timers.take_due(now_ms) {
        if deferred.generation != session.generation {
            log::debug!(
                "Dropping stale {:?} from run {} (current run {})",
                deferred.event,
                deferred.generation,
                session.generation
            );
            continue;
        }
        match deferred.event {
            DeferredEvent::BeginFall => {
                begin_fall(session);
            }
            DeferredEvent::ShowGameOver => show_game_over(session, now_ms),
            DeferredEvent::DismissGameOver => dismiss_game_over(session),
        }
        fired += 1;
    }
    fired
}

/// Abandon the current run and return to `Idle`
///
/// Pending deferred events become stale and will never fire.
pub fn abort_run(session: &mut GameSession) {
    if session.phase == GamePhase::Idle {
        return;
    }
    if session.phase == GamePhase::GameOverDisplay {
        session.push_event(GameEvent::GameOverDismissed);
    }
    session.generation = session.generation.wrapping_add(1);
    session.phase = GamePhase::Idle;
    session.run_started_at = None;
    log::info!("Run aborted");
}
