//! Frame driver
//!
//! Called once per display refresh. Fires due timers, then draws and
//! updates according to the current phase. In `Running` the order is:
//! clear, background, player, enemy, move enemy, enemy contact (abort on
//! hit), collectibles + pickups, player input. The enemy is drawn before it
//! moves, so it lags one frame behind on screen.

use crate::renderer::{Sprite, Surface};
use crate::sim::tick::{advance_enemy, apply_input, collect_pickups, fire_timers, on_enemy_contact, step_fall};
use crate::sim::{GamePhase, GameSession, InputLatch, Rect};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Gameplay frame completed
    Continue,
    /// Player was caught this frame; gameplay updates stop
    Died,
    /// A non-gameplay phase was rendered (idle, dying, falling, banner)
    Animating,
}

fn draw_background(session: &GameSession, surface: &mut impl Surface) {
    surface.draw_sprite(Sprite::Background, Rect::from_pos_size(glam::Vec2::ZERO, session.bounds));
}

fn draw_player(session: &GameSession, surface: &mut impl Surface) {
    surface.draw_sprite(Sprite::Player(session.player.sprite), session.player.rect());
}

fn draw_enemy(session: &GameSession, surface: &mut impl Surface) {
    surface.draw_sprite(Sprite::Enemy, session.enemy.rect());
}

/// Run one frame at timestamp `now_ms`
pub fn run_frame(
    session: &mut GameSession,
    input: &InputLatch,
    now_ms: f64,
    surface: &mut impl Surface,
) -> FrameOutcome {
    fire_timers(session, now_ms);

    surface.clear();
    draw_background(session, surface);

    match session.phase {
        GamePhase::Running => {
            session.frame_count += 1;
            draw_player(session, surface);
            draw_enemy(session, surface);

            if advance_enemy(session, now_ms) {
                on_enemy_contact(session, now_ms);
                // The hit frame shows the swapped sprite on top
                draw_player(session, surface);
                return FrameOutcome::Died;
            }

            for collectible in &session.collectibles {
                surface.draw_sprite(Sprite::Collectible, collectible.rect());
            }
            collect_pickups(session);
            apply_input(session, input);
            FrameOutcome::Continue
        }
        GamePhase::Dying => {
            draw_player(session, surface);
            draw_enemy(session, surface);
            FrameOutcome::Animating
        }
        GamePhase::Falling => {
            draw_enemy(session, surface);
            step_fall(session, now_ms);
            draw_player(session, surface);
            FrameOutcome::Animating
        }
        GamePhase::GameOverDisplay => {
            draw_enemy(session, surface);
            FrameOutcome::Animating
        }
        GamePhase::Idle => FrameOutcome::Animating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::{DrawCall, DrawRecorder};
    use crate::sim::{Collectible, Direction, GameEvent, SpriteVariant, start};
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn running(seed: u64) -> GameSession {
        let mut session = GameSession::new(seed);
        start(&mut session, 0.0);
        session.enemy.pos = Vec2::new(1200.0, 650.0);
        session
    }

    #[test]
    fn test_running_frame_draw_order() {
        let mut session = running(1);
        let mut surface = DrawRecorder::new();
        let enemy_before = session.enemy.rect();

        let outcome = run_frame(&mut session, &InputLatch::default(), FRAME_MS, &mut surface);
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert_eq!(
            surface.sprites(),
            vec![
                Sprite::Background,
                Sprite::Player(SpriteVariant::Normal),
                Sprite::Enemy,
                Sprite::Collectible,
            ]
        );
        // Enemy is drawn at its pre-move position
        assert_eq!(surface.rect_of(Sprite::Enemy), Some(enemy_before));
        assert_ne!(session.enemy.rect(), enemy_before);
    }

    #[test]
    fn test_hit_frame_stops_gameplay() {
        let mut session = running(2);
        session.enemy.pos = session.player.pos;
        session.collectibles = vec![Collectible::new(Vec2::new(60.0, 60.0))];
        let mut surface = DrawRecorder::new();

        let outcome = run_frame(&mut session, &InputLatch::default(), FRAME_MS, &mut surface);
        assert_eq!(outcome, FrameOutcome::Died);
        assert_eq!(session.phase, GamePhase::Dying);
        assert_eq!(session.score, 0);
        assert!(!surface.sprites().contains(&Sprite::Collectible));
        assert_eq!(
            surface.sprites().last(),
            Some(&Sprite::Player(SpriteVariant::Fallen))
        );

        // Following frames do not move anything until the fall starts
        let enemy = session.enemy.pos;
        let outcome = run_frame(&mut session, &InputLatch::default(), 2.0 * FRAME_MS, &mut surface);
        assert_eq!(outcome, FrameOutcome::Animating);
        assert_eq!(session.enemy.pos, enemy);
    }

    #[test]
    fn test_falling_frames_redraw_frozen_enemy() {
        let mut session = running(3);
        session.enemy.pos = session.player.pos;
        let mut surface = DrawRecorder::new();
        run_frame(&mut session, &InputLatch::default(), 0.0, &mut surface);

        let frozen = session.enemy.rect();
        let y_before = session.player.pos.y;
        run_frame(&mut session, &InputLatch::default(), DEATH_PAUSE_MS, &mut surface);
        assert_eq!(session.phase, GamePhase::Falling);
        assert_eq!(
            surface.sprites(),
            vec![Sprite::Background, Sprite::Enemy, Sprite::Player(SpriteVariant::Fallen)]
        );
        assert_eq!(surface.rect_of(Sprite::Enemy), Some(frozen));
        assert_eq!(session.player.pos.y, y_before + PLAYER_FALL_SPEED);
    }

    #[test]
    fn test_idle_frame_draws_background_only() {
        let mut session = GameSession::new(4);
        let mut surface = DrawRecorder::new();
        let outcome = run_frame(&mut session, &InputLatch::default(), 0.0, &mut surface);
        assert_eq!(outcome, FrameOutcome::Animating);
        assert_eq!(surface.sprites(), vec![Sprite::Background]);
    }

    #[test]
    fn test_no_input_no_score() {
        let mut session = running(5);
        // Keep the collectible out of reach
        session.collectibles = vec![Collectible::new(Vec2::new(900.0, 100.0))];
        let mut surface = DrawRecorder::new();

        for i in 1..=120 {
            // Hold the enemy back so it cannot reach the player
            session.enemy.pos = Vec2::new(1200.0, 650.0);
            run_frame(&mut session, &InputLatch::default(), i as f64 * FRAME_MS, &mut surface);
        }
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_walk_onto_collectible_scores() {
        let mut session = running(6);
        let target = Vec2::new(400.0, 58.0);
        session.collectibles = vec![Collectible::new(target)];
        session.drain_events();

        let mut input = InputLatch::default();
        input.press(Direction::Right);
        let mut surface = DrawRecorder::new();

        let mut frames = 0;
        while session.score == 0 && frames < 200 {
            frames += 1;
            session.enemy.pos = Vec2::new(1200.0, 650.0);
            run_frame(&mut session, &input, frames as f64 * FRAME_MS, &mut surface);
        }
        assert_eq!(session.score, 1);
        assert_eq!(session.collectibles.len(), 1);
        assert_ne!(session.collectibles[0].pos, target);
        assert!(session.drain_events().contains(&GameEvent::ScoreChanged(1)));
    }

    #[test]
    fn test_full_run_through_frames() {
        let mut session = running(7);
        session.enemy.pos = session.player.pos;
        let mut surface = DrawRecorder::new();
        let input = InputLatch::default();

        let mut now = 0.0;
        let mut phases = vec![session.phase];
        while now < 10_000.0 {
            run_frame(&mut session, &input, now, &mut surface);
            if phases.last() != Some(&session.phase) {
                phases.push(session.phase);
            }
            now += FRAME_MS;
        }
        assert_eq!(
            phases,
            vec![
                GamePhase::Running,
                GamePhase::Dying,
                GamePhase::Falling,
                GamePhase::GameOverDisplay,
                GamePhase::Idle,
            ]
        );
    }
}
