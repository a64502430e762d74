//! Game session and entity types
//!
//! Everything a run mutates lives in one owned `GameSession`, passed
//! explicitly to the tick functions and the frame driver.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::random_position;
use super::timer::DeferredQueue;
use crate::consts::*;
use crate::playfield;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the start command
    #[default]
    Idle,
    /// Gameplay loop active, collisions live
    Running,
    /// Enemy caught the player; short pause before the fall
    Dying,
    /// Player drops off the bottom of the screen, enemy frozen
    Falling,
    /// Final score banner is up
    GameOverDisplay,
}

/// Which player sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteVariant {
    #[default]
    Normal,
    /// Shown from the moment of the hit until the next run
    Fallen,
}

/// Side effects for the host (audio, HUD, DOM)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted,
    /// Score readout needs refreshing
    ScoreChanged(u32),
    PlayerHit,
    FallStarted,
    GameOverShown { score: u32 },
    GameOverDismissed,
}

/// The player
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame while a direction is held
    pub speed: f32,
    pub sprite: SpriteVariant,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
            sprite: SpriteVariant::Normal,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Back to the start corner with the normal sprite
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Largest legal top-left position inside `bounds`
    pub fn max_pos(&self, bounds: Vec2) -> Vec2 {
        (bounds - self.size).max(Vec2::ZERO)
    }
}

/// The chasing enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame, recomputed every frame from run time
    pub speed: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            pos: Vec2::new(200.0, 200.0),
            size: Vec2::splat(ENEMY_SIZE),
            speed: ENEMY_BASE_SPEED,
        }
    }
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Step toward `target` on each axis independently
    ///
    /// The two checks per axis run back to back without clamping, so a step
    /// that overshoots is immediately undone and the enemy jitters around the
    /// target once it is closer than one step.
    pub fn chase(&mut self, target: Vec2) {
        if self.pos.x < target.x {
            self.pos.x += self.speed;
        }
        if self.pos.x > target.x {
            self.pos.x -= self.speed;
        }
        if self.pos.y < target.y {
            self.pos.y += self.speed;
        }
        if self.pos.y > target.y {
            self.pos.y -= self.speed;
        }
    }
}

/// A pickup item (square)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: COLLECTIBLE_SIZE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// Complete state of one game instance
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Playfield size
    pub bounds: Vec2,
    pub player: Player,
    pub enemy: Enemy,
    /// Live collectibles in draw order
    pub collectibles: Vec<Collectible>,
    pub score: u32,
    /// Run start timestamp (ms); `None` outside a run
    pub run_started_at: Option<f64>,
    /// Bumped on every start/abort; stamps deferred events
    pub generation: u32,
    pub timers: DeferredQueue,
    /// Gameplay frames in the current run
    pub frame_count: u64,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create an idle session with the given seed on the standard playfield
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, playfield())
    }

    pub fn with_bounds(seed: u64, bounds: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            bounds,
            player: Player::default(),
            enemy: Enemy::default(),
            collectibles: Vec::new(),
            score: 0,
            run_started_at: None,
            generation: 0,
            timers: DeferredQueue::new(),
            frame_count: 0,
            events: Vec::new(),
        }
    }

    /// Seconds since the run started (0 outside a run)
    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        self.run_started_at
            .map(|start| ((now_ms - start) / 1000.0) as f32)
            .unwrap_or(0.0)
    }

    /// Move the enemy to a random spot on the playfield
    pub fn randomize_enemy(&mut self) {
        self.enemy.pos = random_position(&mut self.rng, self.bounds, self.enemy.size);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Text of the final score banner
    pub fn game_over_message(&self) -> String {
        format!("Game Over! Your score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(1);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert!(session.collectibles.is_empty());
        assert!(session.run_started_at.is_none());
        assert_eq!(session.elapsed_secs(5000.0), 0.0);
    }

    #[test]
    fn test_enemy_steps_toward_target() {
        let mut enemy = Enemy {
            pos: Vec2::new(0.0, 100.0),
            speed: 2.0,
            ..Default::default()
        };
        enemy.chase(Vec2::new(50.0, 50.0));
        assert_eq!(enemy.pos, Vec2::new(2.0, 98.0));
    }

    #[test]
    fn test_enemy_overshoot_is_undone_in_same_step() {
        let mut enemy = Enemy {
            pos: Vec2::new(49.0, 50.0),
            speed: 3.0,
            ..Default::default()
        };
        enemy.chase(Vec2::new(50.0, 50.0));
        // +3 lands at 52 (> 50), then -3 brings it back
        assert_eq!(enemy.pos, Vec2::new(49.0, 50.0));
    }

    #[test]
    fn test_game_over_message() {
        let mut session = GameSession::new(1);
        session.score = 12;
        assert_eq!(session.game_over_message(), "Game Over! Your score: 12");
    }
}
