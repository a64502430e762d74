//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time comes in as a timestamp argument (milliseconds)
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s for the host to route

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, overlaps};
pub use difficulty::enemy_speed;
pub use input::{Direction, InputLatch};
pub use spawn::{random_position, spawn_collectible};
pub use state::{Collectible, Enemy, GameEvent, GamePhase, GameSession, Player, SpriteVariant};
pub use tick::{
    abort_run, advance_enemy, apply_input, begin_fall, collect_pickups, fire_timers,
    on_enemy_contact, start, step_fall,
};
pub use timer::{Deferred, DeferredEvent, DeferredQueue};
