//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One `update` per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering, audio or input polling

pub mod collision;
pub mod obstacle;
pub mod rabbit;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circle_rect_overlap, first_hit, rabbit_hits_obstacle};
pub use obstacle::{Obstacle, ObstacleKind, Wave};
pub use rabbit::Rabbit;
pub use snapshot::{Banner, Frame, Hud, ObstacleView, RabbitView};
pub use spawn::spawn_obstacle;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{
    LoopControl, TickInput, level_speed_for, level_up, primary_action, spawn_interval_for, tick,
    update,
};
