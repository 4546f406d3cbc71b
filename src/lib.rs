//! Bouncy Rabbit - a one-button arcade dodger
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, spawning, game phases)
//! - `renderer`: Tessellates a frame snapshot into triangle lists
//! - `audio`: Sound effect sinks fed by simulation events
//! - `platform`: Browser/native platform glue
//! - `settings`: Presentation preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate. Physics is expressed per frame, not per second.
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Rabbit defaults - fixed horizontal lane, free vertical motion
    pub const RABBIT_X: f32 = 100.0;
    pub const RABBIT_RADIUS: f32 = 20.0;
    pub const RABBIT_EAR_LENGTH: f32 = 15.0;

    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward impulse applied by a jump (units/frame)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Body tilt per unit of vertical velocity (degrees)
    pub const TILT_PER_VELOCITY: f32 = 3.0;
    /// Maximum body tilt either way (degrees)
    pub const MAX_TILT: f32 = 45.0;

    /// Level progression
    pub const MAX_LEVEL: u32 = 45;
    /// Obstacles that must scroll off screen to clear a level
    pub const LEVEL_LENGTH: u32 = 20;
    /// Points per cleared obstacle
    pub const CLEAR_SCORE: u64 = 10;
    /// Per-level increment of the global scroll multiplier
    pub const LEVEL_SPEED_STEP: f32 = 0.1;

    /// Frames between obstacle spawns
    pub const BASE_SPAWN_INTERVAL: u32 = 120;
    pub const MIN_SPAWN_INTERVAL: u32 = 40;
    pub const SPAWN_INTERVAL_STEP: u32 = 2;

    /// Obstacle defaults
    pub const OBSTACLE_BASE_SPEED: f32 = 5.0;
    pub const OBSTACLE_SPEED_PER_LEVEL: f32 = 0.2;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 50;
    pub const OBSTACLE_BASE_MAX_HEIGHT: u32 = 150;
    pub const OBSTACLE_MIN_WIDTH: u32 = 30;
    pub const OBSTACLE_BASE_MAX_WIDTH: u32 = 50;

    /// Levels at which new obstacle kinds join the spawn pool
    pub const SPIKES_UNLOCK_LEVEL: u32 = 5;
    pub const OSCILLATING_UNLOCK_LEVEL: u32 = 10;
    pub const ZIGZAG_UNLOCK_LEVEL: u32 = 20;
}
