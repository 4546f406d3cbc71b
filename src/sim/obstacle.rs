//! Scrolling obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Vertical sine motion carried by moving obstacles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// Spawn y the oscillation is centred on
    pub base_y: f32,
    /// Current phase (radians)
    pub phase: f32,
    /// Peak offset from `base_y`
    pub amplitude: f32,
    /// Phase advance per frame (radians)
    pub frequency: f32,
}

impl Wave {
    fn advance(&mut self, step: f32) -> f32 {
        self.phase += step;
        self.base_y + self.phase.sin() * self.amplitude
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Plain block
    Rectangle,
    /// Row of spikes; collides as its full bounding box
    Spikes,
    /// Block bobbing up and down
    Oscillating(Wave),
    /// Oscillating at double phase speed
    ZigZag(Wave),
}

impl ObstacleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Rectangle => "rectangle",
            ObstacleKind::Spikes => "spikes",
            ObstacleKind::Oscillating(_) => "oscillating",
            ObstacleKind::ZigZag(_) => "zigzag",
        }
    }
}

/// An obstacle entity (axis-aligned box)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Own scroll speed, before the level multiplier
    pub speed: f32,
    pub kind: ObstacleKind,
    /// Already scored (set when it scrolls off)
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, size: Vec2, speed: f32, kind: ObstacleKind) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "obstacle size must be positive: {size}"
        );
        Self {
            id,
            pos,
            size,
            speed,
            kind,
            passed: false,
        }
    }

    /// Scroll left and apply the kind's vertical motion
    pub fn update(&mut self, level_speed: f32) {
        self.pos.x -= self.speed * level_speed;

        match &mut self.kind {
            ObstacleKind::Oscillating(wave) => {
                let step = wave.frequency;
                self.pos.y = wave.advance(step);
            }
            ObstacleKind::ZigZag(wave) => {
                let step = wave.frequency * 2.0;
                self.pos.y = wave.advance(step);
            }
            ObstacleKind::Rectangle | ObstacleKind::Spikes => {}
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }
}
