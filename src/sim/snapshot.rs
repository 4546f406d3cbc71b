//! Read-only view of the game handed to the presentation layer each frame

use glam::Vec2;
use serde::Serialize;

use super::obstacle::ObstacleKind;
use super::state::{GamePhase, GameState};
use crate::consts::MAX_LEVEL;

/// Rabbit as drawn
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RabbitView {
    pub pos: Vec2,
    pub radius: f32,
    /// Tilt in degrees
    pub rotation: f32,
}

/// Obstacle as drawn
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
}

/// HUD counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub max_level: u32,
    pub level_progress: u32,
    pub level_length: u32,
}

/// Text lines for the non-gameplay screens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub title: String,
    pub lines: Vec<String>,
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub victory: bool,
    pub rabbit: RabbitView,
    pub obstacles: Vec<ObstacleView>,
    pub hud: Hud,
    pub banner: Option<Banner>,
}

impl GameState {
    /// Snapshot the current state for rendering
    pub fn frame(&self) -> Frame {
        Frame {
            phase: self.phase,
            victory: self.is_victory(),
            rabbit: RabbitView {
                pos: self.rabbit.pos,
                radius: self.rabbit.radius,
                rotation: self.rabbit.rotation,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    pos: o.pos,
                    size: o.size,
                    kind: o.kind,
                })
                .collect(),
            hud: Hud {
                score: self.score,
                level: self.level,
                max_level: MAX_LEVEL,
                level_progress: self.level_progress,
                level_length: self.level_length,
            },
            banner: self.banner(),
        }
    }

    /// Screen text for the current phase (None while playing)
    pub fn banner(&self) -> Option<Banner> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Menu => Some(Banner {
                title: "BOUNCY RABBIT".to_string(),
                lines: vec!["Click to Start".to_string()],
            }),
            GamePhase::LevelComplete => Some(Banner {
                title: format!("LEVEL {} COMPLETE!", self.level.saturating_sub(1)),
                lines: vec![
                    format!("Score: {}", self.score),
                    format!("Get ready for Level {}...", self.level),
                    "Click to continue".to_string(),
                ],
            }),
            GamePhase::GameOver if self.is_victory() => Some(Banner {
                title: "CONGRATULATIONS!".to_string(),
                lines: vec![
                    format!(
                        "You completed all {} levels with a score of {}!",
                        MAX_LEVEL, self.score
                    ),
                    "Click to return to menu".to_string(),
                ],
            }),
            GamePhase::GameOver => Some(Banner {
                title: "GAME OVER".to_string(),
                lines: vec![
                    format!("Final Score: {} - Level: {}", self.score, self.level),
                    "Click to return to menu".to_string(),
                ],
            }),
        }
    }

    /// HUD text lines shown during play
    pub fn hud_lines(&self) -> [String; 3] {
        [
            format!("Score: {}", self.score),
            format!("Level: {}/{}", self.level, MAX_LEVEL),
            format!("Progress: {}/{}", self.level_progress, self.level_length),
        ]
    }
}
