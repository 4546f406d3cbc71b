//! Per-frame simulation step
//!
//! Core game loop that advances the state by exactly one frame. Physics
//! constants are per frame, so wall-clock time never enters here.

use super::collision::first_hit;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click/tap/key press: starts, resumes, jumps or returns to menu
    pub primary_action: bool,
    /// Window closed or quit key
    pub quit: bool,
    /// Idle/demo mode - the game presses the button itself
    pub idle_mode: bool,
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// How many frames ahead the autopilot looks for floor obstacles
const AUTOPILOT_LEAD_FRAMES: f32 = 12.0;

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> LoopControl {
    if input.quit {
        log::info!("Quit requested at level {} with score {}", state.level, state.score);
        return LoopControl::Quit;
    }

    let mut pressed = input.primary_action;
    if input.idle_mode {
        pressed |= match state.phase {
            GamePhase::Playing => autopilot_wants_jump(state),
            // Click through every banner
            GamePhase::Menu | GamePhase::LevelComplete | GamePhase::GameOver => true,
        };
    }

    if pressed {
        primary_action(state);
    }

    if state.phase == GamePhase::Playing {
        update(state);
    }

    LoopControl::Continue
}

/// Apply one press of the primary action to the current phase
pub fn primary_action(state: &mut GameState) {
    match state.phase {
        GamePhase::Menu => {
            state.phase = GamePhase::Playing;
            log::info!("Run started");
        }
        GamePhase::Playing => {
            if state.rabbit.jump() {
                state.emit(GameEvent::Jump);
            }
        }
        GamePhase::LevelComplete => {
            state.phase = GamePhase::Playing;
            log::info!("Level {} started", state.level);
        }
        GamePhase::GameOver => {
            state.reset();
            log::info!("Back to menu");
        }
    }
}

/// Run one frame of gameplay
///
/// Order: rabbit, obstacles (scroll, clear, score), collision, spawn timer.
/// A level-up and a death can both happen in the same frame; the death wins.
pub fn update(state: &mut GameState) {
    state.time_ticks += 1;

    state.rabbit.update();

    // A level-up mid-pass speeds up every obstacle after the cleared one
    for i in 0..state.obstacles.len() {
        let level_speed = state.level_speed;
        let obstacle = &mut state.obstacles[i];
        obstacle.update(level_speed);
        if !obstacle.is_off_screen() || obstacle.passed {
            continue;
        }
        obstacle.passed = true;

        state.score += CLEAR_SCORE;
        state.level_progress += 1;
        if state.level_progress >= state.level_length {
            level_up(state);
        }
    }
    state.obstacles.retain(|o| !o.passed);

    if let Some(obstacle) = first_hit(&state.rabbit, &state.obstacles) {
        log::info!(
            "Hit {} #{} at level {}, final score {}",
            obstacle.kind.name(),
            obstacle.id,
            state.level,
            state.score
        );
        state.emit(GameEvent::Death);
        state.phase = GamePhase::GameOver;
    }

    state.spawn_timer += 1;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_obstacle();
        state.spawn_timer = 0;
    }
}

/// Advance to the next level, or end the run after the final one
pub fn level_up(state: &mut GameState) {
    if state.level < MAX_LEVEL {
        state.level += 1;
        state.level_progress = 0;
        state.level_speed = level_speed_for(state.level);
        state.spawn_interval = spawn_interval_for(state.level);
        state.emit(GameEvent::LevelUp);
        state.phase = GamePhase::LevelComplete;
        log::info!(
            "Level {} reached: speed x{:.1}, spawn every {} frames",
            state.level,
            state.level_speed,
            state.spawn_interval
        );
    } else {
        state.phase = GamePhase::GameOver;
        log::info!("All {} levels cleared with score {}", MAX_LEVEL, state.score);
    }
}

/// Global scroll multiplier after levelling up to `level`
pub fn level_speed_for(level: u32) -> f32 {
    1.0 + level as f32 * LEVEL_SPEED_STEP
}

/// Frames between spawns after levelling up to `level`
pub fn spawn_interval_for(level: u32) -> u32 {
    BASE_SPAWN_INTERVAL
        .saturating_sub(level.saturating_mul(SPAWN_INTERVAL_STEP))
        .max(MIN_SPAWN_INTERVAL)
}

/// Jump when grounded and a floor obstacle is about to reach the rabbit
fn autopilot_wants_jump(state: &GameState) -> bool {
    let rabbit = &state.rabbit;
    if !rabbit.on_floor() {
        return false;
    }

    let front = rabbit.pos.x + rabbit.radius;
    state.obstacles.iter().any(|obstacle| {
        let reaches_floor = obstacle.max().y >= SCREEN_HEIGHT - rabbit.radius * 2.0;
        let step = obstacle.speed * state.level_speed;
        let frames_away = (obstacle.pos.x - front) / step;
        reaches_floor && (0.0..=AUTOPILOT_LEAD_FRAMES).contains(&frames_away)
    })
}
