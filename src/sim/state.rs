//! Game state and core simulation types
//!
//! One `GameState` owns everything a run needs: the rabbit, the live
//! obstacles, the level counters and the current phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::rabbit::Rabbit;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first press
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Level-up banner, waiting for a press to resume
    LevelComplete,
    /// Run ended (death, or victory after the final level)
    GameOver,
}

/// Fire-and-forget notifications for the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Death,
    LevelUp,
}

/// Complete game state
///
/// Serialize-only: the RNG stream is not part of the snapshot, so a loaded
/// copy could not continue the same run.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Obstacle RNG; survives session resets so each run differs
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    /// Global scroll multiplier for the current level
    pub level_speed: f32,
    /// Frames between spawns for the current level
    pub spawn_interval: u32,
    /// Obstacles cleared this level
    pub level_progress: u32,
    /// Obstacles needed to clear a level
    pub level_length: u32,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Frames simulated this run
    pub time_ticks: u64,
    pub rabbit: Rabbit,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game on the menu screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            level: 1,
            score: 0,
            level_speed: 1.0,
            spawn_interval: BASE_SPAWN_INTERVAL,
            level_progress: 0,
            level_length: LEVEL_LENGTH,
            spawn_timer: 0,
            time_ticks: 0,
            rabbit: Rabbit::default(),
            obstacles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Put the run back to level 1 and return to the menu
    ///
    /// The RNG keeps its stream so the next run gets fresh obstacles.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Menu;
        self.level = 1;
        self.score = 0;
        self.level_speed = 1.0;
        self.spawn_interval = BASE_SPAWN_INTERVAL;
        self.level_progress = 0;
        self.level_length = LEVEL_LENGTH;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.rabbit = Rabbit::default();
        self.obstacles.clear();
        self.next_id = 1;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create an obstacle for the current level and add it to the live set
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let obstacle = super::spawn::spawn_obstacle(id, self.level, &mut self.rng);
        self.obstacles.push(obstacle);
    }

    /// Queue a notification for the audio sink
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run ended by clearing the final level rather than by a crash
    pub fn is_victory(&self) -> bool {
        self.phase == GamePhase::GameOver && self.level >= MAX_LEVEL
    }
}
