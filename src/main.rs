//! Bouncy Rabbit entry point
//!
//! Native builds run a headless fixed-rate loop: the game plays itself in
//! idle mode for the configured frame budget and prints the final frame as
//! JSON. A windowed frontend drives the same `tick` / `frame` API.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bouncy_rabbit::audio::{LogAudio, Volume, play_events};
    use bouncy_rabbit::renderer::frame_vertices;
    use bouncy_rabbit::sim::{GamePhase, GameState, LoopControl, TickInput, tick};
    use bouncy_rabbit::{Settings, platform};

    platform::init_logging();
    log::info!("Bouncy Rabbit (headless) starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed {}, {} frames", seed, settings.frame_budget);

    let mut state = GameState::new(seed);
    let mut audio = LogAudio::new(Volume::from_settings(&settings));
    let input = TickInput {
        idle_mode: settings.idle_mode,
        ..Default::default()
    };

    let mut runs = 0u32;
    let mut best_score = 0u64;
    let mut last_phase = state.phase;
    let mut vertex_peak = 0usize;

    for _ in 0..settings.frame_budget {
        if tick(&mut state, &input) == LoopControl::Quit {
            break;
        }
        play_events(&mut audio, state.drain_events());

        if state.phase != last_phase {
            if state.phase == GamePhase::GameOver {
                runs += 1;
                best_score = best_score.max(state.score);
                log::info!(
                    "Run {} over: level {}, score {}{}",
                    runs,
                    state.level,
                    state.score,
                    if state.is_victory() { " (victory)" } else { "" }
                );
            }
            last_phase = state.phase;
        }

        vertex_peak = vertex_peak.max(frame_vertices(&state.frame()).len());
    }

    log::info!(
        "Finished: {} runs, best score {}, {} jumps, {} level-ups, peak {} vertices",
        runs,
        best_score,
        audio.jumps,
        audio.level_ups,
        vertex_peak
    );

    match serde_json::to_string_pretty(&state.frame()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final frame: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser frontend calls into the library directly
    bouncy_rabbit::platform::init_logging();
}
