//! Sound effect sinks
//!
//! The simulation only queues `GameEvent`s; a sink turns them into sound.
//! On the web the sounds are procedurally generated with Web Audio
//! oscillators, no external files needed.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Rabbit leaves the ground
    Jump,
    /// Rabbit hit an obstacle
    Death,
    /// Level cleared
    LevelUp,
}

impl SoundEffect {
    /// Loudness of this effect before the user's volume settings
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::Jump => 0.2,
            SoundEffect::Death => 0.3,
            SoundEffect::LevelUp => 0.4,
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::Death => SoundEffect::Death,
            GameEvent::LevelUp => SoundEffect::LevelUp,
        }
    }
}

/// Anything that can play sound effects. Must return immediately.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Volume shared by every sink
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    master: f32,
    sfx: f32,
    muted: bool,
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            master: 0.8,
            sfx: 1.0,
            muted: false,
        }
    }
}

impl Volume {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master: settings.master_volume.clamp(0.0, 1.0),
            sfx: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master(&mut self, vol: f32) {
        self.master = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx(&mut self, vol: f32) {
        self.sfx = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Final gain for an effect
    pub fn effective(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master * self.sfx * effect.base_volume()
        }
    }
}

/// Sink for headless runs: logs each effect and keeps a tally
#[derive(Debug, Default)]
pub struct LogAudio {
    pub volume: Volume,
    pub jumps: u32,
    pub deaths: u32,
    pub level_ups: u32,
}

impl LogAudio {
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            ..Default::default()
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::Jump => self.jumps += 1,
            SoundEffect::Death => self.deaths += 1,
            SoundEffect::LevelUp => self.level_ups += 1,
        }
        log::trace!("Sound {:?} at gain {:.2}", effect, self.volume.effective(effect));
    }
}

/// Forward every queued event to the sink
pub fn play_events<S: AudioSink + ?Sized>(sink: &mut S, events: impl IntoIterator<Item = GameEvent>) {
    for event in events {
        sink.play(event.into());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect, Volume};

    /// Web Audio oscillator sink
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        pub volume: Volume,
    }

    impl WebAudio {
        pub fn new(volume: Volume) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Jump - quick upward chirp
        fn play_jump(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(700.0, t + 0.12)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.2).ok();
        }

        /// Death - sad descending
        fn play_death(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 300.0, 200.0].iter().enumerate() {
                let delay = i as f64 * 0.15;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sawtooth) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.3).ok();
                }
            }
        }

        /// Level up - rising arpeggio
        fn play_level_up(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
                let delay = i as f64 * 0.08;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.3).ok();
                }
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            let vol = self.volume.effective(effect);
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Jump => self.play_jump(ctx, vol),
                SoundEffect::Death => self.play_death(ctx, vol),
                SoundEffect::LevelUp => self.play_level_up(ctx, vol),
            }
        }
    }
}
