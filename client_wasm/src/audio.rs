//! Audio cue emitter
//!
//! Short square-wave tones through Web Audio, one pitch/duration pair per
//! cue. If the audio context cannot be created, every cue degrades to a
//! no-op instead of aborting the match.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// The three audible game moments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Wall,
    Paddle,
    Score,
}

impl Cue {
    /// Tone frequency (Hz) and duration (s) for this cue
    fn tone(self) -> (f32, f64) {
        match self {
            Cue::Wall => (150.0, 0.1),
            Cue::Paddle => (200.0, 0.1),
            Cue::Score => (100.0, 0.3),
        }
    }
}

pub struct AudioCues {
    ctx: Option<AudioContext>,
}

impl AudioCues {
    /// Create the emitter; a failed AudioContext leaves it muted.
    pub fn new() -> Self {
        Self {
            ctx: AudioContext::new().ok(),
        }
    }

    /// Fire-and-forget playback of one cue
    pub fn play(&self, cue: Cue) {
        if let Some(ctx) = &self.ctx {
            let _ = play_tone(ctx, cue);
        }
    }
}

fn play_tone(ctx: &AudioContext, cue: Cue) -> Result<(), JsValue> {
    let (frequency, duration) = cue.tone();

    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.frequency().set_value(frequency);
    oscillator.set_type(OscillatorType::Square);

    let now = ctx.current_time();
    gain.gain().set_value_at_time(0.3, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, now + duration)?;

    oscillator.start()?;
    oscillator.stop_with_when(now + duration)?;

    Ok(())
}
