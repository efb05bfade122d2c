use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// How an oscillator's frequency moves over the life of a cue.
enum Pitch {
    Held(f32),
    Exponential(f32, f32),
    Linear(f32, f32),
}

struct Cue {
    shape: OscillatorType,
    pitch: Pitch,
    start_gain: f32,
    end_gain: f32,
    offset_s: f64,
    duration_s: f64,
}

/// Oscillator-synthesized sound cues. The `AudioContext` is created lazily
/// on the first cue (browsers refuse one before a user gesture) and reused
/// afterwards. Every entry point is fire-and-forget: failures are logged
/// and the game never sees them.
pub struct AudioPlayer {
    context: RefCell<Option<AudioContext>>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            context: RefCell::new(None),
        }
    }

    /// Short high blip for each notch the wheel passes.
    pub fn play_tick(&self) {
        self.play(&[Cue {
            shape: OscillatorType::Triangle,
            pitch: Pitch::Exponential(600.0, 300.0),
            start_gain: 0.2,
            end_gain: 0.01,
            offset_s: 0.0,
            duration_s: 0.05,
        }]);
    }

    /// Low thud when the wheel comes to rest.
    pub fn play_stop(&self) {
        self.play(&[Cue {
            shape: OscillatorType::Sine,
            pitch: Pitch::Exponential(200.0, 50.0),
            start_gain: 0.3,
            end_gain: 0.01,
            offset_s: 0.0,
            duration_s: 0.5,
        }]);
    }

    /// Rising chime for a correct answer.
    pub fn play_correct(&self) {
        self.play(&[Cue {
            shape: OscillatorType::Sine,
            pitch: Pitch::Exponential(500.0, 1000.0),
            start_gain: 0.1,
            end_gain: 0.01,
            offset_s: 0.0,
            duration_s: 0.5,
        }]);
    }

    /// Falling buzz for a wrong answer.
    pub fn play_wrong(&self) {
        self.play(&[Cue {
            shape: OscillatorType::Sawtooth,
            pitch: Pitch::Linear(150.0, 100.0),
            start_gain: 0.1,
            end_gain: 0.01,
            offset_s: 0.0,
            duration_s: 0.4,
        }]);
    }

    /// Soft click for ordinary buttons.
    pub fn play_click(&self) {
        self.play(&[Cue {
            shape: OscillatorType::Triangle,
            pitch: Pitch::Held(800.0),
            start_gain: 0.05,
            end_gain: 0.001,
            offset_s: 0.0,
            duration_s: 0.1,
        }]);
    }

    /// Little arpeggio for the end-of-round summary.
    pub fn play_win(&self) {
        let cues: Vec<Cue> = [0.0, 0.1, 0.2, 0.4]
            .iter()
            .enumerate()
            .map(|(i, &offset_s)| Cue {
                shape: OscillatorType::Square,
                pitch: Pitch::Held(400.0 + i as f32 * 100.0),
                start_gain: 0.1,
                end_gain: 0.01,
                offset_s,
                duration_s: 0.3,
            })
            .collect();
        self.play(&cues);
    }

    fn play(&self, cues: &[Cue]) {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(context) => *slot = Some(context),
                Err(err) => {
                    log::warn!("audio unavailable: {:?}", err);
                    return;
                }
            }
        }
        if let Some(context) = slot.as_ref() {
            // autoplay policies can suspend a fresh context until a gesture
            if context.state() == AudioContextState::Suspended {
                let _ = context.resume();
            }
            for cue in cues {
                if let Err(err) = schedule_cue(context, cue) {
                    log::warn!("audio cue failed: {:?}", err);
                }
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn schedule_cue(context: &AudioContext, cue: &Cue) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    oscillator.set_type(cue.shape);

    let start = context.current_time() + cue.offset_s;
    let end = start + cue.duration_s;
    match cue.pitch {
        Pitch::Held(hz) => {
            oscillator.frequency().set_value_at_time(hz, start)?;
        }
        Pitch::Exponential(from_hz, to_hz) => {
            oscillator.frequency().set_value_at_time(from_hz, start)?;
            oscillator
                .frequency()
                .exponential_ramp_to_value_at_time(to_hz, end)?;
        }
        Pitch::Linear(from_hz, to_hz) => {
            oscillator.frequency().set_value_at_time(from_hz, start)?;
            oscillator
                .frequency()
                .linear_ramp_to_value_at_time(to_hz, end)?;
        }
    }

    gain.gain().set_value_at_time(cue.start_gain, start)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(cue.end_gain, end)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;
    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}
