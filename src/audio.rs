//! Ambient Audio Drone
//!
//! One `AudioContext` with a small fixed voice set summed into a master
//! gain: a soft pad chord plus one low warmth tone. Start fades the master
//! in; stop fades it out and tears the graph down once the fade has
//! finished. Every release call is best-effort so a second stop, or a close
//! on a dead context, is swallowed rather than propagated.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Voice frequencies (Hz) and per-voice levels: A2 warmth under an
/// A3/C4/E4 pad.
const VOICES: [(f32, f32); 4] = [
    (110.00, 0.16),
    (220.00, 0.30),
    (261.63, 0.26),
    (329.63, 0.22),
];

const MASTER_LEVEL: f32 = 0.05;
const FADE_IN_SECS: f64 = 3.0;
const FADE_OUT_SECS: f64 = 2.0;

pub struct AmbientDrone {
    ctx: AudioContext,
    master: GainNode,
    voices: Vec<OscillatorNode>,
}

impl AmbientDrone {
    /// Build the graph and fade the master volume in.
    ///
    /// Must be called from a user gesture, or the context starts suspended.
    pub fn start() -> Result<AmbientDrone, JsValue> {
        let ctx = AudioContext::new()?;
        let master = ctx.create_gain()?;
        master.connect_with_audio_node(&ctx.destination())?;

        let now = ctx.current_time();
        let _ = master.gain().set_value_at_time(0.0, now);
        let _ = master
            .gain()
            .linear_ramp_to_value_at_time(MASTER_LEVEL, now + FADE_IN_SECS);

        let mut voices = Vec::with_capacity(VOICES.len());
        for (freq, level) in VOICES {
            let osc = ctx.create_oscillator()?;
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value(freq);

            let gain = ctx.create_gain()?;
            gain.gain().set_value(level);

            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&master)?;
            osc.start()?;
            voices.push(osc);
        }

        web_sys::console::log_1(&"[AUDIO] drone started".into());
        Ok(AmbientDrone { ctx, master, voices })
    }

    /// Fade out, then tear the graph down once the fade has finished.
    pub fn stop(self) {
        let now = self.ctx.current_time();
        let gain = self.master.gain();
        let _ = gain.cancel_scheduled_values(now);
        let _ = gain.set_value_at_time(gain.value(), now);
        let _ = gain.linear_ramp_to_value_at_time(0.0001, now + FADE_OUT_SECS);

        let AmbientDrone { ctx, voices, .. } = self;
        Timeout::new((FADE_OUT_SECS * 1000.0) as u32, move || {
            for osc in &voices {
                let _ = osc.stop();
            }
            let _ = ctx.close();
            web_sys::console::log_1(&"[AUDIO] drone torn down".into());
        })
        .forget();
    }
}
