//! Subtle UI sound cues synthesised with the Web Audio API.

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{AudioContext, AudioContextState, AudioParam, BiquadFilterType, OscillatorType};

use crate::error::BrowserError;

/// Waveform of a voice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
	/// Pure tone.
	Sine,
	/// Buzzier tone, usually softened with a low-pass filter.
	Square,
}

/// One automation point of an audio parameter, relative to the cue start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ramp {
	/// Jump to the value at the cue start.
	Set(f64),
	/// Linear ramp to `value` reached `at` seconds in.
	Linear {
		/// Target value.
		value: f64,
		/// Offset in seconds.
		at: f64,
	},
	/// Exponential ramp to `value` reached `at` seconds in.
	Exponential {
		/// Target value.
		value: f64,
		/// Offset in seconds.
		at: f64,
	},
}

impl Ramp {
	fn apply(self, param: &AudioParam, t: f64) -> Result<(), BrowserError> {
		match self {
			Ramp::Set(value) => param.set_value_at_time(value as f32, t)?,
			Ramp::Linear { value, at } => param.linear_ramp_to_value_at_time(value as f32, t + at)?,
			Ramp::Exponential { value, at } => {
				param.exponential_ramp_to_value_at_time(value as f32, t + at)?
			}
		};
		Ok(())
	}

	/// Value this point leaves the parameter at.
	#[cfg(test)]
	pub fn value(self) -> f64 {
		match self {
			Ramp::Set(value) | Ramp::Linear { value, .. } | Ramp::Exponential { value, .. } => value,
		}
	}
}

/// A single oscillator routed through a gain envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voice {
	/// Oscillator waveform.
	pub wave: Wave,
	/// Pitch automation, in hertz.
	pub frequency: &'static [Ramp],
	/// Volume envelope.
	pub gain: &'static [Ramp],
	/// Cut-off of an optional low-pass filter, in hertz.
	pub lowpass: Option<f64>,
	/// Seconds until the oscillator stops.
	pub duration: f64,
}

const FADE: Ramp = Ramp::Exponential {
	value: 0.001,
	at: 0.1,
};

const CLICK: &[Voice] = &[Voice {
	wave: Wave::Sine,
	frequency: &[Ramp::Set(800.0), Ramp::Exponential { value: 1200.0, at: 0.05 }],
	gain: &[Ramp::Set(0.05), Ramp::Exponential { value: 0.001, at: 0.05 }],
	lowpass: None,
	duration: 0.05,
}];

const POP: &[Voice] = &[Voice {
	wave: Wave::Sine,
	frequency: &[Ramp::Set(400.0), Ramp::Exponential { value: 800.0, at: 0.1 }],
	gain: &[Ramp::Set(0.05), FADE],
	lowpass: None,
	duration: 0.1,
}];

const CONNECT: &[Voice] = &[Voice {
	wave: Wave::Square,
	frequency: &[Ramp::Set(400.0), Ramp::Linear { value: 600.0, at: 0.05 }],
	gain: &[Ramp::Set(0.03), FADE],
	lowpass: Some(800.0),
	duration: 0.1,
}];

const SWELL: &[Ramp] = &[
	Ramp::Set(0.0),
	Ramp::Linear { value: 0.05, at: 0.1 },
	Ramp::Exponential { value: 0.001, at: 1.0 },
];

// Root and perfect fifth.
const STABILIZE: &[Voice] = &[
	Voice {
		wave: Wave::Sine,
		frequency: &[Ramp::Set(220.0)],
		gain: SWELL,
		lowpass: None,
		duration: 1.0,
	},
	Voice {
		wave: Wave::Sine,
		frequency: &[Ramp::Set(330.0)],
		gain: SWELL,
		lowpass: None,
		duration: 1.0,
	},
];

/// Sound cues used by the living system widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
	/// Soft mechanical click when grabbing a node.
	Click,
	/// Gentle bubble when a tool is added.
	Pop,
	/// Filtered digital blip when an edge is automated.
	Connect,
	/// Low chord when the system is redesigned.
	Stabilize,
}

impl Cue {
	/// The voices making up this cue.
	pub fn voices(self) -> &'static [Voice] {
		match self {
			Cue::Click => CLICK,
			Cue::Pop => POP,
			Cue::Connect => CONNECT,
			Cue::Stabilize => STABILIZE,
		}
	}
}

/// Lazily created audio context plus the user's on/off choice.
#[derive(Default)]
pub struct AudioEngine {
	ctx: Option<AudioContext>,
	enabled: bool,
}

impl AudioEngine {
	/// A disabled engine; no audio context is created until enabled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether cues are currently audible.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Enable or disable cues, creating or resuming the context as needed.
	pub fn toggle(&mut self, on: bool) {
		self.enabled = on;
		if !on {
			return;
		}
		if let Err(err) = self.wake() {
			warn!("audio unavailable: {err}");
		}
	}

	fn wake(&mut self) -> Result<(), BrowserError> {
		let ctx = match self.ctx.take() {
			Some(ctx) => ctx,
			None => AudioContext::new()?,
		};
		if ctx.state() == AudioContextState::Suspended {
			let _ = ctx.resume()?;
		}
		self.ctx = Some(ctx);
		Ok(())
	}

	/// Play a cue if enabled; failures are logged and otherwise ignored.
	pub fn play(&self, cue: Cue) {
		if !self.enabled {
			return;
		}
		let Some(ctx) = &self.ctx else {
			return;
		};
		debug!("audio cue {cue:?}");
		let t = ctx.current_time();
		for voice in cue.voices() {
			if let Err(err) = schedule(ctx, voice, t) {
				warn!("could not play {cue:?}: {err}");
			}
		}
	}
}

fn schedule(ctx: &AudioContext, voice: &Voice, t: f64) -> Result<(), BrowserError> {
	let osc = ctx.create_oscillator()?;
	let gain = ctx.create_gain()?;
	osc.set_type(match voice.wave {
		Wave::Sine => OscillatorType::Sine,
		Wave::Square => OscillatorType::Square,
	});

	match voice.lowpass {
		Some(cutoff) => {
			let filter = ctx.create_biquad_filter()?;
			filter.set_type(BiquadFilterType::Lowpass);
			filter.frequency().set_value(cutoff as f32);
			osc.connect_with_audio_node(&filter)?;
			filter.connect_with_audio_node(&gain)?;
		}
		None => {
			osc.connect_with_audio_node(&gain)?;
		}
	}
	gain.connect_with_audio_node(&ctx.destination())?;

	let (frequency, volume) = (osc.frequency(), gain.gain());
	for ramp in voice.frequency {
		ramp.apply(&frequency, t)?;
	}
	for ramp in voice.gain {
		ramp.apply(&volume, t)?;
	}
	osc.start_with_when(t)?;
	osc.stop_with_when(t + voice.duration)?;
	Ok(())
}

/// Shared handle to the page's [`AudioEngine`], provided through context.
#[derive(Clone, Copy)]
pub struct AudioHandle(StoredValue<AudioEngine, LocalStorage>);

impl AudioHandle {
	/// Turn cues on or off.
	pub fn toggle(&self, on: bool) {
		self.0.update_value(|engine| engine.toggle(on));
	}

	/// Play a cue if sound is enabled.
	pub fn play(&self, cue: Cue) {
		self.0.with_value(|engine| engine.play(cue));
	}

	/// Whether sound is enabled.
	pub fn is_enabled(&self) -> bool {
		self.0.with_value(AudioEngine::is_enabled)
	}
}

/// Install a disabled audio engine in context.
pub fn provide_audio() -> AudioHandle {
	let handle = AudioHandle(StoredValue::new_local(AudioEngine::new()));
	provide_context(handle);
	handle
}

/// The audio engine from context, if one was provided.
pub fn use_audio() -> Option<AudioHandle> {
	use_context::<AudioHandle>()
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Cue; 4] = [Cue::Click, Cue::Pop, Cue::Connect, Cue::Stabilize];

	#[test]
	fn every_cue_fades_out_before_it_stops() {
		for cue in ALL {
			for voice in cue.voices() {
				let Some(Ramp::Exponential { value, at }) = voice.gain.last().copied() else {
					panic!("{cue:?} does not end on an exponential fade");
				};
				assert_eq!(value, 0.001);
				assert!(at <= voice.duration, "{cue:?} stops before its fade ends");
			}
		}
	}

	#[test]
	fn cues_stay_quiet() {
		for cue in ALL {
			for voice in cue.voices() {
				assert!(voice.gain.iter().all(|r| r.value() <= 0.05), "{cue:?} too loud");
			}
		}
	}

	#[test]
	fn stabilize_is_a_perfect_fifth() {
		let roots: Vec<f64> = Cue::Stabilize
			.voices()
			.iter()
			.map(|v| v.frequency[0].value())
			.collect();
		assert_eq!(roots, vec![220.0, 330.0]);
		assert_eq!(roots[1] / roots[0], 1.5);
	}

	#[test]
	fn only_the_square_cue_is_filtered() {
		for cue in ALL {
			for voice in cue.voices() {
				assert_eq!(voice.lowpass.is_some(), voice.wave == Wave::Square);
			}
		}
	}

	#[test]
	fn disabled_engine_ignores_cues() {
		let engine = AudioEngine::new();
		assert!(!engine.is_enabled());
		engine.play(Cue::Pop);
	}
}
