//! Audio via the Web Audio API
//!
//! Procedurally generated effects - no sound files to load. Playback is
//! best-effort: every failure path is swallowed (and at most logged) so a
//! broken audio context can never stall the game.

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    /// Sound effect types
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SoundEffect {
        /// Terminal effect on winning: the scream sting behind the overlay
        Scream,
        /// Short buzz on wall contact
        WallBuzz,
    }

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.8,
                muted: false,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Scream => self.play_scream(ctx, vol),
                SoundEffect::WallBuzz => self.play_wall_buzz(ctx, vol),
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

        /// Scream sting - shrieking pitch dive over a bass swell
        fn play_scream(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            // Shriek: sawtooth sweeping down from high pitch
            if let Some((osc, gain)) = self.create_osc(ctx, 1800.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.5, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.9)
                    .ok();
                osc.frequency().set_value_at_time(1800.0, t).ok();
                osc.frequency().set_value_at_time(2400.0, t + 0.05).ok();
                osc.frequency().set_value_at_time(1600.0, t + 0.12).ok();
                osc.frequency().set_value_at_time(2200.0, t + 0.2).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(300.0, t + 0.9)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 1.0).ok();
            }

            // Dissonant second voice a rough tritone off
            if let Some((osc, gain)) = self.create_osc(ctx, 2500.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.6)
                    .ok();
                osc.frequency().set_value_at_time(2500.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(500.0, t + 0.6)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.7).ok();
            }

            // Bass swell underneath
            if let Some((osc, gain)) = self.create_osc(ctx, 50.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(0.001, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(vol * 0.6, t + 0.15)
                    .ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 1.2)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 1.3).ok();
            }
        }

        /// Wall contact - short low buzz
        fn play_wall_buzz(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(120.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.12)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::{AudioManager, SoundEffect};
