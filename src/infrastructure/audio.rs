// SPDX-License-Identifier: MPL-2.0
//! Tone cues played through cpal when a notification is published.
//!
//! Each kind maps to one short sine tone. Playback happens on a detached
//! thread that owns the output stream for the length of the tone, so the
//! caller never blocks on the audio device.

use crate::application::port::Effects;
use crate::config::defaults::{TONE_DURATION_MS, TONE_VOLUME};
use crate::error::{Error, Result};
use crate::notifications::Kind;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::f32::consts::TAU;
use std::time::Duration;

/// Frequency of the cue for each kind, in Hz.
#[must_use]
pub fn tone_frequency(kind: Kind) -> f32 {
    match kind {
        Kind::Success => 880.0,
        Kind::Info => 660.0,
        Kind::Warning => 520.0,
        Kind::Error => 330.0,
        Kind::Loading => 440.0,
    }
}

/// [`Effects`] adapter that plays tones on the default output device.
#[derive(Debug, Clone)]
pub struct ToneEffects {
    duration: Duration,
    volume: f32,
}

impl Default for ToneEffects {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(TONE_DURATION_MS),
            volume: TONE_VOLUME,
        }
    }
}

impl ToneEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output amplitude, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    fn play_blocking(frequency: f32, volume: f32, duration: Duration) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), frequency, volume)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), frequency, volume)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), frequency, volume)?
            }
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;
        std::thread::sleep(duration);
        Ok(())
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        frequency: f32,
        volume: f32,
    ) -> Result<cpal::Stream> {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = usize::from(config.channels);
        let mut phase = 0.0f32;
        let step = frequency / sample_rate;

        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(channels) {
                        let value = (phase * TAU).sin() * volume;
                        phase = (phase + step).fract();
                        for sample in frame.iter_mut() {
                            *sample = T::from_sample(value);
                        }
                    }
                },
                |err| {
                    tracing::debug!(error = %err, "tone stream error");
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
    }
}

impl Effects for ToneEffects {
    fn play_tone(&self, kind: Kind) -> Result<()> {
        // Fail fast on the caller's thread when there is nothing to play on.
        if cpal::default_host().default_output_device().is_none() {
            return Err(Error::Audio("No audio output device found".to_string()));
        }

        let frequency = tone_frequency(kind);
        let volume = self.volume;
        let duration = self.duration;
        std::thread::Builder::new()
            .name("toast-tone".to_string())
            .spawn(move || {
                if let Err(err) = Self::play_blocking(frequency, volume, duration) {
                    tracing::debug!(error = %err, "tone playback failed");
                }
            })
            .map_err(|e| Error::Audio(format!("Failed to spawn tone thread: {e}")))?;
        Ok(())
    }
}
