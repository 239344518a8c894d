//! Analog pulse-sensor input.
//!
//! [`PulseSensor`] is the seam between the core and the ADC: one blocking
//! read per loop tick, no error path (the converter always answers). The
//! simulator build plugs in [`SyntheticPulse`], a deterministic generator
//! shaped like a photoplethysmogram so the beat detector has a realistic
//! signal to chew on: a sharp systolic upstroke, a smaller dicrotic bump on
//! the way down, and a slow baseline drift.

use std::f32::consts::{PI, TAU};

use crate::config::ADC_MAX;

/// One sample per call, in the fixed ADC range.
pub trait PulseSensor {
    fn read(&mut self) -> u16;
}

/// Simulated pulse rate (1.2 Hz = 72 BPM).
const PULSE_HZ: f32 = 1.2;

/// Simulated time advance per read, matched to the ~50 FPS loop.
const TICK_STEP: f32 = 0.02;

/// Deterministic pulse waveform generator for the simulator build.
pub struct SyntheticPulse {
    t: f32,
}

impl SyntheticPulse {
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl Default for SyntheticPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseSensor for SyntheticPulse {
    fn read(&mut self) -> u16 {
        self.t += TICK_STEP;
        let phase = (self.t * PULSE_HZ).fract();

        // Slow breathing drift around a mid-scale baseline.
        let baseline = 1200.0 + 150.0 * (self.t * 0.25 * TAU).sin();

        // Systolic upstroke: a half-sine spike over the first 15% of the cycle.
        let spike = if phase < 0.15 {
            ((phase / 0.15) * PI).sin() * 1800.0
        } else {
            0.0
        };

        // Dicrotic bump on the descent.
        let bump = if (0.25..0.45).contains(&phase) {
            (((phase - 0.25) / 0.20) * PI).sin() * 350.0
        } else {
            0.0
        };

        (baseline + spike + bump).clamp(0.0, ADC_MAX as f32) as u16
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_adc_range() {
        let mut sensor = SyntheticPulse::new();
        for _ in 0..1000 {
            let s = sensor.read();
            assert!(s <= ADC_MAX, "Sample {s} exceeds the ADC range");
        }
    }

    #[test]
    fn test_waveform_has_pulses() {
        // Over one full cycle the spike must lift the signal well above
        // the baseline band, or the detector would never see a beat.
        let mut sensor = SyntheticPulse::new();
        let samples: Vec<u16> = (0..50).map(|_| sensor.read()).collect();
        let min = *samples.iter().min().unwrap();
        let max = *samples.iter().max().unwrap();
        assert!(
            max > min + 1000,
            "Expected a pronounced systolic spike, got range {min}..{max}"
        );
    }

    #[test]
    fn test_generator_is_deterministic() {
        let mut a = SyntheticPulse::new();
        let mut b = SyntheticPulse::new();
        for _ in 0..200 {
            assert_eq!(a.read(), b.read());
        }
    }
}
