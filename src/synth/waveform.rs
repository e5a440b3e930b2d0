use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::foundation::error::{WavesError, WavesResult};
use crate::foundation::math::linspace;
use crate::mapping::frame::FrameState;

/// Noise standard deviation per unit of complexity.
pub const NOISE_PER_COMPLEXITY: f64 = 0.05;

/// Sampling grid shared by every line of a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveDomain {
    xs: Vec<f64>,
}

impl WaveDomain {
    /// `samples` evenly spaced x values over `[x_min, x_max]`.
    pub fn new(x_min: f64, x_max: f64, samples: usize) -> WavesResult<Self> {
        if samples < 2 {
            return Err(WavesError::validation("wave domain needs at least 2 samples"));
        }
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(WavesError::validation(format!(
                "wave domain must be finite with x_min < x_max (got [{x_min}, {x_max}])"
            )));
        }
        Ok(Self {
            xs: linspace(x_min, x_max, samples),
        })
    }

    /// Sample positions.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false` for a validated domain.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// One sampled curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Waveform {
    /// Line index the curve was synthesized for.
    pub line: usize,
    /// Sample positions (shared grid).
    pub xs: Vec<f64>,
    /// Curve values, one per x.
    pub ys: Vec<f64>,
}

impl Waveform {
    /// `(x, y)` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Phase of the base sine for `line`: quarter turns.
pub fn line_phase(line: usize) -> f64 {
    line as f64 * PI / 2.0
}

/// Phase of harmonic `i` (1-based) for `line`.
pub fn harmonic_phase(line: usize, i: usize) -> f64 {
    line as f64 * PI / (i as f64 + 1.0)
}

/// Noise-free curve value at `x`.
pub fn clean_value(state: &FrameState, line: usize, x: f64) -> f64 {
    let a = state.amplitude;
    let f = state.frequency;
    let mut y = a * (f * x + line_phase(line)).sin();
    for i in 1..=state.harmonic_count() {
        let fi = i as f64;
        let amp = a / (fi * 2.0);
        let freq = f * (fi + 0.5);
        y += amp * (freq * x + harmonic_phase(line, i)).sin();
    }
    y
}

/// Sample the curve for `line` and add Gaussian jitter scaled by complexity.
pub fn synthesize<R: Rng + ?Sized>(
    state: &FrameState,
    line: usize,
    domain: &WaveDomain,
    rng: &mut R,
) -> WavesResult<Waveform> {
    let sigma = NOISE_PER_COMPLEXITY * state.complexity;
    let noise = Normal::new(0.0, sigma)
        .map_err(|e| WavesError::evaluation(format!("invalid waveform noise sigma {sigma}: {e}")))?;

    let ys = domain
        .xs()
        .iter()
        .map(|&x| clean_value(state, line, x) + noise.sample(rng))
        .collect();

    Ok(Waveform {
        line,
        xs: domain.xs().to_vec(),
        ys,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/synth/waveform.rs"]
mod tests;
