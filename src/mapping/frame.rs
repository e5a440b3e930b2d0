use crate::data::reading::ReadingSeries;
use crate::foundation::core::FrameIndex;

/// Lower bound of the frequency mapping.
pub const FREQUENCY_MIN: f64 = 0.5;
/// Width of the frequency mapping (`FREQUENCY_MIN ..= FREQUENCY_MIN + FREQUENCY_SPAN`).
pub const FREQUENCY_SPAN: f64 = 1.5;
/// Amplitude at 0 % humidity.
pub const AMPLITUDE_BASE: f64 = 0.5;
/// Wind speed (m/s) that adds one unit of complexity.
pub const WIND_PER_COMPLEXITY: f64 = 5.0;
/// Upper bound on harmonics per line (reached at 155 m/s of wind).
pub const MAX_HARMONICS: usize = 32;

/// Waveform parameters derived from the reading selected by a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Index into the reading series (`frame mod len`).
    pub index: usize,
    /// Min-max scaled temperature in `[0, 1]`.
    pub norm_temperature: f64,
    /// Base angular frequency, in `[0.5, 2.0]`.
    pub frequency: f64,
    /// Base amplitude.
    pub amplitude: f64,
    /// Harmonic/noise driver, always `>= 1`.
    pub complexity: f64,
}

impl FrameState {
    /// Number of harmonics layered over the base sine: `floor(complexity)`.
    pub fn harmonic_count(&self) -> usize {
        harmonic_count(self.complexity)
    }
}

/// `floor(complexity)`, clamped to `1..=MAX_HARMONICS`.
pub fn harmonic_count(complexity: f64) -> usize {
    if complexity.is_finite() {
        (complexity.floor() as usize).clamp(1, MAX_HARMONICS)
    } else {
        1
    }
}

/// Map a frame counter onto the series and derive its waveform parameters.
pub fn map_frame(series: &ReadingSeries, frame: FrameIndex) -> FrameState {
    let index = series.index_for_frame(frame);
    let reading = series.reading_for_frame(frame);
    let norm_temperature = series.normalized_temperature(index);

    FrameState {
        index,
        norm_temperature,
        frequency: FREQUENCY_MIN + FREQUENCY_SPAN * norm_temperature,
        amplitude: AMPLITUDE_BASE + reading.humidity / 100.0,
        complexity: 1.0 + reading.wind_speed / WIND_PER_COMPLEXITY,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/frame.rs"]
mod tests;
