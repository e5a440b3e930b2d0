use chrono::NaiveDate;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WavesError, WavesResult};
use crate::foundation::math::{min_max, normalize_min_max};

/// Normalized temperature used when every reading has the same temperature.
pub const DEGENERATE_NORM_TEMPERATURE: f64 = 0.5;

/// One synthetic day of weather.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reading {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Meters per second, never negative.
    pub wind_speed: f64,
}

/// Immutable, non-empty series of readings with cached temperature bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReadingSeries {
    readings: Vec<Reading>,
    #[serde(skip)]
    temp_min: f64,
    #[serde(skip)]
    temp_max: f64,
}

impl ReadingSeries {
    /// Validate and wrap a list of readings.
    pub fn from_readings(readings: Vec<Reading>) -> WavesResult<Self> {
        for (i, r) in readings.iter().enumerate() {
            if !r.temperature.is_finite() || !r.humidity.is_finite() || !r.wind_speed.is_finite()
            {
                return Err(WavesError::validation(format!(
                    "reading {i} ({}) has a non-finite value",
                    r.date
                )));
            }
            if r.wind_speed < 0.0 {
                return Err(WavesError::validation(format!(
                    "reading {i} ({}) has negative wind speed {}",
                    r.date, r.wind_speed
                )));
            }
        }

        let temps: Vec<f64> = readings.iter().map(|r| r.temperature).collect();
        let (temp_min, temp_max) =
            min_max(&temps).ok_or_else(|| WavesError::validation("reading series is empty"))?;

        Ok(Self {
            readings,
            temp_min,
            temp_max,
        })
    }

    /// Number of readings (always > 0).
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// All readings, newest first.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Reading at `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<&Reading> {
        self.readings.get(idx)
    }

    /// `(min, max)` temperature over the whole series.
    pub fn temperature_range(&self) -> (f64, f64) {
        (self.temp_min, self.temp_max)
    }

    /// Cyclic replay: `frame mod len`.
    pub fn index_for_frame(&self, frame: FrameIndex) -> usize {
        (frame.0 % self.readings.len() as u64) as usize
    }

    /// Reading selected by a frame counter.
    pub fn reading_for_frame(&self, frame: FrameIndex) -> &Reading {
        &self.readings[self.index_for_frame(frame)]
    }

    /// Min-max scaled temperature of reading `idx` in `[0, 1]`.
    ///
    /// A series whose temperatures are all equal maps to [`DEGENERATE_NORM_TEMPERATURE`].
    /// Out-of-range indices wrap like frame indices.
    pub fn normalized_temperature(&self, idx: usize) -> f64 {
        let r = &self.readings[idx % self.readings.len()];
        normalize_min_max(r.temperature, self.temp_min, self.temp_max)
            .unwrap_or(DEGENERATE_NORM_TEMPERATURE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/reading.rs"]
mod tests;
