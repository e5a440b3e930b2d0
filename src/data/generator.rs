use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::data::reading::{Reading, ReadingSeries};
use crate::foundation::error::{WavesError, WavesResult};
use crate::foundation::math::linspace;

/// Sinusoidal base plus Gaussian noise for one reading field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldProfile {
    /// Mean level.
    pub base: f64,
    /// Sinusoid amplitude around `base`.
    pub swing: f64,
    /// Phase offset in radians.
    pub phase: f64,
    /// Standard deviation of the additive noise.
    pub noise_std: f64,
}

impl FieldProfile {
    /// Construct a profile.
    pub const fn new(base: f64, swing: f64, phase: f64, noise_std: f64) -> Self {
        Self {
            base,
            swing,
            phase,
            noise_std,
        }
    }

    fn noise(&self, field: &str) -> WavesResult<Normal<f64>> {
        // `Normal::new` accepts a negative standard deviation.
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(WavesError::validation(format!(
                "{field} noise_std must be finite and >= 0 (got {})",
                self.noise_std
            )));
        }
        Normal::new(0.0, self.noise_std).map_err(|e| {
            WavesError::validation(format!(
                "{field} noise_std {} is invalid: {e}",
                self.noise_std
            ))
        })
    }

    fn base_at(&self, t: f64) -> f64 {
        self.base + self.swing * (t + self.phase).sin()
    }
}

/// Builds a rolling window of synthetic daily readings ending today.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGenerator {
    /// Number of days.
    pub len: usize,
    /// Date of reading 0; reading `i` is `today - i` days.
    pub today: NaiveDate,
    /// Temperature profile (°C).
    pub temperature: FieldProfile,
    /// Humidity profile (%).
    pub humidity: FieldProfile,
    /// Wind speed profile (m/s), rectified after noise.
    pub wind_speed: FieldProfile,
}

impl SeriesGenerator {
    /// Stock 30-day generator.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            len: 30,
            today,
            temperature: FieldProfile::new(20.0, 5.0, 0.0, 1.0),
            humidity: FieldProfile::new(60.0, 15.0, 0.5, 3.0),
            wind_speed: FieldProfile::new(5.0, 3.0, 1.0, 1.0),
        }
    }

    /// Override the number of days.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Generate the series, newest day first.
    #[tracing::instrument(skip(self, rng), fields(len = self.len))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> WavesResult<ReadingSeries> {
        if self.len == 0 {
            return Err(WavesError::validation("series length must be > 0"));
        }

        let temp_noise = self.temperature.noise("temperature")?;
        let hum_noise = self.humidity.noise("humidity")?;
        let wind_noise = self.wind_speed.noise("wind_speed")?;

        // All temperatures first, then humidity, then wind: one noise vector per field.
        let ts = linspace(0.0, std::f64::consts::TAU, self.len);
        let temps: Vec<f64> = ts
            .iter()
            .map(|&t| self.temperature.base_at(t) + temp_noise.sample(rng))
            .collect();
        let hums: Vec<f64> = ts
            .iter()
            .map(|&t| self.humidity.base_at(t) + hum_noise.sample(rng))
            .collect();
        let winds: Vec<f64> = ts
            .iter()
            .map(|&t| (self.wind_speed.base_at(t) + wind_noise.sample(rng)).abs())
            .collect();

        let mut readings = Vec::with_capacity(self.len);
        for i in 0..self.len {
            let date = self
                .today
                .checked_sub_days(Days::new(i as u64))
                .ok_or_else(|| {
                    WavesError::validation(format!(
                        "cannot step {i} days back from {}",
                        self.today
                    ))
                })?;
            readings.push(Reading {
                date,
                temperature: temps[i],
                humidity: hums[i],
                wind_speed: winds[i],
            });
        }

        let series = ReadingSeries::from_readings(readings)?;
        let (lo, hi) = series.temperature_range();
        tracing::debug!(temp_min = lo, temp_max = hi, "generated weather series");
        Ok(series)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/generator.rs"]
mod tests;
