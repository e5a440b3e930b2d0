use crate::foundation::error::{WavesError, WavesResult};

/// Straight RGB8 color.
pub type Rgb8 = [u8; 3];

/// Piecewise-linear color map over `[0, 1]` with evenly spaced stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGradient {
    stops: Vec<Rgb8>,
}

impl ColorGradient {
    /// Build from explicit stops (at least two).
    pub fn new(stops: Vec<Rgb8>) -> WavesResult<Self> {
        if stops.len() < 2 {
            return Err(WavesError::validation(
                "color gradient needs at least two stops",
            ));
        }
        Ok(Self { stops })
    }

    /// Build from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(stops: &[S]) -> WavesResult<Self> {
        let stops = stops
            .iter()
            .map(|s| parse_hex(s.as_ref()).map_err(WavesError::validation))
            .collect::<WavesResult<Vec<_>>>()?;
        Self::new(stops)
    }

    /// Color at `t`, clamped into `[0, 1]`. NaN maps to the first stop.
    pub fn sample(&self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f64;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(self.stops.len() - 2);
        let local = pos - i as f64;

        let a = self.stops[i];
        let b = self.stops[i + 1];
        let mut out = [0u8; 3];
        for c in 0..3 {
            let v = f64::from(a[c]) + (f64::from(b[c]) - f64::from(a[c])) * local;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err(format!(
            "gradient color \"{s}\" must be #RRGGBB (case-insensitive)"
        ));
    }
    Ok([hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?])
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/gradient.rs"]
mod tests;
