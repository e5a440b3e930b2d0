use chrono::NaiveDate;

use super::*;
use crate::data::reading::Reading;

fn series(values: &[(f64, f64, f64)]) -> ReadingSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    ReadingSeries::from_readings(
        values
            .iter()
            .enumerate()
            .map(|(i, &(temperature, humidity, wind_speed))| Reading {
                date: start - chrono::Days::new(i as u64),
                temperature,
                humidity,
                wind_speed,
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn maps_reading_to_parameters() {
    let s = series(&[(10.0, 50.0, 0.0), (30.0, 100.0, 12.5), (20.0, 0.0, 5.0)]);

    let f0 = map_frame(&s, FrameIndex(0));
    assert_eq!(f0.index, 0);
    assert_eq!(f0.frequency, 0.5);
    assert_eq!(f0.amplitude, 1.0);
    assert_eq!(f0.complexity, 1.0);
    assert_eq!(f0.harmonic_count(), 1);

    let f1 = map_frame(&s, FrameIndex(1));
    assert_eq!(f1.frequency, 2.0);
    assert_eq!(f1.amplitude, 1.5);
    assert_eq!(f1.complexity, 3.5);
    assert_eq!(f1.harmonic_count(), 3);

    let f2 = map_frame(&s, FrameIndex(2));
    assert_eq!(f2.frequency, 1.25);
    assert_eq!(f2.amplitude, 0.5);
    assert_eq!(f2.complexity, 2.0);
    assert_eq!(f2.harmonic_count(), 2);
}

#[test]
fn frames_replay_cyclically() {
    let s = series(&[(10.0, 50.0, 1.0), (30.0, 60.0, 2.0), (20.0, 70.0, 3.0)]);
    for frame in 0..20u64 {
        let st = map_frame(&s, FrameIndex(frame));
        assert_eq!(st.index, (frame % 3) as usize);
        assert_eq!(st, map_frame(&s, FrameIndex(frame + 3)));
    }
}

#[test]
fn degenerate_temperatures_use_fixed_frequency() {
    let s = series(&[(21.0, 40.0, 1.0), (21.0, 80.0, 2.0)]);
    let st = map_frame(&s, FrameIndex(1));
    assert_eq!(st.norm_temperature, 0.5);
    assert_eq!(st.frequency, 1.25);
    assert!(st.frequency.is_finite());
}

#[test]
fn harmonic_count_is_floor_and_at_least_one() {
    assert_eq!(harmonic_count(1.0), 1);
    assert_eq!(harmonic_count(1.99), 1);
    assert_eq!(harmonic_count(2.0), 2);
    assert_eq!(harmonic_count(4.7), 4);
    assert_eq!(harmonic_count(0.2), 1);
    assert_eq!(harmonic_count(f64::NAN), 1);
}

#[test]
fn extreme_wind_caps_harmonics() {
    assert_eq!(harmonic_count(32.9), MAX_HARMONICS);
    assert_eq!(harmonic_count(1e12), MAX_HARMONICS);

    let s = series(&[(10.0, 50.0, 1e15)]);
    let state = map_frame(&s, FrameIndex(0));
    assert!(state.complexity > 1e14);
    assert_eq!(state.harmonic_count(), MAX_HARMONICS);
}
