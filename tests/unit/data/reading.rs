use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn reading(d: u32, temperature: f64, wind_speed: f64) -> Reading {
    Reading {
        date: day(d),
        temperature,
        humidity: 50.0,
        wind_speed,
    }
}

#[test]
fn rejects_empty_and_invalid_series() {
    assert!(ReadingSeries::from_readings(vec![]).is_err());
    assert!(ReadingSeries::from_readings(vec![reading(1, f64::NAN, 1.0)]).is_err());
    assert!(ReadingSeries::from_readings(vec![reading(1, 20.0, -0.1)]).is_err());
}

#[test]
fn frame_index_wraps_cyclically() {
    let series = ReadingSeries::from_readings(vec![
        reading(3, 10.0, 1.0),
        reading(2, 20.0, 1.0),
        reading(1, 30.0, 1.0),
    ])
    .unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.index_for_frame(FrameIndex(0)), 0);
    assert_eq!(series.index_for_frame(FrameIndex(2)), 2);
    assert_eq!(series.index_for_frame(FrameIndex(3)), 0);
    assert_eq!(series.index_for_frame(FrameIndex(u64::MAX)), (u64::MAX % 3) as usize);
    assert_eq!(series.reading_for_frame(FrameIndex(4)).date, day(2));
}

#[test]
fn normalized_temperature_spans_unit_interval() {
    let series = ReadingSeries::from_readings(vec![
        reading(3, 10.0, 1.0),
        reading(2, 20.0, 1.0),
        reading(1, 30.0, 1.0),
    ])
    .unwrap();

    assert_eq!(series.temperature_range(), (10.0, 30.0));
    assert_eq!(series.normalized_temperature(0), 0.0);
    assert_eq!(series.normalized_temperature(1), 0.5);
    assert_eq!(series.normalized_temperature(2), 1.0);
}

#[test]
fn degenerate_series_uses_fixed_midpoint() {
    let series =
        ReadingSeries::from_readings(vec![reading(2, 18.0, 0.0), reading(1, 18.0, 3.0)]).unwrap();
    assert_eq!(series.normalized_temperature(0), DEGENERATE_NORM_TEMPERATURE);
    assert_eq!(series.normalized_temperature(1), DEGENERATE_NORM_TEMPERATURE);
}

#[test]
fn reading_serializes_date_as_iso_day() {
    let json = serde_json::to_value(reading(5, 1.0, 2.0)).unwrap();
    assert_eq!(json["date"], "2024-03-05");
}
