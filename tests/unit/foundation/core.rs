use super::*;

#[test]
fn frame_range_len_and_iter() {
    let r = FrameRange {
        start: FrameIndex(2),
        end: FrameIndex(6),
    };
    assert_eq!(r.len_frames(), 4);
    assert!(!r.is_empty());
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4), FrameIndex(5)]
    );
    assert_eq!(FrameRange::first(3).len_frames(), 3);

    assert!(FrameRange::first(0).is_empty());
}

#[test]
fn fps_rejects_zero_and_converts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(5, 0).is_err());

    let fps = Fps::new(5, 1).unwrap();
    assert_eq!(fps.as_f64(), 5.0);
    assert!((fps.frame_duration_secs() - 0.2).abs() < 1e-12);
}
