use super::*;

fn space() -> PlotSpace {
    PlotSpace {
        x_range: [0.0, 10.0],
        y_range: [-3.0, 3.0],
        width: 1200.0,
        height: 800.0,
    }
}

#[test]
fn plot_corners_map_to_canvas_corners() {
    let s = space();
    assert_eq!(s.to_px(0.0, 3.0), Point::new(0.0, 0.0));
    assert_eq!(s.to_px(10.0, -3.0), Point::new(1200.0, 800.0));
    assert_eq!(s.to_px(5.0, 0.0), Point::new(600.0, 400.0));
}

#[test]
fn polyline_skips_non_finite_samples() {
    let wave = Waveform {
        line: 0,
        xs: vec![0.0, 1.0, 2.0, 3.0],
        ys: vec![0.0, f64::NAN, 1.0, 2.0],
    };
    let path = space().polyline(&wave);
    let els: Vec<_> = path.elements().to_vec();
    assert_eq!(els.len(), 3);
    assert!(matches!(els[0], kurbo::PathEl::MoveTo(_)));
    assert!(matches!(els[1], kurbo::PathEl::MoveTo(_)));
    assert!(matches!(els[2], kurbo::PathEl::LineTo(_)));
}

#[test]
fn anchors_have_svg_names() {
    assert_eq!(TextAnchor::Start.as_svg(), "start");
    assert_eq!(TextAnchor::Middle.as_svg(), "middle");
    assert_eq!(TextAnchor::End.as_svg(), "end");
}
