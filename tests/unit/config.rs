use super::*;

#[test]
fn defaults_match_stock_animation() {
    let cfg = VisualizerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 1200);
    assert_eq!(cfg.canvas.height, 800);
    assert_eq!(cfg.fps, Fps { num: 5, den: 1 });
    assert_eq!(cfg.series_len, 30);
    assert_eq!(cfg.total_frames(), 60);
    assert_eq!(cfg.lines, 5);
    assert_eq!(cfg.samples, 1000);
    assert_eq!(cfg.interval(), std::time::Duration::from_millis(300));
    assert!(cfg.repeat);
}

#[test]
fn export_paths_share_stem() {
    let cfg = VisualizerConfig::default();
    assert_eq!(
        cfg.video_path(),
        PathBuf::from("output").join("weather_visualization.mp4")
    );
    assert_eq!(
        cfg.gif_path(),
        PathBuf::from("output").join("weather_visualization.gif")
    );
    assert_eq!(cfg.video_path().file_stem(), cfg.gif_path().file_stem());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: VisualizerConfig =
        serde_json::from_str(r#"{ "seed": 7, "series_len": 10, "lines": 3 }"#).unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.series_len, 10);
    assert_eq!(cfg.lines, 3);
    assert_eq!(cfg.samples, 1000);
    assert_eq!(cfg.total_frames(), 20);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<VisualizerConfig>(r#"{ "colour": "red" }"#).is_err());
}

#[test]
fn validation_catches_bad_values() {
    let bad = [
        VisualizerConfig {
            series_len: 0,
            ..Default::default()
        },
        VisualizerConfig {
            samples: 1,
            ..Default::default()
        },
        VisualizerConfig {
            x_range: [1.0, 1.0],
            ..Default::default()
        },
        VisualizerConfig {
            y_range: [f64::NAN, 1.0],
            ..Default::default()
        },
        VisualizerConfig {
            gradient: vec!["#000000".to_owned()],
            ..Default::default()
        },
        VisualizerConfig {
            fps: Fps { num: 5, den: 0 },
            ..Default::default()
        },
        VisualizerConfig {
            canvas: Canvas {
                width: 70_000,
                height: 10,
            },
            ..Default::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn from_path_reads_json_file() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cfg.json");
    std::fs::write(&path, r#"{ "title": "Hello", "repeat": false }"#).unwrap();

    let cfg = VisualizerConfig::from_path(&path).unwrap();
    assert_eq!(cfg.title, "Hello");
    assert!(!cfg.repeat);

    assert!(VisualizerConfig::from_path(dir.join("missing.json")).is_err());
}

#[test]
fn pt_to_px_at_100_dpi() {
    assert!((pt_to_px(72.0) - 100.0).abs() < 1e-4);
}
