use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(5, 1).unwrap(),
    }
}

#[test]
fn flatten_premul_over_black_produces_expected_rgb() {
    // Premultiplied red @ 50% alpha => rgb is 128,0,0 when premul.
    let src = vec![128u8, 0u8, 0u8, 128u8];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0u8, 0u8, 255u8]);
}

#[test]
fn flatten_straight_over_black_produces_expected_rgb() {
    // Straight red @ 50% alpha => rgb becomes 128,0,0 over black.
    let src = vec![255u8, 0u8, 0u8, 128u8];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0u8, 0u8, 255u8]);
}

#[test]
fn flatten_alpha_0_returns_bg_and_rejects_mismatch() {
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &[0, 0, 0, 0], true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);

    let mut short = vec![0u8; 3];
    assert!(flatten_to_opaque_rgba8(&mut short, &[0, 0, 0], true, [0, 0, 0, 255]).is_err());
}

#[test]
fn begin_rejects_odd_dimensions() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/odd.mp4"));
    assert!(matches!(
        sink.begin(cfg(11, 10)),
        Err(WavesError::Validation(_))
    ));
}

#[test]
fn missing_program_is_an_encode_error() {
    let mut opts = FfmpegSinkOpts::new("target/ffmpeg_unit/missing.mp4");
    opts.program = PathBuf::from("definitely-not-an-ffmpeg-binary");
    let mut sink = FfmpegSink::new(opts);
    assert!(matches!(sink.begin(cfg(10, 10)), Err(WavesError::Encode(_))));
    assert!(sink.end().is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/nobegin.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.describe().contains("nobegin.mp4"));
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(Path::new("bare.mp4")).unwrap();
    ensure_parent_dir(Path::new("target/ffmpeg_unit/nested/x.mp4")).unwrap();
    assert!(Path::new("target/ffmpeg_unit/nested").is_dir());
}

/// Stand-in encoder: answers `-version`, otherwise copies stdin into its last argument.
#[cfg(unix)]
fn fake_encoder(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt as _;

    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("fake-ffmpeg.sh");
    std::fs::write(
        &path,
        "#!/bin/sh\n[ \"$1\" = \"-version\" ] && exit 0\nfor a; do out=\"$a\"; done\nexec cat > \"$out\"\n",
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn abort_stops_encoder_and_removes_partial_file() {
    let dir = PathBuf::from("target").join("ffmpeg_unit").join("abort");
    let out = dir.join("partial.mp4");
    let mut opts = FfmpegSinkOpts::new(&out);
    opts.program = fake_encoder(&dir);
    let mut sink = FfmpegSink::new(opts);

    sink.begin(cfg(2, 2)).unwrap();
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![255; 16],
        premultiplied: true,
    };
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.abort();

    assert!(!out.exists());
    assert!(sink.push_frame(FrameIndex(1), &frame).is_err());
    // A second abort is a no-op.
    sink.abort();
}

#[cfg(unix)]
#[test]
fn end_keeps_output_of_successful_encoder() {
    let dir = PathBuf::from("target").join("ffmpeg_unit").join("finish");
    let out = dir.join("done.mp4");
    let mut opts = FfmpegSinkOpts::new(&out);
    opts.program = fake_encoder(&dir);
    let mut sink = FfmpegSink::new(opts);

    sink.begin(cfg(2, 2)).unwrap();
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![255; 16],
        premultiplied: true,
    };
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.end().unwrap();
    drop(sink);

    assert_eq!(std::fs::read(&out).unwrap().len(), 16);
}
