use super::*;
use crate::encode::sink::{InMemorySink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::render::backend::FrameRGBA;

/// Sink that counts `begin` calls and optionally fails there.
#[derive(Default)]
struct CountingSink {
    fail: bool,
    begins: u32,
    frames: u32,
}

impl FrameSink for CountingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> WavesResult<()> {
        self.begins += 1;
        if self.fail {
            return Err(WavesError::encode("boom"));
        }
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> WavesResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> WavesResult<()> {
        Ok(())
    }
}

fn stream_two(sink: &mut dyn FrameSink) -> WavesResult<()> {
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(5, 1)?,
    })?;
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    };
    sink.push_frame(FrameIndex(0), &frame)?;
    sink.push_frame(FrameIndex(1), &frame)?;
    sink.end()
}

#[test]
fn primary_success_leaves_secondary_untouched() {
    let mut primary = InMemorySink::new();
    let mut secondary = CountingSink::default();

    let outcome = export_with_fallback(stream_two, &mut primary, &mut secondary);

    assert!(matches!(outcome, ExportOutcome::Primary));
    assert!(outcome.is_success());
    assert_eq!(primary.frames().len(), 2);
    assert!(primary.ended());
    assert_eq!(secondary.begins, 0);
}

#[test]
fn primary_failure_runs_secondary_once() {
    let mut primary = CountingSink {
        fail: true,
        ..Default::default()
    };
    let mut secondary = InMemorySink::new();

    let outcome = export_with_fallback(stream_two, &mut primary, &mut secondary);

    assert!(outcome.used_fallback());
    match outcome {
        ExportOutcome::Secondary { primary_error } => {
            assert!(primary_error.to_string().contains("boom"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(primary.begins, 1);
    assert_eq!(primary.frames, 0);
    assert_eq!(secondary.frames().len(), 2);
}

#[test]
fn double_failure_is_reported_not_raised() {
    let mut primary = CountingSink {
        fail: true,
        ..Default::default()
    };
    let mut secondary = CountingSink {
        fail: true,
        ..Default::default()
    };

    let outcome = export_with_fallback(stream_two, &mut primary, &mut secondary);

    assert!(!outcome.is_success());
    assert!(matches!(outcome, ExportOutcome::Failed { .. }));
    assert_eq!(primary.begins, 1);
    assert_eq!(secondary.begins, 1);
}
