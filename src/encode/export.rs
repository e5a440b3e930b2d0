use crate::encode::sink::FrameSink;
use crate::foundation::error::{WavesError, WavesResult};

/// Result of [`export_with_fallback`].
#[derive(Debug)]
pub enum ExportOutcome {
    /// The primary sink completed.
    Primary,
    /// The primary sink failed and the secondary completed.
    Secondary {
        /// Why the primary sink failed.
        primary_error: WavesError,
    },
    /// Both sinks failed. Nothing usable was written.
    Failed {
        /// Why the primary sink failed.
        primary_error: WavesError,
        /// Why the secondary sink failed.
        secondary_error: WavesError,
    },
}

impl ExportOutcome {
    /// `true` unless both sinks failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// `true` when the secondary sink produced the output.
    pub fn used_fallback(&self) -> bool {
        matches!(self, Self::Secondary { .. })
    }
}

/// Run `render` into `primary`; if anything fails, run it once into `secondary`.
///
/// `render` streams a whole animation into the sink it is given (begin, frames, end). The
/// secondary sink is untouched when the primary succeeds. A double failure is reported through
/// [`ExportOutcome::Failed`], not as an `Err`.
pub fn export_with_fallback<F>(
    mut render: F,
    primary: &mut dyn FrameSink,
    secondary: &mut dyn FrameSink,
) -> ExportOutcome
where
    F: FnMut(&mut dyn FrameSink) -> WavesResult<()>,
{
    let primary_error = match render(&mut *primary) {
        Ok(()) => {
            tracing::info!(sink = %primary.describe(), "export complete");
            return ExportOutcome::Primary;
        }
        Err(e) => e,
    };
    tracing::warn!(
        sink = %primary.describe(),
        error = %primary_error,
        fallback = %secondary.describe(),
        "primary export failed, trying fallback"
    );

    match render(&mut *secondary) {
        Ok(()) => {
            tracing::info!(sink = %secondary.describe(), "fallback export complete");
            ExportOutcome::Secondary { primary_error }
        }
        Err(secondary_error) => {
            tracing::error!(
                sink = %secondary.describe(),
                error = %secondary_error,
                "fallback export failed"
            );
            ExportOutcome::Failed {
                primary_error,
                secondary_error,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
