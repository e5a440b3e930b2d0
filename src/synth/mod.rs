pub(crate) mod waveform;
