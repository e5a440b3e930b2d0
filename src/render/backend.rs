/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::CpuRenderer`] are **premultiplied alpha**; the `premultiplied`
/// flag makes this explicit at sink boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to opaque straight-alpha RGBA8 by compositing over `bg_rgba`.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> crate::WavesResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        crate::encode::ffmpeg::flatten_to_opaque_rgba8(
            &mut out,
            &self.data,
            self.premultiplied,
            bg_rgba,
        )?;
        Ok(out)
    }
}
