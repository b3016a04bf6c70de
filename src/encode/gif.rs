use std::path::PathBuf;

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::error::{BakeError, BakeResult};

/// NeuQuant sampling factor handed to the GIF encoder: 1 is best quality, 30 is fastest.
pub const DEFAULT_GIF_SPEED: i32 = 10;

/// Shortest frame delay a GIF can store (one centisecond).
pub const MIN_GIF_DELAY_MS: u32 = 10;

/// Output settings for [`encode_gif`].
#[derive(Clone, Debug)]
pub struct GifConfig {
    /// Destination file; replaced if it exists.
    pub out_path: PathBuf,
    /// Display time of every frame.
    pub delay: Delay,
    /// Quantizer speed, `1..=30`.
    pub speed: i32,
}

impl GifConfig {
    /// Config with [`DEFAULT_GIF_SPEED`].
    pub fn new(out_path: impl Into<PathBuf>, delay: Delay) -> Self {
        Self {
            out_path: out_path.into(),
            delay,
            speed: DEFAULT_GIF_SPEED,
        }
    }

    /// Reject settings the encoder would silently mangle.
    pub fn validate(&self) -> BakeResult<()> {
        if !(1..=30).contains(&self.speed) {
            return Err(BakeError::validation(format!(
                "gif speed must be within 1..=30, got {}",
                self.speed
            )));
        }
        if stored_delay_ms(self.delay) < MIN_GIF_DELAY_MS {
            let (numer, denom) = self.delay.numer_denom_ms();
            return Err(BakeError::validation(format!(
                "gif frame delay must be at least {MIN_GIF_DELAY_MS} ms, got {numer}/{denom} ms"
            )));
        }
        Ok(())
    }
}

/// The delay a GIF actually records for `delay`: whole milliseconds, truncated to
/// centiseconds.
pub fn stored_delay_ms(delay: Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return 0;
    }
    numer / denom / 10 * 10
}

/// Encode `frames` into a GIF that loops forever and write it to `cfg.out_path`,
/// replacing any file already there.
///
/// All frames must share the first frame's dimensions. The file is only written once
/// encoding has fully succeeded.
pub fn encode_gif(frames: Vec<RgbaImage>, cfg: &GifConfig) -> BakeResult<()> {
    cfg.validate()?;

    let Some(first) = frames.first() else {
        return Err(BakeError::encode(format!(
            "no frames to encode into '{}'",
            cfg.out_path.display()
        )));
    };

    let (width, height) = first.dimensions();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(BakeError::validation(format!(
            "frame size {width}x{height} exceeds the gif limit of 65535x65535"
        )));
    }
    for (i, frame) in frames.iter().enumerate().skip(1) {
        if frame.dimensions() != (width, height) {
            return Err(BakeError::validation(format!(
                "frame size mismatch at frame {i}: got {}x{}, expected {width}x{height}",
                frame.width(),
                frame.height()
            )));
        }
    }

    let count = frames.len();
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buf, cfg.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| BakeError::encode(format!("failed to set gif loop count: {e}")))?;

        for (i, frame) in frames.into_iter().enumerate() {
            encoder
                .encode_frame(Frame::from_parts(frame, 0, 0, cfg.delay))
                .map_err(|e| BakeError::encode(format!("failed to encode frame {i}: {e}")))?;
        }
    }

    if let Some(parent) = cfg.out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    std::fs::write(&cfg.out_path, &buf)
        .with_context(|| format!("write gif '{}'", cfg.out_path.display()))?;

    tracing::debug!(
        frames = count,
        bytes = buf.len(),
        path = %cfg.out_path.display(),
        "gif written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
