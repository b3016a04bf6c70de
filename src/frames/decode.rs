use std::path::Path;

use anyhow::Context as _;
use image::{ImageReader, RgbaImage};

use crate::foundation::error::BakeResult;

/// Decode one frame file into straight (non-premultiplied) RGBA8.
///
/// The format is sniffed from the file contents, so PPM/PGM/PAM and anything else the
/// `image` crate knows all work.
pub fn decode_frame(path: &Path) -> BakeResult<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("open frame '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff frame format '{}'", path.display()))?
        .decode()
        .with_context(|| format!("decode frame '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/frames/decode.rs"]
mod tests;
