use image::Delay;

use crate::foundation::error::{BakeError, BakeResult};

/// Frame count used when none (or a non-positive one) is given.
pub const DEFAULT_FRAME_COUNT: u32 = 2;
/// Playback rate used when none (or a non-positive one) is given.
pub const DEFAULT_FPS: u32 = 2;

const USAGE: &str = "usage: framebake [FRAMES] [FPS]";

/// How many frames to produce and how fast to play them back.
///
/// Both fields are always >= 1. Build one with [`RunConfig::new`] or
/// [`resolve_run_config`]; it is never mutated after that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of frames the program is asked to render.
    pub frame_count: u32,
    /// Requested playback rate.
    pub fps: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            fps: DEFAULT_FPS,
        }
    }
}

impl RunConfig {
    /// Validated constructor; both values must be non-zero.
    pub fn new(frame_count: u32, fps: u32) -> BakeResult<Self> {
        if frame_count == 0 {
            return Err(BakeError::validation("frame count must be > 0"));
        }
        if fps == 0 {
            return Err(BakeError::validation("frames per second must be > 0"));
        }
        Ok(Self { frame_count, fps })
    }

    /// Display duration of a single frame, `1000 / fps` milliseconds, kept as an exact ratio.
    pub fn frame_delay(self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.fps)
    }

    /// Requested display duration of a single frame in milliseconds (before GIF rounding).
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 / f64::from(self.fps)
    }
}

/// Turn the two optional positional arguments into a [`RunConfig`].
///
/// Missing or non-positive values fall back to the defaults with a warning.
/// Text that is not an integer at all is rejected.
pub fn resolve_run_config(frames: Option<&str>, fps: Option<&str>) -> BakeResult<RunConfig> {
    if frames.is_none() {
        tracing::warn!("{USAGE}");
    }
    let frame_count = resolve_positive("number of frames", frames, DEFAULT_FRAME_COUNT)?;
    let fps = resolve_positive("frames per second", fps, DEFAULT_FPS)?;
    RunConfig::new(frame_count, fps)
}

fn resolve_positive(what: &str, raw: Option<&str>, default: u32) -> BakeResult<u32> {
    let Some(raw) = raw else {
        tracing::warn!("no value provided for {what}, using default: {default}");
        return Ok(default);
    };
    let text = raw.trim();

    let value: i64 = match text.parse() {
        Ok(v) => v,
        // Integers too wide for i64: the sign alone decides.
        Err(_) if is_digits(text.strip_prefix('-')) => {
            tracing::warn!("invalid value provided for {what}: {text}, using default: {default}");
            return Ok(default);
        }
        Err(_) if is_digits(Some(text.strip_prefix('+').unwrap_or(text))) => {
            return Err(BakeError::validation(format!("{what} is too large: {text}")));
        }
        Err(_) => {
            return Err(BakeError::validation(format!(
                "{what} must be an integer, got '{raw}' ({USAGE})"
            )));
        }
    };

    if value <= 0 {
        tracing::warn!("invalid value provided for {what}: {value}, using default: {default}");
        return Ok(default);
    }

    u32::try_from(value)
        .map_err(|_| BakeError::validation(format!("{what} is too large: {value}")))
}

fn is_digits(s: Option<&str>) -> bool {
    s.is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
#[path = "../../tests/unit/config/run.rs"]
mod tests;
