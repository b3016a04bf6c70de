//! framebake builds a small C++ renderer, runs it to produce PPM frames, and bakes the
//! frames into a looping GIF preview.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `[frames] [fps]` -> [`RunConfig`] (defaults for missing/non-positive values)
//! 2. **Select platform**: [`HostOs`] -> [`PlatformProfile`] (compiler, defines, includes, libs)
//! 3. **Compile**: one shell line; a non-zero exit aborts the pipeline
//! 4. **Run**: `./project N` (or `project.exe N`) writes `frames/output_{i}.ppm`
//! 5. **Assemble**: the frames that exist -> `output_animation.gif`, `1000 / fps` ms per frame
//!
//! Everything runs once, in order, on the calling thread.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod build;
mod config;
mod encode;
mod foundation;
mod frames;
mod pipeline;
mod platform;

pub use build::compile::{compile, ensure_frames_dir};
pub use build::run::{ProgramOutcome, run_program};
pub use build::shell::{CommandOutcome, ShellCommand, ShellRunner, SystemShell};
pub use config::layout::{FRAMES_DIR, OUTPUT_FILE_NAME, ProjectLayout, SOURCE_GLOB};
pub use config::run::{DEFAULT_FPS, DEFAULT_FRAME_COUNT, RunConfig, resolve_run_config};
pub use encode::gif::{
    DEFAULT_GIF_SPEED, GifConfig, MIN_GIF_DELAY_MS, encode_gif, stored_delay_ms,
};
pub use foundation::error::{BakeError, BakeResult};
pub use frames::decode::decode_frame;
pub use frames::sequence::{FrameScan, frame_path, scan_frames};
pub use pipeline::{AssembleReport, PipelineReport, assemble_animation, run_pipeline};
pub use platform::host::HostOs;
pub use platform::profile::{Launcher, PlatformProfile};
