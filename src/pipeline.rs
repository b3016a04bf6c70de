use std::path::PathBuf;

use image::Delay;

use crate::{
    build::{
        compile::{compile, ensure_frames_dir},
        run::{ProgramOutcome, run_program},
        shell::ShellRunner,
    },
    config::{layout::ProjectLayout, run::RunConfig},
    encode::gif::{GifConfig, MIN_GIF_DELAY_MS, encode_gif, stored_delay_ms},
    foundation::error::BakeResult,
    frames::{decode::decode_frame, sequence::scan_frames},
    platform::profile::PlatformProfile,
};

/// Outcome of [`assemble_animation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembleReport {
    /// Frames written into the GIF.
    pub frames_encoded: usize,
    /// Indices with no frame file, ascending.
    pub missing: Vec<u32>,
    /// Per-frame delay as stored in the GIF (centisecond precision).
    pub frame_delay_ms: u32,
    /// Where the GIF was written.
    pub out_path: PathBuf,
}

/// Outcome of a full [`run_pipeline`] pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineReport {
    /// The compile line that was run.
    pub compile_command: String,
    /// What happened when the frame program was launched.
    pub program: ProgramOutcome,
    /// The assembly step's report.
    pub assembled: AssembleReport,
}

/// Collect `output_0..output_{n-1}` from the frames directory and bake the ones that
/// exist into the looping output GIF.
///
/// Missing frames leave no placeholder; later frames keep their relative order.
pub fn assemble_animation(run: &RunConfig, layout: &ProjectLayout) -> BakeResult<AssembleReport> {
    let scan = scan_frames(&layout.frames_path(), run.frame_count);
    if !scan.missing.is_empty() {
        tracing::debug!(missing = ?scan.missing, "some frames were not produced");
    }

    let frames = scan
        .present
        .iter()
        .map(|(_, path)| decode_frame(path))
        .collect::<BakeResult<Vec<_>>>()?;

    let mut delay = run.frame_delay();
    if stored_delay_ms(delay) < MIN_GIF_DELAY_MS {
        tracing::warn!(
            "{} fps needs {:.2} ms per frame but gif stores at least {MIN_GIF_DELAY_MS} ms, using {MIN_GIF_DELAY_MS} ms",
            run.fps,
            run.frame_duration_ms()
        );
        delay = Delay::from_numer_denom_ms(MIN_GIF_DELAY_MS, 1);
    }

    let frames_encoded = frames.len();
    let out_path = layout.output_path();
    encode_gif(frames, &GifConfig::new(&out_path, delay))?;

    Ok(AssembleReport {
        frames_encoded,
        missing: scan.missing,
        frame_delay_ms: stored_delay_ms(delay),
        out_path,
    })
}

/// Run every stage once, in order: compile, run the program, assemble.
///
/// Compile failure stops the pipeline before the program is launched. A failing
/// program does not.
pub fn run_pipeline(
    run: &RunConfig,
    profile: &PlatformProfile,
    layout: &ProjectLayout,
    shell: &mut dyn ShellRunner,
) -> BakeResult<PipelineReport> {
    ensure_frames_dir(layout)?;
    let compile_command = compile(profile, layout, shell)?;
    let program = run_program(run, profile, layout, shell)?;
    let assembled = assemble_animation(run, layout)?;

    Ok(PipelineReport {
        compile_command,
        program,
        assembled,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
