use crate::{
    build::shell::{CommandOutcome, ShellCommand, ShellRunner},
    config::{layout::ProjectLayout, run::RunConfig},
    foundation::error::BakeResult,
    platform::profile::PlatformProfile,
};

/// What happened when the frame-producing program was launched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramOutcome {
    /// The executable was not on disk; nothing ran.
    Skipped,
    /// The program exited with status 0.
    Succeeded,
    /// The program ran and failed.
    Failed {
        /// How it exited.
        status: CommandOutcome,
    },
}

/// Run the compiled program once, passing the frame count as its only argument.
///
/// A failing program is logged and returned, not raised: the frames it did write are
/// still worth assembling.
pub fn run_program(
    run: &RunConfig,
    profile: &PlatformProfile,
    layout: &ProjectLayout,
    shell: &mut dyn ShellRunner,
) -> BakeResult<ProgramOutcome> {
    let exe = layout.resolve(&profile.executable);
    if !exe.is_file() {
        tracing::debug!(path = %exe.display(), "executable not found, skipping run");
        return Ok(ProgramOutcome::Skipped);
    }

    let line = profile.run_command(run.frame_count);
    tracing::info!(command = %line, "running");

    let status = shell.run(&ShellCommand::new(line, &layout.root))?;
    if status.success() {
        Ok(ProgramOutcome::Succeeded)
    } else {
        tracing::warn!("frame program failed ({status}), assembling whatever frames exist");
        Ok(ProgramOutcome::Failed { status })
    }
}
