use anyhow::Context as _;

use crate::{
    build::shell::{ShellCommand, ShellRunner},
    config::layout::ProjectLayout,
    foundation::error::{BakeError, BakeResult},
    platform::profile::PlatformProfile,
};

/// Create the frames directory if it is missing. Nothing removes it again on failure.
pub fn ensure_frames_dir(layout: &ProjectLayout) -> BakeResult<()> {
    let dir = layout.frames_path();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create frames directory '{}'", dir.display()))?;
    Ok(())
}

/// Compile the project and return the command line that was run.
///
/// A non-zero exit (or death by signal) is a [`BakeError::Compile`].
pub fn compile(
    profile: &PlatformProfile,
    layout: &ProjectLayout,
    shell: &mut dyn ShellRunner,
) -> BakeResult<String> {
    let line = profile.compile_command(&layout.source_glob);
    tracing::info!(command = %line, "compiling");

    let outcome = shell.run(&ShellCommand::new(line.clone(), &layout.root))?;
    if !outcome.success() {
        tracing::error!("compilation failed ({outcome})");
        return Err(BakeError::compile(outcome.to_string()));
    }

    Ok(line)
}
