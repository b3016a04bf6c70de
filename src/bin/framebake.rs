use std::path::PathBuf;

use clap::{ArgAction, Parser};
use framebake::{HostOs, PlatformProfile, ProjectLayout, SystemShell};

/// Compile the project, run it to render PPM frames, and bake them into a looping GIF.
#[derive(Parser, Debug)]
#[command(name = "framebake", version)]
struct Cli {
    /// Number of frames to render (default 2).
    #[arg(allow_negative_numbers = true)]
    frames: Option<String>,

    /// Playback rate of the GIF in frames per second (default 2).
    #[arg(allow_negative_numbers = true)]
    fps: Option<String>,

    /// Project root; the compiler and the program run from here.
    #[arg(short = 'C', long, default_value = ".")]
    workdir: PathBuf,

    /// JSON platform profile to use instead of the built-in table.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Host OS to pick the built-in profile for (linux, darwin, windows).
    #[arg(long)]
    host: Option<String>,

    /// Skip compile and run; only assemble frames already on disk.
    #[arg(long)]
    assemble_only: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let run = framebake::resolve_run_config(cli.frames.as_deref(), cli.fps.as_deref())?;
    let layout = ProjectLayout::at(&cli.workdir);

    let assembled = if cli.assemble_only {
        framebake::assemble_animation(&run, &layout)?
    } else {
        let host = cli
            .host
            .as_deref()
            .map(HostOs::from_identifier)
            .unwrap_or_else(HostOs::detect);
        let profile = match &cli.profile {
            Some(path) => PlatformProfile::from_path(path)?,
            None => PlatformProfile::for_host(&host)?,
        };
        tracing::info!("compiling on: {host}");

        let report = framebake::run_pipeline(&run, &profile, &layout, &mut SystemShell)?;
        report.assembled
    };

    eprintln!(
        "wrote {} ({} frames, {} ms/frame)",
        assembled.out_path.display(),
        assembled.frames_encoded,
        assembled.frame_delay_ms
    );
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
