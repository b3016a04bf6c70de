use std::{
    fmt,
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::foundation::error::BakeResult;

/// One line handed to the system shell, run from `cwd`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellCommand {
    /// The full command line.
    pub line: String,
    /// Working directory for the shell.
    pub cwd: PathBuf,
}

impl ShellCommand {
    /// Build a command for `line` run from `cwd`.
    pub fn new(line: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            line: line.into(),
            cwd: cwd.into(),
        }
    }
}

/// Exit status of a finished shell command. `code` is `None` when the process
/// was terminated by a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Process exit code, if it exited normally.
    pub code: Option<i32>,
}

impl CommandOutcome {
    /// Outcome of a process that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// `true` only for exit code 0.
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {code}"),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Runs shell lines synchronously.
pub trait ShellRunner {
    /// Run `cmd` to completion and report how it exited.
    fn run(&mut self, cmd: &ShellCommand) -> BakeResult<CommandOutcome>;
}

/// Runs through `sh -c` (or `cmd /C` on Windows) with inherited stdio, so compiler and
/// program output stream straight to the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&mut self, cmd: &ShellCommand) -> BakeResult<CommandOutcome> {
        let (shell, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        tracing::debug!(line = %cmd.line, cwd = %cmd.cwd.display(), "spawning shell command");

        let status = Command::new(shell)
            .arg(flag)
            .arg(&cmd.line)
            .current_dir(&cmd.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to spawn `{shell} {flag} {}`", cmd.line))?;

        Ok(CommandOutcome {
            code: status.code(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/shell.rs"]
mod tests;
