use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{BakeError, BakeResult},
    platform::host::HostOs,
};

const CXX: &str = "g++ -std=c++17";

/// How the compiled program is launched from the project root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    /// `./project N`
    #[default]
    Relative,
    /// `project.exe N`
    Bare,
}

/// Compiler flags, include paths and link flags for one host toolchain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlatformProfile {
    /// Compiler binary plus language flags, e.g. `g++ -std=c++17`.
    pub compiler: String,
    /// Preprocessor defines and extra compiler flags.
    pub defines: String,
    /// `-I` include flags.
    pub include_paths: String,
    /// Link flags.
    pub libraries: String,
    /// Name of the produced executable, relative to the project root.
    pub executable: String,
    /// How the executable is launched; `relative` when omitted.
    #[serde(default)]
    pub launcher: Launcher,
}

impl PlatformProfile {
    /// Built-in profile for `host`. Unsupported hosts are a [`BakeError::Platform`].
    pub fn for_host(host: &HostOs) -> BakeResult<Self> {
        let profile = match host {
            HostOs::Linux => Self {
                compiler: CXX.to_string(),
                defines: "-D LINUX".to_string(),
                include_paths: "-I ./include/ -I ./../common/thirdparty/glm/".to_string(),
                libraries: "-lSDL2 -ldl".to_string(),
                executable: "project".to_string(),
                launcher: Launcher::Relative,
            },
            HostOs::MacOs => Self {
                compiler: CXX.to_string(),
                defines: "-D MAC".to_string(),
                include_paths: "-I ./include/ -I/Library/Frameworks/SDL2.framework/Headers -I./../common/thirdparty/old/glm".to_string(),
                libraries: "-F/Library/Frameworks -framework SDL2".to_string(),
                executable: "project".to_string(),
                launcher: Launcher::Relative,
            },
            HostOs::Windows => Self {
                compiler: CXX.to_string(),
                defines: "-D MINGW -std=c++17 -static-libgcc -static-libstdc++".to_string(),
                include_paths: "-I./include/ -I./../common/thirdparty/old/glm/".to_string(),
                libraries: "-lmingw32 -lSDL2main -lSDL2 -mwindows -mconsole".to_string(),
                executable: "project.exe".to_string(),
                launcher: Launcher::Bare,
            },
            HostOs::Unsupported(id) => {
                return Err(BakeError::platform(format!(
                    "no toolchain profile for host '{id}' (pass --profile <json> to supply one)"
                )));
            }
        };
        Ok(profile)
    }

    /// Load and validate a JSON profile.
    pub fn from_path(path: &Path) -> BakeResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open platform profile '{}'", path.display()))?;
        let profile: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse platform profile '{}'", path.display()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Compiler and executable must be non-blank.
    pub fn validate(&self) -> BakeResult<()> {
        if self.compiler.trim().is_empty() {
            return Err(BakeError::validation("profile compiler must be non-empty"));
        }
        if self.executable.trim().is_empty() {
            return Err(BakeError::validation("profile executable must be non-empty"));
        }
        Ok(())
    }

    /// Shell line that compiles `source_glob` into the profile's executable.
    ///
    /// Segments are joined with single spaces even when empty.
    pub fn compile_command(&self, source_glob: &str) -> String {
        format!(
            "{} {} -o {}  {} {} {}",
            self.compiler,
            self.defines,
            self.executable,
            self.include_paths,
            source_glob,
            self.libraries
        )
    }

    /// Shell line that runs the compiled program for `frame_count` frames.
    pub fn run_command(&self, frame_count: u32) -> String {
        match self.launcher {
            Launcher::Relative => format!("./{} {frame_count}", self.executable),
            Launcher::Bare => format!("{} {frame_count}", self.executable),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/profile.rs"]
mod tests;
