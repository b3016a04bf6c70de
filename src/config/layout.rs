use std::path::{Path, PathBuf};

/// Directory the frame program writes into.
pub const FRAMES_DIR: &str = "frames";
/// Name of the baked animation.
pub const OUTPUT_FILE_NAME: &str = "output_animation.gif";
/// Sources handed to the compiler (expanded by the shell).
pub const SOURCE_GLOB: &str = "./src/*.cpp";

/// Where the project lives and where frames and the animation go.
///
/// `frames_dir` and `output` are relative to `root`; shell commands run with `root`
/// as their working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root.
    pub root: PathBuf,
    /// Frames directory, relative to `root`.
    pub frames_dir: PathBuf,
    /// Output GIF, relative to `root`.
    pub output: PathBuf,
    /// Source glob passed verbatim on the compile line.
    pub source_glob: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::at(".")
    }
}

impl ProjectLayout {
    /// Default layout rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            frames_dir: PathBuf::from(FRAMES_DIR),
            output: PathBuf::from(OUTPUT_FILE_NAME),
            source_glob: SOURCE_GLOB.to_string(),
        }
    }

    /// `root/frames_dir`
    pub fn frames_path(&self) -> PathBuf {
        self.root.join(&self.frames_dir)
    }

    /// `root/output`
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Resolve a root-relative path.
    pub fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }
}
