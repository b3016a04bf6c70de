use std::path::{Path, PathBuf};

/// `dir/output_{index}.ppm`
pub fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("output_{index}.ppm"))
}

/// Result of probing `output_0..output_{n-1}` on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameScan {
    /// Frames that exist, ascending by index.
    pub present: Vec<(u32, PathBuf)>,
    /// Indices with no file, ascending.
    pub missing: Vec<u32>,
}

impl FrameScan {
    /// No frame files were found.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

/// Probe each expected frame path in order. Gaps are recorded, never filled.
pub fn scan_frames(dir: &Path, frame_count: u32) -> FrameScan {
    let mut scan = FrameScan::default();
    for i in 0..frame_count {
        let path = frame_path(dir, i);
        if path.is_file() {
            scan.present.push((i, path));
        } else {
            tracing::debug!(index = i, path = %path.display(), "frame missing, skipping");
            scan.missing.push(i);
        }
    }
    scan
}

#[cfg(test)]
#[path = "../../tests/unit/frames/sequence.rs"]
mod tests;
