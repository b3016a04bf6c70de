use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_frames").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn frame_path_uses_output_index_ppm() {
    assert_eq!(
        frame_path(Path::new("frames"), 7),
        PathBuf::from("frames").join("output_7.ppm")
    );
}

#[test]
fn gaps_are_recorded_in_order() {
    let dir = scratch("gaps");
    for i in [0u32, 2, 3] {
        std::fs::write(frame_path(&dir, i), b"P3\n1 1\n255\n0 0 0\n").unwrap();
    }

    let scan = scan_frames(&dir, 5);
    let present: Vec<u32> = scan.present.iter().map(|(i, _)| *i).collect();
    assert_eq!(present, vec![0, 2, 3]);
    assert_eq!(scan.missing, vec![1, 4]);
    assert_eq!(scan.present[1].1, frame_path(&dir, 2));
}

#[test]
fn frames_beyond_count_are_ignored() {
    let dir = scratch("beyond");
    std::fs::write(frame_path(&dir, 5), b"P3\n1 1\n255\n0 0 0\n").unwrap();

    let scan = scan_frames(&dir, 2);
    assert!(scan.is_empty());
    assert_eq!(scan.missing, vec![0, 1]);
}

#[test]
fn missing_directory_scans_empty() {
    let scan = scan_frames(&PathBuf::from("target").join("unit_frames").join("nope"), 3);
    assert!(scan.is_empty());
    assert_eq!(scan.missing.len(), 3);
}
