use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BakeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BakeError::platform("x")
            .to_string()
            .contains("platform error:")
    );
    assert!(
        BakeError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert_eq!(
        BakeError::compile("exit status: 1").to_string(),
        "compile error: compiler exited with exit status: 1"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BakeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
