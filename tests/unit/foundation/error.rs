use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlendlabError::dimension("x")
            .to_string()
            .contains("dimension error:")
    );
    assert!(
        BlendlabError::unknown_mode("x")
            .to_string()
            .contains("unknown blend mode:")
    );
    assert!(
        BlendlabError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn mismatch_names_both_sizes() {
    let err = BlendlabError::dimension_mismatch(Canvas::new(4, 2), Canvas::new(3, 2));
    let msg = err.to_string();
    assert!(msg.contains("dimension mismatch:"));
    assert!(msg.contains("4x2"));
    assert!(msg.contains("3x2"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlendlabError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
