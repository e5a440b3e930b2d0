use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WavesError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WavesError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(WavesError::encode("x").to_string().contains("encode error:"));
    assert!(
        WavesError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WavesError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
