use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CrossRotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CrossRotError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CrossRotError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        CrossRotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CrossRotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
