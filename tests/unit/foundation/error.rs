use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PageError::payload("x").to_string().contains("payload error:"));
    assert!(PageError::render("x").to_string().contains("render error:"));
    assert!(PageError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        PageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
