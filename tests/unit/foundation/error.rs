use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AdsmithError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AdsmithError::render("x").to_string().contains("render error:"));
    assert!(
        AdsmithError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn archive_errors_suggest_retry_and_are_fatal() {
    let err = AdsmithError::archive("out of memory");
    assert!(err.to_string().contains("retry"));
    assert!(err.is_fatal());
    assert!(!AdsmithError::render("decode").is_fatal());
    assert!(!AdsmithError::Busy.is_fatal());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AdsmithError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
