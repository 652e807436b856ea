use gde_core::errors::{ErrorInfo, GdeError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn design_error_surface() {
    let err = GdeError::Design(sample_info("D001", "component out of range"));
    assert_eq!(err.info().code, "D001");
    assert!(err.info().context.contains_key("id"));
}

#[test]
fn cost_error_surface() {
    let err = GdeError::Cost(sample_info("C001", "geometry build failed"));
    assert_eq!(err.info().code, "C001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn sampler_error_surface() {
    let err = GdeError::Sampler(sample_info("SA001", "temperature must be positive"));
    assert_eq!(err.info().code, "SA001");
}

#[test]
fn selector_error_surface() {
    let err = GdeError::Selector(sample_info("SE001", "pool too small"));
    assert_eq!(err.info().code, "SE001");
}

#[test]
fn store_error_surface() {
    let err = GdeError::Store(sample_info("ST001", "empty result set"));
    assert_eq!(err.info().code, "ST001");
}

#[test]
fn error_display_includes_hint() {
    let err = GdeError::Store(
        ErrorInfo::new("ST002", "nothing to save").with_hint("run generation first"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("run generation first"));
}
