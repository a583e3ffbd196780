use super::*;

fn converts_from<E, S: From<E>>() {}

#[test]
fn startup_error_wraps_typed_sources() {
    converts_from::<ConfigError, StartupError>();
    converts_from::<LeptosConfigError, StartupError>();
    converts_from::<std::io::Error, StartupError>();
}

#[test]
fn config_errors_display_unchanged() {
    let err = StartupError::from(ConfigError::Invalid { var: "PORT", value: "x".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}

#[test]
fn io_errors_are_prefixed() {
    let err = StartupError::from(std::io::Error::other("bind refused"));
    assert_eq!(err.to_string(), "io: bind refused");
}
