//! Tests for logging helpers

use rsb_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parses_known_levels_case_insensitively() {
    assert_eq!(parse_log_level("INFO").expect("info"), Level::INFO);
    assert_eq!(parse_log_level("warning").expect("warn"), Level::WARN);
    assert_eq!(parse_log_level(" debug ").expect("debug"), Level::DEBUG);
}

#[test]
fn test_rejects_unknown_level() {
    let err = parse_log_level("verbose").expect_err("unknown level");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("verbose"));
}
