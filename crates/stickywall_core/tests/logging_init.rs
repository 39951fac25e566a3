use stickywall_core::{default_log_level, init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let first_dir = first.path().to_str().unwrap();
    let second_dir = second.path().to_str().unwrap();

    init_logging("info", first_dir).unwrap();
    init_logging(" INFO ", first_dir).unwrap();

    let level_err = init_logging("debug", first_dir).unwrap_err();
    assert!(level_err.contains("refusing to switch"));
    let dir_err = init_logging("info", second_dir).unwrap_err();
    assert!(dir_err.contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());
}

#[test]
fn init_logging_rejects_relative_directory() {
    let err = init_logging("info", "relative/logs").unwrap_err();
    assert!(err.contains("absolute"));
}

#[test]
fn default_level_matches_build_mode() {
    let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
    assert_eq!(default_log_level(), expected);
}
