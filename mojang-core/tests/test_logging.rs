//! Logging installs a global subscriber, so it gets its own test binary.

use mojang_core::logging::init_logging;
use tempfile::TempDir;

#[test]
fn init_logging_creates_directory_and_rejects_second_install() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    let guard = init_logging("debug", &log_dir, true).unwrap();
    tracing::info!("hello from the test");
    assert!(log_dir.is_dir());

    assert!(init_logging("info", &log_dir, false).is_err());
    drop(guard);
}
