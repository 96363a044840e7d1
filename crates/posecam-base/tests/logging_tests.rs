use log::Log;
use posecam_base::logging::{FileLogger, StdoutLogger};
use std::fs;

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;

    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(42))
        .args(format_args!("test message"))
        .build();

    // must not panic
    logger.log(&record);
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory_and_day_file() {
    let test_dir = std::env::temp_dir().join(format!("posecam-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let _logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");

    assert!(test_dir.is_dir());
    let today = posecam_base::logging::format_today();
    assert!(test_dir.join(format!("{}.log", today)).exists());

    fs::remove_dir_all(&test_dir).ok();
}
