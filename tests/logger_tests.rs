//! The logger is process-global, so this binary holds a single test.

use log::LevelFilter;
use typefx::{LoggerError, compile, init_logger};

#[test]
fn logger_writes_compiler_records() {
    let path = std::env::temp_dir().join(format!("typefx-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let missing_dir = std::env::temp_dir().join("typefx-missing-dir").join("x.log");
    assert!(matches!(
        init_logger(&missing_dir, LevelFilter::Debug),
        Err(LoggerError::Open { .. })
    ));

    init_logger(&path, LevelFilter::Debug).unwrap();
    assert!(matches!(
        init_logger(&path, LevelFilter::Debug),
        Err(LoggerError::AlreadyInstalled(_))
    ));

    compile("<foo>x</foo><wave>open");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[DEBUG]"));
    assert!(contents.contains("<foo>"));
    assert!(contents.contains("dropping unclosed Wave"));
    assert!(!contents.contains("[TRACE]"));

    let _ = std::fs::remove_file(&path);
}
