use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LoggerError;

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Route `log` records at or above `level` to a file, appending.
///
/// The file is opened once up front so a bad path fails here rather than
/// silently dropping every record. Only one logger can be installed per
/// process.
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggerError> {
    let file_path = path.as_ref().to_path_buf();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)
        .map_err(|source| LoggerError::Open {
            path: file_path.clone(),
            source,
        })?;

    let logger = FileLogger { file_path, level };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
