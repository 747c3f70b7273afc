use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
