use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("global logger has not been initialized")]
    NotInitialized,
    #[error("a logger is already registered with the `log` facade")]
    BridgeAlreadyInstalled,
}
