use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. Any of these means a round cannot be played.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word list contains no usable words")]
    EmptyWordList,
    #[error("life pool is empty")]
    EmptyLifePool,
    #[error("invalid colour {value:?} for life {name:?}")]
    InvalidColor { name: String, value: String },
    #[error("failed to read word list from {path:?}")]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
