use std::path::PathBuf;

pub type LogResult<T> = Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Could not read log: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read log from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to get home directory")]
    HomeDir,
}
