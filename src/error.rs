use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Conditions that must hold before any package is generated.
#[derive(Debug, ThisError)]
pub enum PreconditionError {
    #[error("missing argument: template")]
    MissingTemplate,

    #[error("{0:?} isn't a file or does not exist")]
    NotAFile(PathBuf),

    #[error("file {path:?} isn't readable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} isn't a directory")]
    NotADirectory(PathBuf),

    #[error("directory {path:?} isn't writable: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
