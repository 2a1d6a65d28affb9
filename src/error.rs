use std::io;
use std::path::PathBuf;

/// Failures while embedding assets. Every variant is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input asset is missing or could not be read.
    #[error("failed to read asset `{}`", .path.display())]
    Read {
        /// Path of the asset that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// The generated header could not be written.
    #[error("failed to write header `{}`", .path.display())]
    Write {
        /// Path of the header that failed to write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Path of the file the failed operation was acting on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }
}
