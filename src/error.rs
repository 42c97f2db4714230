use std::path::PathBuf;

/// Failure to get text out of a document. Always recovered at the parse boundary.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF error in {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("PDF extraction panicked on {path}: {message}")]
    Panicked { path: PathBuf, message: String },
}

/// Failure writing the ledger or the record sink. Never recovered.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Anything that ends the watch loop.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("watch error: {0}")]
    Notify(#[from] notify::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
