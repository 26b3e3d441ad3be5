use std::path::PathBuf;

use thiserror::Error;

/// A single case could not be evaluated.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("malformed case input: {0}")]
    Input(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("unknown problem {category}/{problem}")]
    UnknownProblem { category: String, problem: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid case file {}: {source}", path.display())]
    CaseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no case files found for {category}/{problem}")]
    NoCases { category: String, problem: String },
}
