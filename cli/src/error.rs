use bidi_path_core::{GraphError, NameError, SearchError};
use thiserror::Error;

/// Errors raised while reading the node/edge list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input is empty, expected a node count")]
    MissingCount,

    #[error("expected a node count, found '{0}'")]
    BadCount(String),

    #[error("node count {count} exceeds max_nodes={max}")]
    TooManyNodes { count: usize, max: usize },

    #[error("expected {expected} node names, found {found}")]
    MissingNames { expected: usize, found: usize },

    #[error("node name: {0}")]
    Name(#[from] NameError),

    #[error("edge {index} references unknown node '{name}'")]
    UnknownNode { index: usize, name: String },

    #[error("edge list ends with unpaired node '{0}'")]
    DanglingEdge(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A setting outside its allowed range.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("input path must not be empty")]
    EmptyInput,
}

/// Top-level error for one run of the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("node '{0}' not found")]
    UnknownNode(String),

    #[error("no {0} node given")]
    MissingInput(&'static str),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code. 1 is reserved for "no path", which is not an error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Settings(_)
            | CliError::UnknownNode(_)
            | CliError::MissingInput(_)
            | CliError::Search(_) => 2,
            CliError::Load(_) => 3,
            CliError::Io(_) | CliError::Json(_) => 4,
        }
    }
}
