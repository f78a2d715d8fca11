use std::path::PathBuf;

/// Errors raised by the GraphDB protocol client.
///
/// REST management calls and SPARQL protocol calls fail differently, so they
/// get separate variants: `Status` for a REST call answered with an HTTP status
/// of 400 or above, `Sparql` for a query or update the endpoint refused.
#[derive(Debug, thiserror::Error)]
pub enum GraphDBError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{operation} {resource}: {status}: {body}")]
    Status {
        operation: &'static str,
        resource: String,
        status: u16,
        body: String,
    },

    #[error("{operation} {resource}: SPARQL endpoint returned {status}: {body}")]
    Sparql {
        operation: &'static str,
        resource: String,
        status: u16,
        body: String,
    },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{operation} requires a repository name")]
    MissingRepository { operation: &'static str },

    #[error("invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl GraphDBError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status reported by the server, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Sparql { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type GraphDBResult<T> = Result<T, GraphDBError>;
