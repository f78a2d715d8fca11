use crate::{GraphDBError, GraphDBResult};
use serde::{Deserialize, Serialize};

/// Result serialization requested from the SPARQL endpoint.
///
/// The format decides how the response is decoded: `Json` into
/// [`SparqlResults`](crate::SparqlResults), `Turtle` into UTF-8 text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Turtle,
}

impl ResponseFormat {
    /// Value sent in the `Accept` header.
    pub fn media_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/sparql-results+json",
            ResponseFormat::Turtle => "text/turtle",
        }
    }
}

/// A repository name that has been checked to be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoSpec<'a> {
    name: &'a str,
}

impl<'a> RepoSpec<'a> {
    /// Validates `name` for `operation`. Blank names are rejected before any
    /// request is built.
    pub fn new(operation: &'static str, name: &'a str) -> GraphDBResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphDBError::MissingRepository { operation });
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }
}
