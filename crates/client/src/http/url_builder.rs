//! URL building utilities for GraphDB endpoints

use crate::RepoSpec;
use url::Url;

/// Builds GraphDB endpoint URLs below the configured server root.
///
/// Two families of endpoints exist: the workbench REST API under `/rest`
/// and the RDF4J-style SPARQL endpoints under `/repositories`.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    endpoint: &'a Url,
    parts: Vec<String>,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(endpoint: &'a Url) -> Self {
        Self {
            endpoint,
            parts: Vec::new(),
        }
    }

    /// `/rest`, the workbench management API
    pub fn rest(self) -> Self {
        self.segment("rest")
    }

    /// `/repositories`, the repository collection
    pub fn repositories(self) -> Self {
        self.segment("repositories")
    }

    pub fn repository(self, repo: &RepoSpec<'_>) -> Self {
        self.segment(repo.name())
    }

    /// `/statements` of a repository
    pub fn statements(self) -> Self {
        self.segment("statements")
    }

    /// `/data/import/server`, the server-side import staging area
    pub fn server_import(self) -> Self {
        self.segment("data").segment("import").segment("server")
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.parts.push(segment.to_string());
        self
    }

    pub fn build(self) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&self.parts);
        }
        url
    }

    /// `<url>/rest/repositories`
    pub fn rest_repositories(self) -> Self {
        self.rest().repositories()
    }

    /// `<url>/repositories/<repo>`, the SPARQL query endpoint
    pub fn sparql_query(self, repo: &RepoSpec<'_>) -> Self {
        self.repositories().repository(repo)
    }

    /// `<url>/repositories/<repo>/statements`, the SPARQL update and bulk
    /// statements endpoint
    pub fn sparql_statements(self, repo: &RepoSpec<'_>) -> Self {
        self.repositories().repository(repo).statements()
    }
}
