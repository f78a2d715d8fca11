//! Core HTTP client struct and constructors

use {
    crate::{GraphDBError, GraphDBResult},
    ::tracing::debug,
    reqwest::Client,
    url::Url,
};

use super::url_builder::UrlBuilder;

/// Default address of a local GraphDB workbench.
pub const DEFAULT_GRAPHDB_URL: &str = "http://localhost:7200";

#[derive(Clone, Debug)]
pub struct GraphDBHttpClient {
    pub endpoint: Url,
    pub(crate) http: Client,
}

impl GraphDBHttpClient {
    /// Creates a client for the GraphDB server at `http://localhost:7200`.
    pub fn local_node() -> GraphDBResult<Self> {
        Self::new(DEFAULT_GRAPHDB_URL)
    }

    /// Creates a client for the GraphDB server rooted at `url`.
    ///
    /// The URL may carry a path prefix (`http://host/graphdb`) when GraphDB
    /// sits behind a proxy; every endpoint is resolved below it.
    ///
    /// # Example
    /// ```rust
    /// use pgraphdb_client::GraphDBHttpClient;
    ///
    /// let client = GraphDBHttpClient::new("http://localhost:7200")?;
    /// # Ok::<(), pgraphdb_client::GraphDBError>(())
    /// ```
    pub fn new(url: &str) -> GraphDBResult<Self> {
        Self::with_client(url, Client::new())
    }

    /// Same as [`new`](Self::new) but reuses a preconfigured reqwest client,
    /// e.g. one with a request timeout.
    pub fn with_client(url: &str, http: Client) -> GraphDBResult<Self> {
        let endpoint = Url::parse(url).map_err(|e| GraphDBError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if endpoint.cannot_be_a_base() {
            return Err(GraphDBError::InvalidUrl {
                url: url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        debug!("GraphDB client for {}", &endpoint);

        Ok(Self { endpoint, http })
    }

    pub(crate) fn build_url(&self) -> UrlBuilder<'_> {
        UrlBuilder::new(&self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_url() {
        let err = GraphDBHttpClient::new("not a url").unwrap_err();
        assert!(matches!(err, GraphDBError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = GraphDBHttpClient::new("mailto:admin@example.org").unwrap_err();
        assert!(matches!(err, GraphDBError::InvalidUrl { .. }));
    }

    #[test]
    fn test_local_node() {
        let client = GraphDBHttpClient::local_node().unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:7200/");
    }
}
