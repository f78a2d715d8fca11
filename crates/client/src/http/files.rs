//! Server-side import staging listing

use {
    super::response::RawResponse,
    crate::{GraphDBResult, RepoSpec},
    ::tracing::{debug, instrument},
    serde::{Deserialize, Serialize},
};

/// Entry of the server import directory listing. GraphDB sends more fields
/// (status, size, timestamps); only the name is relied on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl super::client::GraphDBHttpClient {
    /// Lists the files staged on the server for import into `repository`.
    /// The body is a JSON array; decode it with `RawResponse::json::<Vec<ServerFile>>()`.
    #[instrument(name = "graphdb.files.list", skip(self), err(level = "debug"))]
    pub async fn list_files(&self, repository: &str) -> GraphDBResult<RawResponse> {
        let repo = RepoSpec::new("list files", repository)?;
        let uri = self
            .build_url()
            .rest()
            .server_import()
            .repository(&repo)
            .build();
        debug!("get uri: {}", &uri);

        let res = self.http.get(uri).send().await?;
        RawResponse::read(res)
            .await?
            .error_for_status("list files", repo.name())
    }
}
