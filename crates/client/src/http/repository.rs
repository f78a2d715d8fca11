//! Repository lifecycle operations on the workbench REST API

use {
    super::response::RawResponse,
    crate::{GraphDBError, GraphDBResult, RepoSpec},
    ::tracing::{debug, instrument},
    reqwest::{
        header::ACCEPT,
        multipart::{Form, Part},
        Request,
    },
    std::path::Path,
};

/// Repository management methods for the GraphDB HTTP client
impl super::client::GraphDBHttpClient {
    /// Creates a repository from a repository configuration file.
    ///
    /// The file is forwarded untouched as the `config` field of a multipart
    /// upload; its format (usually a Turtle `rep:RepositoryConfig`) is the
    /// server's business.
    #[instrument(
        name = "graphdb.repository.create",
        skip(self, config),
        fields(config = %config.as_ref().display()),
        err(level = "debug")
    )]
    pub async fn create_repository(&self, config: impl AsRef<Path>) -> GraphDBResult<RawResponse> {
        let config = config.as_ref();
        let bytes = tokio::fs::read(config)
            .await
            .map_err(|e| GraphDBError::io(config, e))?;

        let request = self.create_repository_request(config, bytes)?;
        debug!("post uri: {}", request.url());

        let res = self.http.execute(request).await?;
        RawResponse::read(res)
            .await?
            .error_for_status("create repository", config.display().to_string())
    }

    pub(crate) fn create_repository_request(
        &self,
        config: &Path,
        bytes: Vec<u8>,
    ) -> GraphDBResult<Request> {
        let file_name = config
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config.ttl".to_string());

        let form = Form::new().part("config", Part::bytes(bytes).file_name(file_name));
        let uri = self.build_url().rest_repositories().build();

        Ok(self.http.post(uri).multipart(form).build()?)
    }

    /// Lists the repositories known to the server as a JSON document.
    #[instrument(name = "graphdb.repository.list", skip(self), err(level = "debug"))]
    pub async fn list_repositories(&self) -> GraphDBResult<RawResponse> {
        let uri = self.build_url().rest_repositories().build();
        debug!("get uri: {}", &uri);

        let res = self
            .http
            .get(uri)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        RawResponse::read(res)
            .await?
            .error_for_status("list repositories", self.endpoint.as_str())
    }

    /// Deletes a repository together with all of its data.
    #[instrument(name = "graphdb.repository.remove", skip(self), err(level = "debug"))]
    pub async fn remove_repository(&self, repository: &str) -> GraphDBResult<RawResponse> {
        let repo = RepoSpec::new("remove repository", repository)?;
        let request = self.remove_repository_request(&repo)?;
        debug!("delete uri: {}", request.url());

        let res = self.http.execute(request).await?;
        RawResponse::read(res)
            .await?
            .error_for_status("remove repository", repo.name())
    }

    pub(crate) fn remove_repository_request(&self, repo: &RepoSpec<'_>) -> GraphDBResult<Request> {
        let uri = self.build_url().rest_repositories().repository(repo).build();

        Ok(self
            .http
            .delete(uri)
            .header(ACCEPT, "application/json")
            .build()?)
    }
}
