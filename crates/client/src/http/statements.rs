//! Statement loading, SPARQL updates and Turtle-driven deletions

use {
    super::{
        deletion::{delete_turtle_files, DeletionReport},
        response::RawResponse,
    },
    crate::{turtle_to_deletion_sparql, GraphDBError, GraphDBResult, RepoSpec, UpdateOutcome},
    ::tracing::{debug, instrument},
    reqwest::{
        header::{ACCEPT, CONTENT_TYPE},
        Request,
    },
    std::path::Path,
};

/// Media type GraphDB expects for Turtle uploads, whatever the file is named.
pub const TURTLE_CONTENT_TYPE: &str = "text/turtle";

/// Accept header for updates; GraphDB replies 204 but errors come as JSON.
const UPDATE_ACCEPT: &str = "application/json";

impl super::client::GraphDBHttpClient {
    /// Uploads a Turtle file into a repository with a single `PUT` to its
    /// statements resource.
    ///
    /// Note that `PUT` replaces the repository contents on RDF4J-compatible
    /// servers.
    #[instrument(
        name = "graphdb.statements.load",
        skip(self, turtle_file),
        fields(file = %turtle_file.as_ref().display()),
        err(level = "debug")
    )]
    pub async fn load_data(
        &self,
        repository: &str,
        turtle_file: impl AsRef<Path>,
    ) -> GraphDBResult<RawResponse> {
        let turtle_file = turtle_file.as_ref();
        let repo = RepoSpec::new("load data", repository)?;

        let bytes = tokio::fs::read(turtle_file)
            .await
            .map_err(|e| GraphDBError::io(turtle_file, e))?;

        let request = self.load_request(&repo, bytes)?;
        debug!("put uri: {}", request.url());

        let res = self.http.execute(request).await?;
        RawResponse::read(res)
            .await?
            .error_for_status("load data", format!("{} into {}", turtle_file.display(), repo.name()))
    }

    pub(crate) fn load_request(&self, repo: &RepoSpec<'_>, bytes: Vec<u8>) -> GraphDBResult<Request> {
        let uri = self.build_url().sparql_statements(repo).build();

        Ok(self
            .http
            .put(uri)
            .header(CONTENT_TYPE, TURTLE_CONTENT_TYPE)
            .body(bytes)
            .build()?)
    }

    /// Runs a SPARQL update read from `sparql_file` verbatim.
    #[instrument(
        name = "graphdb.statements.update",
        skip(self, sparql_file),
        fields(file = %sparql_file.as_ref().display()),
        err(level = "debug")
    )]
    pub async fn update(
        &self,
        repository: &str,
        sparql_file: impl AsRef<Path>,
    ) -> GraphDBResult<UpdateOutcome> {
        let sparql_file = sparql_file.as_ref();
        RepoSpec::new("update", repository)?;

        let sparql = tokio::fs::read_to_string(sparql_file)
            .await
            .map_err(|e| GraphDBError::io(sparql_file, e))?;

        self.update_sparql(repository, &sparql).await
    }

    /// Posts an update string to the repository's statements endpoint.
    ///
    /// The server acknowledges with an empty body, in which case
    /// [`UpdateOutcome::json`] is `None`.
    #[instrument(name = "graphdb.statements.sparql_update", skip(self, sparql), err(level = "debug"))]
    pub async fn update_sparql(
        &self,
        repository: &str,
        sparql: &str,
    ) -> GraphDBResult<UpdateOutcome> {
        let repo = RepoSpec::new("update", repository)?;
        let request = self.update_request(&repo, sparql)?;
        debug!("update uri: {}", request.url());

        let res = self.http.execute(request).await?;
        decode_update_response(RawResponse::read(res).await?, &repo)
    }

    pub(crate) fn update_request(&self, repo: &RepoSpec<'_>, sparql: &str) -> GraphDBResult<Request> {
        let uri = self.build_url().sparql_statements(repo).build();

        Ok(self
            .http
            .post(uri)
            .header(ACCEPT, UPDATE_ACCEPT)
            .form(&[("update", sparql)])
            .build()?)
    }

    /// Deletes the triples listed in one Turtle document.
    pub async fn delete_statements<I, S>(
        &self,
        repository: &str,
        turtle_lines: I,
    ) -> GraphDBResult<UpdateOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sparql = turtle_to_deletion_sparql(turtle_lines);
        self.update_sparql(repository, &sparql).await
    }

    /// Deletes the triples of each Turtle file, one update per file in input
    /// order.
    ///
    /// There is no transaction across files: a failure is recorded in the
    /// report and the remaining files are still processed.
    pub async fn delete_data<P: AsRef<Path>>(
        &self,
        repository: &str,
        turtle_files: &[P],
    ) -> GraphDBResult<DeletionReport> {
        delete_turtle_files(self, repository, turtle_files).await
    }
}

/// Classifies an update response. A 2xx status means the update was applied,
/// so a body that is not JSON is kept as text rather than reported as an error.
pub(crate) fn decode_update_response(
    res: RawResponse,
    repo: &RepoSpec<'_>,
) -> GraphDBResult<UpdateOutcome> {
    let res = res.error_for_sparql("update", repo.name())?;

    let json = if res.body.trim().is_empty() {
        None
    } else {
        match res.json() {
            Ok(json) => Some(json),
            Err(err) => {
                debug!("update acknowledged with non-JSON body: {}", err);
                None
            }
        }
    };

    Ok(UpdateOutcome {
        status: res.status,
        json,
        body: res.body,
    })
}

#[cfg(test)]
mod tests {
    use super::decode_update_response;
    use crate::{GraphDBError, GraphDBHttpClient, RawResponse, RepoSpec};
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_update_no_content() {
        let repo = RepoSpec::new("update", "pets").unwrap();
        let outcome = decode_update_response(RawResponse::new(204, ""), &repo).unwrap();
        assert_eq!(outcome.status, 204);
        assert_eq!(outcome.json, None);
        assert_eq!(outcome.body, "");
    }

    #[test]
    fn test_update_json_body() {
        let repo = RepoSpec::new("update", "pets").unwrap();
        let outcome =
            decode_update_response(RawResponse::new(200, r#"{"modified": 3}"#), &repo).unwrap();
        assert_eq!(outcome.json, Some(json!({ "modified": 3 })));
    }

    #[test]
    fn test_update_non_json_ack_is_success() {
        let repo = RepoSpec::new("update", "pets").unwrap();
        let outcome =
            decode_update_response(RawResponse::new(200, "<html>OK</html>"), &repo).unwrap();
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.json, None);
        assert_eq!(outcome.body, "<html>OK</html>");
    }

    #[test]
    fn test_update_rejection_names_trimmed_repository() {
        let repo = RepoSpec::new("update", "  pets ").unwrap();
        let err = decode_update_response(RawResponse::new(400, "MALFORMED QUERY"), &repo)
            .unwrap_err();
        match err {
            GraphDBError::Sparql {
                operation,
                resource,
                status,
                body,
            } => {
                assert_eq!(operation, "update");
                assert_eq!(resource, "pets");
                assert_eq!(status, 400);
                assert_eq!(body, "MALFORMED QUERY");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_request_content_type() {
        let client = GraphDBHttpClient::local_node().unwrap();
        let repo = RepoSpec::new("load data", "pets").unwrap();
        let request = client
            .load_request(&repo, b"<a> <b> <c> .".to_vec())
            .unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:7200/repositories/pets/statements"
        );
        assert_eq!(request.headers()["content-type"], "text/turtle");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"<a> <b> <c> .");
    }

    #[test]
    fn test_update_request_is_form_post() {
        let client = GraphDBHttpClient::local_node().unwrap();
        let repo = RepoSpec::new("update", "pets").unwrap();
        let request = client
            .update_request(&repo, "DELETE DATA { <a> <b> <c> . }")
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:7200/repositories/pets/statements"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(request.headers()["accept"], "application/json");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let body = std::str::from_utf8(body).unwrap();
        assert!(body.starts_with("update=DELETE+DATA"));
    }

    #[tokio::test]
    async fn test_load_with_nt_extension_still_turtle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.nt");
        std::fs::write(&path, "<a> <b> <c> .\n").unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        let client = GraphDBHttpClient::local_node().unwrap();
        let repo = RepoSpec::new("load data", "pets").unwrap();
        let request = client.load_request(&repo, bytes).unwrap();
        assert_eq!(request.headers()["content-type"], "text/turtle");
    }

    #[tokio::test]
    async fn test_update_without_repository() {
        let client = GraphDBHttpClient::local_node().unwrap();
        let err = client.update_sparql(" ", "CLEAR ALL").await.unwrap_err();
        assert!(matches!(
            err,
            GraphDBError::MissingRepository { operation: "update" }
        ));
    }
}
