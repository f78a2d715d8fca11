//! SPARQL query execution

use {
    super::response::RawResponse,
    crate::{
        GraphDBError, GraphDBResult, QueryResult, RepoSpec, ResponseFormat, SparqlResults,
    },
    ::tracing::{debug, instrument},
    reqwest::{header::ACCEPT, Request},
    std::path::Path,
};

impl super::client::GraphDBHttpClient {
    /// Runs a SPARQL query against a repository and decodes the answer
    /// according to `format`.
    ///
    /// `ResponseFormat::Json` suits SELECT/ASK queries and yields
    /// [`QueryResult::Bindings`]; `ResponseFormat::Turtle` suits
    /// CONSTRUCT/DESCRIBE and yields [`QueryResult::Turtle`].
    #[instrument(name = "graphdb.query", skip(self, sparql), err(level = "debug"))]
    pub async fn query(
        &self,
        repository: &str,
        sparql: &str,
        format: ResponseFormat,
    ) -> GraphDBResult<QueryResult> {
        let repo = RepoSpec::new("query", repository)?;
        let request = self.query_request(&repo, sparql, format)?;
        debug!("query uri: {}", request.url());

        let res = self.http.execute(request).await?;
        let res = RawResponse::read(res)
            .await?
            .error_for_sparql("query", repo.name())?;

        decode_query_response(res, format)
    }

    pub(crate) fn query_request(
        &self,
        repo: &RepoSpec<'_>,
        sparql: &str,
        format: ResponseFormat,
    ) -> GraphDBResult<Request> {
        let uri = self.build_url().sparql_query(repo).build();

        Ok(self
            .http
            .post(uri)
            .header(ACCEPT, format.media_type())
            .form(&[("query", sparql)])
            .build()?)
    }

    /// Runs the SELECT-style query stored in `sparql_file`.
    pub async fn sparql_query(
        &self,
        repository: &str,
        sparql_file: impl AsRef<Path>,
    ) -> GraphDBResult<SparqlResults> {
        let (repo, sparql) = read_query(repository, sparql_file.as_ref()).await?;
        let result = self.query(repo.name(), &sparql, ResponseFormat::Json).await?;
        result
            .into_bindings()
            .ok_or_else(|| unexpected_shape("query", repo.name()))
    }

    /// Runs the CONSTRUCT query stored in `sparql_file`, returning Turtle.
    pub async fn sparql_construct(
        &self,
        repository: &str,
        sparql_file: impl AsRef<Path>,
    ) -> GraphDBResult<String> {
        let (repo, sparql) = read_query(repository, sparql_file.as_ref()).await?;
        let result = self
            .query(repo.name(), &sparql, ResponseFormat::Turtle)
            .await?;
        result
            .into_turtle()
            .ok_or_else(|| unexpected_shape("construct", repo.name()))
    }
}

async fn read_query<'a>(
    repository: &'a str,
    sparql_file: &Path,
) -> GraphDBResult<(RepoSpec<'a>, String)> {
    let repo = RepoSpec::new("query", repository)?;
    let sparql = tokio::fs::read_to_string(sparql_file)
        .await
        .map_err(|e| GraphDBError::io(sparql_file, e))?;
    Ok((repo, sparql))
}

fn unexpected_shape(operation: &'static str, repository: &str) -> GraphDBError {
    GraphDBError::Sparql {
        operation,
        resource: repository.to_string(),
        status: 200,
        body: "response did not match the requested format".to_string(),
    }
}

pub(crate) fn decode_query_response(
    res: RawResponse,
    format: ResponseFormat,
) -> GraphDBResult<QueryResult> {
    match format {
        ResponseFormat::Json => Ok(QueryResult::Bindings(res.json()?)),
        ResponseFormat::Turtle => Ok(QueryResult::Turtle(res.body)),
    }
}
