//! Multi-file deletion driven by Turtle documents

use {
    super::client::GraphDBHttpClient,
    crate::{turtle_to_deletion_sparql, GraphDBError, GraphDBResult, RepoSpec, UpdateOutcome},
    async_trait::async_trait,
    ::tracing::{info, instrument, warn},
    std::path::{Path, PathBuf},
};

/// Anything able to run a SPARQL update against a named repository.
#[async_trait]
pub trait SparqlUpdater: Send + Sync {
    async fn execute_update(&self, repository: &str, sparql: &str) -> GraphDBResult<UpdateOutcome>;
}

#[async_trait]
impl SparqlUpdater for GraphDBHttpClient {
    async fn execute_update(&self, repository: &str, sparql: &str) -> GraphDBResult<UpdateOutcome> {
        self.update_sparql(repository, sparql).await
    }
}

/// Outcome of deleting the triples of one Turtle file.
#[derive(Debug)]
pub struct FileDeletion {
    pub path: PathBuf,
    pub result: GraphDBResult<UpdateOutcome>,
}

impl FileDeletion {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of a multi-file deletion, in input order.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub files: Vec<FileDeletion>,
}

impl DeletionReport {
    pub fn is_success(&self) -> bool {
        self.files.iter().all(FileDeletion::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &GraphDBError)> {
        self.files.iter().filter_map(|file| match &file.result {
            Ok(_) => None,
            Err(err) => Some((file.path.as_path(), err)),
        })
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|file| file.is_success()).count()
    }
}

/// Deletes the triples of every Turtle file from `repository`.
///
/// Files are read and submitted strictly one after another. A file that
/// cannot be read fails before any request is made for it; a file the server
/// rejects fails on its own. Neither stops the files after it, and deletions
/// already applied are not rolled back.
#[instrument(name = "graphdb.statements.delete", skip(updater, turtle_files), fields(files = turtle_files.len()), err(level = "debug"))]
pub async fn delete_turtle_files<U, P>(
    updater: &U,
    repository: &str,
    turtle_files: &[P],
) -> GraphDBResult<DeletionReport>
where
    U: SparqlUpdater + ?Sized,
    P: AsRef<Path>,
{
    RepoSpec::new("delete data", repository)?;

    let mut report = DeletionReport::default();

    for turtle in turtle_files {
        let path = turtle.as_ref().to_path_buf();
        let result = delete_one(updater, repository, &path).await;

        match &result {
            Ok(_) => info!(file = %path.display(), "deleted triples"),
            Err(err) => warn!(file = %path.display(), error = %err, "deletion failed"),
        }

        report.files.push(FileDeletion { path, result });
    }

    Ok(report)
}

async fn delete_one<U>(updater: &U, repository: &str, path: &Path) -> GraphDBResult<UpdateOutcome>
where
    U: SparqlUpdater + ?Sized,
{
    let turtle = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GraphDBError::io(path, e))?;

    let sparql = turtle_to_deletion_sparql(turtle.lines());
    updater.execute_update(repository, &sparql).await
}
