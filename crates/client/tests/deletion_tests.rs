// Multi-file deletion against an in-memory SPARQL endpoint.

use async_trait::async_trait;
use pgraphdb_client::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Records every update it receives and rejects the ones containing
/// `not-turtle`, the way a server rejects an unparsable update.
#[derive(Default)]
struct RecordingEndpoint {
    received: Mutex<Vec<(String, String)>>,
}

impl RecordingEndpoint {
    fn received(&self) -> Vec<(String, String)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SparqlUpdater for RecordingEndpoint {
    async fn execute_update(&self, repository: &str, sparql: &str) -> GraphDBResult<UpdateOutcome> {
        self.received
            .lock()
            .unwrap()
            .push((repository.to_string(), sparql.to_string()));

        if sparql.contains("not-turtle") {
            return Err(GraphDBError::Sparql {
                operation: "update",
                resource: repository.to_string(),
                status: 400,
                body: "MALFORMED QUERY: Lexical error".to_string(),
            });
        }

        Ok(UpdateOutcome {
            status: 204,
            json: None,
            body: String::new(),
        })
    }
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_malformed_middle_file_does_not_stop_others() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let first = write(
        &dir,
        "first.ttl",
        "@prefix ex: <http://example.org/> .\nex:a ex:b ex:c .\n",
    );
    let second = write(&dir, "second.ttl", "this is not-turtle {{\n");
    let third = write(&dir, "third.ttl", "<http://x/s> <http://x/p> <http://x/o> .\n");

    let endpoint = RecordingEndpoint::default();
    let report = delete_turtle_files(&endpoint, "pets", &[&first, &second, &third]).await?;

    let received = endpoint.received();
    assert_eq!(received.len(), 3, "every file gets its own round trip");
    assert!(received.iter().all(|(repo, _)| repo == "pets"));
    assert_eq!(
        received[0].1,
        "prefix ex: <http://example.org/>\nDELETE DATA {\nex:a ex:b ex:c .\n}"
    );
    assert_eq!(
        received[2].1,
        "\nDELETE DATA {\n<http://x/s> <http://x/p> <http://x/o> .\n}"
    );

    assert!(!report.is_success());
    assert_eq!(report.succeeded(), 2);
    let paths: Vec<&Path> = report.files.iter().map(|f| f.path.as_path()).collect();
    assert_eq!(paths, [first.as_path(), second.as_path(), third.as_path()]);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, second.as_path());
    assert_eq!(failures[0].1.status(), Some(400));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_file_fails_without_request() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.ttl");
    let present = write(&dir, "present.ttl", "<a> <b> <c> .\n");

    let endpoint = RecordingEndpoint::default();
    let report = delete_turtle_files(&endpoint, "pets", &[&missing, &present]).await?;

    assert_eq!(endpoint.received().len(), 1);
    assert!(matches!(
        report.files[0].result,
        Err(GraphDBError::Io { .. })
    ));
    assert!(report.files[1].is_success());
    Ok(())
}

#[tokio::test]
async fn test_blank_repository_rejected_up_front() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let file = write(&dir, "a.ttl", "<a> <b> <c> .\n");

    let endpoint = RecordingEndpoint::default();
    let err = delete_turtle_files(&endpoint, "", &[file])
        .await
        .unwrap_err();

    assert!(matches!(err, GraphDBError::MissingRepository { .. }));
    assert!(endpoint.received().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_no_files_is_an_empty_success() -> anyhow::Result<()> {
    let endpoint = RecordingEndpoint::default();
    let report = delete_turtle_files(&endpoint, "pets", &Vec::<PathBuf>::new()).await?;
    assert!(report.is_success());
    assert!(report.files.is_empty());
    Ok(())
}
