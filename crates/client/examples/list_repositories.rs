//! Example demonstrating how to list repositories and run a query against
//! the first one.

use pgraphdb_client::{GraphDBHttpClient, ResponseFormat};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Connect to local GraphDB instance
    let client = GraphDBHttpClient::local_node()?;

    println!("Listing repositories:");
    println!("=====================");

    let repositories: Vec<Value> = client.list_repositories().await?.json()?;

    for repo in &repositories {
        let id = repo.get("id").and_then(Value::as_str).unwrap_or("?");
        let title = repo.get("title").and_then(Value::as_str).unwrap_or("");
        println!("- {} {}", id, title);
    }

    let Some(first) = repositories
        .first()
        .and_then(|repo| repo.get("id"))
        .and_then(Value::as_str)
    else {
        return Ok(());
    };

    println!("\nTriple count in {}:", first);
    let results = client
        .query(
            first,
            "SELECT (COUNT(*) AS ?triples) WHERE { ?s ?p ?o }",
            ResponseFormat::Json,
        )
        .await?
        .into_bindings()
        .ok_or_else(|| anyhow::anyhow!("expected SPARQL JSON results"))?;

    for row in results.rows() {
        let cells: Vec<&str> = row.into_iter().flatten().map(|v| v.value()).collect();
        println!("{}", cells.join("\t"));
    }

    Ok(())
}
