//! Client for the GraphDB triple store.
//!
//! Covers repository lifecycle, Turtle loading, SPARQL queries and updates,
//! and deletion of the triples listed in Turtle files through a generated
//! `DELETE DATA` update.
//!
//! ```no_run
//! use pgraphdb_client::{GraphDBHttpClient, ResponseFormat};
//!
//! # async fn example() -> pgraphdb_client::GraphDBResult<()> {
//! let client = GraphDBHttpClient::local_node()?;
//! client.load_data("pets", "pets.ttl").await?;
//!
//! let result = client
//!     .query("pets", "SELECT * WHERE { ?s ?p ?o } LIMIT 10", ResponseFormat::Json)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub use {err::*, http::*, result::*, spec::*, turtle::*};

pub mod err;
mod http;
pub mod result;
mod spec;
mod turtle;
