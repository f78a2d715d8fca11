//! GraphDB HTTP Client Module
//!
//! GraphDB speaks two protocols and the client keeps them apart:
//!
//! - the workbench REST API (`/rest/...`) for repository lifecycle and the
//!   server import area, where any status of 400 or above is a failure;
//! - the SPARQL 1.1 Protocol (`/repositories/...`) for queries, updates and
//!   statement uploads.
//!
//! ## Module Organization
//!
//! - `client`: Core client struct and constructors
//! - `repository`: Repository creation, listing and removal
//! - `statements`: Turtle upload, SPARQL update and Turtle-driven deletion
//! - `deletion`: Multi-file deletion and the `SparqlUpdater` seam
//! - `query`: SELECT and CONSTRUCT queries
//! - `files`: Server import directory listing
//! - `response`: Response classification
//! - `url_builder`: URL construction utilities

pub mod client;
pub mod deletion;
pub mod files;
pub mod query;
pub mod repository;
pub mod response;
pub mod statements;
pub mod url_builder;

pub use client::{GraphDBHttpClient, DEFAULT_GRAPHDB_URL};
pub use deletion::{delete_turtle_files, DeletionReport, FileDeletion, SparqlUpdater};
pub use files::ServerFile;
pub use response::RawResponse;
pub use statements::TURTLE_CONTENT_TYPE;
pub use url_builder::UrlBuilder;
