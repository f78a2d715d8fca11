//! GraphDB server executable discovery and launch.
//!
//! GraphDB ships a `graphdb` start script in its `bin` directory. This crate
//! finds that script, either in an explicitly given directory or on `PATH`,
//! and runs it in server mode.
//!
//! ## Example
//!
//! ```no_run
//! use pgraphdb_bin::{start_graphdb, ServerOptions};
//!
//! let status = start_graphdb(&ServerOptions::default())?;
//! println!("graphdb exited with {}", status);
//! # Ok::<(), pgraphdb_bin::LaunchError>(())
//! ```

pub mod server;

pub use server::{
    resolve_executable, start_graphdb, wait_until_ready, LaunchError, ServerOptions,
    GRAPHDB_EXECUTABLE,
};
