//! Launching the GraphDB daemon.
//!
//! Nothing in here terminates the process: a missing executable or a failed
//! spawn comes back as a [`LaunchError`] and the caller decides what to do.

use pgraphdb_client::GraphDBHttpClient;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Name of the start script shipped in GraphDB's `bin` directory.
pub const GRAPHDB_EXECUTABLE: &str = "graphdb";

/// Options for starting a GraphDB server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// GraphDB `bin` directory. When unset the executable is looked up on `PATH`.
    pub path: Option<PathBuf>,
    /// Executable name, `graphdb` unless overridden.
    pub executable: String,
    /// Arguments passed to the executable. Defaults to server mode (`-s`)
    /// daemonized (`-d`).
    pub args: Vec<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            path: None,
            executable: GRAPHDB_EXECUTABLE.to_string(),
            args: vec!["-s".to_string(), "-d".to_string()],
        }
    }
}

impl ServerOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("could not find executable `{executable}`, please place it in PATH")]
    NotFound { executable: String },

    #[error("failed to run {}: {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GraphDB at {url} not ready after {waited:?}")]
    NotReady { url: String, waited: Duration },
}

/// Finds the GraphDB executable.
///
/// With `opts.path` set only `path/executable` is considered; otherwise the
/// executable is searched on `PATH`.
pub fn resolve_executable(opts: &ServerOptions) -> Result<PathBuf, LaunchError> {
    let not_found = |executable: &Path| LaunchError::NotFound {
        executable: executable.display().to_string(),
    };

    match &opts.path {
        Some(dir) => {
            let candidate = dir.join(&opts.executable);
            if candidate.is_file() {
                Ok(candidate)
            } else {
                Err(not_found(&candidate))
            }
        }
        None => which::which(&opts.executable).map_err(|_| not_found(Path::new(&opts.executable))),
    }
}

/// Runs GraphDB with the configured arguments and waits for the command to
/// return. With the default `-s -d` GraphDB forks into the background, so
/// this returns as soon as the daemon is launched.
pub fn start_graphdb(opts: &ServerOptions) -> Result<ExitStatus, LaunchError> {
    let executable = resolve_executable(opts)?;
    info!(executable = %executable.display(), args = ?opts.args, "starting GraphDB");

    Command::new(&executable)
        .args(&opts.args)
        .status()
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LaunchError::NotFound {
                executable: executable.display().to_string(),
            },
            _ => LaunchError::Spawn { executable, source },
        })
}

/// Polls the repository listing until the server answers or `max_wait`
/// elapses.
pub async fn wait_until_ready(
    client: &GraphDBHttpClient,
    max_wait: Duration,
) -> Result<(), LaunchError> {
    let start = Instant::now();

    loop {
        match client.list_repositories().await {
            Ok(_) => {
                info!("GraphDB ready after {:?}", start.elapsed());
                return Ok(());
            }
            Err(err) => debug!("GraphDB not ready yet: {}", err),
        }

        if start.elapsed() >= max_wait {
            return Err(LaunchError::NotReady {
                url: client.endpoint.to_string(),
                waited: start.elapsed(),
            });
        }

        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
