mod config;
mod formatter;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use config::Config;
use formatter::{print_error, ColorMode};
use pgraphdb_bin::{start_graphdb, wait_until_ready, ServerOptions};
use pgraphdb_client::{GraphDBHttpClient, ServerFile};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "pgraphdb")]
#[command(about = "Wrapper around the GraphDB REST interface", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Log requests and responses to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long = "config", global = true, env = "PGRAPHDB_CONFIG")]
    config_path: Option<PathBuf>,

    /// Color output for errors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct ServerArgs {
    /// The URL where the GraphDB database is hosted [default: http://localhost:7200]
    #[arg(long, env = "PGRAPHDB_URL")]
    url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a SPARQL CONSTRUCT query and return a Turtle formatted response
    Construct {
        repo_name: String,
        sparql_file: PathBuf,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Load the given turtle files
    Load {
        repo_name: String,
        #[arg(required = true)]
        turtle_files: Vec<PathBuf>,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// List data files stored on the GraphDB server
    #[command(name = "ls_files")]
    LsFiles {
        repo_name: String,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// List all repositories in the GraphDB database
    #[command(name = "ls_repo")]
    LsRepo {
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Create a new data repository within a graphdb database
    Make {
        config_file: PathBuf,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Submit a SPARQL query
    Query {
        repo_name: String,
        sparql_file: PathBuf,
        /// Print the header of column names
        #[arg(long)]
        header: bool,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Delete all triples listed in the given turtle files
    #[command(name = "rm_data")]
    RmData {
        repo_name: String,
        #[arg(required = true)]
        turtle_files: Vec<PathBuf>,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Delete a repository in the GraphDB database
    #[command(name = "rm_repo")]
    RmRepo {
        repo_name: String,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Start a GraphDB daemon in server mode
    Start {
        /// The path to the GraphDB bin directory
        #[arg(long, env = "GRAPHDB_BIN_DIR")]
        path: Option<PathBuf>,
        /// Wait up to this many seconds for the server to answer
        #[arg(long)]
        wait: Option<u64>,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Update database through delete or insert SPARQL query
    Update {
        repo_name: String,
        sparql_file: PathBuf,
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Inspect the pgraphdb configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the location of the config file
    Path,
    /// Print the effective configuration
    Show {
        #[command(flatten)]
        server: ServerArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (logs to stderr, keeping stdout clean for data)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::ERROR })
        .init();

    cli.color.apply();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            print_error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_config(cli.config_path.as_deref())?;
    debug!("effective config: {:?}", &config);

    match cli.command {
        Commands::Construct {
            repo_name,
            sparql_file,
            server,
        } => {
            let client = connect(&config, server)?;
            let turtle = client.sparql_construct(&repo_name, &sparql_file).await?;
            print!("{}", turtle);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Load {
            repo_name,
            turtle_files,
            server,
        } => {
            let client = connect(&config, server)?;
            run_load(&client, &repo_name, &turtle_files).await
        }
        Commands::LsFiles { repo_name, server } => {
            let client = connect(&config, server)?;
            let files: Vec<ServerFile> = client.list_files(&repo_name).await?.json()?;
            print!("{}", formatter::file_names(&files));
            Ok(ExitCode::SUCCESS)
        }
        Commands::LsRepo { server } => {
            let client = connect(&config, server)?;
            println!("{}", client.list_repositories().await?.text());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Make {
            config_file,
            server,
        } => {
            let client = connect(&config, server)?;
            println!("{}", client.create_repository(&config_file).await?.text());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Query {
            repo_name,
            sparql_file,
            header,
            server,
        } => {
            let client = connect(&config, server)?;
            let results = client.sparql_query(&repo_name, &sparql_file).await?;
            print!("{}", formatter::tsv(&results, header || config.header));
            Ok(ExitCode::SUCCESS)
        }
        Commands::RmData {
            repo_name,
            turtle_files,
            server,
        } => {
            let client = connect(&config, server)?;
            run_rm_data(&client, &repo_name, &turtle_files).await
        }
        Commands::RmRepo { repo_name, server } => {
            let client = connect(&config, server)?;
            println!("{}", client.remove_repository(&repo_name).await?.text());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Start { path, wait, server } => {
            let opts = ServerOptions {
                path: config.resolve_graphdb_path(path),
                ..Default::default()
            };
            let status = start_graphdb(&opts)?;
            if !status.success() {
                anyhow::bail!("graphdb exited with {}", status);
            }

            if let Some(secs) = wait {
                let client = connect(&config, server)?;
                wait_until_ready(&client, Duration::from_secs(secs)).await?;
                eprintln!("GraphDB is ready at {}", client.endpoint);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Update {
            repo_name,
            sparql_file,
            server,
        } => {
            let client = connect(&config, server)?;
            let outcome = client.update(&repo_name, &sparql_file).await?;
            match outcome.json {
                Some(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                None if !outcome.body.trim().is_empty() => println!("{}", outcome.body),
                None => {}
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
            ConfigCommands::Show { server } => {
                println!("url = {:?}", config.resolve_url(server.url));
                if let Some(path) = &config.graphdb_path {
                    println!("graphdb_path = {:?}", path.display().to_string());
                }
                println!("header = {}", config.header);
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

fn connect(config: &Config, server: ServerArgs) -> Result<GraphDBHttpClient> {
    let url = config.resolve_url(server.url);
    GraphDBHttpClient::new(&url).with_context(|| format!("cannot use server URL {}", url))
}

/// Loads every file in turn; a rejected file is reported and the rest are
/// still loaded.
async fn run_load(
    client: &GraphDBHttpClient,
    repo_name: &str,
    turtle_files: &[PathBuf],
) -> Result<ExitCode> {
    let mut code = ExitCode::SUCCESS;

    for turtle_file in turtle_files {
        match client.load_data(repo_name, turtle_file).await {
            Ok(res) => println!("{}", res.text()),
            Err(err) => {
                print_error(err);
                code = ExitCode::FAILURE;
            }
        }
    }

    Ok(code)
}

async fn run_rm_data(
    client: &GraphDBHttpClient,
    repo_name: &str,
    turtle_files: &[PathBuf],
) -> Result<ExitCode> {
    let report = client.delete_data(repo_name, turtle_files).await?;

    for (path, err) in report.failures() {
        print_error(format!("delete data {}: {}", path.display(), err));
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
