//! CLI entry point for the landview view builder.
//!
//! The boundary collaborator: takes a raw identifier from the command line,
//! prints the engine's JSON result on stdout. Logging goes to stderr so
//! stdout stays machine-readable.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use landview_engine::{ViewEngine, ViewError};
use landview_graph::{GraphClient, GraphConfig};

const DEFAULT_LIST_LIMIT: u32 = 50;

#[derive(Parser)]
#[command(name = "landview")]
#[command(about = "Read-only views over the land-records property graph")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: landview).
    #[arg(short, long, default_value = "landview", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the denormalized star record for one parcel.
    Detail {
        /// Parcel identifier in any historical encoding.
        id: String,
    },
    /// Print the node/link graph for one parcel (empty graph on a miss).
    Graph {
        /// Parcel identifier in any historical encoding.
        id: String,
    },
    /// List canonical parcel identifiers.
    List {
        /// Substring filter.
        #[arg(long)]
        term: Option<String>,
        /// Page size; unparseable values fall back to the default.
        #[arg(long, default_value = "50")]
        limit: String,
        /// Rows to skip; unparseable values fall back to 0.
        #[arg(long, default_value = "0")]
        offset: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let graph_config = load_graph_config(&cli.config);
    let graph = GraphClient::connect(&graph_config).await?;
    let engine = ViewEngine::new(graph);

    match cli.command {
        Command::Detail { ref id } => match engine.star_view(id).await {
            Ok(view) => println!("{}", serde_json::to_string(&view)?),
            Err(ViewError::NotFound { identifier }) => {
                // Same body the HTTP boundary serves as a 404.
                println!(
                    "{}",
                    serde_json::json!({ "error": "not found", "parcelId": identifier })
                );
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        },
        Command::Graph { ref id } => {
            let view = engine.graph_view(id).await?;
            println!("{}", serde_json::to_string(&view)?);
        }
        Command::List {
            ref term,
            ref limit,
            ref offset,
        } => {
            // Identifier formats are inconsistent by design, so boundary
            // input is normalized rather than rejected.
            let limit = limit.trim().parse().unwrap_or(DEFAULT_LIST_LIMIT);
            let offset = offset.trim().parse().unwrap_or(0);
            let ids = engine.list_identifiers(term.as_deref(), limit, offset).await?;
            println!("{}", serde_json::to_string(&ids)?);
        }
    }

    Ok(())
}

fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("LANDVIEW")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    let defaults = GraphConfig::default();
    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| defaults.uri.clone()),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| defaults.user.clone()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| defaults.password.clone()),
            max_connections: c
                .get_int("neo4j.max_connections")
                .ok()
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(defaults.max_connections),
            fetch_size: c
                .get_int("neo4j.fetch_size")
                .ok()
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.fetch_size),
        },
        Err(_) => defaults,
    }
}
