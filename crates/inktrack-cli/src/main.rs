mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::assist::AssistSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "inktrack",
    about = "Commission tracker for a freelance writer — manage the queue, report progress, keep clients in the loop",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data directory (default: auto-detect from .inktrack/)
    #[arg(long, global = true, env = "INKTRACK_DATA")]
    data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with a default config and empty store
    Init,

    /// List all commissions (owner view)
    List,

    /// Show full details for a single commission
    Show { id: String },

    /// Search commissions the way a client would (by name, title, or id)
    Search {
        #[arg(required = true)]
        text: Vec<String>,

        /// Restrict to a single status
        #[arg(long)]
        status: Option<String>,
    },

    /// Create a commission
    Add {
        /// Client name (the ID clients search by)
        #[arg(long)]
        client: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// surprise, standard, stream_of_consciousness, adult, or borderline
        #[arg(long, default_value = "standard")]
        category: String,

        #[arg(long, default_value_t = 0.0)]
        price: f64,

        /// Client contact handle (Discord, email)
        #[arg(long)]
        contact: Option<String>,

        /// Reference image file; repeat up to 3 times
        #[arg(long = "reference")]
        references: Vec<PathBuf>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Step a commission's status forward
    Advance { id: String },

    /// Step a commission's status back
    Revert { id: String },

    /// Jump a commission directly to a status
    SetStatus { id: String, status: String },

    /// Delete a commission (irreversible)
    Delete { id: String },

    /// Upload the local blob into the document store (one-way)
    Sync,

    /// Generate assistant text for a commission
    Assist {
        #[command(subcommand)]
        subcommand: AssistSubcommand,
    },

    /// Print the SHA-256 reference hash for a passphrase
    Hash { passphrase: String },

    /// Run the HTTP API server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3141")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.data_dir.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Show { id } => cmd::show::run(&root, &id, cli.json),
        Commands::Search { text, status } => {
            cmd::search::run(&root, &text.join(" "), status.as_deref(), cli.json)
        }
        Commands::Add {
            client,
            title,
            description,
            category,
            price,
            contact,
            references,
            notes,
        } => cmd::add::run(
            &root,
            cmd::add::AddArgs {
                client,
                title,
                description,
                category,
                price,
                contact,
                references,
                notes,
            },
            cli.json,
        ),
        Commands::Advance { id } => cmd::status::advance(&root, &id, cli.json),
        Commands::Revert { id } => cmd::status::revert(&root, &id, cli.json),
        Commands::SetStatus { id, status } => cmd::status::set(&root, &id, &status, cli.json),
        Commands::Delete { id } => cmd::delete::run(&root, &id, cli.json),
        Commands::Sync => cmd::sync::run(&root, cli.json),
        Commands::Assist { subcommand } => cmd::assist::run(&root, subcommand, cli.json),
        Commands::Hash { passphrase } => cmd::hash::run(&passphrase),
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
