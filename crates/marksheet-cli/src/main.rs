//! marksheet CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "marksheet", version, about = "Academic transcript and credential tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display a learner's transcript
    Transcript {
        /// Learner identifier
        #[arg(long)]
        learner: String,

        /// Learner display email
        #[arg(long, default_value = "")]
        email: String,

        /// Store name from the config (defaults to the configured default)
        #[arg(long)]
        store: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Directory to save the JSON report into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compute a transcript and persist an official snapshot
    Issue {
        /// Learner identifier
        #[arg(long)]
        learner: String,

        /// Learner display email
        #[arg(long, default_value = "")]
        email: String,

        /// Store name from the config
        #[arg(long)]
        store: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a verification code against a saved report
    Verify {
        /// Verification code (the compact form from the credential)
        #[arg(long)]
        code: String,

        /// Saved transcript report JSON
        #[arg(long)]
        report: PathBuf,
    },

    /// Validate local achievement bundle files
    Validate {
        /// Path to a bundle JSON file or a directory of them
        #[arg(long)]
        data: PathBuf,
    },

    /// Create starter config and a sample learner bundle
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marksheet=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transcript {
            learner,
            email,
            store,
            format,
            output,
            config,
        } => commands::transcript::execute(learner, email, store, format, output, config).await,
        Commands::Issue {
            learner,
            email,
            store,
            config,
        } => commands::issue::execute(learner, email, store, config).await,
        Commands::Verify { code, report } => commands::verify::execute(code, report),
        Commands::Validate { data } => commands::validate::execute(data),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
