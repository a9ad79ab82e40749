use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roost::catalog::build_catalog;
use roost::checker::http::CheckerClient;
use roost::config::AppConfig;
use roost::platform::github::GitHubPlatform;
use roost::workflow::issue::process_issue;

#[derive(Parser)]
#[command(name = "roost", about = "GitHub bot that handles profile-check requests filed as issues")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a single profile-check issue
    Issue {
        /// Repository in owner/name form
        #[arg(long)]
        repo: String,

        /// Issue number to process
        #[arg(long)]
        issue: u64,

        /// Issue states the bot is allowed to act on
        #[arg(long = "state", default_value = "open")]
        states: Vec<String>,

        /// GitHub Actions run id; posted comments will link to the run
        #[arg(long)]
        run_id: Option<u64>,
    },
    /// Build the profile catalog from YAML documents
    Build {
        /// Directory with one YAML document per profile
        #[arg(default_value = "profiles")]
        documents_dir: PathBuf,

        /// Where to write the merged catalog
        #[arg(default_value = "output/profiles.json")]
        output_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let checker = CheckerClient::new(&config.checker)?;

    match cli.command {
        Command::Issue {
            repo,
            issue,
            states,
            run_id,
        } => {
            let run_url =
                run_id.map(|run_id| format!("https://github.com/{repo}/actions/runs/{run_id}"));
            if let Some(run_url) = &run_url {
                tracing::info!(run_url = %run_url, "Working inside a workflow run");
            }

            tracing::info!(repo = %repo, issue = issue, "Starting profile check");

            let platform = GitHubPlatform::new(&config.github)?;

            let outcome = process_issue(
                &platform,
                &checker,
                &config.bot,
                &repo,
                issue,
                &states,
                run_url.as_deref(),
            )
            .await?;

            tracing::info!(outcome = ?outcome, "Run finished");
        }
        Command::Build {
            documents_dir,
            output_path,
        } => {
            let catalog = build_catalog(&checker, &documents_dir, &output_path).await?;
            tracing::info!(count = catalog.count, "Catalog built");
        }
    }

    Ok(())
}
