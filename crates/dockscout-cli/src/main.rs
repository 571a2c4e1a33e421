//! dockscout - remote container dashboard CLI

mod commands;
mod selector;

use clap::{Parser, Subcommand};
use dockscout_config::GlobalConfig;
use dockscout_core::{ActionDispatcher, InventorySynchronizer, LogTelemetry, StderrNotifier};
use dockscout_runner::CliRunner;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dockscout")]
#[command(author, version, about = "Remote Container Dashboard", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the configured daemon address (passed as -H)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the configured runtime CLI (docker or podman)
    #[arg(long, global = true, value_parser = ["docker", "podman"])]
    runtime: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List containers on the host
    List,

    /// Live container dashboard, re-polled on the configured interval
    Watch,

    /// Search containers and describe the selection
    Search,

    /// Describe a container (filtered ps line)
    Get {
        /// Container name (interactive selection if not specified)
        container: Option<String>,
    },

    /// Start a container
    Start {
        container: Option<String>,
    },

    /// Stop a container
    Stop {
        container: Option<String>,
    },

    /// Restart a container
    Restart {
        container: Option<String>,
    },

    /// Attach the terminal to a running container
    Attach {
        container: Option<String>,
    },

    /// Stream container logs (options from config)
    Logs {
        container: Option<String>,
    },

    /// Inspect a container
    Inspect {
        container: Option<String>,
    },

    /// Show live resource statistics for a container
    Stats {
        container: Option<String>,
    },

    /// Remove a container
    Rm {
        container: Option<String>,
    },

    /// Run the configured command in a container
    Exec {
        container: Option<String>,
    },

    /// Open an interactive bash shell in a container
    Bash {
        container: Option<String>,
    },

    /// Show or edit global configuration
    Config {
        /// Open config in editor
        #[arg(short, long)]
        edit: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Config command needs no runtime wiring
    if let Commands::Config { edit } = &cli.command {
        return commands::config(*edit).await;
    }

    let mut config = GlobalConfig::load().unwrap_or_default();
    if let Some(host) = cli.host {
        config.defaults.host = Some(host);
    }
    if let Some(runtime) = cli.runtime {
        config.defaults.runtime = runtime;
    }

    let runner: Arc<dyn dockscout_runner::CommandRunner> =
        Arc::new(CliRunner::from_config(&config));
    let telemetry = Arc::new(LogTelemetry);
    let notifier = Arc::new(StderrNotifier);

    let sync = InventorySynchronizer::new(
        runner.clone(),
        telemetry.clone(),
        notifier,
        &config,
    );
    let dispatcher = ActionDispatcher::new(runner, telemetry, &config);

    match cli.command {
        Commands::List => commands::list(&sync).await?,
        Commands::Watch => commands::watch(&sync).await?,
        Commands::Search => commands::search(&sync, &dispatcher).await?,
        Commands::Get { container } => {
            let name = commands::resolve_name(&sync, container, "Select container:").await?;
            commands::get(&dispatcher, &name).await?;
        }
        Commands::Start { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to start:").await?;
            commands::start(&dispatcher, &name).await?;
        }
        Commands::Stop { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to stop:").await?;
            commands::stop(&dispatcher, &name).await?;
        }
        Commands::Restart { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to restart:").await?;
            commands::restart(&dispatcher, &name).await?;
        }
        Commands::Attach { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to attach to:").await?;
            commands::attach(&dispatcher, &name).await?;
        }
        Commands::Logs { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container for logs:").await?;
            commands::logs(&dispatcher, &name).await?;
        }
        Commands::Inspect { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to inspect:").await?;
            commands::inspect(&dispatcher, &name).await?;
        }
        Commands::Stats { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container for stats:").await?;
            commands::stats(&dispatcher, &name).await?;
        }
        Commands::Rm { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container to remove:").await?;
            commands::remove(&dispatcher, &name).await?;
        }
        Commands::Exec { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container for exec:").await?;
            commands::exec(&dispatcher, &name).await?;
        }
        Commands::Bash { container } => {
            let name =
                commands::resolve_name(&sync, container, "Select container for bash:").await?;
            commands::bash(&dispatcher, &name).await?;
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }

    Ok(())
}
