//! Sceneweaver CLI binary.
//!
//! - Produce a scene sequence from a synopsis, style and character file
//! - Resume a partial production from history
//! - Browse and export saved productions

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, export_production, handle_history_command, produce, resume};

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    #[cfg(feature = "observability")]
    let provider = sceneweaver::observability::init_observability(
        sceneweaver::observability::ObservabilityConfig::new("sceneweaver")
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    #[cfg(not(feature = "observability"))]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
        if cli.json_logs {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Produce(args) => {
            produce(&config, cli.api_key.as_deref(), args).await?;
        }
        Commands::Resume(args) => {
            resume(&config, cli.api_key.as_deref(), args).await?;
        }
        Commands::History(history_cmd) => {
            handle_history_command(&config, history_cmd).await?;
        }
        Commands::Export { id, format } => {
            export_production(&config, &id, format).await?;
        }
    }

    #[cfg(feature = "observability")]
    sceneweaver::observability::shutdown_observability(provider);

    Ok(())
}
