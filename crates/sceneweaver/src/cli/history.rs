//! History and export command handlers.

use super::commands::{HistoryCommands, OutputFormat};
use chrono::DateTime;
use sceneweaver::{
    JsonError, JsonFileProductionStore, Production, ProductionStore, SceneweaverConfig,
    SceneweaverResult,
};

/// Render a production in the requested format.
pub fn format_production(production: &Production, format: OutputFormat) -> SceneweaverResult<String> {
    match format {
        OutputFormat::Script => Ok(production.script_text()),
        OutputFormat::Prompts => Ok(production.prompt_list()),
        OutputFormat::Json => serde_json::to_string_pretty(production)
            .map_err(|e| JsonError::new(format!("Failed to encode production: {}", e)).into()),
    }
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Handle `history` subcommands.
pub async fn handle_history_command(
    config: &SceneweaverConfig,
    command: HistoryCommands,
) -> SceneweaverResult<()> {
    let store = JsonFileProductionStore::from_config(&config.store)?;

    match command {
        HistoryCommands::List { tool } => {
            let records = store.list(&tool).await?;
            if records.is_empty() {
                println!("No saved productions for '{}'", tool);
            }
            for record in records {
                println!(
                    "{}  {}  {}",
                    record.id,
                    format_timestamp(record.timestamp),
                    record.title
                );
            }
        }
        HistoryCommands::Show { id } => {
            let loaded = store.load(&id).await?;
            let request = &loaded.request;
            let rendered = loaded
                .render_states
                .values()
                .filter(|state| state.is_rendered())
                .count();

            println!("Synopsis:  {}", request.synopsis);
            println!("Style:     {}", request.visual_style);
            println!("Range:     {} ({})", request.scene_range, request.quality_mode);
            println!(
                "Status:    {} ({} scenes, {} rendered)",
                loaded.production.status,
                loaded.production.scenes.len(),
                rendered
            );
            println!("Cast:\n{}", request.roster_block());
            println!();
            println!("{}", loaded.production.script_text());
        }
    }
    Ok(())
}

/// Handle `export`.
pub async fn export_production(
    config: &SceneweaverConfig,
    id: &str,
    format: OutputFormat,
) -> SceneweaverResult<()> {
    let store = JsonFileProductionStore::from_config(&config.store)?;
    let loaded = store.load(id).await?;
    println!("{}", format_production(&loaded.production, format)?);
    Ok(())
}
