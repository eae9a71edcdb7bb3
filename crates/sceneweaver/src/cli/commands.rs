//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sceneweaver::{AspectRatio, QualityMode};
use std::path::PathBuf;

/// Sceneweaver - batched, context-chained scene production
#[derive(Parser, Debug)]
#[command(name = "sceneweaver")]
#[command(about = "Produce long, consistent scene sequences with per-scene asset rendering", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for the generative service
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Produce a new scene sequence
    Produce(ProduceArgs),

    /// Continue a partial production saved in history
    Resume(ResumeArgs),

    /// Browse saved productions
    #[command(subcommand)]
    History(HistoryCommands),

    /// Print a saved production's script or prompt list
    Export {
        /// Record id
        id: String,

        /// What to print
        #[arg(long, value_enum, default_value = "script")]
        format: OutputFormat,
    },
}

/// Arguments for `produce`
#[derive(Args, Debug)]
pub struct ProduceArgs {
    /// Topic or synopsis of the production
    #[arg(long)]
    pub topic: String,

    /// Visual style guidance
    #[arg(long)]
    pub style: String,

    /// TOML or JSON file listing the characters
    #[arg(long)]
    pub characters: PathBuf,

    /// First scene number
    #[arg(long, default_value_t = 1)]
    pub start: u32,

    /// Last scene number
    #[arg(long)]
    pub end: u32,

    /// Quality mode: fast (20 scenes per call) or thorough (10 per call)
    #[arg(long, default_value = "fast")]
    pub quality: QualityMode,

    /// Aspect ratio for rendered assets (defaults to the configured ratio)
    #[arg(long)]
    pub aspect_ratio: Option<AspectRatio>,

    /// Shared options
    #[command(flatten)]
    pub run: RunOptions,
}

/// Arguments for `resume`
#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// Record id of the partial production
    pub id: String,

    /// Shared options
    #[command(flatten)]
    pub run: RunOptions,
}

/// Options shared by commands that generate scenes.
#[derive(Args, Debug)]
pub struct RunOptions {
    /// Save the result to history
    #[arg(long)]
    pub save: bool,

    /// Render an asset for every scene after generation
    #[arg(long)]
    pub render: bool,

    /// Tool tag to save under
    #[arg(long, default_value = "storyboard")]
    pub tool: String,

    /// What to print when done
    #[arg(long, value_enum, default_value = "script")]
    pub format: OutputFormat,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List saved productions, newest first
    List {
        /// Tool tag to filter by
        #[arg(long, default_value = "storyboard")]
        tool: String,
    },

    /// Show one saved production
    Show {
        /// Record id
        id: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Numbered voice-over script with dialog
    Script,
    /// One generation prompt per line
    Prompts,
    /// The full production as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produce_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sceneweaver",
            "produce",
            "--topic",
            "A storm",
            "--style",
            "Watercolor",
            "--characters",
            "cast.toml",
            "--end",
            "25",
            "--quality",
            "thorough",
            "--aspect-ratio",
            "9:16",
            "--save",
        ])
        .unwrap();

        let Commands::Produce(args) = cli.command else {
            panic!("expected produce");
        };
        assert_eq!(args.start, 1);
        assert_eq!(args.end, 25);
        assert_eq!(args.quality, QualityMode::Thorough);
        assert_eq!(args.aspect_ratio, Some(AspectRatio::Portrait));
        assert!(args.run.save);
        assert!(!args.run.render);
        assert_eq!(args.run.tool, "storyboard");
    }

    #[test]
    fn export_defaults_to_script() {
        let cli = Cli::try_parse_from(["sceneweaver", "export", "abc"]).unwrap();
        match cli.command {
            Commands::Export { id, format } => {
                assert_eq!(id, "abc");
                assert_eq!(format, OutputFormat::Script);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn json_logs_is_global() {
        let cli = Cli::try_parse_from(["sceneweaver", "history", "show", "abc", "--json-logs"])
            .unwrap();
        assert!(cli.json_logs);
        assert!(!cli.verbose);
    }

    #[test]
    fn history_list_takes_tool() {
        let cli = Cli::try_parse_from(["sceneweaver", "history", "list", "--tool", "thumbnails"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::History(HistoryCommands::List { ref tool }) if tool == "thumbnails"
        ));
    }
}
