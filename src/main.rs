//! Letter board - Entry Point

use clap::Parser;
use letterboard::config::SelectionModifier;
use std::path::PathBuf;
use tracing::info;

/// Letter board - split text into draggable, selectable letters
#[derive(Parser, Debug)]
#[command(name = "letterboard")]
#[command(version)]
#[command(about = "Split text into letters you can drag to swap and modifier-click to select")]
pub struct Args {
    /// Text to display on startup
    #[arg(short, long)]
    pub text: Option<String>,

    /// Modifier key that turns a click into a selection toggle
    #[arg(short, long, value_enum)]
    pub modifier: Option<SelectionModifier>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, ignored_overrides) = {
        let config_file = letterboard::config::load_config_with_precedence(args.config.clone())?;
        let merged = letterboard::config::merge_config(config_file);
        let (with_env, ignored) = letterboard::config::apply_env_overrides(merged);
        (
            letterboard::config::apply_cli_overrides(with_env, args.modifier),
            ignored,
        )
    };

    letterboard::logging::init(&config.log_file_path)?;

    for ignored in &ignored_overrides {
        ignored.report();
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let colors = letterboard::view::ColorConfig::from_env_and_args(args.no_color);
    let styles = letterboard::view::LetterStyles::with_color_config(colors);
    let app_state = letterboard::state::AppState::from_config(&config);

    letterboard::view::run(app_state, styles, args.text)?;

    Ok(())
}
