use anyhow::Result;
use clap::Parser;
use std::time::Duration;

mod animation;
mod app;
mod container;
mod history;
mod sampler;
mod themes;
mod ui;
mod version;

use app::{App, Mode};
use themes::ThemeName;

fn theme_help_text() -> String {
    let themes = ThemeName::all_themes()
        .iter()
        .map(|theme| theme.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Color theme to use (available: {})", themes)
}

fn parse_theme(s: &str) -> Result<String, String> {
    if ThemeName::all_themes()
        .iter()
        .any(|theme| theme.as_str() == s)
    {
        Ok(s.to_string())
    } else {
        let available = ThemeName::all_themes()
            .iter()
            .map(|theme| theme.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!(
            "Invalid theme '{}'. Available themes: {}",
            s, available
        ))
    }
}

fn mode_help_text() -> String {
    let modes = Mode::all_modes()
        .iter()
        .map(|mode| mode.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Data structure to visualize (available: {})", modes)
}

fn parse_mode(s: &str) -> Result<String, String> {
    if Mode::all_modes().iter().any(|mode| mode.as_str() == s) {
        Ok(s.to_string())
    } else {
        let available = Mode::all_modes()
            .iter()
            .map(|mode| mode.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!("Invalid mode '{}'. Available modes: {}", s, available))
    }
}

#[derive(Parser)]
#[command(name = "ds-viz")]
#[command(about = "A terminal UI application for visualizing stack and queue operations")]
#[command(version = version::get_version())]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, default_value = "stack", value_parser = parse_mode, help = mode_help_text())]
    mode: String,

    /// Animation tick interval in milliseconds
    #[arg(short, long, default_value = "33")]
    update_interval: u64,

    /// Start with the operation log panel visible
    #[arg(short, long)]
    debug: bool,

    #[arg(short, long, default_value = "default", value_parser = parse_theme, help = theme_help_text())]
    theme: String,
}

#[derive(Parser)]
pub enum Commands {
    /// Show detailed version information
    VersionInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::VersionInfo => {
                version::print_header_info();
                return Ok(());
            }
        }
    }

    // Parse theme and mode (both validated by clap already)
    let theme_name = ThemeName::from_str(&cli.theme).unwrap_or_else(|| {
        eprintln!("Unknown theme '{}', using default", cli.theme);
        ThemeName::Default
    });
    let mode = Mode::from_str(&cli.mode).unwrap_or_else(|| {
        eprintln!("Unknown mode '{}', using stack", cli.mode);
        Mode::Stack
    });

    // Initialize and run the TUI application
    let update_interval = Duration::from_millis(cli.update_interval);
    let mut app = App::new(mode, update_interval, cli.debug, theme_name);

    app.run().await?;

    Ok(())
}
