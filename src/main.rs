use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use keepsake::config::CardConfig;
use keepsake::logging::init_tracing;
use keepsake::ui::flow::Screen;
use keepsake::ui::runtime;

#[derive(Parser)]
#[command(name = "keepsake", version, about = "A birthday card that lives in your terminal")]
struct Cli {
    /// Path to a card definition; defaults to the config-dir card or
    /// the built-in sample.
    #[arg(long)]
    card: Option<PathBuf>,

    /// Start on a specific screen instead of the hero.
    #[arg(long, value_enum)]
    start: Option<StartScreen>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartScreen {
    Hero,
    Message,
    Gallery,
    Surprise,
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Hero => Screen::Hero,
            StartScreen::Message => Screen::Message,
            StartScreen::Gallery => Screen::Gallery,
            StartScreen::Surprise => Screen::Surprise,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.card {
        Some(path) => CardConfig::load_from(path)
            .with_context(|| format!("failed to load card from {}", path.display()))?,
        None => CardConfig::load().context("failed to load card")?,
    };

    runtime::run(config, cli.start.map(Screen::from)).context("terminal UI failed")?;
    Ok(())
}
