use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use chroma_board::cli::Cli;
use chroma_board::traits::{Behavior, SceneSink, TokenSpawn};
use chroma_board::{BoardGame, GameConfig, PlacementResult, Preset};

/// Stands in for the rendering host: logs what it would draw
#[derive(Default)]
struct LogSink {
    spawned: usize,
}

impl SceneSink for LogSink {
    fn spawn_token(&mut self, token: TokenSpawn) {
        self.spawned += 1;
        match &token.animation {
            Some(animation) => log::info!(
                "spawn {} token at {:?} with {} keyframes",
                token.color.to_hex(),
                token.position,
                animation.len()
            ),
            None => log::debug!("spawn {} token at {:?}", token.color.to_hex(), token.position),
        }
    }

    fn show_completion_message(&mut self) {
        println!("Board complete!");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_presets {
        for preset in Preset::iter() {
            println!("{preset}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(preset) = cli.preset {
        config.preset = preset;
    }

    let mut game = BoardGame::new(&config).context("Failed to set up the board")?;
    if let Some(category) = cli.category {
        game.select_category(category);
    }

    let mut sink = LogSink::default();
    game.start(&mut sink);

    for click in &cli.clicks {
        let result = game.handle_click(click.x, click.y, &mut sink);
        match result {
            PlacementResult::Accepted { cell, category } => {
                println!("({}, {}): placed {category} at {cell}", click.x, click.y)
            }
            PlacementResult::Rejected { cell, category, conflict } => {
                println!("({}, {}): {category} rejected at {cell}: {conflict}", click.x, click.y)
            }
            PlacementResult::OutOfBounds => println!("({}, {}): missed the board", click.x, click.y),
        }
        game.update(&mut sink);
    }

    if !cli.quiet {
        print!("{}", game.board());
        println!("{} tokens drawn, won: {}", sink.spawned, game.is_won());
    }

    Ok(())
}
