mod backend;
mod config;
mod error;
mod game;
mod geometry;
mod input;
mod menu;
mod obstacle;
mod player;
mod render;
mod road;
mod score;
mod sprite;
mod state;
mod term;

use std::process::exit;

use env_logger::Env;
use log::{error, info};

use crate::error::GameResult;
use crate::game::{Outcome, RoadGame};
use crate::term::TermManager;

/// Playfield coordinate, in virtual pixels.
pub type Coord = i32;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("{}", err);
        exit(1);
    }
}

fn run() -> GameResult<()> {
    let palette = sprite::obstacle_palette()?;
    let term = TermManager::new()?;
    let mut game = RoadGame::new(term, rand::thread_rng(), palette);

    let result = game.backend_mut().setup().and_then(|_| game.run());
    // The terminal goes back to normal whatever happened in the game
    let restored = game.backend_mut().restore();

    match result? {
        Outcome::Quit => info!("Player quit"),
        Outcome::Crashed { score } => info!("Finished with score {}", score),
    }
    restored
}
