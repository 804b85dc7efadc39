//! Built-in car sprites. A sprite is what a texture was in a pixel renderer:
//! every cell a rectangle covers is painted with its glyph and colour.

use crossterm::style::Color;

use crate::config::OBSTACLE_GROUPS;
use crate::error::{GameError, GameResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
}

impl Sprite {
    pub const fn new(name: &'static str, glyph: char, color: Color) -> Self {
        Sprite { name, glyph, color }
    }
}

pub const PLAYER_CAR: Sprite = Sprite::new("car-red", '█', Color::Red);

const OBSTACLE_CARS: &[Sprite] = &[
    Sprite::new("car-black", '▓', Color::DarkGrey),
    Sprite::new("car-blue", '▓', Color::Blue),
    Sprite::new("car-brown", '▓', Color::DarkYellow),
    Sprite::new("car-green", '▓', Color::Green),
    Sprite::new("bus", '▒', Color::Magenta),
    Sprite::new("truck", '▒', Color::Cyan),
];

/// One sprite per obstacle group, in group order.
pub fn obstacle_palette() -> GameResult<Vec<Sprite>> {
    check_palette(OBSTACLE_CARS, OBSTACLE_GROUPS)
}

fn check_palette(sprites: &[Sprite], wanted: usize) -> GameResult<Vec<Sprite>> {
    if sprites.len() < wanted {
        return Err(GameError::AssetLoad(format!(
            "need {} obstacle sprites, found {}", wanted, sprites.len()
        )));
    }

    if let Some(bad) = sprites.iter().find(|s| s.glyph.is_whitespace() || s.glyph.is_control()) {
        return Err(GameError::AssetLoad(format!("sprite '{}' has no visible glyph", bad.name)));
    }

    Ok(sprites[..wanted].to_vec())
}
