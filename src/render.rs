//! Paints scenes into a character grid. The playfield is 800x700 virtual
//! pixels; `Viewport` squeezes it onto however many cells the terminal has.

use crossterm::style::Color;

use crate::backend::Scene;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::Rect;
use crate::menu::{BUTTONS, INSTRUCTIONS};
use crate::sprite::{Sprite, PLAYER_CAR};
use crate::state::GameState;
use crate::Coord;

const MENU_BACKGROUND: Color = Color::Rgb { r: 45, g: 12, b: 188 };
const BUTTON_COLOR: Color = Color::Rgb { r: 240, g: 200, b: 40 };
const ROAD_COLOR: Color = Color::Rgb { r: 60, g: 60, b: 60 };
const LANE_MARK: char = '╏';
const LANE_WIDTH: Coord = 200;
/// Lane dashes repeat every this many pixels down the road tile.
const DASH_PERIOD: Coord = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', fg: Color::Reset, bg: Color::Reset };
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols: cols.max(1), rows: rows.max(1) }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Cells covered by `rect`, as half-open column and row ranges clipped to
    /// the screen. A cell is covered when its centre (see `cell_to_pixel`)
    /// lies inside the rect, so a click on any painted cell lands back inside
    /// it. Anything on screen too thin to cover a centre still gets one cell.
    pub fn project(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        if rect.right() <= 0 || rect.bottom() <= 0 || rect.left() >= SCREEN_WIDTH || rect.top() >= SCREEN_HEIGHT {
            return None;
        }

        let (left, right) = covered_cells(rect.left(), rect.right(), SCREEN_WIDTH, self.cols);
        let (top, bottom) = covered_cells(rect.top(), rect.bottom(), SCREEN_HEIGHT, self.rows);
        Some((left, top, right, bottom))
    }

    /// Centre of a cell in playfield pixels.
    pub fn cell_to_pixel(&self, col: u16, row: u16) -> (Coord, Coord) {
        let x = (2 * col as i64 + 1) * SCREEN_WIDTH as i64 / (2 * self.cols as i64);
        let y = (2 * row as i64 + 1) * SCREEN_HEIGHT as i64 / (2 * self.rows as i64);
        (x as Coord, y as Coord)
    }
}

/// First cell whose centre is at or past `pos`.
fn first_cell_from(pos: Coord, extent: Coord, cells: u16) -> i64 {
    // centre(c) = floor((2c + 1) * extent / (2 * cells)) >= pos
    let num = 2 * cells as i64 * pos as i64 - extent as i64;
    let den = 2 * extent as i64;
    -(-num).div_euclid(den)
}

fn covered_cells(start: Coord, end: Coord, extent: Coord, cells: u16) -> (u16, u16) {
    let first = first_cell_from(start, extent, cells).max(0);
    let last = first_cell_from(end, extent, cells).min(cells as i64);

    if first < last {
        return (first as u16, last as u16);
    }

    let cell = (start as i64 * cells as i64).div_euclid(extent as i64).max(0).min(cells as i64 - 1);
    (cell as u16, cell as u16 + 1)
}

/// A frame's worth of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas { width, height, cells: vec![Cell::BLANK; width as usize * height as usize] }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn get(&self, col: u16, row: u16) -> Cell {
        self.cells[self.index(col, row)]
    }

    pub fn fill(&mut self, cell: Cell) {
        for c in self.cells.iter_mut() {
            *c = cell;
        }
    }

    pub fn put(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.width && row < self.height {
            let idx = self.index(col, row);
            self.cells[idx] = cell;
        }
    }

    pub fn fill_area(&mut self, (left, top, right, bottom): (u16, u16, u16, u16), cell: Cell) {
        for row in top..bottom {
            for col in left..right {
                self.put(col, row, cell);
            }
        }
    }

    /// Writes `text` starting at a cell, keeping whatever background is there.
    pub fn put_str(&mut self, col: u16, row: u16, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let col = col + i as u16;
            if col >= self.width || row >= self.height {
                break;
            }
            let bg = self.get(col, row).bg;
            self.put(col, row, Cell { ch, fg, bg });
        }
    }

    /// A framed box in the middle of the screen with each line centred in it.
    pub fn message_box(&mut self, lines: &[&str], fg: Color, bg: Color) {
        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4) as u16;
        let left = self.width.saturating_sub(msg_width) / 2;
        let top = self.height.saturating_sub(msg_height) / 2;

        let blank = Cell { ch: ' ', fg, bg };
        self.fill_area((left, top, left + msg_width, top + msg_height), blank);

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.put_str(left, top + 1 + i as u16, &padded, fg);
        }
    }

    fn index(&self, col: u16, row: u16) -> usize {
        self.width as usize * row as usize + col as usize
    }
}

pub fn paint(canvas: &mut Canvas, viewport: &Viewport, scene: Scene) {
    match scene {
        Scene::Menu => paint_menu(canvas, viewport),
        Scene::Instructions => {
            canvas.fill(Cell { bg: MENU_BACKGROUND, ..Cell::BLANK });
            canvas.message_box(INSTRUCTIONS, Color::White, Color::Black);
        },
        Scene::Playing(state) => paint_round(canvas, viewport, state),
        Scene::GameOver(state) => {
            paint_round(canvas, viewport, state);
            let score = format!("Your Score: {}", state.score());
            canvas.message_box(&["GAME OVER", "", score.as_str()], Color::Red, Color::Black);
        },
    }
}

fn paint_menu(canvas: &mut Canvas, viewport: &Viewport) {
    canvas.fill(Cell { bg: MENU_BACKGROUND, ..Cell::BLANK });

    for button in BUTTONS {
        if let Some(area) = viewport.project(&button.rect) {
            canvas.fill_area(area, Cell { ch: ' ', fg: Color::Black, bg: BUTTON_COLOR });

            let (left, top, right, bottom) = area;
            let label_len = button.label.chars().count() as u16;
            let col = left + (right - left).saturating_sub(label_len) / 2;
            canvas.put_str(col, top + (bottom - top) / 2, button.label, Color::Black);
        }
    }
}

fn paint_round(canvas: &mut Canvas, viewport: &Viewport, state: &GameState) {
    canvas.fill(Cell { bg: ROAD_COLOR, ..Cell::BLANK });
    paint_road(canvas, viewport, state.road.tiles());

    for group in &state.groups {
        for rect in group.rects() {
            paint_sprite(canvas, viewport, rect, group.sprite());
        }
    }
    paint_sprite(canvas, viewport, state.player.rect(), PLAYER_CAR);

    canvas.put_str(1, 0, &format!("Score: {}", state.score()), Color::White);
}

/// Dashed lane dividers. The dash pattern is anchored to each tile, so it
/// slides down the screen as the tiles scroll.
fn paint_road(canvas: &mut Canvas, viewport: &Viewport, tiles: &[Rect; 2]) {
    let (cols, rows) = viewport.size();
    let mark = Cell { ch: LANE_MARK, fg: Color::White, bg: ROAD_COLOR };

    for row in 0..rows {
        let (_, y) = viewport.cell_to_pixel(0, row);
        let tile = match tiles.iter().find(|t| y >= t.top() && y < t.bottom()) {
            Some(tile) => tile,
            None => continue,
        };
        if (y - tile.top()) % DASH_PERIOD >= DASH_PERIOD / 2 {
            continue;
        }

        for lane_x in (LANE_WIDTH..SCREEN_WIDTH).step_by(LANE_WIDTH as usize) {
            let col = (lane_x as i64 * cols as i64 / SCREEN_WIDTH as i64) as u16;
            canvas.put(col, row, mark);
        }
    }
}

fn paint_sprite(canvas: &mut Canvas, viewport: &Viewport, rect: &Rect, sprite: Sprite) {
    if let Some(area) = viewport.project(rect) {
        canvas.fill_area(area, Cell { ch: sprite.glyph, fg: sprite.color, bg: ROAD_COLOR });
    }
}
