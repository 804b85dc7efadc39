use std::time::{Duration, Instant};

use crate::error::GameResult;
use crate::input::Input;
use crate::state::GameState;

/// What to put on screen this frame.
#[derive(Copy, Clone)]
pub enum Scene<'a> {
    Menu,
    Instructions,
    Playing(&'a GameState),
    GameOver(&'a GameState),
}

/// The window onto the outside world: input, drawing, and time. The game loop
/// only talks to the terminal through this, so it can be driven by a script
/// in tests.
pub trait Backend {
    /// Drains everything queued since the last call without blocking.
    fn poll_inputs(&mut self) -> GameResult<Vec<Input>>;

    fn present(&mut self, scene: Scene) -> GameResult<()>;

    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);
}
