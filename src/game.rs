use log::{debug, info};
use rand::Rng;

use crate::backend::{Backend, Scene};
use crate::config::{DISPLAY_DELAY, FRAME_INTERVAL};
use crate::error::GameResult;
use crate::input::Input;
use crate::menu::{self, MenuChoice};
use crate::sprite::Sprite;
use crate::state::GameState;

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Crashed { score: u32 },
}

pub struct RoadGame<B: Backend, R: Rng> {
    backend: B,
    rng: R,
    palette: Vec<Sprite>,
}

impl<B: Backend, R: Rng> RoadGame<B, R> {
    pub fn new(backend: B, rng: R, palette: Vec<Sprite>) -> Self {
        RoadGame { backend, rng, palette }
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Menu, optional instructions, one round, and the game-over screen.
    pub fn run(&mut self) -> GameResult<Outcome> {
        loop {
            match self.menu()? {
                MenuChoice::NewGame => return self.play(),
                MenuChoice::Instructions => {
                    if self.instructions()? {
                        return Ok(Outcome::Quit);
                    }
                },
                MenuChoice::Quit => return Ok(Outcome::Quit),
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn menu(&mut self) -> GameResult<MenuChoice> {
        loop {
            for input in self.backend.poll_inputs()? {
                let choice = match input {
                    Input::Quit => Some(MenuChoice::Quit),
                    Input::Confirm => Some(MenuChoice::NewGame),
                    Input::ShowInstructions => Some(MenuChoice::Instructions),
                    Input::Click(x, y) => menu::hit_test((x, y)),
                    _ => None,
                };

                if let Some(choice) = choice {
                    info!("Menu choice: {:?}", choice);
                    return Ok(choice);
                }
            }

            self.backend.present(Scene::Menu)?;
            self.backend.sleep(FRAME_INTERVAL);
        }
    }

    /// Shows the instructions for the full display delay. Input that arrived
    /// meanwhile is only looked at afterwards; returns whether it asked to quit.
    fn instructions(&mut self) -> GameResult<bool> {
        self.backend.present(Scene::Instructions)?;
        self.backend.sleep(DISPLAY_DELAY);

        let queued = self.backend.poll_inputs()?;
        debug!("{} inputs queued during the instructions", queued.len());
        Ok(queued.contains(&Input::Quit))
    }

    fn play(&mut self) -> GameResult<Outcome> {
        let mut state = GameState::new(&mut self.rng, &self.palette, self.backend.now());
        info!("Starting a round with {} obstacle groups", state.groups.len());

        loop {
            for input in self.backend.poll_inputs()? {
                match input {
                    Input::Quit => {
                        info!("Quit mid-round with score {}", state.score());
                        return Ok(Outcome::Quit);
                    },
                    Input::Move(direction) => state.steer(direction),
                    _ => {},
                }
            }

            state.tick(self.backend.now(), &mut self.rng);
            self.backend.present(Scene::Playing(&state))?;

            if state.check_crash() {
                return self.game_over(&state);
            }

            self.backend.sleep(FRAME_INTERVAL);
        }
    }

    fn game_over(&mut self, state: &GameState) -> GameResult<Outcome> {
        info!("Game over, final score {}", state.score());
        self.backend.present(Scene::GameOver(state))?;
        self.backend.sleep(DISPLAY_DELAY);
        Ok(Outcome::Crashed { score: state.score() })
    }
}
