use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::player::Direction;
use crate::render::Viewport;
use crate::Coord;

/// What the game cares about from the terminal's event stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Move(Direction),
    /// Start a game from the menu without the mouse.
    Confirm,
    ShowInstructions,
    /// Left click, already mapped into playfield pixels.
    Click(Coord, Coord),
    Resize(u16, u16),
}

pub fn translate(event: Event, viewport: &Viewport) -> Option<Input> {
    match event {
        Event::Key(key) => translate_key(&key),
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, .. }) => {
            let (x, y) = viewport.cell_to_pixel(column, row);
            Some(Input::Click(x, y))
        },
        Event::Mouse(_) => None,
        Event::Resize(w, h) => Some(Input::Resize(w, h)),
    }
}

fn translate_key(key: &KeyEvent) -> Option<Input> {
    if is_ctrl_c(key) {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Input::Move(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Input::Move(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Input::Move(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Input::Move(Direction::Right)),
        KeyCode::Char('n') | KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Char('i') => Some(Input::ShowInstructions),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn viewport() -> Viewport {
        Viewport::new(80, 35)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        let vp = viewport();
        assert_eq!(translate(key(KeyCode::Up), &vp), Some(Input::Move(Direction::Up)));
        assert_eq!(translate(key(KeyCode::Char('a')), &vp), Some(Input::Move(Direction::Left)));
        assert_eq!(translate(key(KeyCode::Char('s')), &vp), Some(Input::Move(Direction::Down)));
        assert_eq!(translate(key(KeyCode::Right), &vp), Some(Input::Move(Direction::Right)));
    }

    #[test]
    fn quit_keys() {
        let vp = viewport();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ctrl_c, &vp), Some(Input::Quit));
        assert_eq!(translate(key(KeyCode::Esc), &vp), Some(Input::Quit));
        assert_eq!(translate(key(KeyCode::Char('q')), &vp), Some(Input::Quit));
        assert_eq!(translate(key(KeyCode::Char('c')), &vp), None);
    }

    #[test]
    fn left_click_lands_in_playfield_pixels() {
        let vp = viewport();
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click, &vp), Some(Input::Click(405, 210)));
    }

    #[test]
    fn other_mouse_buttons_are_ignored() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 40,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click, &viewport()), None);
    }
}
