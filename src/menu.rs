use crate::geometry::Rect;
use crate::Coord;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Instructions,
    Quit,
}

pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub choice: MenuChoice,
}

pub const BUTTONS: &[Button] = &[
    Button { label: "New Game", rect: Rect::new(300, 150, 200, 100), choice: MenuChoice::NewGame },
    Button { label: "Instructions", rect: Rect::new(220, 280, 350, 90), choice: MenuChoice::Instructions },
    Button { label: "Quit", rect: Rect::new(270, 400, 240, 80), choice: MenuChoice::Quit },
];

pub const INSTRUCTIONS: &[&str] = &[
    "Arrow keys or WASD move your car",
    "Up/Down jump a whole lane length, Left/Right half a car",
    "Dodge the falling traffic for as long as you can",
    "You score a point for every 60ms you survive",
    "Esc, q or CTRL+C to quit",
];

/// The button under a click, in playfield pixels.
pub fn hit_test(point: (Coord, Coord)) -> Option<MenuChoice> {
    BUTTONS.iter().find(|b| b.rect.contains(point)).map(|b| b.choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_map_to_buttons() {
        assert_eq!(hit_test((400, 200)), Some(MenuChoice::NewGame));
        assert_eq!(hit_test((220, 280)), Some(MenuChoice::Instructions));
        assert_eq!(hit_test((510, 480)), Some(MenuChoice::Quit));
    }

    #[test]
    fn clicks_between_buttons_do_nothing() {
        assert_eq!(hit_test((400, 265)), None);
        assert_eq!(hit_test((10, 10)), None);
        assert_eq!(hit_test((780, 690)), None);
    }
}
