use console::Key;

use crate::game::{Button, Event};
use crate::grid::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Dir),
    /// Start or Restart, whichever is on screen.
    Confirm,
    Restart,
    Quit,
}

pub static KEY_BINDINGS: &[(Key, Input)] = &[
    (Key::ArrowUp, Input::Move(Dir::Up)),
    (Key::ArrowDown, Input::Move(Dir::Down)),
    (Key::ArrowLeft, Input::Move(Dir::Left)),
    (Key::ArrowRight, Input::Move(Dir::Right)),
    (Key::Char('w'), Input::Move(Dir::Up)),
    (Key::Char('s'), Input::Move(Dir::Down)),
    (Key::Char('a'), Input::Move(Dir::Left)),
    (Key::Char('d'), Input::Move(Dir::Right)),
    (Key::Enter, Input::Confirm),
    (Key::Char(' '), Input::Confirm),
    (Key::Char('r'), Input::Restart),
    (Key::Char('q'), Input::Quit),
    (Key::Escape, Input::Quit),
];

pub fn lookup(key: &Key) -> Option<Input> {
    let key = match key {
        Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
        other => other.clone(),
    };
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, input)| input)
}

/// Translates a key press into a controller event given the buttons on
/// screen. Quit is always honoured.
pub fn event_for(key: &Key, buttons: &[Button]) -> Option<Event> {
    match lookup(key)? {
        Input::Move(dir) => Some(Event::Key(dir)),
        Input::Confirm => buttons
            .iter()
            .copied()
            .find(|b| matches!(b, Button::Start | Button::Restart))
            .map(Event::Button),
        Input::Restart => buttons
            .contains(&Button::Restart)
            .then_some(Event::Button(Button::Restart)),
        Input::Quit => Some(Event::Button(Button::Quit)),
    }
}

/// Key hint printed next to a button label.
pub fn hint(button: Button) -> &'static str {
    match button {
        Button::Start => "Enter",
        Button::Restart => "R",
        Button::Quit => "Q",
    }
}
