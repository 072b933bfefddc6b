//! Keyboard shortcuts. A convenience layer; every action is also reachable
//! from the toolbar.

use crate::territory::Mode;

use super::Action;

/// `(key, description)` pairs for the help line.
pub const SHORTCUTS: &[(char, &str)] = &[
    ('L', "grid lines"),
    ('R', "reset"),
    ('S', "study mode"),
    ('1', "arterial"),
    ('2', "functional"),
    ('3', "lesions"),
];

pub fn shortcut(key: char) -> Option<Action> {
    match key.to_ascii_lowercase() {
        'l' => Some(Action::ToggleGrid),
        'r' => Some(Action::Reset),
        's' => Some(Action::ToggleStudy),
        '1' => Some(Action::SelectMode(Mode::Arterial)),
        '2' => Some(Action::SelectMode(Mode::Functional)),
        '3' => Some(Action::SelectMode(Mode::Lesions)),
        _ => None,
    }
}
