//! Key bindings for the countdown widget.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Keys the countdown widget responds to. Digits typed while focused always
/// edit the focused duration field and are not configurable.
#[derive(Debug, Clone)]
pub struct CountdownKeyMap {
    /// Load the entered duration.
    pub set: Binding,
    /// Start or resume the countdown.
    pub start: Binding,
    /// Toggle between running and paused.
    pub pause_resume: Binding,
    /// Clear the countdown.
    pub reset: Binding,
    /// Focus the next duration field.
    pub next_field: Binding,
    /// Focus the previous duration field.
    pub prev_field: Binding,
    /// Delete the last digit of the focused field.
    pub delete_digit: Binding,
    /// Quit the program.
    pub quit: Binding,
}

impl Default for CountdownKeyMap {
    fn default() -> Self {
        Self {
            set: new_binding(vec![with_keys_str(&["enter"]), with_help("↵", "set")]),
            start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
            pause_resume: new_binding(vec![
                with_keys_str(&["p", "space"]),
                with_help("p", "pause"),
            ]),
            reset: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
            next_field: new_binding(vec![
                with_keys_str(&["tab", "right"]),
                with_help("tab", "next field"),
            ]),
            prev_field: new_binding(vec![
                with_keys_str(&["shift+tab", "left"]),
                with_help("shift+tab", "prev field"),
            ]),
            delete_digit: new_binding(vec![
                with_keys_str(&["backspace"]),
                with_help("⌫", "delete"),
            ]),
            quit: new_binding(vec![with_keys_str(&["q", "ctrl+c"]), with_help("q", "quit")]),
        }
    }
}

impl key::KeyMap for CountdownKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.set,
            &self.start,
            &self.pause_resume,
            &self.reset,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.next_field,
                &self.prev_field,
                &self.delete_digit,
                &self.set,
            ],
            vec![&self.start, &self.pause_resume, &self.reset],
            vec![&self.quit],
        ]
    }
}
