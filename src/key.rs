//! Key bindings for the countdown widget.
//!
//! A [`Binding`] pairs one or more key presses with the help text shown for
//! them. Bindings are built from string specs such as `"ctrl+c"`, `"enter"`
//! or `"s"`:
//!
//! ```rust
//! use countdown_widget::key::{new_binding, with_help, with_keys_str};
//!
//! let start = new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]);
//! assert_eq!(start.help().desc, "start");
//! assert!(start.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held while pressing the key.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Parses a key spec like `"ctrl+c"`, `"shift+tab"`, `"space"` or `"q"`.
    ///
    /// Returns `None` for specs that name no known key.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut parts: Vec<&str> = spec.split('+').collect();
        // "+" on its own is the plus key, not a separator
        let name = if spec.ends_with("++") || spec == "+" {
            parts.retain(|p| !p.is_empty());
            "+"
        } else {
            parts.pop()?
        };

        for m in parts {
            match m {
                "ctrl" => mods |= KeyModifiers::CONTROL,
                "alt" => mods |= KeyModifiers::ALT,
                "shift" => mods |= KeyModifiers::SHIFT,
                "" | "+" => {}
                _ => return None,
            }
        }

        let code = match name {
            "enter" => KeyCode::Enter,
            "tab" if mods.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    /// Whether a key message is this key press.
    ///
    /// Shift is ignored so that uppercase characters and back-tab match
    /// regardless of how the terminal reports them.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let strip = |m: KeyModifiers| m.difference(KeyModifiers::SHIFT);
        self.code == msg.key && strip(self.mods) == strip(msg.modifiers)
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"s"` or `"↵"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Builder options for [`new_binding`].
pub enum BindingOpt {
    /// Key presses that trigger the binding.
    Keys(Vec<KeyPress>),
    /// Help text.
    Help(Help),
    /// Start the binding disabled.
    Disabled,
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Sets the keys of a binding from string specs. Unknown specs are dropped.
pub fn with_keys_str(specs: &[&str]) -> BindingOpt {
    BindingOpt::Keys(specs.iter().filter_map(|s| KeyPress::parse(s)).collect())
}

/// Sets the help text of a binding.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Starts a binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

impl Binding {
    /// Whether the key message triggers this binding. Disabled bindings never
    /// match.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// The binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Replaces the help text, e.g. when an action's meaning toggles.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// The key presses bound.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }
}

/// A collection of bindings that can describe itself for the help view.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}
