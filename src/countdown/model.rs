//! Countdown widget state and message handling.

use super::keymap::CountdownKeyMap;
use super::view::Styles;
use crate::engine::{Phase, TimerEngine};
use crate::field::FieldKind;
use crate::help;
use crate::ticker::{TickMsg, DEFAULT_INTERVAL};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use std::time::Duration;

/// Configuration options for [`new`].
#[derive(Debug, Clone)]
pub enum CountdownOption {
    /// Time between ticks.
    WithInterval(Duration),
    /// Styles for the view.
    WithStyles(Box<Styles>),
    /// Key bindings.
    WithKeyMap(Box<CountdownKeyMap>),
    /// Heading shown above the clock.
    WithTitle(String),
}

/// Sets the time between ticks. Each tick still removes one second.
pub fn with_interval(interval: Duration) -> CountdownOption {
    CountdownOption::WithInterval(interval)
}

/// Sets the view styles.
pub fn with_styles(styles: Styles) -> CountdownOption {
    CountdownOption::WithStyles(Box::new(styles))
}

/// Sets the key bindings.
pub fn with_key_map(keymap: CountdownKeyMap) -> CountdownOption {
    CountdownOption::WithKeyMap(Box::new(keymap))
}

/// Sets the heading.
pub fn with_title(title: impl Into<String>) -> CountdownOption {
    CountdownOption::WithTitle(title.into())
}

/// The countdown widget.
///
/// Wraps a [`TimerEngine`] with three editable duration fields, key
/// bindings, styles and a help line. Keys are only handled while the widget
/// is focused; ticks are always handled.
#[derive(Debug)]
pub struct Model {
    /// Key bindings.
    pub keymap: CountdownKeyMap,
    /// View styles.
    pub styles: Styles,
    /// Help line renderer.
    pub help: help::Model,
    /// Heading shown above the clock.
    pub title: String,
    pub(super) engine: TimerEngine,
    pub(super) focus_field: FieldKind,
    pub(super) focused: bool,
}

/// Creates a focused countdown widget configured by `opts`.
///
/// ```rust
/// use countdown_widget::countdown::{new, with_interval, with_title};
/// use std::time::Duration;
///
/// let widget = new(&[with_title("Tea"), with_interval(Duration::from_millis(500))]);
/// assert_eq!(widget.title, "Tea");
/// assert_eq!(widget.engine().interval(), Duration::from_millis(500));
/// ```
pub fn new(opts: &[CountdownOption]) -> Model {
    let mut interval = DEFAULT_INTERVAL;
    let mut m = Model {
        keymap: CountdownKeyMap::default(),
        styles: Styles::default(),
        help: help::Model::new(),
        title: "COUNTDOWN TIMER".to_string(),
        engine: TimerEngine::new(),
        focus_field: FieldKind::Hours,
        focused: true,
    };

    for opt in opts {
        match opt {
            CountdownOption::WithInterval(d) => interval = *d,
            CountdownOption::WithStyles(s) => m.styles = s.as_ref().clone(),
            CountdownOption::WithKeyMap(k) => m.keymap = k.as_ref().clone(),
            CountdownOption::WithTitle(t) => m.title = t.clone(),
        }
    }
    if interval != DEFAULT_INTERVAL {
        m.engine = TimerEngine::with_interval(interval);
    }
    m.sync_keys();
    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl Model {
    /// Creates a focused widget with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying state machine.
    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Mutable access to the state machine, e.g. to register observers.
    pub fn engine_mut(&mut self) -> &mut TimerEngine {
        &mut self.engine
    }

    /// The duration field receiving digits.
    pub fn focus_field(&self) -> FieldKind {
        self.focus_field
    }

    /// Moves digit entry to `kind`.
    pub fn set_focus_field(&mut self, kind: FieldKind) {
        self.focus_field = kind;
    }

    /// Label for the pause/resume control.
    pub fn pause_label(&self) -> &'static str {
        pause_label(self.engine.phase())
    }

    /// The key map as it applies to the engine's current state. Used by the
    /// view so controls are right even when the engine was driven directly
    /// through [`engine_mut`](Self::engine_mut).
    pub fn synced_keys(&self) -> CountdownKeyMap {
        let mut keymap = self.keymap.clone();
        sync_key_map(&mut keymap, &self.engine);
        keymap
    }

    pub(super) fn sync_keys(&mut self) {
        sync_key_map(&mut self.keymap, &self.engine);
    }

    /// Handles a bubbletea-rs message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // the engine may have been driven directly through engine_mut()
        self.sync_keys();
        let cmd = if msg.downcast_ref::<TickMsg>().is_some() {
            self.engine.update(msg)
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg)
        } else {
            None
        };
        self.sync_keys();
        cmd
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }

        let km = &self.keymap;
        if km.quit.matches(key_msg) {
            self.engine.unmount();
            return Some(quit());
        }
        if km.set.matches(key_msg) {
            self.engine.apply_fields();
            return None;
        }
        if km.start.matches(key_msg) {
            return self.engine.start();
        }
        if km.pause_resume.matches(key_msg) {
            return self.engine.pause_resume();
        }
        if km.reset.matches(key_msg) {
            self.engine.reset();
            return None;
        }
        if km.next_field.matches(key_msg) {
            self.focus_field = self.focus_field.next();
            return None;
        }
        if km.prev_field.matches(key_msg) {
            self.focus_field = self.focus_field.prev();
            return None;
        }
        if km.delete_digit.matches(key_msg) {
            let field = self.engine.field(self.focus_field);
            self.engine.set_field(self.focus_field, field.pop_digit());
            return None;
        }
        if let KeyCode::Char(c) = key_msg.key {
            if c.is_ascii_digit() {
                let field = self.engine.field(self.focus_field);
                self.engine.set_field(self.focus_field, field.push_digit(c));
            }
        }
        None
    }
}

fn pause_label(phase: Phase) -> &'static str {
    if phase == Phase::Paused {
        "Resume"
    } else {
        "Pause"
    }
}

/// Enables only the bindings that would do something in the engine's
/// current state and keeps the pause/resume help text in step with the phase.
fn sync_key_map(keymap: &mut CountdownKeyMap, engine: &TimerEngine) {
    let phase = engine.phase();
    let remaining = engine.remaining_seconds();
    keymap
        .start
        .set_enabled(remaining > 0 && phase != Phase::Running);
    keymap.pause_resume.set_enabled(phase != Phase::Idle);
    keymap.reset.set_enabled(remaining > 0 || phase != Phase::Idle);

    let key = keymap.pause_resume.help().key.clone();
    keymap
        .pause_resume
        .set_help(key, pause_label(phase).to_lowercase());
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
