//! # countdown-widget
//!
//! A pausable countdown timer component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate is split into a small state machine and the widget that drives
//! it:
//!
//! - [`engine`]: [`TimerEngine`], the countdown state (remaining seconds and
//!   phase), its four commands and the tick handling.
//! - [`ticker`]: the single tick source a running countdown owns.
//! - [`format`]: the `HH:MM:SS` projection of a remaining-seconds count.
//! - [`field`]: the raw hours/minutes/seconds inputs and their parsing rules.
//! - [`countdown`]: the Bubble Tea widget with inputs, controls and help.
//! - [`key`], [`help`]: key bindings and the help line.
//!
//! ## Quick Start
//!
//! ```rust
//! use countdown_widget::prelude::*;
//!
//! let mut engine = TimerEngine::new();
//! engine.set_duration(
//!     DurationField::Unset,
//!     DurationField::Value(1),
//!     DurationField::Value(30),
//! );
//! let _first_tick = engine.start();
//!
//! // Ticks come back from the runtime; hand them to `update` and return the
//! // command it gives back to keep the countdown going
//! let tick = engine.pending_tick().unwrap();
//! let _next_tick = engine.update(Box::new(tick));
//! assert_eq!(engine.clock().to_string(), "00:01:29");
//!
//! engine.pause_resume();
//! assert_eq!(engine.phase(), Phase::Paused);
//!
//! engine.reset();
//! assert_eq!(engine.remaining_seconds(), 0);
//! ```
//!
//! ## Focus Management
//!
//! The widget implements [`Component`]; a blurred countdown keeps ticking but
//! ignores keys:
//!
//! ```rust
//! use countdown_widget::prelude::*;
//!
//! let mut countdown = Countdown::new();
//! countdown.blur();
//! assert!(!countdown.focused());
//! ```
//!
//! ## Logging
//!
//! Phase transitions are logged at `debug` and ticks at `trace` through the
//! [`log`](https://docs.rs/log) facade. The library never installs a logger.

#![warn(missing_docs)]

pub mod countdown;
pub mod engine;
pub mod field;
pub mod format;
pub mod help;
pub mod key;
pub mod ticker;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
pub trait Component {
    /// Gives the component keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use countdown::{
    new as countdown_new, CountdownKeyMap, CountdownOption, Model as Countdown,
    Styles as CountdownStyles,
};
pub use engine::{Phase, RenderFunc, Snapshot, TimerEngine};
pub use field::{DurationField, FieldKind, ParseFieldError};
pub use format::{format_time, Clock};
pub use help::Model as HelpModel;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, Help as KeyHelp,
    KeyMap, KeyPress,
};
pub use ticker::{TickMsg, Ticker};

/// Commonly used types.
pub mod prelude {
    pub use crate::countdown::{
        new as countdown_new, with_interval, with_key_map, with_styles, with_title,
        CountdownKeyMap, CountdownOption, Model as Countdown, Styles as CountdownStyles,
    };
    pub use crate::engine::{Phase, Snapshot, TimerEngine};
    pub use crate::field::{DurationField, FieldKind};
    pub use crate::format::{format_time, Clock};
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::ticker::TickMsg;
    pub use crate::Component;
}
