//! Countdown timer widget for Bubble Tea applications.
//!
//! Shows the remaining time as `HH`/`MM`/`SS` cells, three duration inputs,
//! the Set / Start / Pause-or-Resume / Reset controls and a help line. The
//! logic lives in [`TimerEngine`](crate::engine::TimerEngine); this module
//! maps keys onto its commands and renders its state.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widget::countdown::{new, with_title};
//!
//! let widget = new(&[with_title("Pasta")]);
//! assert_eq!(widget.pause_label(), "Pause");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_widget::countdown::Model as Countdown;
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { countdown: Countdown::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward keys and ticks; the returned command keeps ticks flowing
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Keys
//!
//! Digits edit the focused field, `tab`/`shift+tab` move between fields,
//! `enter` loads the duration, `s` starts, `p` or `space` pauses and
//! resumes, `r` resets and `q` quits.

pub mod keymap;
pub mod model;
pub mod view;


pub use keymap::CountdownKeyMap;
pub use model::{
    new, with_interval, with_key_map, with_styles, with_title, CountdownOption, Model,
};
pub use view::{Styles, CELL_WIDTH};
