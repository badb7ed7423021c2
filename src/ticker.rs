//! The tick source behind a running countdown.
//!
//! bubbletea-rs schedules one-shot timers through [`bubbletea_rs::tick`]; a
//! repeating source is a chain of them, each accepted tick scheduling the
//! next. The source is represented by a [`TickHandle`] held in an
//! `Option`. Arming needs the slot to be empty and cancelling takes the
//! handle out, so a second source can never run alongside the first.
//!
//! A tick command cannot be recalled once issued. Instead every arm, and
//! every accepted tick, stamps the source with a fresh tag, and a
//! [`TickMsg`] is only accepted while its tag matches the held handle. Only
//! the most recently scheduled tick can land; ticks from a cancelled source
//! are stale the moment the handle is dropped.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for ticker instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Message delivered each time the tick source fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMsg {
    /// The ticker that produced this tick.
    pub id: i64,
    /// Identifies which arming of the ticker produced this tick. Application
    /// code cannot forge it.
    tag: i64,
}

impl TickMsg {
    /// The arming this tick belongs to.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// Proof that a tick source is armed. Not `Clone`: there is only ever one.
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle {
    tag: i64,
}

impl TickHandle {
    /// The tag ticks from this source carry.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// Issues tick commands for one engine.
#[derive(Debug, Clone)]
pub struct Ticker {
    id: i64,
    interval: Duration,
    last_tag: i64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Ticker {
    /// Creates a ticker firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            id: next_id(),
            interval,
            last_tag: 0,
        }
    }

    /// Unique identifier for this ticker.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms a new source into `slot` and returns the command for its first
    /// tick.
    ///
    /// Returns `None` and leaves the slot alone when a source is already
    /// armed.
    pub fn arm(&mut self, slot: &mut Option<TickHandle>) -> Option<Cmd> {
        if slot.is_some() {
            return None;
        }
        self.last_tag += 1;
        let handle = slot.insert(TickHandle { tag: self.last_tag });
        log::trace!("ticker {} armed with tag {}", self.id, handle.tag);
        Some(self.schedule(handle))
    }

    /// Consumes the current tick of the source in `slot` by giving it a fresh
    /// tag. Copies of the tick that was just delivered become stale.
    pub fn advance(&mut self, slot: &mut Option<TickHandle>) {
        if let Some(handle) = slot {
            self.last_tag += 1;
            handle.tag = self.last_tag;
        }
    }

    /// Schedules the next tick of an armed source.
    pub fn schedule(&self, handle: &TickHandle) -> Cmd {
        let id = self.id;
        let tag = handle.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// The message the armed source delivers next.
    pub fn pending(&self, handle: &TickHandle) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: handle.tag,
        }
    }

    /// Whether `msg` comes from the source currently in `slot`.
    pub fn accepts(&self, slot: &Option<TickHandle>, msg: &TickMsg) -> bool {
        match slot {
            Some(handle) => msg.id == self.id && msg.tag == handle.tag,
            None => false,
        }
    }
}

/// Cancels the source in `slot`, if any. Returns whether one was armed.
pub fn cancel(slot: &mut Option<TickHandle>) -> bool {
    match slot.take() {
        Some(handle) => {
            log::trace!("tick source with tag {} cancelled", handle.tag);
            true
        }
        None => false,
    }
}
