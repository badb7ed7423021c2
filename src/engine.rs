//! Countdown state machine.
//!
//! [`TimerEngine`] owns the remaining-seconds count, the countdown phase, the
//! three raw duration inputs and the single tick source. It is driven by four
//! commands and by the ticks its own source delivers:
//!
//! ```text
//! Idle    --start (remaining > 0)-->     Running
//! Running --pause_resume-->              Paused
//! Paused  --pause_resume / start-->      Running
//! Running --tick reaching zero-->        Idle (remaining = 0)
//! any     --reset-->                     Idle (remaining = 0)
//! any     --set_duration (total > 0)-->  Idle (remaining = total)
//! ```
//!
//! A tick source is armed exactly while the phase is `Running`. Commands that
//! do not apply in the current phase are silently ignored.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widget::engine::{Phase, TimerEngine};
//! use countdown_widget::field::DurationField;
//!
//! let mut engine = TimerEngine::new();
//! engine.set_duration(DurationField::Unset, DurationField::Value(1), DurationField::Value(30));
//! assert_eq!(engine.remaining_seconds(), 90);
//!
//! // The returned command delivers the first tick
//! let _first_tick = engine.start();
//! assert_eq!(engine.phase(), Phase::Running);
//!
//! // The runtime hands that tick back through `update`
//! let tick = engine.pending_tick().unwrap();
//! let _next_tick = engine.update(Box::new(tick));
//! assert_eq!(engine.clock().to_string(), "00:01:29");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! Forward messages to [`TimerEngine::update`] and return the command it
//! gives back so the tick chain keeps running:
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Msg};
//! use countdown_widget::engine::TimerEngine;
//!
//! struct App {
//!     engine: TimerEngine,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.engine.update(msg)
//!     }
//! }
//! ```

use crate::field::{DurationField, FieldKind};
use crate::format::{format_time, Clock};
use crate::ticker::{self, TickHandle, TickMsg, Ticker};
use bubbletea_rs::{Cmd, Msg};
use std::fmt;
use std::time::Duration;

/// Coarse state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Not counting. Either nothing is set, a duration is armed, or the
    /// countdown finished or was reset.
    #[default]
    Idle,
    /// Counting down; a tick source is armed.
    Running,
    /// Stopped mid-countdown; resumes from the same remaining count.
    Paused,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
        };
        f.write_str(s)
    }
}

/// Read-only view of the engine handed to change observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Display triple for the remaining count.
    pub clock: Clock,
    /// Current phase.
    pub phase: Phase,
    /// Authoritative remaining count.
    pub remaining_seconds: u64,
    /// Raw hours, minutes and seconds inputs.
    pub fields: [DurationField; 3],
}

/// Callback invoked after every state change.
pub type RenderFunc = Box<dyn FnMut(&Snapshot) + Send>;

/// Countdown state machine with a single tick source.
pub struct TimerEngine {
    remaining: u64,
    phase: Phase,
    fields: [DurationField; 3],
    ticker: Ticker,
    tick_source: Option<TickHandle>,
    observers: Vec<RenderFunc>,
    mounted: bool,
}

impl fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEngine")
            .field("remaining", &self.remaining)
            .field("phase", &self.phase)
            .field("fields", &self.fields)
            .field("ticker", &self.ticker)
            .field("tick_source", &self.tick_source)
            .field("observers", &self.observers.len())
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sums the three inputs into seconds, saturating on absurd magnitudes.
pub fn total_seconds(hours: DurationField, minutes: DurationField, seconds: DurationField) -> u64 {
    hours
        .magnitude()
        .saturating_mul(3600)
        .saturating_add(minutes.magnitude().saturating_mul(60))
        .saturating_add(seconds.magnitude())
}

impl TimerEngine {
    /// Creates an idle engine with nothing set and one-second ticks.
    pub fn new() -> Self {
        Self::with_interval(ticker::DEFAULT_INTERVAL)
    }

    /// Creates an idle engine whose ticks arrive every `interval`.
    ///
    /// Every tick still removes exactly one second from the count; the
    /// interval only changes how often ticks are delivered.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            remaining: 0,
            phase: Phase::Idle,
            fields: [DurationField::Unset; 3],
            ticker: Ticker::new(interval),
            tick_source: None,
            observers: Vec::new(),
            mounted: true,
        }
    }

    /// Unique identifier of this engine's tick source.
    pub fn id(&self) -> i64 {
        self.ticker.id()
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.ticker.interval()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left on the countdown.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Display triple for the remaining count.
    pub fn clock(&self) -> Clock {
        format_time(self.remaining)
    }

    /// Raw hours, minutes and seconds inputs.
    pub fn fields(&self) -> [DurationField; 3] {
        self.fields
    }

    /// One raw input.
    pub fn field(&self, kind: FieldKind) -> DurationField {
        self.fields[kind.index()]
    }

    /// Whether the engine still accepts commands, i.e. [`unmount`](Self::unmount)
    /// has not run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a tick source is armed.
    pub fn is_ticking(&self) -> bool {
        self.tick_source.is_some()
    }

    /// The tick the armed source will deliver next, if any.
    pub fn pending_tick(&self) -> Option<TickMsg> {
        self.tick_source.as_ref().map(|h| self.ticker.pending(h))
    }

    /// Everything an observer sees.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clock: self.clock(),
            phase: self.phase,
            remaining_seconds: self.remaining,
            fields: self.fields,
        }
    }

    /// Registers a callback run after every state change. No-op commands do
    /// not trigger it.
    pub fn on_change<F>(&mut self, f: F)
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.observers.push(Box::new(f));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }

    fn transition(&mut self, to: Phase) {
        if self.phase != to {
            log::debug!(
                "countdown {}: {} -> {} ({}s left)",
                self.ticker.id(),
                self.phase,
                to,
                self.remaining
            );
            self.phase = to;
        }
    }

    /// Replaces one raw input. The countdown itself is untouched until
    /// [`set_duration`](Self::set_duration) or
    /// [`apply_fields`](Self::apply_fields).
    pub fn set_field(&mut self, kind: FieldKind, value: DurationField) {
        if !self.mounted || self.fields[kind.index()] == value {
            return;
        }
        self.fields[kind.index()] = value;
        self.notify();
    }

    /// Replaces one raw input from edited text; unparsable text leaves the
    /// field unset.
    pub fn edit_field(&mut self, kind: FieldKind, text: &str) {
        self.set_field(kind, DurationField::from_input(text));
    }

    /// Loads a new duration and returns to `Idle`, cancelling any running
    /// countdown. Totals of zero are ignored.
    pub fn set_duration(
        &mut self,
        hours: DurationField,
        minutes: DurationField,
        seconds: DurationField,
    ) {
        let total = total_seconds(hours, minutes, seconds);
        if !self.mounted || total == 0 {
            log::trace!("countdown {}: ignoring empty duration", self.ticker.id());
            return;
        }

        ticker::cancel(&mut self.tick_source);
        self.remaining = total;
        self.transition(Phase::Idle);
        log::debug!("countdown {}: duration set to {}s", self.ticker.id(), total);
        self.notify();
    }

    /// [`set_duration`](Self::set_duration) from the stored raw inputs.
    pub fn apply_fields(&mut self) {
        let [h, m, s] = self.fields;
        self.set_duration(h, m, s);
    }

    /// Starts, or resumes, the countdown.
    ///
    /// Returns the command for the first tick when a source was armed. While
    /// already running nothing is armed, so the countdown never speeds up.
    pub fn start(&mut self) -> Option<Cmd> {
        if !self.mounted || self.remaining == 0 {
            return None;
        }
        let changed = self.phase != Phase::Running;
        self.transition(Phase::Running);
        let cmd = self.ticker.arm(&mut self.tick_source);
        if changed {
            self.notify();
        }
        cmd
    }

    /// Pauses a running countdown or resumes a paused one. Ignored when idle.
    pub fn pause_resume(&mut self) -> Option<Cmd> {
        if !self.mounted {
            return None;
        }
        match self.phase {
            Phase::Running => {
                ticker::cancel(&mut self.tick_source);
                self.transition(Phase::Paused);
                self.notify();
                None
            }
            Phase::Paused => {
                self.transition(Phase::Running);
                let cmd = self.ticker.arm(&mut self.tick_source);
                self.notify();
                cmd
            }
            Phase::Idle => None,
        }
    }

    /// Clears the countdown back to `Idle` with nothing remaining.
    pub fn reset(&mut self) {
        if !self.mounted {
            return;
        }
        let cancelled = ticker::cancel(&mut self.tick_source);
        let changed = cancelled || self.remaining != 0 || self.phase != Phase::Idle;
        self.remaining = 0;
        self.transition(Phase::Idle);
        if changed {
            self.notify();
        }
    }

    /// Applies one tick from the armed source.
    ///
    /// Removes a second and retires the delivered tick, so only the next
    /// scheduled one can land. The tick that reaches zero cancels the source
    /// and returns to `Idle`. Without an armed source this does nothing.
    /// Scheduling is left to [`handle_tick`](Self::handle_tick); calling this
    /// never starts a second tick chain.
    pub(crate) fn tick(&mut self) {
        if self.tick_source.is_none() {
            return;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            ticker::cancel(&mut self.tick_source);
            self.transition(Phase::Idle);
            log::debug!("countdown {}: expired", self.ticker.id());
            self.notify();
            return;
        }

        self.remaining -= 1;
        self.ticker.advance(&mut self.tick_source);
        log::trace!("countdown {}: {}s left", self.ticker.id(), self.remaining);
        self.notify();
    }

    /// Handles a bubbletea-rs message. Only ticks from this engine's armed
    /// source are applied; anything else is ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        self.handle_tick(tick)
    }

    /// Applies `msg` if it is the tick the armed source scheduled last, and
    /// returns the command for the next one.
    pub fn handle_tick(&mut self, msg: &TickMsg) -> Option<Cmd> {
        if !self.ticker.accepts(&self.tick_source, msg) {
            if msg.id == self.ticker.id() {
                log::trace!(
                    "countdown {}: dropping stale tick (tag {})",
                    self.ticker.id(),
                    msg.tag()
                );
            }
            return None;
        }
        self.tick();
        self.tick_source.as_ref().map(|h| self.ticker.schedule(h))
    }

    /// Tears the engine down: the tick source is cancelled, the phase drops
    /// to `Idle` and observers are detached without being notified. Every
    /// later command is ignored. Also runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if ticker::cancel(&mut self.tick_source) {
            log::debug!("countdown {}: unmounted while running", self.ticker.id());
        }
        self.transition(Phase::Idle);
        self.observers.clear();
        self.mounted = false;
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn value(v: u64) -> DurationField {
        DurationField::from(v)
    }

    fn engine_with(secs: u64) -> TimerEngine {
        let mut engine = TimerEngine::new();
        engine.set_duration(DurationField::Unset, DurationField::Unset, value(secs));
        engine
    }

    fn state(engine: &TimerEngine) -> (Phase, u64, bool) {
        (engine.phase(), engine.remaining_seconds(), engine.is_ticking())
    }

    #[test]
    fn test_new_engine() {
        let engine = TimerEngine::new();
        assert_eq!(state(&engine), (Phase::Idle, 0, false));
        assert_eq!(engine.interval(), Duration::from_secs(1));
        assert_eq!(engine.clock().parts(), ("00", "00", "00"));
        assert_eq!(engine.fields(), [DurationField::Unset; 3]);
        assert!(engine.pending_tick().is_none());
    }

    #[test]
    fn test_set_duration_totals() {
        let mut engine = TimerEngine::new();
        engine.set_duration(value(1), value(2), value(3));
        assert_eq!(engine.remaining_seconds(), 3723);
        assert_eq!(engine.phase(), Phase::Idle);

        // minutes past 59 are plain magnitude
        engine.set_duration(DurationField::Unset, value(90), DurationField::Unset);
        assert_eq!(engine.remaining_seconds(), 5400);

        engine.set_duration(value(u64::MAX), value(1), value(1));
        assert_eq!(engine.remaining_seconds(), u64::MAX);
    }

    #[test]
    fn test_zero_duration_is_ignored() {
        let mut engine = engine_with(10);
        engine.start();
        engine.tick();
        let before = state(&engine);

        engine.set_duration(DurationField::Unset, DurationField::Unset, DurationField::Unset);
        assert_eq!(state(&engine), before);

        let mut fresh = TimerEngine::new();
        fresh.set_duration(value(0), value(0), value(0));
        assert_eq!(state(&fresh), (Phase::Idle, 0, false));
    }

    #[test]
    fn test_set_duration_while_running_stops() {
        let mut engine = engine_with(10);
        engine.start();
        let stale = engine.pending_tick().unwrap();

        engine.set_duration(DurationField::Unset, value(1), DurationField::Unset);
        assert_eq!(state(&engine), (Phase::Idle, 60, false));

        // the in-flight tick from the old source must not land
        assert!(engine.handle_tick(&stale).is_none());
        assert_eq!(engine.remaining_seconds(), 60);
    }

    #[test]
    fn test_start_requires_duration() {
        let mut engine = TimerEngine::new();
        assert!(engine.start().is_none());
        assert_eq!(state(&engine), (Phase::Idle, 0, false));
    }

    #[test]
    fn test_start_arms_once() {
        let mut engine = engine_with(10);
        assert!(engine.start().is_some());
        let first = engine.pending_tick().unwrap();

        assert!(engine.start().is_none());
        assert_eq!(engine.pending_tick(), Some(first));
        assert_eq!(engine.phase(), Phase::Running);

        engine.tick();
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_ninety_seconds_run_out() {
        let mut engine = TimerEngine::new();
        engine.set_duration(value(0), value(1), value(30));
        engine.start();

        for _ in 0..90 {
            engine.tick();
        }
        assert_eq!(state(&engine), (Phase::Idle, 0, false));

        // pinned at zero
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(state(&engine), (Phase::Idle, 0, false));
    }

    #[test]
    fn test_pause_and_resume_sequence() {
        let mut engine = engine_with(10);
        engine.start();
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(engine.remaining_seconds(), 5);

        assert!(engine.pause_resume().is_none());
        assert_eq!(state(&engine), (Phase::Paused, 5, false));
        for _ in 0..100 {
            engine.tick();
        }
        assert_eq!(engine.remaining_seconds(), 5);

        assert!(engine.pause_resume().is_some());
        assert_eq!(engine.phase(), Phase::Running);
        engine.tick();
        assert_eq!(engine.remaining_seconds(), 4);
    }

    #[test]
    fn test_pause_resume_idle_is_noop() {
        let mut engine = engine_with(10);
        assert!(engine.pause_resume().is_none());
        assert_eq!(state(&engine), (Phase::Idle, 10, false));
    }

    #[test]
    fn test_start_resumes_from_pause() {
        let mut engine = engine_with(10);
        engine.start();
        engine.tick();
        engine.pause_resume();

        assert!(engine.start().is_some());
        assert_eq!(state(&engine), (Phase::Running, 9, true));
    }

    #[test]
    fn test_pause_drops_in_flight_tick() {
        let mut engine = engine_with(10);
        engine.start();
        let in_flight = engine.pending_tick().unwrap();

        engine.pause_resume();
        engine.pause_resume();
        assert!(engine.handle_tick(&in_flight).is_none());
        assert_eq!(engine.remaining_seconds(), 10);

        let current = engine.pending_tick().unwrap();
        assert!(engine.handle_tick(&current).is_some());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut idle = engine_with(10);
        let mut running = engine_with(10);
        running.start();
        running.tick();
        let mut paused = engine_with(10);
        paused.start();
        paused.pause_resume();
        let mut empty = TimerEngine::new();

        for engine in [&mut idle, &mut running, &mut paused, &mut empty] {
            engine.reset();
            assert_eq!(state(engine), (Phase::Idle, 0, false));
            assert_eq!(engine.clock().to_string(), "00:00:00");
        }
    }

    #[test]
    fn test_update_filters_messages() {
        let mut engine = engine_with(3);
        engine.start();

        assert!(engine.update(Box::new("not a tick")).is_none());
        assert_eq!(engine.remaining_seconds(), 3);

        let mut other = engine_with(3);
        other.start();
        let foreign = other.pending_tick().unwrap();
        assert!(engine.update(Box::new(foreign)).is_none());
        assert_eq!(engine.remaining_seconds(), 3);

        let mine = engine.pending_tick().unwrap();
        assert!(engine.update(Box::new(mine)).is_some());
        assert_eq!(engine.remaining_seconds(), 2);
    }

    #[test]
    fn test_last_tick_returns_no_command() {
        let mut engine = engine_with(2);
        engine.start();
        let first = engine.pending_tick().unwrap();
        assert!(engine.handle_tick(&first).is_some());
        let last = engine.pending_tick().unwrap();
        assert!(engine.handle_tick(&last).is_none());
        assert_eq!(state(&engine), (Phase::Idle, 0, false));
        assert!(engine.start().is_none());
    }

    #[test]
    fn test_fields() {
        let mut engine = TimerEngine::new();
        engine.edit_field(FieldKind::Minutes, "2");
        engine.edit_field(FieldKind::Seconds, "abc");
        assert_eq!(
            engine.fields(),
            [DurationField::Unset, DurationField::Value(2), DurationField::Unset]
        );
        assert_eq!(engine.remaining_seconds(), 0);

        engine.apply_fields();
        assert_eq!(engine.remaining_seconds(), 120);

        engine.set_field(FieldKind::Hours, value(1));
        assert_eq!(engine.field(FieldKind::Hours), DurationField::Value(1));
        // editing inputs does not touch the countdown
        assert_eq!(engine.remaining_seconds(), 120);
    }

    #[test]
    fn test_observer_sees_each_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut engine = TimerEngine::new();
        let sink = Arc::clone(&seen);
        engine.on_change(move |snap| {
            sink.lock().unwrap().push((snap.phase, snap.remaining_seconds));
        });

        // no-ops
        engine.start();
        engine.pause_resume();
        engine.reset();
        engine.set_duration(DurationField::Unset, DurationField::Unset, DurationField::Unset);
        assert!(seen.lock().unwrap().is_empty());

        engine.set_duration(DurationField::Unset, DurationField::Unset, value(2));
        engine.start();
        engine.start();
        engine.tick();
        engine.pause_resume();
        engine.pause_resume();
        engine.tick();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (Phase::Idle, 2),
                (Phase::Running, 2),
                (Phase::Running, 1),
                (Phase::Paused, 1),
                (Phase::Running, 1),
                (Phase::Idle, 0),
            ]
        );
    }

    #[test]
    fn test_observer_snapshot_contents() {
        let last = Arc::new(Mutex::new(None));
        let mut engine = TimerEngine::new();
        let sink = Arc::clone(&last);
        engine.on_change(move |snap| {
            *sink.lock().unwrap() = Some(snap.clone());
        });

        engine.set_field(FieldKind::Hours, value(1));
        engine.apply_fields();

        let snap = last.lock().unwrap().clone().unwrap();
        assert_eq!(snap.clock.to_string(), "01:00:00");
        assert_eq!(snap.fields[0], DurationField::Value(1));
        assert_eq!(snap, engine.snapshot());
    }

    #[test]
    fn test_unmount_cancels_and_detaches() {
        let count = Arc::new(Mutex::new(0));
        let mut engine = engine_with(5);
        let sink = Arc::clone(&count);
        engine.on_change(move |_| *sink.lock().unwrap() += 1);
        engine.start();
        let in_flight = engine.pending_tick().unwrap();
        assert_eq!(*count.lock().unwrap(), 1);

        engine.unmount();
        assert!(!engine.is_mounted());
        assert_eq!(state(&engine), (Phase::Idle, 5, false));
        assert!(engine.handle_tick(&in_flight).is_none());

        // torn down: nothing re-arms or changes
        assert!(engine.start().is_none());
        assert!(engine.pause_resume().is_none());
        engine.set_duration(DurationField::Unset, DurationField::Unset, value(30));
        engine.set_field(FieldKind::Hours, value(1));
        engine.reset();
        assert_eq!(state(&engine), (Phase::Idle, 5, false));
        assert!(engine.field(FieldKind::Hours).is_unset());
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_tick_counts_once() {
        let mut engine = engine_with(10);
        engine.start();
        let tick = engine.pending_tick().unwrap();

        assert!(engine.handle_tick(&tick).is_some());
        assert!(engine.handle_tick(&tick).is_none());
        assert_eq!(engine.remaining_seconds(), 9);
        assert_ne!(engine.pending_tick(), Some(tick));

        // only the newest scheduled tick lands
        let next = engine.pending_tick().unwrap();
        assert!(engine.update(Box::new(next.clone())).is_some());
        assert!(engine.update(Box::new(next)).is_none());
        assert_eq!(engine.remaining_seconds(), 8);
    }

    #[test]
    fn test_direct_tick_retires_pending_tick() {
        let mut engine = engine_with(10);
        engine.start();
        let scheduled = engine.pending_tick().unwrap();

        engine.tick();
        assert_eq!(engine.remaining_seconds(), 9);
        assert!(engine.handle_tick(&scheduled).is_none());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[tokio::test]
    async fn test_start_command_delivers_pending_tick() {
        let mut engine = TimerEngine::with_interval(Duration::from_millis(5));
        engine.set_duration(DurationField::Unset, DurationField::Unset, value(3));

        let first = engine.start().expect("start arms a tick source");
        let msg = first.await.expect("tick command yields a message");
        assert_eq!(msg.downcast_ref::<TickMsg>(), engine.pending_tick().as_ref());

        let next = engine.update(msg).expect("accepted tick schedules the next");
        assert_eq!(engine.remaining_seconds(), 2);
        let msg = next.await.expect("tick command yields a message");
        assert_eq!(msg.downcast_ref::<TickMsg>(), engine.pending_tick().as_ref());

        assert!(engine.update(msg).is_some());
        assert_eq!(engine.remaining_seconds(), 1);
    }

    #[test]
    fn test_custom_interval_still_counts_seconds() {
        let mut engine = TimerEngine::with_interval(Duration::from_millis(100));
        engine.set_duration(DurationField::Unset, DurationField::Unset, value(3));
        engine.start();
        engine.tick();
        assert_eq!(engine.interval(), Duration::from_millis(100));
        assert_eq!(engine.remaining_seconds(), 2);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Running.to_string(), "running");
        assert_eq!(Phase::Paused.to_string(), "paused");
    }
}
