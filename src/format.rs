//! Projection of a remaining-seconds count onto an `HH:MM:SS` display triple.

use std::fmt;

/// The display triple derived from a remaining-seconds count.
///
/// Each part is zero-padded to at least two digits. Counts of 100 hours or
/// more widen the hour part instead of wrapping.
///
/// ```rust
/// use countdown_widget::format::format_time;
///
/// let clock = format_time(3661);
/// assert_eq!(clock.hours, "01");
/// assert_eq!(clock.to_string(), "01:01:01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clock {
    /// Whole hours.
    pub hours: String,
    /// Minutes within the hour, `00` to `59`.
    pub minutes: String,
    /// Seconds within the minute, `00` to `59`.
    pub seconds: String,
}

impl Clock {
    /// Reassembles the seconds count this clock was formatted from.
    ///
    /// Returns `None` if a part is not numeric, which only happens for clocks
    /// built by hand.
    pub fn total_seconds(&self) -> Option<u64> {
        let h: u64 = self.hours.parse().ok()?;
        let m: u64 = self.minutes.parse().ok()?;
        let s: u64 = self.seconds.parse().ok()?;
        h.checked_mul(3600)?
            .checked_add(m.checked_mul(60)?)?
            .checked_add(s)
    }

    /// The three parts as a tuple, in display order.
    pub fn parts(&self) -> (&str, &str, &str) {
        (&self.hours, &self.minutes, &self.seconds)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Formats a remaining-seconds count into its display triple.
pub fn format_time(total: u64) -> Clock {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    Clock {
        hours: format!("{:02}", hours),
        minutes: format!("{:02}", minutes),
        seconds: format!("{:02}", seconds),
    }
}
