//! Duration input fields.
//!
//! Each of the hours, minutes and seconds inputs holds either nothing or a
//! positive magnitude. Edits are lossy: text that is empty, non-numeric or
//! zero leaves the field [`DurationField::Unset`], which contributes `0` to a
//! duration total and shows the placeholder when rendered. Values are not
//! checked against clock limits, so `90` minutes is a valid input.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a field edit was not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    /// The edit was empty or whitespace.
    #[error("duration field is empty")]
    Empty,
    /// The edit contained something other than ASCII digits.
    #[error("`{0}` is not a whole number")]
    NotNumeric(String),
    /// The digits do not fit in a `u64`.
    #[error("`{0}` is too large for a duration field")]
    OutOfRange(String),
}

/// Which of the three duration inputs a field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Hours input.
    Hours,
    /// Minutes input.
    Minutes,
    /// Seconds input.
    Seconds,
}

impl FieldKind {
    /// All fields in display order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Hours, FieldKind::Minutes, FieldKind::Seconds];

    /// Position in display order.
    pub fn index(self) -> usize {
        match self {
            FieldKind::Hours => 0,
            FieldKind::Minutes => 1,
            FieldKind::Seconds => 2,
        }
    }

    /// Human-readable name, used for labels and placeholders.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Hours => "Hours",
            FieldKind::Minutes => "Minutes",
            FieldKind::Seconds => "Seconds",
        }
    }

    /// The next field, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }

    /// The previous field, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 2) % 3]
    }
}

/// One raw duration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurationField {
    /// Nothing entered.
    #[default]
    Unset,
    /// A positive magnitude.
    Value(u64),
}

impl DurationField {
    /// Resolves a raw edit, treating anything unparsable as unset.
    ///
    /// ```rust
    /// use countdown_widget::field::DurationField;
    ///
    /// assert_eq!(DurationField::from_input("42"), DurationField::Value(42));
    /// assert_eq!(DurationField::from_input("abc"), DurationField::Unset);
    /// assert_eq!(DurationField::from_input("0"), DurationField::Unset);
    /// ```
    pub fn from_input(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }

    /// The field's contribution to a duration total.
    pub fn magnitude(self) -> u64 {
        match self {
            DurationField::Unset => 0,
            DurationField::Value(v) => v,
        }
    }

    /// Whether nothing has been entered.
    pub fn is_unset(self) -> bool {
        matches!(self, DurationField::Unset)
    }

    /// Appends a typed digit. Non-digits and overflowing input leave the
    /// field unchanged.
    pub fn push_digit(self, c: char) -> Self {
        let Some(d) = c.to_digit(10) else {
            return self;
        };
        match self
            .magnitude()
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
        {
            Some(v) => Self::from(v),
            None => self,
        }
    }

    /// Removes the last digit.
    pub fn pop_digit(self) -> Self {
        Self::from(self.magnitude() / 10)
    }
}

impl From<u64> for DurationField {
    fn from(v: u64) -> Self {
        if v == 0 {
            DurationField::Unset
        } else {
            DurationField::Value(v)
        }
    }
}

impl From<Option<u64>> for DurationField {
    fn from(v: Option<u64>) -> Self {
        v.map(Self::from).unwrap_or_default()
    }
}

impl FromStr for DurationField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFieldError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseFieldError::NotNumeric(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self::from)
            .map_err(|_| ParseFieldError::OutOfRange(s.to_string()))
    }
}

/// Renders the raw value, or nothing when unset.
impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationField::Unset => Ok(()),
            DurationField::Value(v) => write!(f, "{}", v),
        }
    }
}
