// ⚠️ Calendar Errors
// The only ways the core can refuse an input.

use thiserror::Error;

/// Errors produced by the calendar core.
///
/// Conversion itself is total; these only come from name lookups and from
/// period builders asked for a month or year that has no calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("unknown day name: {0:?}")]
    UnknownDay(String),

    #[error("unknown pasaran name: {0:?}")]
    UnknownPasaran(String),

    #[error("invalid weton: {0:?} (expected \"<day> <pasaran>\")")]
    InvalidWeton(String),

    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("date out of range: year {year}, month {month}")]
    DateOutOfRange { year: i32, month: u32 },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
