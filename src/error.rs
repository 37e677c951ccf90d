// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised by the opt-in civil-date validation.
//!
//! The conversions and formulas themselves are total; only
//! [`CivilDate::try_new`](crate::CivilDate::try_new) and the `FromStr`
//! implementation report failures.

use thiserror::Error;

/// Reasons a civil date can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("month {month} is out of range 1..=12")]
    InvalidMonth { month: u32 },

    /// Day outside the month's length in its calendar.
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// One of the ten days dropped by the 1582 Gregorian reform.
    #[error("1582-10-{day:02} was skipped by the Gregorian reform")]
    SkippedByReform { day: u32 },

    /// Hour, minute, second or millisecond out of range.
    #[error("time {hour:02}:{minute:02}:{second:02}.{millisecond:03} is out of range")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },

    /// Text that is not `[-]YYYY-MM-DD[ hh:mm[:ss[.mmm]]]`.
    #[error("cannot parse civil date from {0:?}")]
    Parse(String),
}
