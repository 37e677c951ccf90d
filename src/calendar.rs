// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Civil calendar ↔ Astronomical Julian Day
//!
//! Conversion between a civil date-time and the continuous **Astronomical
//! Julian Day** (AJD) count, following Chapter 7 of *Jean Meeus —
//! Astronomical Algorithms*.
//!
//! Civil dates are read in the proleptic **Julian** calendar up to
//! 1582-10-04 and in the **Gregorian** calendar from 1582-10-15 onwards.
//! Years are astronomical: year 0 is 1 BCE, year −4712 is 4713 BCE.
//!
//! ```rust
//! use almagest::{ajd_to_civil_date, civil_date_to_ajd, CivilDate};
//!
//! let sputnik = CivilDate::new(1957, 10, 4).with_time(19, 26, 24);
//! let ajd = civil_date_to_ajd(&sputnik);
//! assert!((ajd.value() - 2_436_116.31).abs() < 1e-8);
//! assert_eq!(ajd_to_civil_date(ajd), sputnik);
//! ```
//!
//! ## Precision
//! The day fraction is resolved to whole milliseconds: the inverse
//! conversion rounds to the nearest millisecond and carries into the next
//! day when the rounding reaches midnight.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use super::JulianDate;

/// Year of the Gregorian reform.
const REFORM_YEAR: i32 = 1582;
/// Month of the Gregorian reform (October).
const REFORM_MONTH: u32 = 10;
/// First day of October 1582 that is no longer Julian.
const REFORM_DAY: u32 = 5;
/// First Gregorian day of October 1582.
const FIRST_GREGORIAN_DAY: u32 = 15;
/// Integer day number (AJD + 0.5) of 1582-10-15, the first Gregorian day.
const GREGORIAN_DAY_NUMBER: f64 = 2_299_161.0;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 86_400_000.0;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar regime
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar regime a civil date is read in.
///
/// Always derived from the date fields, never stored alongside them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calendar {
    /// Proleptic Julian calendar, up to and including 1582-10-04.
    Julian,
    /// Gregorian calendar, from 1582-10-15.
    Gregorian,
}

impl Calendar {
    /// Regime of the civil date `year-month-day`.
    ///
    /// Julian iff the date precedes 1582-10-05 in lexicographic
    /// (year, month, day) order.
    #[inline]
    pub const fn of(year: i32, month: u32, day: u32) -> Self {
        if year < REFORM_YEAR
            || (year == REFORM_YEAR && month < REFORM_MONTH)
            || (year == REFORM_YEAR && month == REFORM_MONTH && day < REFORM_DAY)
        {
            Calendar::Julian
        } else {
            Calendar::Gregorian
        }
    }

    /// Whether `year` (astronomical numbering) is a leap year in this calendar.
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Julian => year.rem_euclid(4) == 0,
            Calendar::Gregorian => {
                (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0)
                    || year.rem_euclid(400) == 0
            }
        }
    }

    /// Number of days in `month` of `year`; zero for a month outside `1..=12`.
    pub const fn days_in_month(self, year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CivilDate
// ═══════════════════════════════════════════════════════════════════════════

/// A civil calendar date and clock time.
///
/// Fields are public and unchecked; use [`CivilDate::try_new`] or
/// [`CivilDate::validate`] when the input comes from outside.  Derived
/// ordering is chronological for valid dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    /// Astronomical year (0 = 1 BCE).
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, starting at 1.
    pub day: u32,
    /// Hour, 0–23.
    pub hour: u32,
    /// Minute, 0–59.
    pub minute: u32,
    /// Second, 0–59.
    pub second: u32,
    /// Millisecond, 0–999.
    pub millisecond: u32,
}

impl CivilDate {
    /// Midnight at the start of `year-month-day`.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Same date at `hour:minute:second`, milliseconds cleared.
    #[inline]
    pub const fn with_time(self, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond: 0,
            ..self
        }
    }

    /// Same date and time with the millisecond field replaced.
    #[inline]
    pub const fn with_millisecond(self, millisecond: u32) -> Self {
        Self {
            millisecond,
            ..self
        }
    }

    /// Validated constructor.
    ///
    /// Rejects months outside `1..=12`, days beyond the month length in the
    /// date's calendar, the days 1582-10-05..=14 dropped by the reform, and
    /// out-of-range time fields.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, CalendarError> {
        let date = Self::new(year, month, day)
            .with_time(hour, minute, second)
            .with_millisecond(millisecond);
        date.validate()?;
        Ok(date)
    }

    /// Build a date from a day-of-month carrying the time as a fraction,
    /// e.g. `4.81` for 19:26:24 on the 4th.
    ///
    /// The fraction is resolved to the nearest millisecond and overflowing
    /// days roll into the following month or year.
    pub fn from_fractional_day(year: i32, month: u32, day: f64) -> Self {
        let calendar = Calendar::of(year, month, day.floor() as u32);
        ajd_to_civil_date(JulianDate::new(julian_day(year, month, day, calendar)))
    }

    /// Check the fields against the calendar.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidMonth { month: self.month });
        }
        if self.year == REFORM_YEAR
            && self.month == REFORM_MONTH
            && (REFORM_DAY..FIRST_GREGORIAN_DAY).contains(&self.day)
        {
            return Err(CalendarError::SkippedByReform { day: self.day });
        }
        if self.day == 0 || self.day > self.calendar().days_in_month(self.year, self.month) {
            return Err(CalendarError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 || self.second > 59 || self.millisecond > 999 {
            return Err(CalendarError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
                millisecond: self.millisecond,
            });
        }
        Ok(())
    }

    /// Calendar regime of this date.
    #[inline]
    pub const fn calendar(&self) -> Calendar {
        Calendar::of(self.year, self.month, self.day)
    }

    /// Elapsed fraction of the day, in `[0, 1)` for valid time fields.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second as f64 / 86_400.0
            + self.millisecond as f64 / MS_PER_DAY
    }

    /// Day of month with the clock time folded in as a decimal fraction.
    #[inline]
    pub fn fractional_day(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second as f64 / 86_400.0
            + self.millisecond as f64 / MS_PER_DAY
    }

    /// Astronomical Julian Day of this date.
    ///
    /// Shorthand for [`civil_date_to_ajd`].
    #[inline]
    pub fn to_julian_date(&self) -> JulianDate {
        civil_date_to_ajd(self)
    }
}

impl From<CivilDate> for JulianDate {
    #[inline]
    fn from(date: CivilDate) -> Self {
        civil_date_to_ajd(&date)
    }
}

impl From<JulianDate> for CivilDate {
    #[inline]
    fn from(ajd: JulianDate) -> Self {
        ajd_to_civil_date(ajd)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parses `[-]YYYY-MM-DD`, optionally followed by `T` or a space and
    /// `hh:mm[:ss[.mmm]]`.  The result is validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarError::Parse(s.to_owned());
        let text = s.trim();

        let (date_part, time_part) = match text.find(|c: char| c == 'T' || c == ' ') {
            Some(i) => (&text[..i], Some(&text[i + 1..])),
            None => (text, None),
        };

        let (sign, digits) = match date_part.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date_part),
        };
        let mut fields = digits.split('-');
        let year: i32 = parse_field(fields.next()).ok_or_else(err)?;
        let month: u32 = parse_field(fields.next()).ok_or_else(err)?;
        let day: u32 = parse_field(fields.next()).ok_or_else(err)?;
        if fields.next().is_some() {
            return Err(err());
        }

        let (mut hour, mut minute, mut second, mut millisecond) = (0, 0, 0, 0);
        if let Some(time) = time_part {
            let mut fields = time.split(':');
            hour = parse_field(fields.next()).ok_or_else(err)?;
            minute = parse_field(fields.next()).ok_or_else(err)?;
            if let Some(sec) = fields.next() {
                let (whole, frac) = match sec.split_once('.') {
                    Some((whole, frac)) => (whole, Some(frac)),
                    None => (sec, None),
                };
                second = parse_field(Some(whole)).ok_or_else(err)?;
                if let Some(frac) = frac {
                    if frac.is_empty() || frac.len() > 3 {
                        return Err(err());
                    }
                    let value: u32 = parse_field(Some(frac)).ok_or_else(err)?;
                    millisecond = value * 10u32.pow(3 - frac.len() as u32);
                }
            }
            if fields.next().is_some() {
                return Err(err());
            }
        }

        Self::try_new(
            sign * year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        )
    }
}

/// Parse an unsigned decimal field; signs and empty fields are rejected.
fn parse_field<T: FromStr>(field: Option<&str>) -> Option<T> {
    let field = field?;
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════

/// Whether `date` is read in the Julian calendar (before 1582-10-05).
#[inline]
pub fn is_julian_calendar(date: &CivilDate) -> bool {
    date.calendar() == Calendar::Julian
}

/// Astronomical Julian Day of a civil date-time.
///
/// Total over finite input: out-of-range fields are extrapolated linearly
/// rather than rejected.
pub fn civil_date_to_ajd(date: &CivilDate) -> JulianDate {
    JulianDate::new(julian_day(
        date.year,
        date.month,
        date.fractional_day(),
        date.calendar(),
    ))
}

/// Meeus (7.1): January and February count as months 13 and 14 of the
/// previous year; the Gregorian correction depends on the century.
fn julian_day(year: i32, month: u32, day: f64, calendar: Calendar) -> f64 {
    let (y, m) = if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let b = match calendar {
        Calendar::Julian => 0.0,
        Calendar::Gregorian => {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Civil date-time of an Astronomical Julian Day.
///
/// Day numbers below 2 299 161 (1582-10-15) are read in the Julian
/// calendar.  Non-finite input does not panic but yields a meaningless date.
pub fn ajd_to_civil_date(ajd: JulianDate) -> CivilDate {
    let shifted = ajd.value() + 0.5;
    let mut z = shifted.floor();
    let mut ms = ((shifted - z) * MS_PER_DAY).round();
    if ms >= MS_PER_DAY {
        z += 1.0;
        ms -= MS_PER_DAY;
    }

    let a = if z < GREGORIAN_DAY_NUMBER {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let ms = ms as u64;
    let hour = ms / MS_PER_HOUR;
    let rem = ms % MS_PER_HOUR;
    let minute = rem / MS_PER_MINUTE;
    let rem = rem % MS_PER_MINUTE;

    CivilDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second: (rem / MS_PER_SECOND) as u32,
        millisecond: (rem % MS_PER_SECOND) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_MS: f64 = 1.0 / 86_400_000.0;

    fn ajd(year: i32, month: u32, day: f64) -> f64 {
        civil_date_to_ajd(&CivilDate::from_fractional_day(year, month, day)).value()
    }

    #[test]
    fn reform_boundary_literal_values() {
        assert!(is_julian_calendar(&CivilDate::new(1582, 10, 4)));
        assert!(!is_julian_calendar(&CivilDate::new(1582, 10, 5)));
        assert!(!is_julian_calendar(&CivilDate::new(1582, 10, 15)));
        assert!(is_julian_calendar(&CivilDate::new(1582, 9, 30)));
        assert!(is_julian_calendar(&CivilDate::new(1581, 12, 31)));
        assert!(!is_julian_calendar(&CivilDate::new(1582, 11, 1)));
        assert!(!is_julian_calendar(&CivilDate::new(1583, 1, 1)));
    }

    #[test]
    fn regime_of_negative_years_is_julian() {
        assert_eq!(CivilDate::new(-4712, 1, 1).calendar(), Calendar::Julian);
        assert_eq!(CivilDate::new(0, 6, 1).calendar(), Calendar::Julian);
    }

    #[test]
    fn reform_days_are_consecutive() {
        let last_julian = civil_date_to_ajd(&CivilDate::new(1582, 10, 4));
        let first_gregorian = civil_date_to_ajd(&CivilDate::new(1582, 10, 15));
        assert_eq!(last_julian.value(), 2_299_159.5);
        assert_eq!(first_gregorian.value(), 2_299_160.5);
    }

    #[test]
    fn meeus_example_7a_7b_and_table() {
        let cases: [(i32, u32, f64, f64); 15] = [
            (1957, 10, 4.81, 2_436_116.31),
            (333, 1, 27.5, 1_842_713.0),
            (2000, 1, 1.5, 2_451_545.0),
            (1987, 1, 27.0, 2_446_822.5),
            (1987, 6, 19.5, 2_446_966.0),
            (1988, 1, 27.0, 2_447_187.5),
            (1988, 6, 19.5, 2_447_332.0),
            (1900, 1, 1.0, 2_415_020.5),
            (1600, 1, 1.0, 2_305_447.5),
            (1600, 12, 31.0, 2_305_812.5),
            (837, 4, 10.3, 2_026_871.8),
            (-1000, 7, 12.5, 1_356_001.0),
            (-1000, 2, 29.0, 1_355_866.5),
            (-1001, 8, 17.9, 1_355_671.4),
            (-4712, 1, 1.5, 0.0),
        ];
        for (year, month, day, expected) in cases {
            let got = ajd(year, month, day);
            assert!(
                (got - expected).abs() <= ONE_MS,
                "{year}-{month}-{day}: got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn exact_fixed_points() {
        let j2000 = CivilDate::new(2000, 1, 1).with_time(12, 0, 0);
        assert_eq!(civil_date_to_ajd(&j2000), JulianDate::J2000);

        let origin = CivilDate::new(-4712, 1, 1).with_time(12, 0, 0);
        assert_eq!(civil_date_to_ajd(&origin).value(), 0.0);
    }

    #[test]
    fn meeus_example_7c_and_exercises() {
        let cases = [
            (2_436_116.31, CivilDate::new(1957, 10, 4).with_time(19, 26, 24)),
            (1_842_713.0, CivilDate::new(333, 1, 27).with_time(12, 0, 0)),
            (1_507_900.13, CivilDate::new(-584, 5, 28).with_time(15, 7, 12)),
        ];
        for (value, expected) in cases {
            assert_eq!(ajd_to_civil_date(JulianDate::new(value)), expected);
        }
    }

    #[test]
    fn inverse_below_reform_threshold_is_julian() {
        assert_eq!(
            ajd_to_civil_date(JulianDate::new(2_299_159.5)),
            CivilDate::new(1582, 10, 4)
        );
        assert_eq!(
            ajd_to_civil_date(JulianDate::new(2_299_160.5)),
            CivilDate::new(1582, 10, 15)
        );
    }

    #[test]
    fn rounding_carries_into_next_year() {
        // 0.4 ms before midnight of 31 December rounds up to 1 January.
        let midnight = civil_date_to_ajd(&CivilDate::new(2000, 1, 1));
        let date = ajd_to_civil_date(JulianDate::new(midnight.value() - 0.4 * ONE_MS));
        assert_eq!(date, CivilDate::new(2000, 1, 1));
    }

    #[test]
    fn fractional_day_rolls_over_month() {
        let date = CivilDate::from_fractional_day(1999, 2, 29.25);
        assert_eq!(date, CivilDate::new(1999, 3, 1).with_time(6, 0, 0));
    }

    #[test]
    fn fractional_day_keeps_milliseconds() {
        let date = CivilDate::new(1957, 10, 4)
            .with_time(19, 26, 24)
            .with_millisecond(123);
        let rebuilt = CivilDate::from_fractional_day(1957, 10, date.fractional_day());
        assert_eq!(rebuilt, date);
        assert!((date.day_fraction() - (date.fractional_day() - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn leap_year_rules() {
        assert!(Calendar::Julian.is_leap_year(1900));
        assert!(!Calendar::Gregorian.is_leap_year(1900));
        assert!(Calendar::Gregorian.is_leap_year(2000));
        assert!(Calendar::Julian.is_leap_year(-4712));
        assert!(Calendar::Julian.is_leap_year(0));
        assert!(!Calendar::Julian.is_leap_year(-1));
        assert_eq!(Calendar::Gregorian.days_in_month(2024, 2), 29);
        assert_eq!(Calendar::Gregorian.days_in_month(2023, 2), 28);
        assert_eq!(Calendar::Julian.days_in_month(1500, 4), 30);
        assert_eq!(Calendar::Julian.days_in_month(1500, 13), 0);
    }

    #[test]
    fn try_new_validates_fields() {
        assert!(CivilDate::try_new(2000, 2, 29, 0, 0, 0, 0).is_ok());
        assert!(CivilDate::try_new(1500, 2, 29, 0, 0, 0, 0).is_ok());
        assert_eq!(
            CivilDate::try_new(1900, 2, 29, 0, 0, 0, 0),
            Err(CalendarError::InvalidDay {
                year: 1900,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            CivilDate::try_new(2000, 13, 1, 0, 0, 0, 0),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            CivilDate::try_new(1582, 10, 10, 0, 0, 0, 0),
            Err(CalendarError::SkippedByReform { day: 10 })
        );
        assert!(matches!(
            CivilDate::try_new(2000, 1, 1, 24, 0, 0, 0),
            Err(CalendarError::InvalidTime { .. })
        ));
        assert!(matches!(
            CivilDate::try_new(2000, 1, 0, 0, 0, 0, 0),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn display_pads_negative_years() {
        let date = CivilDate::new(-584, 5, 28)
            .with_time(15, 7, 12)
            .with_millisecond(5);
        assert_eq!(date.to_string(), "-0584-05-28 15:07:12.005");
        assert_eq!(
            CivilDate::new(2000, 1, 1).to_string(),
            "2000-01-01 00:00:00.000"
        );
    }

    #[test]
    fn parse_accepts_display_output() {
        let date = CivilDate::new(-584, 5, 28)
            .with_time(15, 7, 12)
            .with_millisecond(5);
        assert_eq!(date.to_string().parse::<CivilDate>(), Ok(date));
        assert_eq!(
            "1987-04-10T19:21".parse::<CivilDate>(),
            Ok(CivilDate::new(1987, 4, 10).with_time(19, 21, 0))
        );
        assert_eq!(
            "1987-04-10 19:21:00.5".parse::<CivilDate>(),
            Ok(CivilDate::new(1987, 4, 10)
                .with_time(19, 21, 0)
                .with_millisecond(500))
        );
        assert_eq!(
            "1987-04-10".parse::<CivilDate>(),
            Ok(CivilDate::new(1987, 4, 10))
        );
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "1987", "1987-04", "1987-04-10-01", "1987-+4-10", "1987-04-10 7"] {
            assert!(
                matches!(bad.parse::<CivilDate>(), Err(CalendarError::Parse(_))),
                "{bad:?} should not parse"
            );
        }
        assert_eq!(
            "1582-10-07".parse::<CivilDate>(),
            Err(CalendarError::SkippedByReform { day: 7 })
        );
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDate::new(-1, 12, 31).with_time(23, 59, 59);
        let b = CivilDate::new(0, 1, 1);
        let c = CivilDate::new(1582, 10, 4);
        let d = CivilDate::new(1582, 10, 15);
        assert!(a < b && b < c && c < d);
        assert!(a.to_julian_date() < b.to_julian_date());
        assert!(c.to_julian_date() < d.to_julian_date());
    }
}
