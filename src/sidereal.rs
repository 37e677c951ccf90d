// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal time at the Greenwich meridian (Meeus ch. 12).
//!
//! The AJD argument is read as UT; for an instant given as a civil date with
//! a clock time, pass [`civil_date_to_ajd`](crate::civil_date_to_ajd) of it
//! directly.

use qtty::Degrees;

use super::nutation::nutation_in_right_ascension;
use super::JulianDate;

const FULL_TURN: f64 = 360.0;
const DEGREES_PER_HOUR: f64 = 15.0;

/// Mean sidereal time, reduced to `[0°, 360°)`.
///
/// A negative remainder of magnitude below about 3e-14° rounds to exactly
/// 360.0 when the full turn is added back; that value is returned as is.
pub fn mean_sidereal_time(ajd: JulianDate) -> Degrees {
    let t = ajd.julian_centuries().value();
    let days = ajd.days_since_j2000().value();
    let raw = 280.46061837 + 360.98564736629 * days + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;

    // `%` keeps the sign of the dividend.
    let mut theta = raw % FULL_TURN;
    if theta < 0.0 {
        theta += FULL_TURN;
    }
    Degrees::new(theta)
}

/// Apparent sidereal time: mean sidereal time corrected by the nutation in
/// right ascension.
///
/// Not reduced again after the correction, so the result can leave
/// `[0°, 360°)` by a fraction of an arcsecond.
pub fn apparent_sidereal_time(ajd: JulianDate) -> Degrees {
    mean_sidereal_time(ajd) + nutation_in_right_ascension(ajd)
}

/// Express a sidereal angle in hours.
#[inline]
pub fn sidereal_hours(angle: Degrees) -> f64 {
    angle.value() / DEGREES_PER_HOUR
}
