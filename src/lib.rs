// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almagest
//!
//! Time-dependent primitives for apparent positions and local sidereal time:
//! the building blocks a rise/set solver calls.  Every function is a pure,
//! deterministic function of its arguments; nothing is cached and nothing is
//! shared, so all of them may be called from any number of threads at once.
//!
//! # Core types
//!
//! - [`CivilDate`] — civil date and clock time (proleptic Julian before the
//!   1582 reform, Gregorian after).
//! - [`JulianDate`] — Astronomical Julian Day, alias for `Time<JD>`.
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker
//!   ([`JD`] or [`MJD`]).
//! - [`Calendar`] — calendar regime of a civil date.
//!
//! # Formula chain
//!
//! ```text
//! CivilDate ──civil_date_to_ajd──▶ JulianDate ──▶ mean anomalies
//!                                            ├──▶ nutation / obliquity
//!                                            └──▶ sidereal time (uses nutation)
//! ```
//!
//! | Function | Result |
//! |----------|--------|
//! | [`is_julian_calendar`] | `true` before 1582-10-05 |
//! | [`civil_date_to_ajd`] / [`ajd_to_civil_date`] | calendar ↔ AJD |
//! | [`solar_mean_anomaly`], [`lunar_mean_anomaly`] | degrees, unreduced |
//! | [`nutation_in_longitude`], [`nutation_in_obliquity`], [`nutation_in_right_ascension`] | degrees |
//! | [`mean_obliquity_of_ecliptic`], [`true_obliquity`] | degrees |
//! | [`mean_sidereal_time`] | degrees in `[0, 360)` |
//! | [`apparent_sidereal_time`] | degrees |
//!
//! # Example
//!
//! ```rust
//! use almagest::{apparent_sidereal_time, mean_sidereal_time, CivilDate};
//! use qtty::Degrees;
//!
//! let ajd = CivilDate::new(1987, 4, 10).to_julian_date();
//! assert_eq!(ajd.value(), 2_446_895.5);
//!
//! let theta0 = mean_sidereal_time(ajd);
//! let expected = Degrees::new((13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0);
//! assert!((theta0 - expected).abs() < Degrees::new(0.1 / 3600.0));
//!
//! let theta = apparent_sidereal_time(ajd);
//! assert!(theta < theta0);
//! ```

mod anomaly;
mod calendar;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod nutation;
pub(crate) mod scales;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use anomaly::{lunar_mean_anomaly, solar_mean_anomaly};
pub use calendar::{ajd_to_civil_date, civil_date_to_ajd, is_julian_calendar, Calendar, CivilDate};
pub use error::CalendarError;
pub use instant::{Time, TimeScale};
pub use nutation::{
    mean_obliquity_of_ecliptic, nutation_in_longitude, nutation_in_obliquity,
    nutation_in_right_ascension, true_obliquity,
};
pub use scales::{JD, MJD};
pub use sidereal::{apparent_sidereal_time, mean_sidereal_time, sidereal_hours};

/// Astronomical Julian Day — continuous count of days since noon of
/// 1 January 4713 BCE (proleptic Julian).
///
/// This is a type alias for [`Time<JD>`] and the argument type of every
/// formula in the crate.
pub type JulianDate = Time<JD>;

/// Modified Julian Day — `AJD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
