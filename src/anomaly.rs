// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean anomalies of the Sun and the Moon.
//!
//! Cubic polynomials in Julian centuries since J2000.0 (Meeus ch. 22).
//! Results are **not** reduced to `[0°, 360°)`.

use qtty::Degrees;

use super::JulianDate;

/// Mean anomaly of the Sun (Earth).
#[inline]
pub fn solar_mean_anomaly(ajd: JulianDate) -> Degrees {
    let t = ajd.julian_centuries().value();
    Degrees::new(357.52772 + 35999.050340 * t - 0.0001603 * t * t - t * t * t / 300_000.0)
}

/// Mean anomaly of the Moon.
#[inline]
pub fn lunar_mean_anomaly(ajd: JulianDate) -> Degrees {
    let t = ajd.julian_centuries().value();
    Degrees::new(134.96298 + 477198.867398 * t + 0.0086972 * t * t + t * t * t / 56_250.0)
}
