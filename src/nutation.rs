// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Nutation and obliquity of the ecliptic
//!
//! Low-precision nutation series from Chapter 22 of *Jean Meeus —
//! Astronomical Algorithms*: the four largest periodic terms, driven by the
//! longitude of the Moon's ascending node (Ω) and the mean longitudes of the
//! Sun (L) and the Moon (L′).  Accuracy is about 0.5″ in Δψ and 0.1″ in Δε.
//!
//! The mean obliquity is the IAU polynomial (22.2), valid within a few
//! thousand years of J2000.0.

use qtty::Degrees;

use super::JulianDate;

const ARCSEC_PER_DEGREE: f64 = 3_600.0;

/// Ω, L and L′ in radians.
struct FundamentalArguments {
    node: f64,
    sun: f64,
    moon: f64,
}

impl FundamentalArguments {
    fn at(ajd: JulianDate) -> Self {
        let t = ajd.julian_centuries().value();
        Self {
            node: (125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 45_000.0)
                .to_radians(),
            sun: (280.4665 + 36000.7698 * t).to_radians(),
            moon: (218.3165 + 481267.8813 * t).to_radians(),
        }
    }
}

/// Nutation in longitude, Δψ.
pub fn nutation_in_longitude(ajd: JulianDate) -> Degrees {
    let FundamentalArguments { node, sun, moon } = FundamentalArguments::at(ajd);
    let arcsec = -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin();
    Degrees::new(arcsec / ARCSEC_PER_DEGREE)
}

/// Nutation in obliquity, Δε.
pub fn nutation_in_obliquity(ajd: JulianDate) -> Degrees {
    let FundamentalArguments { node, sun, moon } = FundamentalArguments::at(ajd);
    let arcsec = 9.20 * node.cos() + 0.57 * (2.0 * sun).cos() + 0.10 * (2.0 * moon).cos()
        - 0.09 * (2.0 * node).cos();
    Degrees::new(arcsec / ARCSEC_PER_DEGREE)
}

/// Nutation in right ascension, Δψ·cos ε, where ε is the true obliquity.
///
/// This is the equation of the equinoxes: the difference between apparent
/// and mean sidereal time.
pub fn nutation_in_right_ascension(ajd: JulianDate) -> Degrees {
    let epsilon = true_obliquity(ajd).value().to_radians();
    Degrees::new(nutation_in_longitude(ajd).value() * epsilon.cos())
}

/// Mean obliquity of the ecliptic, ε₀.
pub fn mean_obliquity_of_ecliptic(ajd: JulianDate) -> Degrees {
    let t = ajd.julian_centuries().value();
    Degrees::new(
        23.0 + 26.0 / 60.0 + 21.448 / 3600.0 - 46.8150 / 3600.0 * t - 0.00059 / 3600.0 * t * t
            + 0.001813 / 3600.0 * t * t * t,
    )
}

/// True obliquity of the ecliptic, ε = ε₀ + Δε.
#[inline]
pub fn true_obliquity(ajd: JulianDate) -> Degrees {
    mean_obliquity_of_ecliptic(ajd) + nutation_in_obliquity(ajd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENTH_ARCSEC: Degrees = Degrees::new(0.1 / 3600.0);

    fn dms(d: f64, m: f64, s: f64) -> Degrees {
        Degrees::new(d + m / 60.0 + s / 3600.0)
    }

    // Meeus example 22.a: 1987-04-10 0h.
    const APRIL_1987: JulianDate = JulianDate::new(2_446_895.5);

    #[test]
    fn nutation_april_1987() {
        let dpsi = nutation_in_longitude(APRIL_1987);
        let deps = nutation_in_obliquity(APRIL_1987);
        assert!((dpsi - Degrees::new(-3.788 / 3600.0)).abs() < TENTH_ARCSEC, "Δψ = {dpsi}");
        assert!((deps - Degrees::new(9.443 / 3600.0)).abs() < TENTH_ARCSEC, "Δε = {deps}");
    }

    #[test]
    fn obliquity_april_1987() {
        let mean = mean_obliquity_of_ecliptic(APRIL_1987);
        let tru = true_obliquity(APRIL_1987);
        assert!((mean - dms(23.0, 26.0, 27.407)).abs() < TENTH_ARCSEC, "ε₀ = {mean}");
        assert!((tru - dms(23.0, 26.0, 36.850)).abs() < TENTH_ARCSEC, "ε = {tru}");
    }

    #[test]
    fn mean_obliquity_at_j2000() {
        assert_eq!(
            mean_obliquity_of_ecliptic(JulianDate::J2000),
            Degrees::new(23.0 + 26.0 / 60.0 + 21.448 / 3600.0)
        );
    }

    #[test]
    fn true_obliquity_is_mean_plus_nutation() {
        let jd = JulianDate::new(2_460_000.25);
        assert_eq!(
            true_obliquity(jd),
            mean_obliquity_of_ecliptic(jd) + nutation_in_obliquity(jd)
        );
    }

    #[test]
    fn right_ascension_uses_true_obliquity() {
        let expected = nutation_in_longitude(APRIL_1987).value()
            * true_obliquity(APRIL_1987).value().to_radians().cos();
        assert_eq!(
            nutation_in_right_ascension(APRIL_1987),
            Degrees::new(expected)
        );
        // cos ε ≈ 0.917 shrinks Δψ
        assert!(
            nutation_in_right_ascension(APRIL_1987).abs()
                < nutation_in_longitude(APRIL_1987).abs()
        );
    }

    #[test]
    fn nutation_stays_within_series_amplitude() {
        for k in 0..200 {
            let jd = JulianDate::new(2_415_020.5 + 365.25 * k as f64);
            assert!(nutation_in_longitude(jd).abs() < Degrees::new(19.0 / 3600.0));
            assert!(nutation_in_obliquity(jd).abs() < Degrees::new(10.0 / 3600.0));
        }
    }

    #[test]
    fn nan_propagates() {
        let jd = JulianDate::new(f64::NAN);
        assert!(nutation_in_longitude(jd).value().is_nan());
        assert!(true_obliquity(jd).value().is_nan());
    }
}
