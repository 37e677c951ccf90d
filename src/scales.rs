// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count marker types.
//!
//! Each zero-sized type identifies a day count and encodes how values on it
//! relate to the canonical **Astronomical Julian Day** axis, whose origin is
//! noon of 1 January 4713 BCE (proleptic Julian).
//!
//! | Marker | Description | Epoch (AJD) |
//! |--------|-------------|-------------|
//! | [`JD`] | Astronomical Julian Day | 0.0 |
//! | [`MJD`] | Modified Julian Day | 2 400 000.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Astronomical Julian Day — the identity scale.
///
/// `to_ajd(v) = v`, i.e. the quantity *is* the AJD.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "AJD";

    #[inline(always)]
    fn to_ajd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_ajd(ajd: Days) -> Days {
        ajd
    }
}

/// Modified Julian Day — AJD minus 2 400 000.5 (midnight 1858-11-17).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// `AJD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_ajd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_ajd(ajd: Days) -> Days {
        ajd - MJD_EPOCH
    }
}

impl From<super::instant::Time<JD>> for super::instant::Time<MJD> {
    #[inline]
    fn from(t: super::instant::Time<JD>) -> Self {
        t.to::<MJD>()
    }
}

impl From<super::instant::Time<MJD>> for super::instant::Time<JD> {
    #[inline]
    fn from(t: super::instant::Time<MJD>) -> Self {
        t.to::<JD>()
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn jd_mjd_from_into() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.into();
        assert_eq!(mjd.quantity(), Days::new(51_544.5));
        let back: Time<JD> = Time::from(mjd);
        assert_eq!(back.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn mjd_zero_is_1858_november_17() {
        let ajd: Time<JD> = Time::<MJD>::new(0.0).into();
        assert_eq!(ajd.value(), 2_400_000.5);
    }
}
