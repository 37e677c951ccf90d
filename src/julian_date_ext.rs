// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical Julian Day (`Time<JD>`) specific extensions.

use qtty::*;

use super::calendar::{ajd_to_civil_date, CivilDate};
use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00  (AJD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0.
    ///
    /// This is the `t` argument of every mean-anomaly, nutation, obliquity and
    /// sidereal-time polynomial in the crate.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Civil calendar date and time of this instant.
    ///
    /// Shorthand for [`ajd_to_civil_date`].
    #[inline]
    pub fn to_civil_date(&self) -> CivilDate {
        ajd_to_civil_date(*self)
    }

    /// Convenience: MJD value corresponding to this AJD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}
