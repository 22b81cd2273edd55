// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic longitude and its local mean time offset.
//!
//! The Earth turns 360° in 24 h, so each degree of longitude is worth
//! 4 minutes of clock time.  East is positive: an eastern observer's local
//! clock runs ahead of UTC.

use qtty::{Days, Degrees, Minutes, Seconds};

use crate::error::{Error, Result};

/// Minutes of clock time per degree of longitude (`24 h / 360°`).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Seconds of clock time per degree of longitude (`86 400 s / 360°`).
pub const SECONDS_PER_DEGREE: f64 = 240.0;

const MINUTES_PER_DAY: f64 = 1_440.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A geographic longitude in `[-180, 180]` degrees, east positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Longitude(Degrees);

impl Longitude {
    /// Greenwich meridian.
    ///
    /// ```
    /// use jdlocal::{convert, to_local, JulianDate, Longitude, OffsetConvention};
    ///
    /// let jd = JulianDate::new(2_451_553.500_69);
    /// let local = to_local(jd, Longitude::GREENWICH, OffsetConvention::MinutesEast);
    /// assert_eq!(local.value(), jd.value());
    /// assert_eq!(convert(local).date().to_string(), "2000-01-10");
    /// ```
    pub const GREENWICH: Self = Self(Degrees::new(0.0));

    /// Validate a longitude in degrees.
    ///
    /// Both bounds are inclusive. NaN is rejected.
    pub fn new(degrees: f64) -> Result<Self> {
        if !(-180.0..=180.0).contains(&degrees) {
            log::warn!("rejecting longitude {degrees}°: outside [-180, 180]");
            return Err(Error::InvalidLongitude(degrees));
        }
        Ok(Self(Degrees::new(degrees)))
    }

    /// Validate a longitude given as a [`Degrees`] quantity.
    #[inline]
    pub fn from_degrees(degrees: Degrees) -> Result<Self> {
        Self::new(degrees.value())
    }

    /// The longitude as a quantity.
    #[inline]
    pub const fn degrees(&self) -> Degrees {
        self.0
    }

    /// The longitude in degrees.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Clock offset of local mean time from UTC, in minutes.
    #[inline]
    pub fn time_offset(&self) -> Minutes {
        Minutes::new(self.value() * MINUTES_PER_DEGREE)
    }

    /// Clock offset of local mean time from UTC, as a fraction of a day.
    ///
    /// Computed as `minutes / 1440` on the raw values so the shifted Julian
    /// Date is bit-for-bit reproducible.
    #[inline]
    pub fn day_offset(&self) -> Days {
        Days::new(self.time_offset().value() / MINUTES_PER_DAY)
    }

    /// Same magnitude as [`time_offset`](Self::time_offset), in seconds.
    #[inline]
    pub fn time_offset_seconds(&self) -> Seconds {
        Seconds::new(self.value() * SECONDS_PER_DEGREE)
    }

    /// Same magnitude as [`day_offset`](Self::day_offset), derived from seconds.
    #[inline]
    pub fn day_offset_from_seconds(&self) -> Days {
        Days::new(self.time_offset_seconds().value() / SECONDS_PER_DAY)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = Error;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

impl std::fmt::Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
