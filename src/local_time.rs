// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC → local mean time adjustment.
//!
//! ```text
//! JD(LMT) = JD(UTC) + (longitude × 4 min) / 1440
//! ```
//!
//! A pure linear shift: no rounding, no time-zone database, no daylight
//! saving.  The largest shift is ±720 min = ±0.5 d at the antimeridian.

use qtty::Days;

use super::calendar::{convert, CalendarDate};
use super::error::Result;
use super::instant::Time;
use super::longitude::Longitude;
use super::scales::{LMT, UTC};

/// Sign and unit convention used to apply a longitude offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OffsetConvention {
    /// `JD + (lon × 4 min) / 1440`: east of Greenwich is ahead of UTC.
    #[default]
    MinutesEast,
    /// `JD − (lon × 240 s) / 86400`: same magnitude, opposite sign.
    ///
    /// Kept only to reproduce results computed with this convention; it moves
    /// eastern observers *behind* UTC and yields different calendar dates.
    SecondsWest,
}

/// Shift a UTC Julian Date to local mean time at `longitude`.
///
/// # Errors
/// [`Error::InvalidLongitude`](crate::Error::InvalidLongitude) when
/// `longitude` is outside `[-180, 180]` degrees.
pub fn adjust(jd_utc: Time<UTC>, longitude: f64) -> Result<Time<LMT>> {
    adjust_with(jd_utc, longitude, OffsetConvention::MinutesEast)
}

/// [`adjust`] with an explicit [`OffsetConvention`].
pub fn adjust_with(
    jd_utc: Time<UTC>,
    longitude: f64,
    convention: OffsetConvention,
) -> Result<Time<LMT>> {
    let longitude = Longitude::new(longitude)?;
    Ok(to_local(jd_utc, longitude, convention))
}

/// Shift by an already validated [`Longitude`]. Infallible.
pub fn to_local(
    jd_utc: Time<UTC>,
    longitude: Longitude,
    convention: OffsetConvention,
) -> Time<LMT> {
    let offset = match convention {
        OffsetConvention::MinutesEast => longitude.day_offset(),
        OffsetConvention::SecondsWest => -longitude.day_offset_from_seconds(),
    };
    let local = Time::<LMT>::from_days(jd_utc.quantity() + offset);
    log::debug!("{jd_utc} at {longitude} ({convention:?}) -> {local}");
    local
}

/// The observing night containing `jd_utc`, labelled by the local date on
/// which it began.
///
/// A night runs from local noon to the next local noon, so 02:00 local on
/// the 9th belongs to the night of the 8th.
///
/// # Errors
/// [`Error::InvalidLongitude`](crate::Error::InvalidLongitude) when
/// `longitude` is outside `[-180, 180]` degrees.
pub fn night_of(jd_utc: Time<UTC>, longitude: f64) -> Result<CalendarDate> {
    let local = adjust(jd_utc, longitude)?;
    Ok(convert(local - Days::new(0.5)).date())
}
