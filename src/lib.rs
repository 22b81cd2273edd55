// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date → local calendar date.
//!
//! Converts a UTC Julian Date plus a geographic longitude into the local
//! calendar date, using local mean (solar) time as a stand-in for a civil
//! time zone:
//!
//! ```text
//! (JD(UTC), longitude) ──adjust──▶ JD(LMT) ──convert──▶ CalendarDateTime ──format──▶ "YYYY-MM-DD"
//! ```
//!
//! # Core types
//!
//! - [`Time<S>`] — Julian Date tagged with a [`TimeScale`] marker.
//! - [`JulianDate`] — `Time<UTC>`, the input axis.
//! - [`LocalJulianDate`] — `Time<LMT>`, shifted to local mean time.
//! - [`Longitude`] — validated longitude in `[-180, 180]` degrees, east positive.
//! - [`CalendarDateTime`] / [`CalendarDate`] — broken-down proleptic Gregorian fields.
//!
//! # Quick example
//! ```rust
//! assert_eq!(jdlocal::find_date(2_451_552.99931, 17.03).unwrap(), "2000-01-09");
//! assert!(jdlocal::find_date(2_451_552.99931, 181.0).is_err());
//! ```
//!
//! Each degree of longitude is 4 minutes of clock time.  There is no time
//! zone database, no daylight saving and no leap-second handling.

mod calendar;
mod error;
mod format;
pub(crate) mod instant;
mod local_time;
mod longitude;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{convert, CalendarDate, CalendarDateTime};
pub use error::{Error, Result};
pub use format::format;
pub use instant::{Time, TimeScale};
pub use local_time::{adjust, adjust_with, night_of, to_local, OffsetConvention};
pub use longitude::{Longitude, MINUTES_PER_DEGREE, SECONDS_PER_DEGREE};
pub use scales::{LMT, UTC};

/// Julian Date counted on the Greenwich meridian.
pub type JulianDate = Time<UTC>;

/// Julian Date shifted to local mean time.
pub type LocalJulianDate = Time<LMT>;

/// Full pipeline: local calendar date of `jd_utc` at `longitude`, as `YYYY-MM-DD`.
///
/// # Errors
/// [`Error::InvalidLongitude`] when `longitude` is outside `[-180, 180]`.
pub fn find_date(jd_utc: f64, longitude: f64) -> Result<String> {
    let local = adjust(JulianDate::new(jd_utc), longitude)?;
    Ok(format(&convert(local)))
}
