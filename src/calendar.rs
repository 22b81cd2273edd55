// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Julian Date → Gregorian calendar conversion
//!
//! Closed-form conversion after *Jean Meeus — Astronomical Algorithms*
//! (2nd ed. 1998), in the variant that folds the Gregorian century
//! correction into a single `(JD + 32 044.5) / 36 524.25` term.
//!
//! Every intermediate is truncated toward zero (`as i64`) exactly where the
//! formula truncates.  Reordering the arithmetic, or substituting `floor` or
//! `round`, changes results near month and year boundaries.
//!
//! ## Known limitations
//! * No range check: any `f64`, including NaN and infinities, produces *some*
//!   calendar tuple.
//! * March 1st of years ≡ 300 (mod 400) (e.g. 1900, 2300) comes out as
//!   February 29th.  Dates from 1901-01-01 to 2299-12-31 are exact.
//! * `day` keeps only the integer part of `C + fraction − …`; the time of
//!   day is rebuilt separately from the fractional day.

use chrono::NaiveDate;

use super::instant::Time;
use super::scales::LMT;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// A calendar date on the proleptic Gregorian calendar.
///
/// Fields are not validated; see the module documentation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl CalendarDate {
    /// Convert to a `chrono::NaiveDate`.
    ///
    /// Returns `None` when the fields are out of chrono's range or do not
    /// name a real date (e.g. the `1900-02-29` artefact).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::try_from(self.year).ok()?,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )
    }
}

/// Calendar date plus time of day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDateTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    /// Seconds within the minute, fractional part kept.
    pub second: f64,
}

impl CalendarDateTime {
    /// Break a raw Julian Date into calendar fields.
    pub fn from_julian_day(jd: f64) -> Self {
        // A Julian Day starts at noon; shift so the civil day starts at midnight.
        let w = jd + 0.5;
        let day_int = w as i64;
        let day_frac = w - day_int as f64;

        // `as` saturates for huge or infinite inputs; the integer steps wrap
        // instead of overflowing so such inputs give garbage, not a panic.
        let century = ((day_int as f64 + 32_044.5) / 36_524.25) as i64;
        let z = day_int
            .wrapping_add(century)
            .wrapping_sub(century / 4)
            .wrapping_sub(38);
        let a = z.wrapping_add(1_524);
        let year_index = ((a as f64 - 122.1) / 365.25) as i64;
        let c = a.wrapping_sub((365.25 * year_index as f64) as i64);
        let month_index = (c as f64 / 30.61) as i64;
        let month_overflow = month_index / 14;

        let year = year_index.wrapping_sub(4_716).wrapping_add(month_overflow);
        let month = month_index
            .wrapping_sub(1)
            .wrapping_sub(month_overflow.wrapping_mul(12));
        let day = (c as f64 + day_frac - (month_index.wrapping_mul(153) / 5) as f64) as i64;

        let seconds = day_frac * SECONDS_PER_DAY;
        let hour = (seconds / SECONDS_PER_HOUR) as i64;
        let minute = (seconds / SECONDS_PER_MINUTE) as i64 % 60;
        let second = seconds % SECONDS_PER_MINUTE;

        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The date part.
    #[inline]
    pub const fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl From<Time<LMT>> for CalendarDateTime {
    #[inline]
    fn from(jd: Time<LMT>) -> Self {
        convert(jd)
    }
}

/// Convert a local Julian Date into calendar fields.
///
/// Never fails; malformed inputs give malformed fields.
pub fn convert(jd_local: Time<LMT>) -> CalendarDateTime {
    let dt = CalendarDateTime::from_julian_day(jd_local.value());
    log::debug!(
        "{jd_local} -> {}-{}-{} {}:{}:{:.3}",
        dt.year,
        dt.month,
        dt.day,
        dt.hour,
        dt.minute,
        dt.second
    );
    dt
}
