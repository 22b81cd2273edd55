// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `YYYY-MM-DD` rendering.
//!
//! Month and day are zero-padded to two digits.  The year is printed as a
//! plain integer: years below 1000 are *not* padded to four digits and
//! negative (astronomical) years keep their sign, e.g. `-4713-11-24`.

use std::fmt;

use super::calendar::{CalendarDate, CalendarDateTime};

/// Render the date part of `d` as `YYYY-MM-DD`.
pub fn format(d: &CalendarDateTime) -> String {
    d.date().to_string()
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDateTime {
    /// `YYYY-MM-DD hh:mm:ss.sss`, seconds truncated to the millisecond.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounding would turn 59.9996 into 60.000.
        let second = (self.second * 1_000.0).trunc() / 1_000.0;
        write!(
            f,
            "{} {:02}:{:02}:{:06.3}",
            self.date(),
            self.hour,
            self.minute,
            second
        )
    }
}
