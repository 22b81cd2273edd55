// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Both markers count days on the Julian Date axis; they only differ in the
//! meridian the day count refers to.
//!
//! | Marker | Description |
//! |--------|-------------|
//! | [`UTC`] | Julian Date referred to the Greenwich meridian |
//! | [`LMT`] | Julian Date shifted to local mean time of some longitude |
//!
//! Keeping them apart at the type level stops a UTC day count from being fed
//! to the calendar as if it were already local.  Going from [`UTC`] to [`LMT`]
//! needs a [`Longitude`](crate::Longitude), so there is no blanket conversion;
//! see [`adjust`](crate::adjust).

use super::instant::TimeScale;

/// Julian Date on the UTC axis (longitude 0°).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

impl TimeScale for UTC {
    const LABEL: &'static str = "JD(UTC)";
}

/// Local mean time: a UTC Julian Date shifted by `longitude × 4 min`.
///
/// This is geographic solar time, not a civil time zone.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct LMT;

impl TimeScale for LMT {
    const LABEL: &'static str = "JD(LMT)";
}
