// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for jdlocal.

use thiserror::Error;

/// Result type for jdlocal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting a Julian Date to a local date.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Longitude outside the closed range `[-180, 180]` degrees (or NaN).
    #[error("Corrupted input: longitude {0} outside [-180, 180] degrees")]
    InvalidLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_longitude_message() {
        let err = Error::InvalidLongitude(181.5);
        assert_eq!(
            err.to_string(),
            "Corrupted input: longitude 181.5 outside [-180, 180] degrees"
        );
    }
}
