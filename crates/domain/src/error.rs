// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while validating report inputs against domain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The report identifier is not present in the catalog.
    UnknownReport(String),
    /// The role string does not name a known role.
    InvalidRole(String),
    /// The requested date range ends before it starts.
    InvertedDateRange {
        /// The requested start date.
        date_from: Date,
        /// The requested end date.
        date_to: Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The timezone is not a known IANA timezone name.
    InvalidTimezone(String),
    /// A timestamp could not be represented in the requested timezone.
    TimestampOutOfRange {
        /// Description of the conversion that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownReport(id) => write!(f, "Unknown report '{id}'"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvertedDateRange { date_from, date_to } => {
                write!(f, "Invalid date range: {date_to} is before {date_from}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::TimestampOutOfRange { operation } => {
                write!(f, "Timestamp out of range while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
