// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report timezone handling.
//!
//! Records carry UTC timestamps. Reports are bucketed and rendered in the
//! timezone named by the request, so a sale at 23:30 local time lands on
//! the local calendar day even when UTC has already rolled over.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime};

/// Timezone used when a request does not name one.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// A validated IANA timezone for a report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTimezone {
    tz: Tz,
}

impl ReportTimezone {
    /// Parses an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not known.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let tz: Tz = name
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self { tz })
    }

    /// Returns the IANA name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Returns the short label shown in report headers.
    ///
    /// `America/New_York` becomes `New York`.
    #[must_use]
    pub fn label(&self) -> String {
        self.name().replacen("America/", "", 1).replacen('_', " ", 1)
    }

    fn to_local(self, instant: OffsetDateTime) -> Result<DateTime<Tz>, DomainError> {
        let utc: DateTime<Utc> =
            DateTime::from_timestamp(instant.unix_timestamp(), instant.nanosecond()).ok_or_else(
                || DomainError::TimestampOutOfRange {
                    operation: format!("converting {instant} to {}", self.name()),
                },
            )?;
        Ok(utc.with_timezone(&self.tz))
    }

    /// Returns the local calendar date of an instant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimestampOutOfRange` if the instant cannot be
    /// represented.
    pub fn local_date(&self, instant: OffsetDateTime) -> Result<Date, DomainError> {
        let local: NaiveDate = self.to_local(instant)?.date_naive();
        let out_of_range = || DomainError::TimestampOutOfRange {
            operation: format!("reading local date of {instant}"),
        };
        let month_number: u8 = u8::try_from(local.month()).map_err(|_| out_of_range())?;
        let month: Month = Month::try_from(month_number).map_err(|_| out_of_range())?;
        let day: u8 = u8::try_from(local.day()).map_err(|_| out_of_range())?;
        Date::from_calendar_date(local.year(), month, day).map_err(|_| out_of_range())
    }

    /// Renders an instant the way report headers show it.
    ///
    /// The format is `10/18/2026, 3:04:05 PM`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimestampOutOfRange` if the instant cannot be
    /// represented.
    pub fn render(&self, instant: OffsetDateTime) -> Result<String, DomainError> {
        Ok(self
            .to_local(instant)?
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string())
    }
}

impl Default for ReportTimezone {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::Chicago,
        }
    }
}

impl std::fmt::Display for ReportTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
