// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::timezone::ReportTimezone;
use crate::types::ReportId;
use std::collections::BTreeMap;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// A validated request for a single report.
///
/// Built once per call. The `with_*` methods consume the request, so a
/// request cannot change after it has been handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    report_id: ReportId,
    date_from: Date,
    date_to: Date,
    location_ids: Vec<String>,
    franchisee_id: Option<String>,
    employee_id: Option<String>,
    filters: BTreeMap<String, String>,
    timezone: ReportTimezone,
}

impl ReportRequest {
    /// Creates a request covering `date_from..=date_to`.
    ///
    /// # Arguments
    ///
    /// * `report_id` - The report to run
    /// * `date_from` - First day of the period (inclusive)
    /// * `date_to` - Last day of the period (inclusive)
    /// * `timezone` - Timezone used to bucket and render timestamps
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedDateRange` if `date_to` is before
    /// `date_from`.
    pub fn new(
        report_id: ReportId,
        date_from: Date,
        date_to: Date,
        timezone: ReportTimezone,
    ) -> Result<Self, DomainError> {
        if date_to < date_from {
            return Err(DomainError::InvertedDateRange { date_from, date_to });
        }
        Ok(Self {
            report_id,
            date_from,
            date_to,
            location_ids: Vec::new(),
            franchisee_id: None,
            employee_id: None,
            filters: BTreeMap::new(),
            timezone,
        })
    }

    /// Restricts the request to the given locations. Duplicates are dropped.
    #[must_use]
    pub fn with_locations(mut self, location_ids: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(location_ids.len());
        for id in location_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.location_ids = unique;
        self
    }

    #[must_use]
    pub fn with_franchisee(mut self, franchisee_id: Option<String>) -> Self {
        self.franchisee_id = franchisee_id;
        self
    }

    #[must_use]
    pub fn with_employee(mut self, employee_id: Option<String>) -> Self {
        self.employee_id = employee_id;
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub const fn report_id(&self) -> ReportId {
        self.report_id
    }

    #[must_use]
    pub const fn date_from(&self) -> Date {
        self.date_from
    }

    #[must_use]
    pub const fn date_to(&self) -> Date {
        self.date_to
    }

    /// Requested location ids; empty means every accessible location.
    #[must_use]
    pub fn location_ids(&self) -> &[String] {
        &self.location_ids
    }

    #[must_use]
    pub fn franchisee_id(&self) -> Option<&str> {
        self.franchisee_id.as_deref()
    }

    #[must_use]
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    #[must_use]
    pub const fn timezone(&self) -> &ReportTimezone {
        &self.timezone
    }

    /// Returns whether an instant falls on a local day inside the period.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimestampOutOfRange` if the instant cannot be
    /// converted to the request timezone.
    pub fn covers(&self, instant: OffsetDateTime) -> Result<bool, DomainError> {
        let local: Date = self.timezone.local_date(instant)?;
        Ok(local >= self.date_from && local <= self.date_to)
    }
}
