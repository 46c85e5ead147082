// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record sources.
//!
//! The engine never talks to a store directly. It asks a `RecordSource`
//! for one location's records at a time, which lets the fetches run
//! concurrently and fail independently.

use async_trait::async_trait;
use salon_reports_domain::RecordSet;
use std::path::Path;
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Errors raised by a record source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("location '{0}' is not known to the record source")]
    UnknownLocation(String),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read record fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid record fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read access to stored records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches every record of a location that may fall in the period.
    ///
    /// Sources may return records slightly outside the period; the
    /// dataset trims them on local calendar days.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the location is unknown or the store
    /// cannot be read.
    async fn fetch(
        &self,
        location_id: &str,
        date_from: Date,
        date_to: Date,
    ) -> Result<RecordSet, SourceError>;
}

/// A record source over a fixed, in-memory record set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: RecordSet,
}

impl InMemoryRecordSource {
    #[must_use]
    pub const fn new(records: RecordSet) -> Self {
        Self { records }
    }

    /// Loads a record set from JSON.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the JSON is not a valid record set.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Loads a record set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let json: String = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub const fn records(&self) -> &RecordSet {
        &self.records
    }
}

/// Whether an instant's UTC day lies within a day of the period.
fn near(instant: OffsetDateTime, date_from: Date, date_to: Date) -> bool {
    let day: Date = instant.date();
    date_from.previous_day().is_none_or(|first| day >= first)
        && date_to.next_day().is_none_or(|last| day <= last)
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch(
        &self,
        location_id: &str,
        date_from: Date,
        date_to: Date,
    ) -> Result<RecordSet, SourceError> {
        let Some(location) = self.records.location(location_id) else {
            return Err(SourceError::UnknownLocation(location_id.to_string()));
        };
        let at = |id: &str| id == location_id;

        Ok(RecordSet {
            locations: vec![location.clone()],
            employees: self
                .records
                .employees
                .iter()
                .filter(|e| at(&e.location_id))
                .cloned()
                .collect(),
            clients: self
                .records
                .clients
                .iter()
                .filter(|c| at(&c.location_id))
                .cloned()
                .collect(),
            appointments: self
                .records
                .appointments
                .iter()
                .filter(|a| at(&a.location_id) && near(a.start_time, date_from, date_to))
                .cloned()
                .collect(),
            transactions: self
                .records
                .transactions
                .iter()
                .filter(|t| at(&t.location_id) && near(t.created_at, date_from, date_to))
                .cloned()
                .collect(),
            time_entries: self
                .records
                .time_entries
                .iter()
                .filter(|e| at(&e.location_id) && near(e.clock_in, date_from, date_to))
                .cloned()
                .collect(),
            drawer_sessions: self
                .records
                .drawer_sessions
                .iter()
                .filter(|s| at(&s.location_id) && near(s.opened_at, date_from, date_to))
                .cloned()
                .collect(),
        })
    }
}
