// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Period-scoped record sets.
//!
//! The record source returns everything stored for a location. A
//! `ReportDataset` keeps only what falls inside the request period, on
//! local calendar days of the request timezone, and, when the request is
//! pinned to an employee, only that employee's activity.

use crate::error::CoreError;
use salon_reports_domain::{RecordSet, ReportRequest};
use serde::{Deserialize, Serialize};

/// A location in scope, as known to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: String,
    pub name: String,
}

/// The locations a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportScope {
    /// Locations the report covers, in the caller's order.
    pub locations: Vec<LocationRef>,
    /// Number of locations the caller could have selected.
    pub accessible_count: usize,
}

impl ReportScope {
    /// Location ids in scope.
    #[must_use]
    pub fn location_ids(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.id.clone()).collect()
    }

    /// Whether the caller asked for a strict subset of its locations.
    #[must_use]
    pub fn is_subset(&self) -> bool {
        self.locations.len() < self.accessible_count
    }
}

/// Records for one report run, scoped to the request.
#[derive(Debug, Clone)]
pub struct ReportDataset {
    request: ReportRequest,
    scope: ReportScope,
    records: RecordSet,
}

impl ReportDataset {
    /// Scopes raw records to the request.
    ///
    /// Clients are kept regardless of period so names and growth figures
    /// can be resolved. Locations outside the scope are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a record timestamp cannot be converted to the
    /// request timezone.
    pub fn new(
        request: ReportRequest,
        scope: ReportScope,
        raw: RecordSet,
    ) -> Result<Self, CoreError> {
        let in_scope = |location_id: &str| scope.locations.iter().any(|l| l.id == location_id);
        let employee: Option<&str> = request.employee_id();
        let pinned = |employee_id: Option<&str>| employee.is_none_or(|id| employee_id == Some(id));

        let mut records: RecordSet = RecordSet {
            locations: raw
                .locations
                .into_iter()
                .filter(|l| in_scope(&l.id))
                .collect(),
            employees: raw
                .employees
                .into_iter()
                .filter(|e| in_scope(&e.location_id))
                .collect(),
            clients: raw.clients,
            ..RecordSet::default()
        };

        for appointment in raw.appointments {
            if in_scope(&appointment.location_id)
                && pinned(appointment.employee_id.as_deref())
                && request.covers(appointment.start_time)?
            {
                records.appointments.push(appointment);
            }
        }
        for transaction in raw.transactions {
            if in_scope(&transaction.location_id)
                && pinned(transaction.employee_id.as_deref())
                && request.covers(transaction.created_at)?
            {
                records.transactions.push(transaction);
            }
        }
        for entry in raw.time_entries {
            if in_scope(&entry.location_id)
                && pinned(Some(entry.employee_id.as_str()))
                && request.covers(entry.clock_in)?
            {
                records.time_entries.push(entry);
            }
        }
        for session in raw.drawer_sessions {
            if in_scope(&session.location_id)
                && pinned(session.employee_id.as_deref())
                && request.covers(session.opened_at)?
            {
                records.drawer_sessions.push(session);
            }
        }

        Ok(Self {
            request,
            scope,
            records,
        })
    }

    #[must_use]
    pub const fn request(&self) -> &ReportRequest {
        &self.request
    }

    #[must_use]
    pub const fn scope(&self) -> &ReportScope {
        &self.scope
    }

    #[must_use]
    pub const fn records(&self) -> &RecordSet {
        &self.records
    }
}
