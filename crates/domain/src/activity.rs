// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking, client, attendance and alert figures.

use crate::config::AggregationConfig;
use crate::error::DomainError;
use crate::metrics::no_show_rate;
use crate::money::{MONEY_TOLERANCE, format_money};
use crate::reconciliation::{
    ReconciliationInputs, ReconciliationSnapshot, drawer_variances, reconcile, reported_net_sales,
};
use crate::records::{
    Appointment, AppointmentStatus, DrawerSession, Location, RecordSet, TimeEntry, Transaction,
};
use crate::request::ReportRequest;
use crate::sales::SalesTotals;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// Appointment counts over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCounts {
    /// Every appointment, cancellations included.
    pub total: u32,
    /// Appointments that were not cancelled.
    pub booked: u32,
    pub completed: u32,
    pub no_shows: u32,
    pub cancelled: u32,
    /// Booked but not yet resolved.
    pub open: u32,
    pub booked_minutes: u64,
}

impl AppointmentCounts {
    /// Counts the given appointments.
    #[must_use]
    pub fn from_appointments<'a, I>(appointments: I, config: &AggregationConfig) -> Self
    where
        I: IntoIterator<Item = &'a Appointment>,
    {
        let mut counts: Self = Self::default();
        for appointment in appointments {
            counts.total += 1;
            match appointment.status {
                AppointmentStatus::Cancelled => {
                    counts.cancelled += 1;
                    continue;
                }
                AppointmentStatus::NoShow => counts.no_shows += 1,
                AppointmentStatus::Completed | AppointmentStatus::CheckedOut => {
                    counts.completed += 1;
                }
                AppointmentStatus::Scheduled
                | AppointmentStatus::Confirmed
                | AppointmentStatus::CheckedIn
                | AppointmentStatus::InProgress => counts.open += 1,
            }
            counts.booked += 1;
            counts.booked_minutes += u64::from(
                appointment
                    .duration_minutes
                    .unwrap_or(config.default_appointment_minutes),
            );
        }
        counts
    }

    /// No-shows over booked appointments, in whole percent.
    #[must_use]
    pub fn no_show_rate(&self) -> u32 {
        no_show_rate(self.no_shows, self.booked)
    }

    /// Cancellations over all appointments, in whole percent.
    #[must_use]
    pub fn cancellation_rate(&self) -> u32 {
        no_show_rate(self.cancelled, self.total)
    }
}

/// No-show and cancellation figures for one stylist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRisk {
    pub employee_id: Option<String>,
    pub name: String,
    pub counts: AppointmentCounts,
}

/// Appointment counts per stylist, most no-shows first.
#[must_use]
pub fn no_shows_by_employee(
    records: &RecordSet,
    config: &AggregationConfig,
) -> Vec<AttendanceRisk> {
    let mut keys: Vec<Option<&str>> = Vec::new();
    for appointment in &records.appointments {
        let key: Option<&str> = appointment.employee_id.as_deref();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    let mut rows: Vec<AttendanceRisk> = keys
        .into_iter()
        .map(|key| AttendanceRisk {
            employee_id: key.map(str::to_string),
            name: records.employee_name(key),
            counts: AppointmentCounts::from_appointments(
                records
                    .appointments
                    .iter()
                    .filter(|appointment| appointment.employee_id.as_deref() == key),
                config,
            ),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.counts
            .no_shows
            .cmp(&a.counts.no_shows)
            .then(b.counts.cancelled.cmp(&a.counts.cancelled))
    });
    rows
}

/// Appointments ordered by start time.
#[must_use]
pub fn appointment_sheet(records: &RecordSet) -> Vec<&Appointment> {
    let mut rows: Vec<&Appointment> = records.appointments.iter().collect();
    rows.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    rows
}

/// Client base growth over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGrowth {
    /// Clients on file at the locations in scope.
    pub total_clients: u32,
    /// Clients created during the period.
    pub new_clients: u32,
    /// Clients seen during the period.
    pub active_clients: u32,
    /// Active clients created before the period.
    pub returning_clients: u32,
}

/// Computes client growth for the request period.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if a client timestamp cannot
/// be converted to the request timezone.
pub fn customer_growth(
    records: &RecordSet,
    request: &ReportRequest,
) -> Result<CustomerGrowth, DomainError> {
    let mut new_ids: HashSet<&str> = HashSet::new();
    for client in &records.clients {
        if request.covers(client.created_at)? {
            new_ids.insert(client.id.as_str());
        }
    }

    let active: HashSet<&str> = records
        .appointments
        .iter()
        .filter(|appointment| appointment.status.is_booked())
        .filter_map(|appointment| appointment.client_id.as_deref())
        .chain(
            records
                .transactions
                .iter()
                .filter(|transaction| transaction.status.is_settled())
                .filter_map(|transaction| transaction.client_id.as_deref()),
        )
        .collect();

    let returning: usize = active.iter().filter(|id| !new_ids.contains(*id)).count();
    Ok(CustomerGrowth {
        total_clients: count_u32(records.clients.len()),
        new_clients: count_u32(new_ids.len()),
        active_clients: count_u32(active.len()),
        returning_clients: count_u32(returning),
    })
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Clocked time for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    pub employee_id: String,
    pub name: String,
    /// Completed shifts.
    pub shifts: u32,
    /// Shifts without a clock-out.
    pub open_shifts: u32,
    /// Minutes across completed shifts.
    pub minutes_worked: i64,
}

impl EmployeeHours {
    /// Worked time in hours, unrounded.
    #[must_use]
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.minutes_worked) / Decimal::from(60)
    }
}

fn entry_minutes(entry: &TimeEntry) -> Option<i64> {
    entry
        .clock_out
        .map(|clock_out| (clock_out - entry.clock_in).whole_minutes().max(0))
}

/// Hours worked per employee, most hours first.
#[must_use]
pub fn hours_by_employee(records: &RecordSet) -> Vec<EmployeeHours> {
    let mut rows: Vec<EmployeeHours> = Vec::new();
    for entry in &records.time_entries {
        let index: usize = if let Some(index) = rows
            .iter()
            .position(|row| row.employee_id == entry.employee_id)
        {
            index
        } else {
            rows.push(EmployeeHours {
                employee_id: entry.employee_id.clone(),
                name: records.employee_name(Some(&entry.employee_id)),
                shifts: 0,
                open_shifts: 0,
                minutes_worked: 0,
            });
            rows.len() - 1
        };
        let row: &mut EmployeeHours = &mut rows[index];
        match entry_minutes(entry) {
            Some(minutes) => {
                row.shifts += 1;
                row.minutes_worked += minutes;
            }
            None => row.open_shifts += 1,
        }
    }
    rows.sort_by(|a, b| b.minutes_worked.cmp(&a.minutes_worked));
    rows
}

/// Provisioning state of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoLiveRow {
    pub location_id: String,
    pub name: String,
    pub status: &'static str,
    pub go_live_date: Option<time::Date>,
    /// Whether the location rang any sale in the period.
    pub trading: bool,
}

/// Provisioning state of every location in scope.
#[must_use]
pub fn go_live_status(records: &RecordSet) -> Vec<GoLiveRow> {
    records
        .locations
        .iter()
        .map(|location| GoLiveRow {
            location_id: location.id.clone(),
            name: location.name.clone(),
            status: location.status.as_str(),
            go_live_date: location.go_live_date,
            trading: records
                .transactions
                .iter()
                .any(|t| t.location_id == location.id && t.status.is_rung()),
        })
        .collect()
}

/// Kind of operational exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    /// No-show rate above the configured threshold.
    HighNoShow,
    /// No settled sales in the period.
    ZeroSales,
    /// A counted drawer is over or short.
    DrawerVariance,
    /// Reported net sales do not match the gross-to-net breakdown.
    ReconciliationVariance,
}

impl AlertKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighNoShow => "HIGH_NO_SHOW",
            Self::ZeroSales => "ZERO_SALES",
            Self::DrawerVariance => "DRAWER_VARIANCE",
            Self::ReconciliationVariance => "RECONCILIATION_VARIANCE",
        }
    }
}

/// An operational exception at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub location_id: String,
    pub location_name: String,
    pub detail: String,
}

/// Reconciliation of one location's transactions and drawer reports.
#[must_use]
pub fn location_reconciliation(records: &RecordSet, location_id: &str) -> ReconciliationSnapshot {
    let totals: SalesTotals = SalesTotals::from_transactions(
        records
            .transactions
            .iter()
            .filter(|t| t.location_id == location_id),
    );
    let sessions: Vec<DrawerSession> = records
        .drawer_sessions
        .iter()
        .filter(|session| session.location_id == location_id)
        .cloned()
        .collect();
    reconcile(&ReconciliationInputs::from_totals(
        &totals,
        reported_net_sales(&sessions),
    ))
}

fn alerts_for_location(
    records: &RecordSet,
    location: &Location,
    config: &AggregationConfig,
) -> Vec<Alert> {
    let alert = |kind: AlertKind, detail: String| Alert {
        kind,
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        detail,
    };
    let mut alerts: Vec<Alert> = Vec::new();

    let counts: AppointmentCounts = AppointmentCounts::from_appointments(
        records
            .appointments
            .iter()
            .filter(|appointment| appointment.location_id == location.id),
        config,
    );
    // Strictly above the threshold.
    if u64::from(counts.no_shows) * 100
        > u64::from(config.high_no_show_pct) * u64::from(counts.booked)
    {
        alerts.push(alert(
            AlertKind::HighNoShow,
            format!(
                "No-show rate {}% ({} of {} booked)",
                counts.no_show_rate(),
                counts.no_shows,
                counts.booked
            ),
        ));
    }

    let settled: Vec<&Transaction> = records
        .transactions
        .iter()
        .filter(|t| t.location_id == location.id && t.status.is_settled())
        .collect();
    if settled.is_empty() {
        alerts.push(alert(
            AlertKind::ZeroSales,
            String::from("No completed sales in period"),
        ));
    }

    for session in drawer_variances(records)
        .into_iter()
        .filter(|session| session.location_id == location.id)
    {
        if session.drawer.variance.abs() > MONEY_TOLERANCE {
            alerts.push(alert(
                AlertKind::DrawerVariance,
                format!(
                    "Drawer {} counted by {} is off by ${}",
                    session.session_id,
                    session.employee_name,
                    format_money(session.drawer.variance)
                ),
            ));
        }
    }

    let snapshot: ReconciliationSnapshot = location_reconciliation(records, &location.id);
    if !snapshot.is_balanced() {
        alerts.push(alert(
            AlertKind::ReconciliationVariance,
            format!("Net sales {}", snapshot.status),
        ));
    }
    alerts
}

/// Exceptions for every location in scope, grouped by location.
#[must_use]
pub fn exception_alerts(records: &RecordSet, config: &AggregationConfig) -> Vec<Alert> {
    records
        .locations
        .iter()
        .flat_map(|location| alerts_for_location(records, location, config))
        .collect()
}
