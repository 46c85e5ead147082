// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity performance aggregation.
//!
//! Turns period-scoped record sets into `EntityMetric` rows for stylists
//! and locations.
//!
//! ## Invariants
//!
//! - `utilization_pct` is always within `0..=100`
//! - The no-show rate is 0 when nothing was booked
//! - Rows are ordered by revenue, highest first, ties keep entity order
//! - Entities with no activity still produce a zero row

use crate::config::AggregationConfig;
use crate::money::sum_money;
use crate::records::{Appointment, AppointmentStatus, Employee, Location, RecordSet, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Performance figures for one stylist or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetric {
    /// Employee or location id.
    pub entity_id: String,
    /// Display name.
    pub name: String,
    /// Location the entity belongs to.
    pub location_id: String,
    /// Appointments booked, cancellations excluded.
    pub appointments_booked: u32,
    /// Appointments completed or checked out.
    pub appointments_completed: u32,
    /// Appointments marked as no-show.
    pub no_shows: u32,
    /// Sum of settled transaction totals.
    pub revenue: Decimal,
    /// Settled transaction count.
    pub transactions: u32,
    /// Tips on settled transactions.
    pub tips: Decimal,
    /// Distinct clients seen through appointments or transactions.
    pub unique_customers: u32,
    /// Minutes of booked appointments.
    pub booked_minutes: u64,
    /// Estimated available minutes.
    pub available_minutes: u64,
    /// Booked minutes over available minutes, in whole percent.
    pub utilization_pct: u32,
}

impl EntityMetric {
    /// No-shows over booked appointments, in whole percent.
    #[must_use]
    pub fn no_show_rate(&self) -> u32 {
        no_show_rate(self.no_shows, self.appointments_booked)
    }

    /// Revenue per settled transaction, or zero.
    #[must_use]
    pub fn average_ticket(&self) -> Decimal {
        if self.transactions == 0 {
            Decimal::ZERO
        } else {
            self.revenue / Decimal::from(self.transactions)
        }
    }
}

/// Brand or period summary over a set of metric rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_entities: usize,
    pub avg_utilization: u32,
    pub total_revenue: Decimal,
    pub total_no_shows: u32,
}

/// Rounds `numerator / denominator * 100` half up, without floats.
///
/// Returns 0 when `denominator` is 0.
#[must_use]
pub const fn ratio_pct(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator * 200 + denominator) / (denominator * 2)
}

/// Utilization in whole percent, clamped to `0..=100`.
///
/// # Arguments
///
/// * `booked_minutes` - Minutes of booked appointments
/// * `available_minutes` - Estimated available minutes; 0 yields 0
#[must_use]
pub fn utilization_pct(booked_minutes: u64, available_minutes: u64) -> u32 {
    let pct: u64 = ratio_pct(booked_minutes, available_minutes).min(100);
    u32::try_from(pct).unwrap_or(100)
}

/// No-show rate in whole percent; 0 when nothing was booked.
#[must_use]
pub fn no_show_rate(no_shows: u32, total_booked: u32) -> u32 {
    let pct: u64 = ratio_pct(u64::from(no_shows), u64::from(total_booked));
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// Sorts rows by revenue, highest first. Ties keep their relative order.
pub fn sort_by_revenue(rows: &mut [EntityMetric]) {
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
}

/// Summarizes a set of rows.
#[must_use]
pub fn summarize(rows: &[EntityMetric]) -> PerformanceSummary {
    let total_utilization: u64 = rows.iter().map(|row| u64::from(row.utilization_pct)).sum();
    let count: u64 = rows.len() as u64;
    let avg_utilization: u32 = if count == 0 {
        0
    } else {
        u32::try_from((total_utilization * 2 + count) / (count * 2)).unwrap_or(100)
    };
    PerformanceSummary {
        total_entities: rows.len(),
        avg_utilization,
        total_revenue: sum_money(rows.iter().map(|row| row.revenue)),
        total_no_shows: rows.iter().map(|row| row.no_shows).sum(),
    }
}

#[derive(Default)]
struct Tally<'a> {
    booked: u32,
    completed: u32,
    no_shows: u32,
    booked_minutes: u64,
    revenue: Decimal,
    transactions: u32,
    tips: Decimal,
    customers: HashSet<&'a str>,
}

impl<'a> Tally<'a> {
    fn add_appointment(&mut self, appointment: &'a Appointment, config: &AggregationConfig) {
        if let Some(client_id) = appointment.client_id.as_deref() {
            self.customers.insert(client_id);
        }
        if !appointment.status.is_booked() {
            return;
        }
        self.booked += 1;
        if appointment.status.is_completed() {
            self.completed += 1;
        }
        if matches!(appointment.status, AppointmentStatus::NoShow) {
            self.no_shows += 1;
        }
        self.booked_minutes += u64::from(
            appointment
                .duration_minutes
                .unwrap_or(config.default_appointment_minutes),
        );
    }

    fn add_transaction(&mut self, transaction: &'a Transaction) {
        if !transaction.status.is_settled() {
            return;
        }
        self.revenue += transaction.total;
        self.tips += transaction.tip;
        self.transactions += 1;
        if let Some(client_id) = transaction.client_id.as_deref() {
            self.customers.insert(client_id);
        }
    }

    fn into_metric(
        self,
        entity_id: &str,
        name: &str,
        location_id: &str,
        available_minutes: u64,
    ) -> EntityMetric {
        EntityMetric {
            entity_id: entity_id.to_string(),
            name: name.to_string(),
            location_id: location_id.to_string(),
            appointments_booked: self.booked,
            appointments_completed: self.completed,
            no_shows: self.no_shows,
            revenue: self.revenue,
            transactions: self.transactions,
            tips: self.tips,
            unique_customers: u32::try_from(self.customers.len()).unwrap_or(u32::MAX),
            booked_minutes: self.booked_minutes,
            available_minutes,
            utilization_pct: utilization_pct(self.booked_minutes, available_minutes),
        }
    }
}

/// Aggregates stylist performance rows.
///
/// The entity set is every active employee with a staff role at one of
/// `location_ids` (all locations when empty). Appointments and settled
/// transactions are attributed by employee id; records for employees
/// outside the entity set are ignored.
///
/// # Arguments
///
/// * `records` - Records already scoped to the report period
/// * `location_ids` - Locations in scope
/// * `available_minutes` - Estimated available minutes per staff member
/// * `config` - Aggregation tunables
#[must_use]
pub fn aggregate_staff_performance(
    records: &RecordSet,
    location_ids: &[String],
    available_minutes: u64,
    config: &AggregationConfig,
) -> Vec<EntityMetric> {
    let staff: Vec<&Employee> = records
        .employees
        .iter()
        .filter(|employee| employee.is_active && config.is_staff_role(employee.role))
        .filter(|employee| location_ids.is_empty() || location_ids.contains(&employee.location_id))
        .collect();

    let mut tallies: HashMap<&str, Tally<'_>> = staff
        .iter()
        .map(|employee| (employee.id.as_str(), Tally::default()))
        .collect();

    for appointment in &records.appointments {
        if let Some(tally) = appointment
            .employee_id
            .as_deref()
            .and_then(|id| tallies.get_mut(id))
        {
            tally.add_appointment(appointment, config);
        }
    }
    for transaction in &records.transactions {
        if let Some(tally) = transaction
            .employee_id
            .as_deref()
            .and_then(|id| tallies.get_mut(id))
        {
            tally.add_transaction(transaction);
        }
    }

    let mut rows: Vec<EntityMetric> = staff
        .iter()
        .map(|employee| {
            let tally: Tally<'_> = tallies.remove(employee.id.as_str()).unwrap_or_default();
            tally.into_metric(
                &employee.id,
                &employee.name,
                &employee.location_id,
                available_minutes,
            )
        })
        .collect();
    sort_by_revenue(&mut rows);
    rows
}

/// Aggregates one row per location.
///
/// Available minutes for a location are the per-staff estimate times the
/// number of active staff at that location.
#[must_use]
pub fn aggregate_location_performance(
    records: &RecordSet,
    locations: &[Location],
    available_minutes_per_staff: u64,
    config: &AggregationConfig,
) -> Vec<EntityMetric> {
    let mut rows: Vec<EntityMetric> = locations
        .iter()
        .map(|location| {
            let mut tally: Tally<'_> = Tally::default();
            records
                .appointments
                .iter()
                .filter(|appointment| appointment.location_id == location.id)
                .for_each(|appointment| tally.add_appointment(appointment, config));
            records
                .transactions
                .iter()
                .filter(|transaction| transaction.location_id == location.id)
                .for_each(|transaction| tally.add_transaction(transaction));
            let headcount: u64 = records
                .employees
                .iter()
                .filter(|employee| {
                    employee.location_id == location.id
                        && employee.is_active
                        && config.is_staff_role(employee.role)
                })
                .count() as u64;
            tally.into_metric(
                &location.id,
                &location.name,
                &location.id,
                available_minutes_per_staff * headcount,
            )
        })
        .collect();
    sort_by_revenue(&mut rows);
    rows
}
