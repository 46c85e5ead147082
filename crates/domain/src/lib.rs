// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod activity;
mod catalog;
mod config;
mod error;
mod metrics;
mod money;
mod reconciliation;
mod records;
mod request;
mod sales;
mod timezone;
mod types;

#[cfg(test)]
mod tests;

pub use access::{available_reports, franchisor_payroll_gate, is_visible, resolve_visible};
pub use activity::{
    Alert, AlertKind, AppointmentCounts, AttendanceRisk, CustomerGrowth, EmployeeHours, GoLiveRow,
    appointment_sheet, customer_growth, exception_alerts, go_live_status, hours_by_employee,
    location_reconciliation, no_shows_by_employee,
};
pub use catalog::ReportCatalog;
pub use config::AggregationConfig;
pub use metrics::{
    EntityMetric, PerformanceSummary, aggregate_location_performance, aggregate_staff_performance,
    no_show_rate, ratio_pct, sort_by_revenue, summarize, utilization_pct,
};
pub use money::{
    MONEY_SCALE, MONEY_TOLERANCE, format_money, round_money, sum_money, within_tolerance,
};
pub use reconciliation::{
    DrawerReconciliation, ReconciliationInputs, ReconciliationSnapshot, ReconciliationStatus,
    SessionVariance, ShiftClose, ShiftSummary, TaxSummary, drawer_variances, reconcile,
    reconcile_drawer, reported_net_sales, shift_close,
};
pub use records::{
    Appointment, AppointmentStatus, Client, DrawerSession, Employee, LineItem, LineItemKind,
    Location, LocationStatus, PaymentMethod, RecordSet, TimeEntry, Transaction, TransactionStatus,
    iso_date,
};
pub use request::{ReportRequest, parse_date};
pub use sales::{
    ClientSpend, EmployeeTips, ItemSales, LocationTax, SalesTotals, audit_exceptions, ledger,
    service_categories, tax_by_location, tips_by_employee, top_items, top_services, vip_customers,
};
pub use timezone::{DEFAULT_TIMEZONE, ReportTimezone};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Orientation, PermissionFlags, Priority, ReportCategory, ReportDefinition, ReportId, Role,
};
