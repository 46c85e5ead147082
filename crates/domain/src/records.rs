// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw record sets consumed by the aggregators.
//!
//! These mirror the rows returned by the external data store. They are
//! read-only inputs; nothing in this crate mutates them.

use crate::types::Role;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Provisioning state of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    /// Signed but not yet configured.
    Pending,
    /// Hardware and accounts are being set up.
    Provisioning,
    /// Trading.
    Active,
    /// Temporarily closed.
    Suspended,
}

impl LocationStatus {
    /// Returns the display form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Provisioning => "PROVISIONING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }
}

/// A salon location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning franchisee, if any.
    #[serde(default)]
    pub franchisee_id: Option<String>,
    /// Provisioning state.
    pub status: LocationStatus,
    /// Date the location started trading.
    #[serde(default, with = "iso_date::option")]
    pub go_live_date: Option<Date>,
}

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home location.
    pub location_id: String,
    /// Role of the employee's account.
    pub role: Role,
    /// Whether the employee is currently employed.
    pub is_active: bool,
}

/// A client of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub location_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Booking status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    InProgress,
    Completed,
    CheckedOut,
    NoShow,
    Cancelled,
}

impl AppointmentStatus {
    /// Returns whether the appointment was fulfilled.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed | Self::CheckedOut)
    }

    /// Returns whether the appointment still counts as booked.
    ///
    /// Cancelled appointments are excluded from booked totals.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Returns the display form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::CheckedOut => "CHECKED_OUT",
            Self::NoShow => "NO_SHOW",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Appointment id.
    pub id: String,
    /// Location where the appointment takes place.
    pub location_id: String,
    /// Assigned stylist, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Booked client, if any.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Booking status.
    pub status: AppointmentStatus,
    /// Scheduled start.
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// Booked duration; absent durations count as the configured default.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Name of the booked service.
    #[serde(default)]
    pub service_name: Option<String>,
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Not yet settled; excluded from every total.
    Pending,
    Completed,
    PartiallyRefunded,
    Refunded,
    Voided,
}

impl TransactionStatus {
    /// Returns whether money from this transaction was kept.
    ///
    /// Settled transactions contribute to tax, tips, tenders and revenue.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Completed | Self::PartiallyRefunded)
    }

    /// Returns whether the transaction rang up a sale at all.
    #[must_use]
    pub const fn is_rung(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns the display form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::PartiallyRefunded => "PARTIALLY_REFUNDED",
            Self::Refunded => "REFUNDED",
            Self::Voided => "VOIDED",
        }
    }
}

/// Tender type of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    GiftCard,
}

impl PaymentMethod {
    /// Returns the display form of the tender.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Card => "CARD",
            Self::GiftCard => "GIFT_CARD",
        }
    }
}

/// Whether a line item is a service or a retail product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemKind {
    Service,
    Product,
}

/// A line on a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item description; may be missing on legacy rows.
    #[serde(default)]
    pub description: Option<String>,
    /// Service or product category.
    #[serde(default)]
    pub category: Option<String>,
    /// Service or product.
    pub kind: LineItemKind,
    /// Units sold.
    pub quantity: u32,
    /// Extended line total.
    pub total: Decimal,
}

/// A point-of-sale transaction.
///
/// `total = subtotal - discount + tax + tip`. `refunded_amount` is the
/// pre-tax amount returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub location_id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub drawer_session_id: Option<String>,
    pub status: TransactionStatus,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    #[serde(default)]
    pub tip: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub refunded_amount: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Transaction {
    /// Amount of the sale after discount, before tax and tips.
    #[must_use]
    pub fn discounted_subtotal(&self) -> Decimal {
        self.subtotal - self.discount
    }

    /// Pre-tax amount refunded.
    ///
    /// A fully refunded row without an explicit amount returns its whole
    /// discounted subtotal.
    #[must_use]
    pub fn effective_refund(&self) -> Decimal {
        match self.status {
            TransactionStatus::Refunded if self.refunded_amount.is_zero() => {
                self.discounted_subtotal()
            }
            TransactionStatus::Refunded | TransactionStatus::PartiallyRefunded => {
                self.refunded_amount
            }
            _ => Decimal::ZERO,
        }
    }

    /// Net sales contribution of this transaction.
    ///
    /// Pending and voided rows contribute nothing.
    #[must_use]
    pub fn ledger_net(&self) -> Decimal {
        match self.status {
            TransactionStatus::Pending | TransactionStatus::Voided => Decimal::ZERO,
            _ => self.discounted_subtotal() - self.effective_refund(),
        }
    }
}

/// A clock-in/clock-out record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub location_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub clock_in: OffsetDateTime,
    /// Absent while the shift is still open.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub clock_out: Option<OffsetDateTime>,
}

/// A cash drawer session opened for a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerSession {
    /// Session id.
    pub id: String,
    /// Location of the drawer.
    pub location_id: String,
    /// Employee who opened the drawer.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// When the drawer was opened.
    #[serde(with = "time::serde::rfc3339")]
    pub opened_at: OffsetDateTime,
    /// When the drawer was closed, if it has been.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    /// Float counted in at open.
    pub opening_cash: Decimal,
    /// Cash counted at close.
    #[serde(default)]
    pub closing_cash: Option<Decimal>,
    /// Net sales the register reported at close.
    #[serde(default)]
    pub reported_net_sales: Option<Decimal>,
}

/// Every raw record needed to build a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub drawer_sessions: Vec<DrawerSession>,
}

impl RecordSet {
    /// Appends every record of `other` to this set.
    pub fn extend(&mut self, other: Self) {
        self.locations.extend(other.locations);
        self.employees.extend(other.employees);
        self.clients.extend(other.clients);
        self.appointments.extend(other.appointments);
        self.transactions.extend(other.transactions);
        self.time_entries.extend(other.time_entries);
        self.drawer_sessions.extend(other.drawer_sessions);
    }

    /// Finds a location by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Finds an employee by id.
    #[must_use]
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Returns the display name of an employee, or `"Unknown"`.
    #[must_use]
    pub fn employee_name(&self, id: Option<&str>) -> String {
        id.and_then(|id| self.employee(id))
            .map_or_else(|| String::from("Unknown"), |employee| employee.name.clone())
    }
}
