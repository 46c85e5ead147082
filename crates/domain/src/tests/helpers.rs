// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Appointment, AppointmentStatus, Client, DrawerSession, Employee, LineItem, LineItemKind,
    Location, LocationStatus, PaymentMethod, Role, Transaction, TransactionStatus,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn money(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-10-05 15:00 UTC)
}

pub fn create_test_location(id: &str, name: &str) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        franchisee_id: Some(String::from("fr-1")),
        status: LocationStatus::Active,
        go_live_date: None,
    }
}

pub fn create_test_employee(id: &str, name: &str, location_id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        location_id: location_id.to_string(),
        role: Role::Employee,
        is_active: true,
    }
}

pub fn create_test_client(id: &str, created_at: OffsetDateTime) -> Client {
    Client {
        id: id.to_string(),
        name: format!("Client {id}"),
        location_id: String::from("loc-1"),
        created_at,
    }
}

pub fn create_test_appointment(
    id: &str,
    employee_id: &str,
    status: AppointmentStatus,
    duration_minutes: Option<u32>,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        location_id: String::from("loc-1"),
        employee_id: Some(employee_id.to_string()),
        client_id: Some(format!("client-{id}")),
        status,
        start_time: create_test_timestamp(),
        duration_minutes,
        service_name: Some(String::from("Haircut")),
    }
}

/// A transaction where `total = subtotal - discount + tax + tip`.
pub fn create_test_transaction(
    id: &str,
    employee_id: &str,
    status: TransactionStatus,
    payment_method: PaymentMethod,
    subtotal: &str,
) -> Transaction {
    let subtotal: Decimal = money(subtotal);
    Transaction {
        id: id.to_string(),
        location_id: String::from("loc-1"),
        employee_id: Some(employee_id.to_string()),
        client_id: None,
        drawer_session_id: None,
        status,
        payment_method,
        subtotal,
        discount: Decimal::ZERO,
        tax: Decimal::ZERO,
        tip: Decimal::ZERO,
        total: subtotal,
        refunded_amount: Decimal::ZERO,
        created_at: create_test_timestamp(),
        line_items: Vec::new(),
    }
}

pub fn create_test_line_item(
    description: &str,
    kind: LineItemKind,
    quantity: u32,
    total: &str,
) -> LineItem {
    LineItem {
        description: Some(description.to_string()),
        category: Some(String::from("Hair")),
        kind,
        quantity,
        total: money(total),
    }
}

pub fn create_test_drawer_session(id: &str, opening: &str, closing: Option<&str>) -> DrawerSession {
    DrawerSession {
        id: id.to_string(),
        location_id: String::from("loc-1"),
        employee_id: Some(String::from("emp-1")),
        opened_at: datetime!(2026-10-05 13:00 UTC),
        closed_at: closing.map(|_| datetime!(2026-10-05 23:00 UTC)),
        opening_cash: money(opening),
        closing_cash: closing.map(money),
        reported_net_sales: None,
    }
}
