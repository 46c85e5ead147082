// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LocationRef, ReportDataset, ReportScope};
use rust_decimal::Decimal;
use salon_reports_domain::{
    Appointment, AppointmentStatus, Client, DrawerSession, Employee, LineItem, LineItemKind,
    Location, LocationStatus, PaymentMethod, RecordSet, ReportId, ReportRequest, ReportTimezone,
    Role, Transaction, TransactionStatus,
};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub fn money(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// 10:00 on 2026-10-05 in Chicago.
pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2026-10-05 15:00 UTC)
}

pub fn create_test_request(report_id: ReportId) -> ReportRequest {
    ReportRequest::new(
        report_id,
        date!(2026 - 10 - 01),
        date!(2026 - 10 - 07),
        ReportTimezone::default(),
    )
    .unwrap()
}

pub fn create_test_location(id: &str, name: &str) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        franchisee_id: Some(String::from("fr-1")),
        status: LocationStatus::Active,
        go_live_date: Some(date!(2026 - 03 - 01)),
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

pub fn create_test_appointment(
    id: &str,
    location_id: &str,
    employee_id: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        location_id: location_id.to_string(),
        employee_id: Some(employee_id.to_string()),
        client_id: Some(String::from("client-1")),
        status,
        start_time: create_test_timestamp(),
        duration_minutes: Some(60),
        service_name: Some(String::from("Haircut")),
    }
}

pub fn create_test_transaction(
    id: &str,
    location_id: &str,
    employee_id: &str,
    status: TransactionStatus,
    subtotal: &str,
) -> Transaction {
    let subtotal: Decimal = money(subtotal);
    Transaction {
        id: id.to_string(),
        location_id: location_id.to_string(),
        employee_id: Some(employee_id.to_string()),
        client_id: Some(String::from("client-1")),
        drawer_session_id: None,
        status,
        payment_method: PaymentMethod::Card,
        subtotal,
        discount: Decimal::ZERO,
        tax: Decimal::ZERO,
        tip: Decimal::ZERO,
        total: subtotal,
        refunded_amount: Decimal::ZERO,
        created_at: create_test_timestamp(),
        line_items: vec![LineItem {
            description: Some(String::from("Haircut")),
            category: Some(String::from("Hair")),
            kind: LineItemKind::Service,
            quantity: 1,
            total: subtotal,
        }],
    }
}

/// Two locations, one stylist each, with a day of activity.
///
/// `loc-1` sold 200.00 and `loc-2` sold 50.00.
pub fn create_test_records() -> RecordSet {
    RecordSet {
        locations: vec![
            create_test_location("loc-1", "Downtown"),
            create_test_location("loc-2", "Uptown"),
        ],
        employees: vec![
            create_test_employee("emp-1", "Avery Stone", "loc-1"),
            create_test_employee("emp-2", "Jordan Lee", "loc-2"),
        ],
        clients: vec![Client {
            id: String::from("client-1"),
            name: String::from("Casey Morgan"),
            location_id: String::from("loc-1"),
            created_at: datetime!(2025-01-10 15:00 UTC),
        }],
        appointments: vec![
            create_test_appointment("a1", "loc-1", "emp-1", AppointmentStatus::Completed),
            create_test_appointment("a2", "loc-1", "emp-1", AppointmentStatus::NoShow),
            create_test_appointment("a3", "loc-2", "emp-2", AppointmentStatus::Completed),
        ],
        transactions: vec![
            create_test_transaction("t1", "loc-1", "emp-1", TransactionStatus::Completed, "200.00"),
            create_test_transaction("t2", "loc-2", "emp-2", TransactionStatus::Completed, "50.00"),
        ],
        time_entries: Vec::new(),
        drawer_sessions: Vec::new(),
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

pub fn create_test_scope(ids: &[(&str, &str)], accessible_count: usize) -> ReportScope {
    ReportScope {
        locations: ids
            .iter()
            .map(|(id, name)| LocationRef {
                id: (*id).to_string(),
                name: (*name).to_string(),
            })
            .collect(),
        accessible_count,
    }
}

/// Dataset over both test locations.
pub fn create_test_dataset(report_id: ReportId, records: RecordSet) -> ReportDataset {
    ReportDataset::new(
        create_test_request(report_id),
        create_test_scope(&[("loc-1", "Downtown"), ("loc-2", "Uptown")], 2),
        records,
    )
    .unwrap()
}
