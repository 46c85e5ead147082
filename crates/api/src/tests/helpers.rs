// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    Caller, EngineConfig, FixedClock, InMemoryRecordSource, RecordSource, ReportEngine,
    RunReportRequest, SourceError,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use salon_reports::LocationRef;
use salon_reports_domain::{
    Appointment, AppointmentStatus, DrawerSession, Employee, Location, LocationStatus,
    PaymentMethod, RecordSet, Role, Transaction, TransactionStatus,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use time::macros::datetime;
use time::Date;

pub fn money(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn create_test_location_refs() -> Vec<LocationRef> {
    vec![
        LocationRef {
            id: String::from("loc-1"),
            name: String::from("Downtown"),
        },
        LocationRef {
            id: String::from("loc-2"),
            name: String::from("Uptown"),
        },
    ]
}

pub fn create_test_owner() -> Caller {
    Caller::new(String::from("owner-1"), Role::Owner)
        .with_franchisee(Some(String::from("fr-1")))
        .with_locations(create_test_location_refs())
}

pub fn create_test_franchisor(payroll: bool) -> Caller {
    Caller::new(String::from("hq-1"), Role::Franchisor)
        .with_payroll_permission(payroll)
        .with_locations(create_test_location_refs())
}

pub fn create_test_employee_caller() -> Caller {
    Caller::new(String::from("user-7"), Role::Employee)
        .with_locations(vec![create_test_location_refs().remove(0)])
        .with_employee(Some(String::from("emp-1")))
}

pub fn create_test_request(report_id: &str) -> RunReportRequest {
    RunReportRequest {
        report_id: report_id.to_string(),
        date_from: String::from("2026-10-01"),
        date_to: String::from("2026-10-07"),
        location_ids: Vec::new(),
        franchisee_id: None,
        employee_id: None,
        filters: BTreeMap::new(),
        timezone: Some(String::from("America/Chicago")),
    }
}

fn create_test_transaction(
    id: &str,
    location_id: &str,
    employee_id: &str,
    payment_method: PaymentMethod,
    subtotal: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        location_id: location_id.to_string(),
        employee_id: Some(employee_id.to_string()),
        client_id: None,
        drawer_session_id: None,
        status: TransactionStatus::Completed,
        payment_method,
        subtotal: money(subtotal),
        discount: Decimal::ZERO,
        tax: Decimal::ZERO,
        tip: Decimal::ZERO,
        total: money(subtotal),
        refunded_amount: Decimal::ZERO,
        created_at: datetime!(2026-10-05 15:00 UTC),
        line_items: Vec::new(),
    }
}

/// Two locations with one stylist each.
///
/// `loc-1` sold 200.00 cash through drawer `d1`; `loc-2` sold 50.00 card.
pub fn create_test_records() -> RecordSet {
    let location = |id: &str, name: &str| Location {
        id: id.to_string(),
        name: name.to_string(),
        franchisee_id: Some(String::from("fr-1")),
        status: LocationStatus::Active,
        go_live_date: None,
    };
    let employee = |id: &str, name: &str, location_id: &str| Employee {
        id: id.to_string(),
        name: name.to_string(),
        location_id: location_id.to_string(),
        role: Role::Employee,
        is_active: true,
    };
    let mut cash_sale: Transaction =
        create_test_transaction("t1", "loc-1", "emp-1", PaymentMethod::Cash, "200.00");
    cash_sale.drawer_session_id = Some(String::from("d1"));

    RecordSet {
        locations: vec![location("loc-1", "Downtown"), location("loc-2", "Uptown")],
        employees: vec![
            employee("emp-1", "Avery Stone", "loc-1"),
            employee("emp-2", "Jordan Lee", "loc-2"),
        ],
        clients: Vec::new(),
        appointments: vec![Appointment {
            id: String::from("a1"),
            location_id: String::from("loc-1"),
            employee_id: Some(String::from("emp-1")),
            client_id: None,
            status: AppointmentStatus::Completed,
            start_time: datetime!(2026-10-05 15:00 UTC),
            duration_minutes: Some(60),
            service_name: None,
        }],
        transactions: vec![
            cash_sale,
            create_test_transaction("t2", "loc-2", "emp-2", PaymentMethod::Card, "50.00"),
        ],
        time_entries: Vec::new(),
        drawer_sessions: vec![DrawerSession {
            id: String::from("d1"),
            location_id: String::from("loc-1"),
            employee_id: Some(String::from("emp-1")),
            opened_at: datetime!(2026-10-05 13:00 UTC),
            closed_at: Some(datetime!(2026-10-05 23:00 UTC)),
            opening_cash: money("100.00"),
            closing_cash: Some(money("300.00")),
            reported_net_sales: None,
        }],
    }
}

pub fn create_test_engine(source: Arc<dyn RecordSource>) -> ReportEngine {
    ReportEngine::new(source, EngineConfig::default())
        .with_clock(Arc::new(FixedClock(datetime!(2026-10-18 15:00 UTC))))
}

pub fn create_test_source() -> Arc<InMemoryRecordSource> {
    Arc::new(InMemoryRecordSource::new(create_test_records()))
}

/// Counts fetches and delays selected locations.
pub struct InstrumentedSource {
    inner: InMemoryRecordSource,
    delays: BTreeMap<String, Duration>,
    failing: Option<String>,
    fetches: AtomicUsize,
}

impl InstrumentedSource {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRecordSource::new(create_test_records()),
            delays: BTreeMap::new(),
            failing: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, location_id: &str, delay: Duration) -> Self {
        self.delays.insert(location_id.to_string(), delay);
        self
    }

    pub fn with_failure(mut self, location_id: &str) -> Self {
        self.failing = Some(location_id.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for InstrumentedSource {
    async fn fetch(
        &self,
        location_id: &str,
        date_from: Date,
        date_to: Date,
    ) -> Result<RecordSet, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(location_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.as_deref() == Some(location_id) {
            return Err(SourceError::Unavailable(String::from("connection reset")));
        }
        self.inner.fetch(location_id, date_from, date_to).await
    }
}
