// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static report catalog.
//!
//! The catalog is a table indexed by `ReportId` discriminant. The table
//! ordering is verified at compile time so that `definition(id)` can index
//! directly without a search.
//!
//! ## Invariants
//!
//! - Exactly one definition per `ReportId`
//! - `DEFINITIONS[i].id.index() == i` for every entry
//! - Definitions never change after compilation

use crate::error::DomainError;
use crate::types::{Orientation, Priority, ReportCategory, ReportDefinition, ReportId, Role};

const HQ: &[Role] = &[Role::Franchisor, Role::Provider];
const HQ_AND_OWNER: &[Role] = &[Role::Franchisor, Role::Owner, Role::Provider];
const OWNER_CHAIN: &[Role] = &[Role::Franchisor, Role::Owner, Role::Manager];
const FRANCHISOR_AND_OWNER: &[Role] = &[Role::Franchisor, Role::Owner];
const MANAGER_ONLY: &[Role] = &[Role::Manager];
const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];

const fn def(
    id: ReportId,
    display_name: &'static str,
    priority: Priority,
    allowed_roles: &'static [Role],
    category: ReportCategory,
) -> ReportDefinition {
    ReportDefinition {
        id,
        display_name,
        priority,
        allowed_roles,
        category,
        requires_payroll_permission: false,
        orientation: Orientation::Portrait,
    }
}

const fn payroll(definition: ReportDefinition) -> ReportDefinition {
    ReportDefinition {
        requires_payroll_permission: true,
        ..definition
    }
}

const fn landscape(definition: ReportDefinition) -> ReportDefinition {
    ReportDefinition {
        orientation: Orientation::Landscape,
        ..definition
    }
}

/// Every report definition, in `ReportId` order.
const TABLE: [ReportDefinition; ReportId::COUNT] = [
    def(
        ReportId::BrandPerformanceSummary,
        "Brand Performance Summary",
        Priority::P0,
        HQ,
        ReportCategory::Hq,
    ),
    def(
        ReportId::LocationLeaderboard,
        "Location Leaderboard",
        Priority::P0,
        HQ,
        ReportCategory::Hq,
    ),
    def(
        ReportId::Location360,
        "Location 360 Report",
        Priority::P0,
        HQ_AND_OWNER,
        ReportCategory::Hq,
    ),
    def(
        ReportId::ExceptionsAlerts,
        "Exceptions & Alerts Report",
        Priority::P0,
        HQ,
        ReportCategory::Hq,
    ),
    def(
        ReportId::TaxCollectedSummary,
        "Tax Collected Summary",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Accounting,
    ),
    landscape(def(
        ReportId::RefundVoidAudit,
        "Refund / Void / Discount Audit",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Compliance,
    )),
    def(
        ReportId::GoLiveStatus,
        "Go-Live / Provisioning Status",
        Priority::P1,
        HQ,
        ReportCategory::Hq,
    ),
    def(
        ReportId::LocationComparison,
        "Location Comparison Report",
        Priority::P1,
        HQ,
        ReportCategory::Hq,
    ),
    def(
        ReportId::SalesSummary,
        "Sales Summary",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Sales,
    ),
    def(
        ReportId::AppointmentsSummary,
        "Appointments Summary",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Appointments,
    ),
    def(
        ReportId::NoShowCancellation,
        "No-Show & Cancellation Report",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Appointments,
    ),
    def(
        ReportId::CustomerGrowth,
        "Customer Growth Report",
        Priority::P1,
        FRANCHISOR_AND_OWNER,
        ReportCategory::Customers,
    ),
    def(
        ReportId::VipCustomers,
        "VIP Customers Report",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Customers,
    ),
    def(
        ReportId::ServiceCategoryPerformance,
        "Service Category Performance",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Services,
    ),
    def(
        ReportId::TopServices,
        "Top Services Report",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Services,
    ),
    payroll(def(
        ReportId::TipsSummary,
        "Tips Summary",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Payroll,
    )),
    def(
        ReportId::StaffPerformance,
        "Staff Performance Summary",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Staff,
    ),
    def(
        ReportId::StylistUtilization,
        "Stylist Utilization Report",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Staff,
    ),
    payroll(def(
        ReportId::TimeclockAttendance,
        "Time Clock & Attendance",
        Priority::P1,
        OWNER_CHAIN,
        ReportCategory::Payroll,
    )),
    def(
        ReportId::ShiftCloseZReport,
        "Shift Close / Z Report",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Operations,
    ),
    payroll(def(
        ReportId::CashDrawerVariance,
        "Cash Drawer Variance Report",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Operations,
    )),
    landscape(def(
        ReportId::TransactionsLedger,
        "Transactions Ledger",
        Priority::P0,
        OWNER_CHAIN,
        ReportCategory::Compliance,
    )),
    def(
        ReportId::DailySalesSummary,
        "Daily Sales Summary",
        Priority::P0,
        MANAGER_ONLY,
        ReportCategory::Sales,
    ),
    def(
        ReportId::DailyAppointments,
        "Daily Appointments Sheet",
        Priority::P0,
        MANAGER_ONLY,
        ReportCategory::Appointments,
    ),
    def(
        ReportId::MyAppointments,
        "My Appointments Report",
        Priority::P0,
        EMPLOYEE_ONLY,
        ReportCategory::SelfService,
    ),
    def(
        ReportId::MySales,
        "My Sales & Services Report",
        Priority::P0,
        EMPLOYEE_ONLY,
        ReportCategory::SelfService,
    ),
    def(
        ReportId::MyTips,
        "My Tips Report",
        Priority::P0,
        EMPLOYEE_ONLY,
        ReportCategory::SelfService,
    ),
];

// Table ordering check.
const _: () = {
    let mut i: usize = 0;
    while i < ReportId::COUNT {
        assert!(
            TABLE[i].id as usize == i,
            "report definitions out of order"
        );
        i += 1;
    }
};

static DEFINITIONS: [ReportDefinition; ReportId::COUNT] = TABLE;

/// Read-only view over the static report catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportCatalog;

impl ReportCatalog {
    /// Returns the definition for a known report id.
    #[must_use]
    pub fn definition(id: ReportId) -> &'static ReportDefinition {
        &DEFINITIONS[id.index()]
    }

    /// Looks up a report by its wire identifier.
    ///
    /// # Arguments
    ///
    /// * `report_id` - The snake-case report identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownReport` if the id is not in the catalog.
    pub fn lookup(report_id: &str) -> Result<&'static ReportDefinition, DomainError> {
        let id: ReportId = report_id.parse()?;
        Ok(Self::definition(id))
    }

    /// Iterates over every definition in catalog order.
    pub fn iter() -> impl Iterator<Item = &'static ReportDefinition> {
        DEFINITIONS.iter()
    }

    /// Number of reports in the catalog.
    #[must_use]
    pub const fn len() -> usize {
        DEFINITIONS.len()
    }
}
