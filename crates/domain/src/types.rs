// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role of the caller requesting a report.
///
/// Roles are resolved by the external session layer; this crate only
/// consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Brand headquarters.
    Franchisor,
    /// Franchisee owning one or more locations.
    Owner,
    /// Location manager.
    Manager,
    /// Stylist or other front-line staff member.
    Employee,
    /// Platform provider operating the system for all brands.
    Provider,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Franchisor,
        Self::Owner,
        Self::Manager,
        Self::Employee,
        Self::Provider,
    ];

    /// Converts this role to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Franchisor => "FRANCHISOR",
            Self::Owner => "OWNER",
            Self::Manager => "MANAGER",
            Self::Employee => "EMPLOYEE",
            Self::Provider => "PROVIDER",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FRANCHISOR" => Ok(Self::Franchisor),
            "OWNER" => Ok(Self::Owner),
            "MANAGER" => Ok(Self::Manager),
            "EMPLOYEE" => Ok(Self::Employee),
            "PROVIDER" => Ok(Self::Provider),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission flags that accompany a caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionFlags {
    /// Whether headquarters may view compensation-sensitive reports.
    pub can_view_payroll: bool,
}

impl PermissionFlags {
    /// Creates permission flags with the payroll-view flag set as given.
    #[must_use]
    pub const fn with_payroll(can_view_payroll: bool) -> Self {
        Self { can_view_payroll }
    }
}

/// Delivery priority of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Must ship.
    P0,
    /// Should ship.
    P1,
    /// Nice to have.
    P2,
}

/// Page orientation used by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall page.
    Portrait,
    /// Wide page, used for ledger-style tables.
    Landscape,
}

/// Functional grouping of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    /// Brand headquarters views.
    #[serde(rename = "HQ")]
    Hq,
    /// Tax and bookkeeping.
    Accounting,
    /// Audit and ledger views.
    Compliance,
    /// Sales totals.
    Sales,
    /// Booking activity.
    Appointments,
    /// Client base.
    Customers,
    /// Service mix.
    Services,
    /// Compensation-sensitive data.
    Payroll,
    /// Staff performance.
    Staff,
    /// Drawer and shift operations.
    Operations,
    /// An employee's own data.
    #[serde(rename = "Self")]
    SelfService,
}

impl ReportCategory {
    /// Returns the display name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hq => "HQ",
            Self::Accounting => "Accounting",
            Self::Compliance => "Compliance",
            Self::Sales => "Sales",
            Self::Appointments => "Appointments",
            Self::Customers => "Customers",
            Self::Services => "Services",
            Self::Payroll => "Payroll",
            Self::Staff => "Staff",
            Self::Operations => "Operations",
            Self::SelfService => "Self",
        }
    }

    /// Returns whether reports in this category carry a reconciliation block.
    ///
    /// Financial categories are those whose reports present money totals
    /// that must balance: Accounting, Compliance, Sales, Payroll and
    /// Operations.
    #[must_use]
    pub const fn is_financial(&self) -> bool {
        matches!(
            self,
            Self::Accounting | Self::Compliance | Self::Sales | Self::Payroll | Self::Operations
        )
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a catalog report.
///
/// The discriminant is the report's index in the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportId {
    BrandPerformanceSummary,
    LocationLeaderboard,
    Location360,
    ExceptionsAlerts,
    TaxCollectedSummary,
    RefundVoidAudit,
    GoLiveStatus,
    LocationComparison,
    SalesSummary,
    AppointmentsSummary,
    NoShowCancellation,
    CustomerGrowth,
    VipCustomers,
    ServiceCategoryPerformance,
    TopServices,
    TipsSummary,
    StaffPerformance,
    StylistUtilization,
    TimeclockAttendance,
    ShiftCloseZReport,
    CashDrawerVariance,
    TransactionsLedger,
    DailySalesSummary,
    DailyAppointments,
    MyAppointments,
    MySales,
    MyTips,
}

impl ReportId {
    /// Number of reports in the catalog.
    pub const COUNT: usize = 27;

    /// Every report identifier, in catalog order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BrandPerformanceSummary,
        Self::LocationLeaderboard,
        Self::Location360,
        Self::ExceptionsAlerts,
        Self::TaxCollectedSummary,
        Self::RefundVoidAudit,
        Self::GoLiveStatus,
        Self::LocationComparison,
        Self::SalesSummary,
        Self::AppointmentsSummary,
        Self::NoShowCancellation,
        Self::CustomerGrowth,
        Self::VipCustomers,
        Self::ServiceCategoryPerformance,
        Self::TopServices,
        Self::TipsSummary,
        Self::StaffPerformance,
        Self::StylistUtilization,
        Self::TimeclockAttendance,
        Self::ShiftCloseZReport,
        Self::CashDrawerVariance,
        Self::TransactionsLedger,
        Self::DailySalesSummary,
        Self::DailyAppointments,
        Self::MyAppointments,
        Self::MySales,
        Self::MyTips,
    ];

    /// Converts this identifier to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BrandPerformanceSummary => "brand_performance_summary",
            Self::LocationLeaderboard => "location_leaderboard",
            Self::Location360 => "location_360",
            Self::ExceptionsAlerts => "exceptions_alerts",
            Self::TaxCollectedSummary => "tax_collected_summary",
            Self::RefundVoidAudit => "refund_void_audit",
            Self::GoLiveStatus => "go_live_status",
            Self::LocationComparison => "location_comparison",
            Self::SalesSummary => "sales_summary",
            Self::AppointmentsSummary => "appointments_summary",
            Self::NoShowCancellation => "no_show_cancellation",
            Self::CustomerGrowth => "customer_growth",
            Self::VipCustomers => "vip_customers",
            Self::ServiceCategoryPerformance => "service_category_performance",
            Self::TopServices => "top_services",
            Self::TipsSummary => "tips_summary",
            Self::StaffPerformance => "staff_performance",
            Self::StylistUtilization => "stylist_utilization",
            Self::TimeclockAttendance => "timeclock_attendance",
            Self::ShiftCloseZReport => "shift_close_z_report",
            Self::CashDrawerVariance => "cash_drawer_variance",
            Self::TransactionsLedger => "transactions_ledger",
            Self::DailySalesSummary => "daily_sales_summary",
            Self::DailyAppointments => "daily_appointments",
            Self::MyAppointments => "my_appointments",
            Self::MySales => "my_sales",
            Self::MyTips => "my_tips",
        }
    }

    /// Returns the catalog index of this report.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ReportId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: &str = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownReport(s.to_string()))
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable metadata describing a catalog report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    /// The report identifier.
    pub id: ReportId,
    /// Human-readable report name.
    pub display_name: &'static str,
    /// Delivery priority.
    pub priority: Priority,
    /// Roles that may run this report.
    pub allowed_roles: &'static [Role],
    /// Functional category.
    pub category: ReportCategory,
    /// Whether headquarters needs the payroll-view permission to see it.
    pub requires_payroll_permission: bool,
    /// Page orientation.
    pub orientation: Orientation,
}

impl ReportDefinition {
    /// Returns whether `role` appears in the allowed roles list.
    #[must_use]
    pub fn allows_role(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Returns whether this report carries a reconciliation block.
    #[must_use]
    pub const fn is_financial(&self) -> bool {
        self.category.is_financial()
    }
}
