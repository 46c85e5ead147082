// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use salon_reports::LocationRef;
use salon_reports_domain::{Orientation, Priority, ReportCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller identity as resolved by the external auth layer.
///
/// This DTO is distinct from `Caller` and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContext {
    /// The caller's user id.
    pub id: String,
    /// The caller's role (`FRANCHISOR`, `OWNER`, `MANAGER`, `EMPLOYEE`, `PROVIDER`).
    pub role: String,
    /// Whether the caller may view compensation-sensitive reports.
    #[serde(default)]
    pub payroll_permission: bool,
    /// The franchisee the caller belongs to, if any.
    #[serde(default)]
    pub franchisee_id: Option<String>,
    /// Locations the caller may report on.
    #[serde(default)]
    pub locations: Vec<LocationRef>,
    /// The caller's own employee id, if the caller is staff.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// API request to run a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    /// Catalog id of the report, e.g. `sales_summary`.
    pub report_id: String,
    /// First day of the period (ISO 8601, inclusive).
    pub date_from: String,
    /// Last day of the period (ISO 8601, inclusive).
    pub date_to: String,
    /// Locations to cover; empty means every accessible location.
    #[serde(default)]
    pub location_ids: Vec<String>,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Free-form filters echoed in the header.
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// IANA timezone; the engine default applies when absent.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Whether an action is permitted for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl From<bool> for Capability {
    fn from(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

/// One report the caller may run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: String,
    pub name: String,
    pub category: ReportCategory,
    pub priority: Priority,
    pub orientation: Orientation,
}

/// API response listing the reports available to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableReportsResponse {
    /// The caller's role.
    pub role: String,
    /// Visible reports, in catalog order.
    pub reports: Vec<ReportSummary>,
}

/// Allowed or denied for a single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCapability {
    pub id: String,
    pub can_run: Capability,
}
