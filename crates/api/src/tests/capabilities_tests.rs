// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_employee_caller, create_test_franchisor, create_test_owner};
use crate::{
    AvailableReportsResponse, Caller, Capability, ReportCapability, list_available_reports,
    report_capabilities,
};
use salon_reports_domain::{ReportCategory, ReportId, Role};

fn ids(response: &AvailableReportsResponse) -> Vec<&str> {
    response.reports.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_employee_sees_self_service_reports_only() {
    let response: AvailableReportsResponse = list_available_reports(&create_test_employee_caller());
    assert_eq!(response.role, "EMPLOYEE");
    assert_eq!(ids(&response), vec!["my_appointments", "my_sales", "my_tips"]);
    assert!(
        response
            .reports
            .iter()
            .all(|r| r.category == ReportCategory::SelfService)
    );
}

#[test]
fn test_owner_report_count() {
    let response: AvailableReportsResponse = list_available_reports(&create_test_owner());
    assert_eq!(response.reports.len(), 17);
    assert!(ids(&response).contains(&"tips_summary"));
    assert!(!ids(&response).contains(&"brand_performance_summary"));
}

#[test]
fn test_franchisor_list_respects_payroll_gate() {
    let gated: AvailableReportsResponse = list_available_reports(&create_test_franchisor(false));
    let full: AvailableReportsResponse = list_available_reports(&create_test_franchisor(true));

    assert_eq!(gated.reports.len(), 19);
    assert_eq!(full.reports.len(), 22);
    for hidden in ["tips_summary", "timeclock_attendance", "cash_drawer_variance"] {
        assert!(!ids(&gated).contains(&hidden));
        assert!(ids(&full).contains(&hidden));
    }
}

#[test]
fn test_list_keeps_catalog_order() {
    let response: AvailableReportsResponse = list_available_reports(&create_test_franchisor(true));
    assert_eq!(response.reports[0].id, "brand_performance_summary");
    assert_eq!(response.reports[1].id, "location_leaderboard");
    assert_eq!(
        response.reports.last().map(|r| r.id.as_str()),
        Some("transactions_ledger")
    );
}

#[test]
fn test_provider_sees_hq_reports() {
    let caller: Caller = Caller::new(String::from("pr-1"), Role::Provider);
    let response: AvailableReportsResponse = list_available_reports(&caller);
    assert_eq!(response.reports.len(), 6);
    assert!(ids(&response).contains(&"go_live_status"));
}

#[test]
fn test_capabilities_cover_whole_catalog() {
    let capabilities: Vec<ReportCapability> = report_capabilities(&create_test_franchisor(false));
    assert_eq!(capabilities.len(), ReportId::COUNT);

    let tips: &ReportCapability = capabilities
        .iter()
        .find(|c| c.id == "tips_summary")
        .unwrap();
    assert_eq!(tips.can_run, Capability::Denied);

    let allowed: usize = capabilities
        .iter()
        .filter(|c| c.can_run.is_allowed())
        .count();
    assert_eq!(allowed, 19);
}
