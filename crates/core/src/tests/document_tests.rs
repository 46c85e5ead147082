// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_request, create_test_scope};
use crate::{
    DocumentFooter, REPORT_VERSION, ReportDocument, ReportScope, Section, assemble,
    filter_summary, location_label,
};
use salon_reports_domain::{
    ReconciliationInputs, ReportCatalog, ReportDefinition, ReportId, ReportRequest, reconcile,
};
use std::collections::BTreeMap;
use time::macros::datetime;

#[test]
fn test_location_label_names_up_to_three() {
    assert_eq!(location_label(&[]), "All Locations");
    assert_eq!(location_label(&["Downtown"]), "Downtown");
    assert_eq!(
        location_label(&["Downtown", "Uptown", "Midtown"]),
        "Downtown, Uptown, Midtown"
    );
    assert_eq!(
        location_label(&["Downtown", "Uptown", "Midtown", "Harbor"]),
        "All (4 locations)"
    );
}

#[test]
fn test_filter_summary_none() {
    let request: ReportRequest = create_test_request(ReportId::SalesSummary);
    let scope: ReportScope = create_test_scope(&[("loc-1", "Downtown")], 1);
    assert_eq!(filter_summary(&request, &scope), "None");
}

#[test]
fn test_filter_summary_lists_franchisee_subset_and_filters() {
    let mut filters: BTreeMap<String, String> = BTreeMap::new();
    filters.insert(String::from("paymentMethod"), String::from("CASH"));
    filters.insert(String::from("status"), String::new());
    let request: ReportRequest = create_test_request(ReportId::SalesSummary)
        .with_franchisee(Some(String::from("fr-1")))
        .with_locations(vec![String::from("loc-1")])
        .with_filters(filters);
    let scope: ReportScope = create_test_scope(&[("loc-1", "Downtown")], 3);

    assert_eq!(
        filter_summary(&request, &scope),
        "Franchisee: fr-1 | Locations: 1 selected | paymentMethod: CASH"
    );
}

#[test]
fn test_filter_summary_skips_locations_when_all_selected() {
    let request: ReportRequest = create_test_request(ReportId::SalesSummary)
        .with_locations(vec![String::from("loc-1"), String::from("loc-2")]);
    let scope: ReportScope = create_test_scope(&[("loc-1", "Downtown"), ("loc-2", "Uptown")], 2);
    assert_eq!(filter_summary(&request, &scope), "None");
}

#[test]
fn test_footer_carries_glossary_and_version() {
    let footer: DocumentFooter = DocumentFooter::default();
    assert_eq!(footer.version, REPORT_VERSION);
    assert_eq!(footer.definitions.len(), 7);
    assert_eq!(
        footer.definitions.get("netSales").map(String::as_str),
        Some("Gross Sales - Refunds - Voids - Discounts")
    );
}

#[test]
fn test_assemble_header() {
    let definition: &ReportDefinition = ReportCatalog::definition(ReportId::SalesSummary);
    let request: ReportRequest = create_test_request(ReportId::SalesSummary);
    let scope: ReportScope = create_test_scope(&[("loc-1", "Downtown"), ("loc-2", "Uptown")], 2);

    let document: ReportDocument = assemble(
        definition,
        &request,
        &scope,
        vec![Section::metrics("Sales Summary")],
        None,
        datetime!(2026-10-18 02:30:05 UTC),
    )
    .unwrap();

    assert_eq!(document.report_id, "sales_summary");
    assert_eq!(document.header.report_name, definition.display_name);
    assert_eq!(document.header.location_label, "Downtown, Uptown");
    assert_eq!(document.header.filter_summary, "None");
    assert_eq!(document.header.generated_at, "10/17/2026, 9:30:05 PM");
    assert_eq!(document.header.timezone_label, "Chicago");
    assert!(document.section("Sales Summary").is_some());
}

#[test]
fn test_assemble_keeps_reconciliation_for_financial_reports_only() {
    let snapshot = reconcile(&ReconciliationInputs::default());
    let scope: ReportScope = create_test_scope(&[("loc-1", "Downtown")], 1);

    let sales: ReportDocument = assemble(
        ReportCatalog::definition(ReportId::SalesSummary),
        &create_test_request(ReportId::SalesSummary),
        &scope,
        Vec::new(),
        Some(snapshot),
        datetime!(2026-10-18 12:00 UTC),
    )
    .unwrap();
    assert_eq!(sales.reconciliation, Some(snapshot));

    let growth: ReportDocument = assemble(
        ReportCatalog::definition(ReportId::CustomerGrowth),
        &create_test_request(ReportId::CustomerGrowth),
        &scope,
        Vec::new(),
        Some(snapshot),
        datetime!(2026-10-18 12:00 UTC),
    )
    .unwrap();
    assert_eq!(growth.reconciliation, None);
}

#[test]
fn test_document_serializes_camel_case_header() {
    let document: ReportDocument = assemble(
        ReportCatalog::definition(ReportId::TopServices),
        &create_test_request(ReportId::TopServices),
        &create_test_scope(&[("loc-1", "Downtown")], 1),
        Vec::new(),
        None,
        datetime!(2026-10-18 12:00 UTC),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&document).unwrap();
    assert_eq!(json["header"]["dateFrom"], "2026-10-01");
    assert_eq!(json["header"]["dateTo"], "2026-10-07");
    assert_eq!(json["footer"]["version"], "v1.0");
    assert!(json.get("reconciliation").is_none());
}
