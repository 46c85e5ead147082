// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_dataset, create_test_drawer_session, create_test_records, money,
};
use crate::{CoreError, ReportDataset, ReportDocument, build_report, reconcile_dataset};
use salon_reports_domain::{
    AggregationConfig, DrawerSession, Orientation, ReconciliationStatus, RecordSet, ReportCatalog,
    ReportId,
};
use time::macros::datetime;

fn build(report_id: ReportId, records: RecordSet) -> Result<ReportDocument, CoreError> {
    let dataset: ReportDataset = create_test_dataset(report_id, records);
    build_report(
        ReportCatalog::definition(report_id),
        &dataset,
        &AggregationConfig::default(),
        datetime!(2026-10-18 15:00 UTC),
    )
}

#[test]
fn test_financial_report_carries_balanced_reconciliation() {
    let document: ReportDocument = build(ReportId::SalesSummary, create_test_records()).unwrap();
    let snapshot = document.reconciliation.unwrap();
    assert_eq!(snapshot.gross_sales, money("250"));
    assert_eq!(snapshot.net_sales, money("250"));
    assert_eq!(snapshot.status, ReconciliationStatus::Balanced);
}

#[test]
fn test_reported_net_sales_mismatch_is_a_variance() {
    let mut records: RecordSet = create_test_records();
    let mut session: DrawerSession = create_test_drawer_session("d1", "100.00", Some("100.00"));
    session.reported_net_sales = Some(money("255.00"));
    records.drawer_sessions.push(session);

    let dataset: ReportDataset = create_test_dataset(ReportId::TaxCollectedSummary, records);
    let snapshot = reconcile_dataset(&dataset);
    assert_eq!(snapshot.variance, money("5"));
    assert_eq!(snapshot.status, ReconciliationStatus::Variance(money("5.00")));
}

#[test]
fn test_non_financial_report_has_no_reconciliation() {
    let document: ReportDocument =
        build(ReportId::StaffPerformance, create_test_records()).unwrap();
    assert_eq!(document.reconciliation, None);
    assert_eq!(document.header.report_name, "Staff Performance Summary");
}

#[test]
fn test_empty_period_builds_zero_figures() {
    let records: RecordSet = RecordSet {
        locations: create_test_records().locations,
        ..RecordSet::default()
    };
    let document: ReportDocument = build(ReportId::SalesSummary, records).unwrap();
    let snapshot = document.reconciliation.unwrap();
    assert_eq!(snapshot.gross_sales, money("0"));
    assert!(snapshot.is_balanced());
    assert_eq!(document.sections.len(), 2);
}

#[test]
fn test_definition_must_match_request() {
    let dataset: ReportDataset = create_test_dataset(ReportId::SalesSummary, create_test_records());
    let result: Result<ReportDocument, CoreError> = build_report(
        ReportCatalog::definition(ReportId::TipsSummary),
        &dataset,
        &AggregationConfig::default(),
        datetime!(2026-10-18 15:00 UTC),
    );
    assert!(matches!(
        result,
        Err(CoreError::LayoutPrecondition {
            report: ReportId::TipsSummary,
            ..
        })
    ));
}

#[test]
fn test_landscape_orientation_follows_catalog() {
    let document: ReportDocument =
        build(ReportId::TransactionsLedger, create_test_records()).unwrap();
    assert_eq!(document.orientation, Orientation::Landscape);
}
