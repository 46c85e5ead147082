// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    InstrumentedSource, create_test_employee_caller, create_test_engine,
    create_test_franchisor, create_test_owner, create_test_request, create_test_source, money,
};
use crate::{ApiError, Caller, EngineConfig, ReportEngine, RunReportRequest};
use salon_reports::{Cell, LocationRef, ReportDocument};
use salon_reports_domain::ReconciliationStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_owner_runs_sales_summary() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let document: ReportDocument = engine
        .run(
            &create_test_owner(),
            &create_test_request("sales_summary"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(document.report_id, "sales_summary");
    assert_eq!(document.header.location_label, "Downtown, Uptown");
    assert_eq!(document.header.generated_at, "10/18/2026, 10:00:00 AM");
    let snapshot = document.reconciliation.unwrap();
    assert_eq!(snapshot.gross_sales, money("250"));
    assert_eq!(snapshot.status, ReconciliationStatus::Balanced);
}

#[tokio::test]
async fn test_employee_denied_brand_report_before_any_fetch() {
    let source: Arc<InstrumentedSource> = Arc::new(InstrumentedSource::new());
    let engine: ReportEngine = create_test_engine(source.clone());

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_employee_caller(),
            &create_test_request("brand_performance_summary"),
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(
        result,
        Err(ApiError::AccessDenied {
            report: String::from("brand_performance_summary"),
            role: String::from("EMPLOYEE"),
        })
    );
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn test_payroll_gate_denies_franchisor_without_permission() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let request: RunReportRequest = create_test_request("tips_summary");

    let denied: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_franchisor(false),
            &request,
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(denied, Err(ApiError::AccessDenied { .. })));

    let allowed: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_franchisor(true),
            &request,
            &CancellationToken::new(),
        )
        .await;
    assert!(allowed.is_ok());
}

#[tokio::test]
async fn test_unknown_report_is_invalid_request() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_owner(),
            &create_test_request("payroll_export"),
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "reportId"
    ));
}

#[tokio::test]
async fn test_inverted_range_rejected_before_any_fetch() {
    let source: Arc<InstrumentedSource> = Arc::new(InstrumentedSource::new());
    let engine: ReportEngine = create_test_engine(source.clone());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.date_from = String::from("2026-10-08");

    let result: Result<ReportDocument, ApiError> = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "dateTo"
    ));
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn test_unknown_timezone_is_invalid_request() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.timezone = Some(String::from("Mars/Olympus_Mons"));

    let result: Result<ReportDocument, ApiError> = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "timezone"
    ));
}

#[tokio::test]
async fn test_location_outside_scope_is_invalid_request() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.location_ids = vec![String::from("loc-9")];

    let result: Result<ReportDocument, ApiError> = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "locationIds"
    ));
}

#[tokio::test]
async fn test_location_360_needs_one_location() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let caller = create_test_franchisor(false);

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &caller,
            &create_test_request("location_360"),
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(result, Err(ApiError::InvalidRequest { .. })));

    let mut request: RunReportRequest = create_test_request("location_360");
    request.location_ids = vec![String::from("loc-2")];
    let document: ReportDocument = engine
        .run(&caller, &request, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(document.header.location_label, "Uptown");
    assert_eq!(document.header.filter_summary, "Locations: 1 selected");
}

#[tokio::test]
async fn test_failed_fetch_reports_location() {
    let source: Arc<InstrumentedSource> =
        Arc::new(InstrumentedSource::new().with_failure("loc-2"));
    let engine: ReportEngine = create_test_engine(source);

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_owner(),
            &create_test_request("sales_summary"),
            &CancellationToken::new(),
        )
        .await;
    assert_eq!(
        result,
        Err(ApiError::DataUnavailable {
            location_id: String::from("loc-2"),
            message: String::from("record store unavailable: connection reset"),
        })
    );
}

#[tokio::test]
async fn test_slow_fetch_times_out() {
    let source: Arc<InstrumentedSource> =
        Arc::new(InstrumentedSource::new().with_delay("loc-1", Duration::from_secs(5)));
    let config: EngineConfig = EngineConfig {
        fetch_timeout: Duration::from_millis(20),
        ..EngineConfig::default()
    };
    let engine: ReportEngine = ReportEngine::new(source, config);

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_owner(),
            &create_test_request("sales_summary"),
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ApiError::DataUnavailable { ref location_id, .. }) if location_id == "loc-1"
    ));
}

#[tokio::test]
async fn test_cancelled_run_returns_cancelled() {
    let source: Arc<InstrumentedSource> =
        Arc::new(InstrumentedSource::new().with_delay("loc-1", Duration::from_secs(5)));
    let engine: ReportEngine = create_test_engine(source);
    let cancel: CancellationToken = CancellationToken::new();
    cancel.cancel();

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_owner(),
            &create_test_request("sales_summary"),
            &cancel,
        )
        .await;
    assert_eq!(result, Err(ApiError::Cancelled));
}

#[tokio::test]
async fn test_results_merge_in_scope_order() {
    let source: Arc<InstrumentedSource> =
        Arc::new(InstrumentedSource::new().with_delay("loc-2", Duration::from_millis(50)));
    let engine: ReportEngine = create_test_engine(source.clone());
    let mut request: RunReportRequest = create_test_request("go_live_status");
    request.location_ids = vec![String::from("loc-2"), String::from("loc-1")];

    let document: ReportDocument = engine
        .run(
            &create_test_franchisor(false),
            &request,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let rows = &document.sections[0].rows;
    assert_eq!(rows[0][0], Cell::text("Uptown"));
    assert_eq!(rows[1][0], Cell::text("Downtown"));
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_employee_reports_are_pinned_to_caller() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("my_sales");
    request.employee_id = Some(String::from("emp-2"));

    let document: ReportDocument = engine
        .run(
            &create_test_employee_caller(),
            &request,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let summary = document.section("My Sales").unwrap();
    assert_eq!(
        summary.rows[1],
        vec![Cell::text("Net Sales"), Cell::money(money("200"))]
    );
}

#[tokio::test]
async fn test_empty_period_returns_zero_figures() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.date_from = String::from("2026-09-01");
    request.date_to = String::from("2026-09-07");

    let document: ReportDocument = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await
        .unwrap();
    let snapshot = document.reconciliation.unwrap();
    assert_eq!(snapshot.gross_sales, money("0"));
    assert_eq!(snapshot.net_sales, money("0"));
    assert!(snapshot.is_balanced());
}

#[tokio::test]
async fn test_shift_close_csv_export() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("shift_close_z_report");
    request.location_ids = vec![String::from("loc-1")];

    let csv: String = engine
        .run_shift_close_csv(&create_test_owner(), &request, &CancellationToken::new())
        .await
        .unwrap();
    assert!(csv.starts_with("SUMMARY\nTotal Sales,200.00\n"));
    assert!(csv.contains("\n\nCASH RECONCILIATION\nOpening Cash,100.00\n"));
    assert!(csv.contains("Variance,0.00\n"));
}

#[tokio::test]
async fn test_csv_export_rejects_other_reports() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let result: Result<String, ApiError> = engine
        .run_shift_close_csv(
            &create_test_owner(),
            &create_test_request("sales_summary"),
            &CancellationToken::new(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "reportId"
    ));
}

#[tokio::test]
async fn test_run_completes_on_spawned_task() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let caller: Caller = create_test_owner();
    let request: RunReportRequest = create_test_request("sales_summary");

    let handle = tokio::spawn(async move {
        engine
            .run(&caller, &request, &CancellationToken::new())
            .await
    });
    let document: ReportDocument = handle.await.unwrap().unwrap();

    assert_eq!(document.header.location_label, "Downtown, Uptown");
}

#[tokio::test]
async fn test_csv_export_completes_on_spawned_task() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let caller: Caller = create_test_owner();
    let mut request: RunReportRequest = create_test_request("shift_close_z_report");
    request.location_ids = vec![String::from("loc-1")];

    let handle = tokio::spawn(async move {
        engine
            .run_shift_close_csv(&caller, &request, &CancellationToken::new())
            .await
    });
    let csv: String = handle.await.unwrap().unwrap();

    assert!(csv.starts_with("SUMMARY\n"));
}

#[tokio::test]
async fn test_foreign_franchisee_filter_rejected_before_any_fetch() {
    let source: Arc<InstrumentedSource> = Arc::new(InstrumentedSource::new());
    let engine: ReportEngine = create_test_engine(source.clone());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.franchisee_id = Some(String::from("fr-other"));

    let result: Result<ReportDocument, ApiError> = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "franchiseeId"
    ));
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn test_own_franchisee_filter_accepted() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.franchisee_id = Some(String::from("fr-1"));

    let document: ReportDocument = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await
        .unwrap();

    assert!(document.header.filter_summary.contains("Franchisee: fr-1"));
}

#[tokio::test]
async fn test_franchisor_filter_on_unknown_franchisee_rejected() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.franchisee_id = Some(String::from("fr-other"));

    let result: Result<ReportDocument, ApiError> = engine
        .run(
            &create_test_franchisor(false),
            &request,
            &CancellationToken::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest { ref field, .. }) if field == "franchiseeId"
    ));
}

#[tokio::test]
async fn test_employee_filter_outside_scoped_locations_rejected() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let caller: Caller = create_test_owner().with_locations(vec![LocationRef {
        id: String::from("loc-1"),
        name: String::from("Downtown"),
    }]);
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.employee_id = Some(String::from("emp-2"));

    let result: Result<ReportDocument, ApiError> = engine
        .run(&caller, &request, &CancellationToken::new())
        .await;

    assert_eq!(
        result,
        Err(ApiError::InvalidRequest {
            field: String::from("employeeId"),
            message: String::from("Employee 'emp-2' is outside the caller's scope"),
        })
    );
}

#[tokio::test]
async fn test_employee_filter_inside_scope_accepted() {
    let engine: ReportEngine = create_test_engine(create_test_source());
    let mut request: RunReportRequest = create_test_request("sales_summary");
    request.employee_id = Some(String::from("emp-2"));

    let document: ReportDocument = engine
        .run(&create_test_owner(), &request, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(document.reconciliation.unwrap().gross_sales, money("50"));
}
