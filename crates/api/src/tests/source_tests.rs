// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_records;
use crate::{InMemoryRecordSource, RecordSource, SourceError};
use salon_reports_domain::RecordSet;
use time::macros::date;

#[tokio::test]
async fn test_fetch_returns_one_location() {
    let source: InMemoryRecordSource = InMemoryRecordSource::new(create_test_records());
    let records: RecordSet = source
        .fetch("loc-2", date!(2026 - 10 - 01), date!(2026 - 10 - 07))
        .await
        .unwrap();

    assert_eq!(records.locations.len(), 1);
    assert_eq!(records.locations[0].name, "Uptown");
    assert_eq!(records.employees.len(), 1);
    assert_eq!(records.transactions.len(), 1);
    assert_eq!(records.transactions[0].id, "t2");
    assert!(records.appointments.is_empty());
    assert!(records.drawer_sessions.is_empty());
}

#[tokio::test]
async fn test_fetch_unknown_location_fails() {
    let source: InMemoryRecordSource = InMemoryRecordSource::new(create_test_records());
    let result: Result<RecordSet, SourceError> = source
        .fetch("loc-9", date!(2026 - 10 - 01), date!(2026 - 10 - 07))
        .await;
    assert!(matches!(result, Err(SourceError::UnknownLocation(ref id)) if id == "loc-9"));
}

#[tokio::test]
async fn test_fetch_skips_records_far_from_period() {
    let source: InMemoryRecordSource = InMemoryRecordSource::new(create_test_records());
    let records: RecordSet = source
        .fetch("loc-1", date!(2026 - 10 - 07), date!(2026 - 10 - 09))
        .await
        .unwrap();

    assert_eq!(records.locations.len(), 1);
    assert_eq!(records.employees.len(), 1);
    assert!(records.transactions.is_empty());
    assert!(records.appointments.is_empty());
    assert!(records.drawer_sessions.is_empty());
}

#[tokio::test]
async fn test_fetch_keeps_records_a_day_outside_period() {
    let source: InMemoryRecordSource = InMemoryRecordSource::new(create_test_records());
    let records: RecordSet = source
        .fetch("loc-1", date!(2026 - 10 - 06), date!(2026 - 10 - 08))
        .await
        .unwrap();
    assert_eq!(records.transactions.len(), 1);
}

#[test]
fn test_from_json_loads_fixture() {
    let json: String = serde_json::to_string(&create_test_records()).unwrap();
    let source: InMemoryRecordSource = InMemoryRecordSource::from_json(&json).unwrap();
    assert_eq!(source.records(), &create_test_records());
}

#[test]
fn test_from_json_accepts_partial_fixture() {
    let source: InMemoryRecordSource =
        InMemoryRecordSource::from_json(r#"{"locations": []}"#).unwrap();
    assert!(source.records().transactions.is_empty());
}

#[test]
fn test_from_json_rejects_malformed_fixture() {
    let result: Result<InMemoryRecordSource, SourceError> =
        InMemoryRecordSource::from_json("{\"locations\": 7}");
    assert!(matches!(result, Err(SourceError::Parse(_))));
}

#[test]
fn test_from_path_reports_missing_file() {
    let result: Result<InMemoryRecordSource, SourceError> =
        InMemoryRecordSource::from_path("/nonexistent/salon-fixture.json");
    assert!(matches!(result, Err(SourceError::Io(_))));
}
