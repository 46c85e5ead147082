// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The report engine.
//!
//! A run goes through these steps, in order:
//!
//! 1. Resolve the report id and authorize the caller
//! 2. Validate the request and resolve the location scope
//! 3. Fetch each location's records concurrently
//! 4. Build the document
//!
//! Steps 1 and 2 do no I/O, so access and validation errors are raised
//! before any record is read. Franchisee and employee filters are checked
//! against the fetched records before the document is built. A run either
//! returns a complete document or a single `ApiError`.

use crate::auth::{
    Caller, authorize_report, check_filters_in_scope, check_franchisee, pin_employee,
    resolve_scope,
};
use crate::csv_export::shift_close_csv;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::RunReportRequest;
use crate::source::{RecordSource, SourceError};
use futures::stream::{self, StreamExt, TryStreamExt};
use salon_reports::{LocationRef, ReportDataset, ReportDocument, ReportScope, build_report};
use salon_reports_domain::{
    AggregationConfig, RecordSet, ReportCatalog, ReportDefinition, ReportId, ReportRequest,
    ReportTimezone, ShiftClose, parse_date, shift_close,
};
use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Most location fetches in flight at once.
    pub max_concurrency: usize,
    /// Time allowed for a single location fetch.
    pub fetch_timeout: Duration,
    /// Timezone used when the request does not name one.
    pub default_timezone: ReportTimezone,
    pub aggregation: AggregationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            fetch_timeout: Duration::from_secs(30),
            default_timezone: ReportTimezone::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

/// Source of the generation timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Runs reports against a record source.
#[derive(Clone)]
pub struct ReportEngine {
    source: Arc<dyn RecordSource>,
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl ReportEngine {
    /// Creates an engine using the wall clock.
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>, config: EngineConfig) -> Self {
        Self {
            source,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs a report and returns the assembled document.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller
    /// * `request` - The report request
    /// * `cancel` - Aborts the run, including in-flight fetches
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The caller may not run the report
    /// - The request is malformed or outside the caller's scope
    /// - A location's records cannot be fetched in time
    /// - The run is cancelled
    pub async fn run(
        &self,
        caller: &Caller,
        request: &RunReportRequest,
        cancel: &CancellationToken,
    ) -> Result<ReportDocument, ApiError> {
        let (definition, dataset) = self.prepare(caller, request, cancel).await?;

        let document: ReportDocument = build_report(
            definition,
            &dataset,
            &self.config.aggregation,
            self.clock.now(),
        )
        .map_err(|err| {
            warn!(report = definition.id.as_str(), error = %err, "Report layout rejected");
            translate_core_error(err)
        })?;

        if let Some(snapshot) = document
            .reconciliation
            .as_ref()
            .filter(|snapshot| !snapshot.is_balanced())
        {
            warn!(
                report = definition.id.as_str(),
                net_sales = %snapshot.net_sales,
                expected_net = %snapshot.expected_net(),
                status = %snapshot.status,
                "Reconciliation variance"
            );
        }
        info!(
            report = definition.id.as_str(),
            role = caller.role.as_str(),
            sections = document.sections.len(),
            "Report run complete"
        );
        Ok(document)
    }

    /// Runs a shift close report and returns it as CSV.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the request is not for the
    /// shift close report, or any error `run` would return.
    pub async fn run_shift_close_csv(
        &self,
        caller: &Caller,
        request: &RunReportRequest,
        cancel: &CancellationToken,
    ) -> Result<String, ApiError> {
        if request.report_id != ReportId::ShiftCloseZReport.as_str() {
            return Err(ApiError::InvalidRequest {
                field: String::from("reportId"),
                message: format!(
                    "CSV export is only available for '{}'",
                    ReportId::ShiftCloseZReport
                ),
            });
        }
        let (_, dataset) = self.prepare(caller, request, cancel).await?;
        let report: ShiftClose =
            shift_close(dataset.records(), self.config.aggregation.top_item_limit);
        info!(role = caller.role.as_str(), "Shift close CSV exported");
        shift_close_csv(&report)
    }

    /// Validates, authorizes, fetches and scopes the records of a run.
    async fn prepare(
        &self,
        caller: &Caller,
        request: &RunReportRequest,
        cancel: &CancellationToken,
    ) -> Result<(&'static ReportDefinition, ReportDataset), ApiError> {
        let definition: &'static ReportDefinition =
            ReportCatalog::lookup(&request.report_id).map_err(translate_domain_error)?;
        info!(
            report = definition.id.as_str(),
            role = caller.role.as_str(),
            caller = %caller.id,
            "Report run requested"
        );
        let definition: &'static ReportDefinition = authorize_report(caller, definition.id)
            .inspect_err(|err| warn!(error = %err, "Report access denied"))?;

        let report_request: ReportRequest = self.validate(definition, request)?;
        check_franchisee(caller, report_request.franchisee_id())?;
        let report_request: ReportRequest = pin_employee(caller, definition, report_request)?;
        let scope: ReportScope = resolve_scope(caller, report_request.location_ids())?;

        let records: RecordSet = self
            .fetch_all(
                &scope.locations,
                report_request.date_from(),
                report_request.date_to(),
                cancel,
            )
            .await?;

        // Pinned employee ids are the caller's own and are not checked.
        let requested_employee: Option<&str> = request
            .employee_id
            .as_deref()
            .filter(|id| report_request.employee_id() == Some(*id));
        check_filters_in_scope(report_request.franchisee_id(), requested_employee, &records)?;

        let dataset: ReportDataset =
            ReportDataset::new(report_request, scope, records).map_err(translate_core_error)?;
        Ok((definition, dataset))
    }

    fn validate(
        &self,
        definition: &ReportDefinition,
        request: &RunReportRequest,
    ) -> Result<ReportRequest, ApiError> {
        let date_from: Date = parse_date(&request.date_from).map_err(translate_domain_error)?;
        let date_to: Date = parse_date(&request.date_to).map_err(translate_domain_error)?;
        let timezone: ReportTimezone = match request.timezone.as_deref() {
            Some(name) => ReportTimezone::parse(name).map_err(translate_domain_error)?,
            None => self.config.default_timezone,
        };
        let report_request: ReportRequest =
            ReportRequest::new(definition.id, date_from, date_to, timezone)
                .map_err(translate_domain_error)?
                .with_locations(request.location_ids.clone())
                .with_franchisee(request.franchisee_id.clone())
                .with_employee(request.employee_id.clone())
                .with_filters(request.filters.clone());
        Ok(report_request)
    }

    /// Fetches every location concurrently and merges the results in
    /// scope order.
    ///
    /// The first failure drops the fetches still in flight.
    async fn fetch_all(
        &self,
        locations: &[LocationRef],
        date_from: Date,
        date_to: Date,
        cancel: &CancellationToken,
    ) -> Result<RecordSet, ApiError> {
        let fetch_timeout: Duration = self.config.fetch_timeout;
        let targets: Vec<(usize, String)> = locations
            .iter()
            .enumerate()
            .map(|(index, location)| (index, location.id.clone()))
            .collect();
        let source: Arc<dyn RecordSource> = Arc::clone(&self.source);
        let fetches = stream::iter(targets)
            .map(move |(index, location_id)| {
                let source: Arc<dyn RecordSource> = Arc::clone(&source);
                async move {
                    debug!(location = %location_id, "Fetching records");
                    let fetch = source.fetch(&location_id, date_from, date_to);
                    let fetched: Result<RecordSet, SourceError> =
                        tokio::time::timeout(fetch_timeout, fetch)
                            .await
                            .unwrap_or_else(|_| {
                                Err(SourceError::Unavailable(format!(
                                    "fetch timed out after {}s",
                                    fetch_timeout.as_secs()
                                )))
                            });
                    match fetched {
                        Ok(records) => Ok((index, records)),
                        Err(err) => {
                            error!(location = %location_id, error = %err, "Record fetch failed");
                            Err(ApiError::DataUnavailable {
                                location_id,
                                message: err.to_string(),
                            })
                        }
                    }
                }
            })
            .buffer_unordered(self.config.max_concurrency.max(1));

        let mut fetched: Vec<(usize, RecordSet)> = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                warn!("Report run cancelled");
                return Err(ApiError::Cancelled);
            }
            result = fetches.try_collect::<Vec<(usize, RecordSet)>>() => result?,
        };

        fetched.sort_by_key(|(index, _)| *index);
        let mut records: RecordSet = RecordSet::default();
        for (_, location_records) in fetched {
            records.extend(location_records);
        }
        Ok(records)
    }
}
