// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod csv_export;
mod engine;
mod error;
mod request_response;
mod source;

#[cfg(test)]
mod tests;

pub use auth::{
    Caller, authorize_report, check_filters_in_scope, check_franchisee, pin_employee,
    resolve_scope,
};
pub use capabilities::{list_available_reports, report_capabilities};
pub use csv_export::{SHIFT_CLOSE_SECTIONS, shift_close_csv};
pub use engine::{Clock, EngineConfig, FixedClock, ReportEngine, SystemClock};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    AvailableReportsResponse, CallerContext, Capability, ReportCapability, ReportSummary,
    RunReportRequest,
};
pub use source::{InMemoryRecordSource, RecordSource, SourceError};
