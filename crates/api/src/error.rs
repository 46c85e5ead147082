// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use salon_reports::CoreError;
use salon_reports_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// A caller either receives a complete document or exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller's role or payroll permission does not authorize the report.
    AccessDenied {
        /// The report that was requested.
        report: String,
        /// The caller's role.
        role: String,
    },
    /// The request is malformed or outside the caller's scope.
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Records for a location could not be fetched in time.
    DataUnavailable {
        /// The location whose fetch failed; the run may be retried.
        location_id: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// The caller cancelled the run.
    Cancelled,
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied { report, role } => {
                write!(f, "Access denied: role {role} may not run '{report}'")
            }
            Self::InvalidRequest { field, message } => {
                write!(f, "Invalid request field '{field}': {message}")
            }
            Self::DataUnavailable {
                location_id,
                message,
            } => {
                write!(f, "Data unavailable for location '{location_id}': {message}")
            }
            Self::Cancelled => write!(f, "Report run was cancelled"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownReport(id) => ApiError::InvalidRequest {
            field: String::from("reportId"),
            message: format!("Unknown report '{id}'"),
        },
        DomainError::InvalidRole(role) => ApiError::InvalidRequest {
            field: String::from("role"),
            message: format!("Unknown role '{role}'"),
        },
        DomainError::InvertedDateRange { .. } => ApiError::InvalidRequest {
            field: String::from("dateTo"),
            message: err.to_string(),
        },
        DomainError::DateParseError { .. } => ApiError::InvalidRequest {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::InvalidTimezone(tz) => ApiError::InvalidRequest {
            field: String::from("timezone"),
            message: format!("Unknown timezone '{tz}'"),
        },
        DomainError::TimestampOutOfRange { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::LayoutPrecondition { report, message } => ApiError::InvalidRequest {
            field: String::from("locationIds"),
            message: format!("{report}: {message}"),
        },
    }
}
