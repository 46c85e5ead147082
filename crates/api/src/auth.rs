// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity, report authorization and scope resolution.
//!
//! Authentication itself happens outside this crate. The caller arrives
//! with its role, payroll permission and accessible locations already
//! resolved; this module only decides what that caller may run and over
//! which locations.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::CallerContext;
use salon_reports::{LocationRef, ReportScope};
use salon_reports_domain::{
    PermissionFlags, RecordSet, ReportCategory, ReportDefinition, ReportId, ReportRequest, Role,
    resolve_visible,
};
use std::str::FromStr;

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's user id.
    pub id: String,
    /// The caller's role.
    pub role: Role,
    /// The caller's permission flags.
    pub permissions: PermissionFlags,
    /// The franchisee the caller belongs to, if any.
    pub franchisee_id: Option<String>,
    /// Locations the caller may report on.
    pub locations: Vec<LocationRef>,
    /// The caller's own employee id, if the caller is staff.
    pub employee_id: Option<String>,
}

impl Caller {
    /// Creates a caller with no locations and no payroll permission.
    ///
    /// # Arguments
    ///
    /// * `id` - The caller's user id
    /// * `role` - The caller's role
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self {
            id,
            role,
            permissions: PermissionFlags {
                can_view_payroll: false,
            },
            franchisee_id: None,
            locations: Vec::new(),
            employee_id: None,
        }
    }

    #[must_use]
    pub const fn with_payroll_permission(mut self, can_view_payroll: bool) -> Self {
        self.permissions = PermissionFlags::with_payroll(can_view_payroll);
        self
    }

    #[must_use]
    pub fn with_locations(mut self, locations: Vec<LocationRef>) -> Self {
        self.locations = locations;
        self
    }

    #[must_use]
    pub fn with_franchisee(mut self, franchisee_id: Option<String>) -> Self {
        self.franchisee_id = franchisee_id;
        self
    }

    #[must_use]
    pub fn with_employee(mut self, employee_id: Option<String>) -> Self {
        self.employee_id = employee_id;
        self
    }

    /// Builds a caller from the API context.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the role is not recognized.
    pub fn from_context(context: CallerContext) -> Result<Self, ApiError> {
        let role: Role = Role::from_str(&context.role).map_err(translate_domain_error)?;
        Ok(Self::new(context.id, role)
            .with_payroll_permission(context.payroll_permission)
            .with_franchisee(context.franchisee_id)
            .with_locations(context.locations)
            .with_employee(context.employee_id))
    }
}

/// Checks that the caller may run a report.
///
/// The same visibility rule that builds the available-reports list is
/// applied here, so a report hidden from the list can never be run.
///
/// # Errors
///
/// Returns `ApiError::AccessDenied` if the role is not allowed or the
/// payroll gate hides the report.
pub fn authorize_report(
    caller: &Caller,
    report_id: ReportId,
) -> Result<&'static ReportDefinition, ApiError> {
    resolve_visible(report_id, caller.role, caller.permissions).ok_or_else(|| {
        ApiError::AccessDenied {
            report: report_id.as_str().to_string(),
            role: caller.role.as_str().to_string(),
        }
    })
}

/// Resolves the locations a report covers.
///
/// An empty request covers every accessible location. Requested locations
/// keep the order they were asked in.
///
/// # Errors
///
/// Returns `ApiError::InvalidRequest` if a requested location is not
/// accessible to the caller, or if a non-employee caller has no accessible
/// location at all.
pub fn resolve_scope(caller: &Caller, requested: &[String]) -> Result<ReportScope, ApiError> {
    if caller.locations.is_empty() && caller.role != Role::Employee {
        return Err(ApiError::InvalidRequest {
            field: String::from("locationIds"),
            message: String::from("Caller has no accessible locations"),
        });
    }

    let locations: Vec<LocationRef> = if requested.is_empty() {
        caller.locations.clone()
    } else {
        requested
            .iter()
            .map(|id| {
                caller
                    .locations
                    .iter()
                    .find(|location| &location.id == id)
                    .cloned()
                    .ok_or_else(|| ApiError::InvalidRequest {
                        field: String::from("locationIds"),
                        message: format!("Location '{id}' is outside the caller's scope"),
                    })
            })
            .collect::<Result<Vec<LocationRef>, ApiError>>()?
    };

    Ok(ReportScope {
        locations,
        accessible_count: caller.locations.len(),
    })
}

/// Pins self-service reports to the caller's own activity.
///
/// Employees only ever see their own figures, whatever the request asked
/// for. Other roles keep the employee filter they supplied.
///
/// # Errors
///
/// Returns `ApiError::InvalidRequest` if the report must be pinned but the
/// caller carries no employee id.
pub fn pin_employee(
    caller: &Caller,
    definition: &ReportDefinition,
    request: ReportRequest,
) -> Result<ReportRequest, ApiError> {
    if caller.role != Role::Employee && definition.category != ReportCategory::SelfService {
        return Ok(request);
    }
    let employee_id: String = caller.employee_id.clone().ok_or_else(|| ApiError::InvalidRequest {
        field: String::from("employeeId"),
        message: format!("'{}' requires the caller's employee id", definition.id),
    })?;
    Ok(request.with_employee(Some(employee_id)))
}

/// Checks a franchisee filter against the caller's tenant.
///
/// A caller bound to a franchisee may only filter on that franchisee.
/// Callers without one may filter on any franchisee that owns a location
/// in the fetched records; that half is checked by `check_filters_in_scope`.
///
/// # Errors
///
/// Returns `ApiError::InvalidRequest` if the filter names another
/// franchisee.
pub fn check_franchisee(caller: &Caller, franchisee_id: Option<&str>) -> Result<(), ApiError> {
    let Some(requested) = franchisee_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };
    match caller.franchisee_id.as_deref() {
        Some(own) if own != requested => Err(franchisee_out_of_scope(requested)),
        _ => Ok(()),
    }
}

/// Checks the request's filters against the records fetched for its scope.
///
/// # Arguments
///
/// * `franchisee_id` - The franchisee filter, if any
/// * `employee_id` - An employee filter supplied by the caller, if any
/// * `records` - The records of every scoped location
///
/// # Errors
///
/// Returns `ApiError::InvalidRequest` if the franchisee owns none of the
/// scoped locations or the employee works at none of them.
pub fn check_filters_in_scope(
    franchisee_id: Option<&str>,
    employee_id: Option<&str>,
    records: &RecordSet,
) -> Result<(), ApiError> {
    if let Some(requested) = franchisee_id.filter(|id| !id.is_empty()) {
        let owns_location: bool = records
            .locations
            .iter()
            .any(|location| location.franchisee_id.as_deref() == Some(requested));
        if !owns_location {
            return Err(franchisee_out_of_scope(requested));
        }
    }
    if let Some(requested) = employee_id.filter(|id| !id.is_empty()) {
        let works_here: bool = records
            .employees
            .iter()
            .any(|employee| employee.id == requested);
        if !works_here {
            return Err(ApiError::InvalidRequest {
                field: String::from("employeeId"),
                message: format!("Employee '{requested}' is outside the caller's scope"),
            });
        }
    }
    Ok(())
}

fn franchisee_out_of_scope(franchisee_id: &str) -> ApiError {
    ApiError::InvalidRequest {
        field: String::from("franchiseeId"),
        message: format!("Franchisee '{franchisee_id}' is outside the caller's scope"),
    }
}
