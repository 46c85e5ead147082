// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report visibility policy.
//!
//! Visibility is decided in two steps:
//!
//! 1. The caller's role must appear in the report's allowed roles.
//! 2. The franchisor payroll gate: a FRANCHISOR caller only sees reports
//!    that require payroll permission when the payroll-view flag is set.
//!
//! The second rule applies to FRANCHISOR only. Other roles listed on a
//! payroll report are treated as already vetted.

use crate::catalog::ReportCatalog;
use crate::types::{PermissionFlags, ReportDefinition, ReportId, Role};

/// Franchisor payroll gate.
///
/// Returns `true` when the definition must be hidden from the caller
/// because it exposes compensation data and the caller is a FRANCHISOR
/// without the payroll-view permission.
#[must_use]
pub const fn franchisor_payroll_gate(
    definition: &ReportDefinition,
    role: Role,
    flags: PermissionFlags,
) -> bool {
    definition.requires_payroll_permission
        && matches!(role, Role::Franchisor)
        && !flags.can_view_payroll
}

/// Returns whether a single definition is visible to the caller.
#[must_use]
pub fn is_visible(definition: &ReportDefinition, role: Role, flags: PermissionFlags) -> bool {
    definition.allows_role(role) && !franchisor_payroll_gate(definition, role, flags)
}

/// Returns the catalog entries visible to the caller, in catalog order.
///
/// # Arguments
///
/// * `role` - The caller's role
/// * `flags` - The caller's permission flags
#[must_use]
pub fn available_reports(role: Role, flags: PermissionFlags) -> Vec<&'static ReportDefinition> {
    ReportCatalog::iter()
        .filter(|definition| is_visible(definition, role, flags))
        .collect()
}

/// Resolves a report for the caller, or `None` if it is not visible.
///
/// Never substitutes another report.
#[must_use]
pub fn resolve_visible(
    id: ReportId,
    role: Role,
    flags: PermissionFlags,
) -> Option<&'static ReportDefinition> {
    let definition: &'static ReportDefinition = ReportCatalog::definition(id);
    is_visible(definition, role, flags).then_some(definition)
}
