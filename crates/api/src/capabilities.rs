// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for report-aware UI gating.
//!
//! Capabilities are advisory only. `ReportEngine::run` repeats the same
//! check before doing any work.

use crate::auth::Caller;
use crate::request_response::{
    AvailableReportsResponse, Capability, ReportCapability, ReportSummary,
};
use salon_reports_domain::{ReportCatalog, ReportDefinition, available_reports, is_visible};

fn summarize(definition: &ReportDefinition) -> ReportSummary {
    ReportSummary {
        id: definition.id.as_str().to_string(),
        name: definition.display_name.to_string(),
        category: definition.category,
        priority: definition.priority,
        orientation: definition.orientation,
    }
}

/// Lists the reports the caller may run, in catalog order.
#[must_use]
pub fn list_available_reports(caller: &Caller) -> AvailableReportsResponse {
    AvailableReportsResponse {
        role: caller.role.as_str().to_string(),
        reports: available_reports(caller.role, caller.permissions)
            .into_iter()
            .map(summarize)
            .collect(),
    }
}

/// Computes allowed/denied for every catalog entry.
#[must_use]
pub fn report_capabilities(caller: &Caller) -> Vec<ReportCapability> {
    ReportCatalog::iter()
        .map(|definition| ReportCapability {
            id: definition.id.as_str().to_string(),
            can_run: Capability::from(is_visible(
                definition,
                caller.role,
                caller.permissions,
            )),
        })
        .collect()
}
