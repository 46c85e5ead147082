// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report document assembly.
//!
//! The header and footer field names are the contract with renderers and
//! must not change without bumping `REPORT_VERSION`.

use crate::dataset::ReportScope;
use crate::error::CoreError;
use crate::sections::Section;
use salon_reports_domain::{ReconciliationSnapshot, ReportDefinition, ReportRequest, iso_date};
use serde::Serialize;
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

/// Format version stamped on every document footer.
pub const REPORT_VERSION: &str = "v1.0";

/// Above this many locations the header shows a count instead of names.
const MAX_NAMED_LOCATIONS: usize = 3;

/// Fixed glossary printed in every footer.
pub const REPORT_DEFINITIONS: [(&str, &str); 7] = [
    ("grossSales", "Total sales before refunds, voids, and discounts"),
    ("netSales", "Gross Sales - Refunds - Voids - Discounts"),
    ("noShowRate", "No-Shows / Total Booked (excludes cancellations)"),
    ("utilization", "Booked Minutes Completed / Available Minutes"),
    ("tips", "Gratuities collected (Cash + Card tips)"),
    ("refund", "Separate transaction linked to original sale"),
    ("void", "Cancelled transaction before settlement, linked to original"),
];

/// Header block of a report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub report_name: String,
    #[serde(with = "iso_date")]
    pub date_from: Date,
    #[serde(with = "iso_date")]
    pub date_to: Date,
    pub location_label: String,
    pub filter_summary: String,
    pub generated_at: String,
    pub timezone_label: String,
}

/// Footer block of a report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFooter {
    pub definitions: BTreeMap<String, String>,
    pub version: String,
}

impl Default for DocumentFooter {
    fn default() -> Self {
        Self {
            definitions: REPORT_DEFINITIONS
                .iter()
                .map(|(term, meaning)| ((*term).to_string(), (*meaning).to_string()))
                .collect(),
            version: REPORT_VERSION.to_string(),
        }
    }
}

/// A fully assembled report, ready for an external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub report_id: String,
    pub orientation: salon_reports_domain::Orientation,
    pub header: DocumentHeader,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation: Option<ReconciliationSnapshot>,
    pub footer: DocumentFooter,
}

impl ReportDocument {
    /// Finds a body section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}

/// Builds the header location label.
///
/// More than three locations collapse to `All (N locations)`; none at all
/// reads `All Locations`.
#[must_use]
pub fn location_label(names: &[&str]) -> String {
    if names.len() > MAX_NAMED_LOCATIONS {
        format!("All ({} locations)", names.len())
    } else if names.is_empty() {
        String::from("All Locations")
    } else {
        names.join(", ")
    }
}

/// Builds the header filter summary.
///
/// Franchisee and location subset filters come first, followed by the
/// caller's own filters. Empty values are skipped; no filters at all
/// reads `None`.
#[must_use]
pub fn filter_summary(request: &ReportRequest, scope: &ReportScope) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(franchisee) = request.franchisee_id().filter(|f| !f.is_empty()) {
        parts.push(format!("Franchisee: {franchisee}"));
    }
    if !request.location_ids().is_empty() && scope.is_subset() {
        parts.push(format!("Locations: {} selected", request.location_ids().len()));
    }
    parts.extend(
        request
            .filters()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}: {value}")),
    );
    if parts.is_empty() {
        String::from("None")
    } else {
        parts.join(" | ")
    }
}

/// Assembles a report document.
///
/// The reconciliation block is kept only for financial report categories.
/// Sections keep the order they are given in.
///
/// # Arguments
///
/// * `definition` - Catalog entry of the report
/// * `request` - The validated request
/// * `scope` - Locations covered by the report
/// * `sections` - Body sections, in display order
/// * `reconciliation` - Reconciliation snapshot, if one was computed
/// * `generated_at` - Generation instant
///
/// # Errors
///
/// Returns an error if `generated_at` cannot be rendered in the request
/// timezone.
pub fn assemble(
    definition: &ReportDefinition,
    request: &ReportRequest,
    scope: &ReportScope,
    sections: Vec<Section>,
    reconciliation: Option<ReconciliationSnapshot>,
    generated_at: OffsetDateTime,
) -> Result<ReportDocument, CoreError> {
    let names: Vec<&str> = scope.locations.iter().map(|l| l.name.as_str()).collect();
    let header: DocumentHeader = DocumentHeader {
        report_name: definition.display_name.to_string(),
        date_from: request.date_from(),
        date_to: request.date_to(),
        location_label: location_label(&names),
        filter_summary: filter_summary(request, scope),
        generated_at: request.timezone().render(generated_at)?,
        timezone_label: request.timezone().label(),
    };

    Ok(ReportDocument {
        report_id: definition.id.as_str().to_string(),
        orientation: definition.orientation,
        header,
        sections,
        reconciliation: reconciliation.filter(|_| definition.is_financial()),
        footer: DocumentFooter::default(),
    })
}
