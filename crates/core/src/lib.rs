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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dataset;
mod document;
mod error;
mod layout;
mod sections;

#[cfg(test)]
mod tests;

use salon_reports_domain::{
    AggregationConfig, ReconciliationInputs, ReconciliationSnapshot, ReportDefinition,
    SalesTotals, reconcile, reported_net_sales,
};
use time::OffsetDateTime;

// Re-export public types and functions
pub use dataset::{LocationRef, ReportDataset, ReportScope};
pub use document::{
    DocumentFooter, DocumentHeader, REPORT_DEFINITIONS, REPORT_VERSION, ReportDocument, assemble,
    filter_summary, location_label,
};
pub use error::CoreError;
pub use layout::ReportLayout;
pub use sections::{Cell, Section};

/// Reconciles the transactions and drawer reports of a dataset.
///
/// Reported net sales come from closed drawer sessions when any reported a
/// figure; otherwise the ledger net of the transactions is used.
#[must_use]
pub fn reconcile_dataset(dataset: &ReportDataset) -> ReconciliationSnapshot {
    let records = dataset.records();
    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    reconcile(&ReconciliationInputs::from_totals(
        &totals,
        reported_net_sales(&records.drawer_sessions),
    ))
}

/// Builds a complete report document.
///
/// # Arguments
///
/// * `definition` - Catalog entry of the report to build
/// * `dataset` - Records already scoped to the request
/// * `config` - Aggregation settings
/// * `generated_at` - Generation instant stamped in the header
///
/// # Errors
///
/// Returns an error if:
/// - The definition does not match the requested report
/// - The scope does not suit the report layout
/// - A timestamp cannot be rendered in the request timezone
pub fn build_report(
    definition: &ReportDefinition,
    dataset: &ReportDataset,
    config: &AggregationConfig,
    generated_at: OffsetDateTime,
) -> Result<ReportDocument, CoreError> {
    if definition.id != dataset.request().report_id() {
        return Err(CoreError::LayoutPrecondition {
            report: definition.id,
            message: format!("dataset was prepared for {}", dataset.request().report_id()),
        });
    }

    let sections: Vec<Section> = ReportLayout::for_report(definition.id).build(dataset, config)?;
    let reconciliation: Option<ReconciliationSnapshot> = definition
        .is_financial()
        .then(|| reconcile_dataset(dataset));

    assemble(
        definition,
        dataset.request(),
        dataset.scope(),
        sections,
        reconciliation,
        generated_at,
    )
}
