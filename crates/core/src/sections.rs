// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use salon_reports_domain::{MONEY_SCALE, round_money};
use serde::Serialize;

/// A single table cell.
///
/// Cells are typed so renderers can align and format them without
/// re-parsing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Cell {
    Text(String),
    Count(u64),
    /// Money rounded to cents.
    Money(Decimal),
    /// Whole percent.
    Percent(u32),
    /// Hours rounded to two places.
    Hours(Decimal),
    /// Nothing to show.
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn count<N: Into<u64>>(value: N) -> Self {
        Self::Count(value.into())
    }

    /// Counts held in `usize`.
    #[must_use]
    pub fn number(value: usize) -> Self {
        Self::Count(u64::try_from(value).unwrap_or(u64::MAX))
    }

    /// Money, rounded half away from zero and padded to two places.
    #[must_use]
    pub fn money(value: Decimal) -> Self {
        let mut rounded: Decimal = round_money(value);
        rounded.rescale(MONEY_SCALE);
        Self::Money(rounded)
    }

    #[must_use]
    pub const fn percent(value: u32) -> Self {
        Self::Percent(value)
    }

    #[must_use]
    pub fn hours(value: Decimal) -> Self {
        let mut rounded: Decimal = round_money(value);
        rounded.rescale(MONEY_SCALE);
        Self::Hours(rounded)
    }
}

/// One titled table of a report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    /// Footnote shown under the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Section {
    /// Creates an empty table with the given column headers.
    pub fn table(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
            note: None,
        }
    }

    /// Creates a two-column `Metric | Value` table.
    pub fn metrics(title: impl Into<String>) -> Self {
        Self::table(title, &["Metric", "Value"])
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Appends a `Metric | Value` row.
    #[must_use]
    pub fn metric(self, label: impl Into<String>, value: Cell) -> Self {
        self.row(vec![Cell::Text(label.into()), value])
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Appends every row produced by `rows`.
    #[must_use]
    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        self.rows.extend(rows);
        self
    }
}
