// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the shift close (Z) report.
//!
//! Sections are written in a fixed order, each introduced by a title row
//! and separated by a blank line. Money is written with two decimals.

use crate::error::ApiError;
use csv::{Writer, WriterBuilder};
use rust_decimal::Decimal;
use salon_reports_domain::{ShiftClose, format_money};

/// Section titles, in output order.
pub const SHIFT_CLOSE_SECTIONS: [&str; 4] = [
    "SUMMARY",
    "CASH RECONCILIATION",
    "TAX SUMMARY",
    "TOP SELLING ITEMS",
];

fn csv_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Internal {
        message: format!("CSV export failed: {err}"),
    }
}

/// Writes one section and returns it as text.
fn write_section(title: &str, rows: &[Vec<String>]) -> Result<String, ApiError> {
    let mut writer: Writer<Vec<u8>> = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    writer.write_record([title]).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    let bytes: Vec<u8> = writer.into_inner().map_err(csv_error)?;
    String::from_utf8(bytes).map_err(csv_error)
}

fn money_row(label: &str, amount: Decimal) -> Vec<String> {
    vec![label.to_string(), format_money(amount)]
}

fn count_row(label: &str, count: u32) -> Vec<String> {
    vec![label.to_string(), count.to_string()]
}

/// Renders a shift close report as CSV.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn shift_close_csv(report: &ShiftClose) -> Result<String, ApiError> {
    let summary: Vec<Vec<String>> = vec![
        money_row("Total Sales", report.summary.total_sales),
        money_row("Cash Sales", report.summary.cash_sales),
        count_row("Cash Transactions", report.summary.cash_count),
        money_row("Card Sales", report.summary.card_sales),
        count_row("Card Transactions", report.summary.card_count),
        count_row("Transactions", report.summary.transaction_count),
        money_row("Refunds", report.summary.refund_total),
        count_row("Refund Count", report.summary.refund_count),
        money_row("Refunded Tax", report.summary.refund_tax),
        money_row("Net Sales", report.summary.net_sales),
    ];

    let cash: Vec<Vec<String>> = vec![
        money_row("Opening Cash", report.cash.opening_cash),
        money_row("Cash Sales", report.cash.cash_sales),
        money_row("Expected Closing", report.cash.expected_closing),
        vec![
            String::from("Actual Closing"),
            report
                .cash
                .actual_closing
                .map_or_else(String::new, format_money),
        ],
        money_row("Variance", report.cash.variance),
    ];

    let tax: Vec<Vec<String>> = vec![
        money_row("Subtotal", report.tax.subtotal),
        money_row("Tax Collected", report.tax.tax),
        money_row("Total with Tax", report.tax.total_with_tax),
    ];

    let mut items: Vec<Vec<String>> = vec![vec![
        String::from("Item"),
        String::from("Quantity"),
        String::from("Sales"),
    ]];
    items.extend(report.top_items.iter().map(|item| {
        vec![
            item.name.clone(),
            item.quantity.to_string(),
            format_money(item.sales),
        ]
    }));

    let sections: Vec<String> = SHIFT_CLOSE_SECTIONS
        .iter()
        .zip([summary, cash, tax, items])
        .map(|(title, rows)| write_section(title, &rows))
        .collect::<Result<Vec<String>, ApiError>>()?;
    Ok(sections.join("\n"))
}
