// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::money;
use crate::{SHIFT_CLOSE_SECTIONS, shift_close_csv};
use rust_decimal::Decimal;
use salon_reports_domain::{ItemSales, ShiftClose, ShiftSummary, TaxSummary, reconcile_drawer};

fn create_test_shift_close() -> ShiftClose {
    ShiftClose {
        summary: ShiftSummary {
            total_sales: money("250"),
            cash_sales: money("200"),
            card_sales: money("50"),
            cash_count: 1,
            card_count: 1,
            transaction_count: 2,
            refund_total: Decimal::ZERO,
            refund_count: 0,
            refund_tax: Decimal::ZERO,
            net_sales: money("250"),
        },
        cash: reconcile_drawer(money("100"), money("200"), None),
        tax: TaxSummary {
            subtotal: money("250"),
            tax: Decimal::ZERO,
            total_with_tax: money("250"),
        },
        top_items: vec![ItemSales {
            name: String::from("Haircut"),
            quantity: 2,
            sales: money("250"),
        }],
    }
}

#[test]
fn test_shift_close_csv_layout() {
    let csv: String = shift_close_csv(&create_test_shift_close()).unwrap();
    let expected: &str = "\
SUMMARY
Total Sales,250.00
Cash Sales,200.00
Cash Transactions,1
Card Sales,50.00
Card Transactions,1
Transactions,2
Refunds,0.00
Refund Count,0
Refunded Tax,0.00
Net Sales,250.00

CASH RECONCILIATION
Opening Cash,100.00
Cash Sales,200.00
Expected Closing,300.00
Actual Closing,
Variance,0.00

TAX SUMMARY
Subtotal,250.00
Tax Collected,0.00
Total with Tax,250.00

TOP SELLING ITEMS
Item,Quantity,Sales
Haircut,2,250.00
";
    assert_eq!(csv, expected);
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let csv: String = shift_close_csv(&create_test_shift_close()).unwrap();
    let titles: Vec<&str> = csv
        .split("\n\n")
        .map(|block| block.lines().next().unwrap_or_default())
        .collect();
    assert_eq!(titles, SHIFT_CLOSE_SECTIONS.to_vec());
}

#[test]
fn test_counted_drawer_shows_signed_variance() {
    let mut report: ShiftClose = create_test_shift_close();
    report.cash = reconcile_drawer(money("100"), money("200"), Some(money("295.5")));

    let csv: String = shift_close_csv(&report).unwrap();
    assert!(csv.contains("Actual Closing,295.50\n"));
    assert!(csv.contains("Variance,-4.50\n"));
}

#[test]
fn test_item_names_are_quoted() {
    let mut report: ShiftClose = create_test_shift_close();
    report.top_items[0].name = String::from("Cut, Color");

    let csv: String = shift_close_csv(&report).unwrap();
    assert!(csv.ends_with("\"Cut, Color\",2,250.00\n"));
}

#[test]
fn test_empty_item_list_keeps_header() {
    let mut report: ShiftClose = create_test_shift_close();
    report.top_items.clear();

    let csv: String = shift_close_csv(&report).unwrap();
    assert!(csv.ends_with("TOP SELLING ITEMS\nItem,Quantity,Sales\n"));
}
