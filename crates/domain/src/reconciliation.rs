// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Money reconciliation.
//!
//! `reconcile` checks that reported net sales match gross sales minus
//! refunds, voids and discounts. The drawer helpers compare counted cash
//! with what the drawer should hold.
//!
//! Everything here is pure and synchronous.

use crate::money::{MONEY_TOLERANCE, format_money, round_money, sum_money};
use crate::records::{DrawerSession, PaymentMethod, RecordSet, Transaction, TransactionStatus};
use crate::sales::{ItemSales, SalesTotals, top_items};
use rust_decimal::Decimal;
use serde::Serialize;

/// Totals handed to the reconciliation calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconciliationInputs {
    pub gross_sales: Decimal,
    pub refunds: Decimal,
    pub voids: Decimal,
    pub discounts: Decimal,
    /// Net sales as reported by the books or the registers.
    pub net_sales: Decimal,
    pub tax: Decimal,
    pub tips: Decimal,
    pub tender_cash: Decimal,
    pub tender_card: Decimal,
    pub tender_gift: Decimal,
}

impl ReconciliationInputs {
    /// Builds inputs from computed sales totals.
    ///
    /// `reported_net_sales` replaces the computed ledger net when the
    /// registers reported their own figure.
    #[must_use]
    pub fn from_totals(totals: &SalesTotals, reported_net_sales: Option<Decimal>) -> Self {
        Self {
            gross_sales: totals.gross_sales,
            refunds: totals.refunds,
            voids: totals.voids,
            discounts: totals.discounts,
            net_sales: reported_net_sales.unwrap_or(totals.net_sales),
            tax: totals.tax,
            tips: totals.tips,
            tender_cash: totals.tender_cash,
            tender_card: totals.tender_card,
            tender_gift: totals.tender_gift,
        }
    }
}

/// Outcome of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReconciliationStatus {
    /// Net sales match within one cent.
    Balanced,
    /// Net sales differ by the given amount, rounded to cents.
    Variance(Decimal),
}

impl std::fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "Balanced"),
            Self::Variance(amount) => write!(f, "Variance (${})", format_money(*amount)),
        }
    }
}

/// Reconciled totals with variance and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationSnapshot {
    pub gross_sales: Decimal,
    pub refunds: Decimal,
    pub voids: Decimal,
    pub discounts: Decimal,
    pub net_sales: Decimal,
    pub tax: Decimal,
    pub tips: Decimal,
    pub tender_cash: Decimal,
    pub tender_card: Decimal,
    pub tender_gift: Decimal,
    /// `|net_sales - expected_net|`, never negative.
    pub variance: Decimal,
    pub status: ReconciliationStatus,
}

impl ReconciliationSnapshot {
    /// Gross sales minus every deduction.
    #[must_use]
    pub fn expected_net(&self) -> Decimal {
        self.gross_sales - self.refunds - self.voids - self.discounts
    }

    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self.status, ReconciliationStatus::Balanced)
    }
}

/// Reconciles reported net sales against the gross-to-net breakdown.
///
/// `variance = |net_sales - (gross - refunds - voids - discounts)|`. The
/// snapshot is `Balanced` when the variance is at most one cent.
#[must_use]
pub fn reconcile(inputs: &ReconciliationInputs) -> ReconciliationSnapshot {
    let expected_net: Decimal =
        inputs.gross_sales - inputs.refunds - inputs.voids - inputs.discounts;
    let variance: Decimal = (inputs.net_sales - expected_net).abs();
    let status: ReconciliationStatus = if variance <= MONEY_TOLERANCE {
        ReconciliationStatus::Balanced
    } else {
        ReconciliationStatus::Variance(round_money(variance))
    };
    ReconciliationSnapshot {
        gross_sales: inputs.gross_sales,
        refunds: inputs.refunds,
        voids: inputs.voids,
        discounts: inputs.discounts,
        net_sales: inputs.net_sales,
        tax: inputs.tax,
        tips: inputs.tips,
        tender_cash: inputs.tender_cash,
        tender_card: inputs.tender_card,
        tender_gift: inputs.tender_gift,
        variance,
        status,
    }
}

/// Net sales reported by closed drawer sessions.
///
/// Returns `None` when no closed session reported a figure.
#[must_use]
pub fn reported_net_sales(sessions: &[DrawerSession]) -> Option<Decimal> {
    let reported: Vec<Decimal> = sessions
        .iter()
        .filter(|session| session.closed_at.is_some())
        .filter_map(|session| session.reported_net_sales)
        .collect();
    if reported.is_empty() {
        None
    } else {
        Some(sum_money(reported))
    }
}

/// Cash drawer count against expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerReconciliation {
    pub opening_cash: Decimal,
    pub cash_sales: Decimal,
    /// Opening cash plus cash sales.
    pub expected_closing: Decimal,
    /// Counted cash; absent until the drawer is counted.
    pub actual_closing: Option<Decimal>,
    /// `actual - expected`; negative when the drawer is short, 0 if uncounted.
    pub variance: Decimal,
}

/// Compares counted cash with opening cash plus cash sales.
#[must_use]
pub fn reconcile_drawer(
    opening_cash: Decimal,
    cash_sales: Decimal,
    actual_closing: Option<Decimal>,
) -> DrawerReconciliation {
    let expected_closing: Decimal = opening_cash + cash_sales;
    DrawerReconciliation {
        opening_cash,
        cash_sales,
        expected_closing,
        actual_closing,
        variance: actual_closing.map_or(Decimal::ZERO, |actual| actual - expected_closing),
    }
}

fn cash_sales<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    sum_money(
        transactions
            .into_iter()
            .filter(|t| t.status.is_settled() && t.payment_method == PaymentMethod::Cash)
            .map(|t| t.total - t.effective_refund()),
    )
}

/// Drawer reconciliation for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionVariance {
    pub session_id: String,
    pub location_id: String,
    pub employee_name: String,
    pub drawer: DrawerReconciliation,
}

/// Reconciles every drawer session against the cash sales rung into it.
///
/// Sessions are returned oldest first.
#[must_use]
pub fn drawer_variances(records: &RecordSet) -> Vec<SessionVariance> {
    let mut sessions: Vec<&DrawerSession> = records.drawer_sessions.iter().collect();
    sessions.sort_by(|a, b| a.opened_at.cmp(&b.opened_at));
    sessions
        .into_iter()
        .map(|session| {
            let sales: Decimal = cash_sales(records.transactions.iter().filter(|t| {
                t.drawer_session_id.as_deref() == Some(session.id.as_str())
            }));
            SessionVariance {
                session_id: session.id.clone(),
                location_id: session.location_id.clone(),
                employee_name: records.employee_name(session.employee_id.as_deref()),
                drawer: reconcile_drawer(session.opening_cash, sales, session.closing_cash),
            }
        })
        .collect()
}

/// Summary block of a shift close report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    pub total_sales: Decimal,
    pub cash_sales: Decimal,
    pub card_sales: Decimal,
    pub cash_count: u32,
    pub card_count: u32,
    pub transaction_count: u32,
    pub refund_total: Decimal,
    pub refund_count: u32,
    /// Tax returned on fully refunded transactions.
    pub refund_tax: Decimal,
    pub net_sales: Decimal,
}

/// Tax block of a shift close report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_with_tax: Decimal,
}

/// Shift close (Z) report figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftClose {
    pub summary: ShiftSummary,
    pub cash: DrawerReconciliation,
    pub tax: TaxSummary,
    pub top_items: Vec<ItemSales>,
}

/// Builds the shift close report from period-scoped records.
///
/// Opening and counted cash come from the most recently opened drawer
/// session. With no session the opening float is zero and the drawer is
/// treated as uncounted.
#[must_use]
pub fn shift_close(records: &RecordSet, top_item_limit: usize) -> ShiftClose {
    let mut summary: ShiftSummary = ShiftSummary::default();
    let mut tax: TaxSummary = TaxSummary::default();

    for transaction in &records.transactions {
        if transaction.status.is_settled() {
            summary.total_sales += transaction.total;
            summary.transaction_count += 1;
            if transaction.payment_method == PaymentMethod::Cash {
                summary.cash_sales += transaction.total;
                summary.cash_count += 1;
            } else {
                summary.card_sales += transaction.total;
                summary.card_count += 1;
            }
            tax.subtotal += transaction.discounted_subtotal();
            tax.tax += transaction.tax;
        }
        let refund: Decimal = transaction.effective_refund();
        if !refund.is_zero() {
            summary.refund_total += refund;
            summary.refund_count += 1;
            if transaction.status == TransactionStatus::Refunded {
                summary.refund_tax += transaction.tax;
            }
        }
    }
    summary.net_sales = summary.total_sales - summary.refund_total;
    tax.total_with_tax = tax.subtotal + tax.tax;

    let latest: Option<&DrawerSession> = records
        .drawer_sessions
        .iter()
        .max_by(|a, b| a.opened_at.cmp(&b.opened_at));
    let cash: DrawerReconciliation = reconcile_drawer(
        latest.map_or(Decimal::ZERO, |session| session.opening_cash),
        cash_sales(&records.transactions),
        latest.and_then(|session| session.closing_cash),
    );

    ShiftClose {
        summary,
        cash,
        tax,
        top_items: top_items(records, top_item_limit),
    }
}
