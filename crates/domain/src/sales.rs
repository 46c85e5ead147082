// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sales figures derived from transactions.
//!
//! ## Conservation
//!
//! For every rung transaction the gross-to-net breakdown satisfies
//! `gross - refunds - voids - discounts == ledger net`:
//!
//! - gross counts the subtotal of every rung transaction
//! - discounts count the discount of every rung transaction
//! - voids count the discounted subtotal of voided transactions
//! - refunds count the pre-tax refunded amount
//!
//! Tax, tips and tenders only count money that was kept (settled rows).

use crate::money::sum_money;
use crate::records::{
    LineItem, LineItemKind, PaymentMethod, RecordSet, Transaction, TransactionStatus,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Gross-to-net totals and tender breakdown for a set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub gross_sales: Decimal,
    pub refunds: Decimal,
    pub voids: Decimal,
    pub discounts: Decimal,
    /// Sum of per-transaction ledger net.
    pub net_sales: Decimal,
    pub tax: Decimal,
    pub tips: Decimal,
    pub tender_cash: Decimal,
    pub tender_card: Decimal,
    pub tender_gift: Decimal,
    /// Settled transactions.
    pub completed_count: u32,
    pub refund_count: u32,
    pub void_count: u32,
    /// Transactions carrying a discount.
    pub discount_count: u32,
}

impl SalesTotals {
    /// Computes totals over every transaction given.
    #[must_use]
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals: Self = Self::default();
        for transaction in transactions {
            totals.add(transaction);
        }
        totals
    }

    fn add(&mut self, transaction: &Transaction) {
        if !transaction.status.is_rung() {
            return;
        }
        self.gross_sales += transaction.subtotal;
        self.discounts += transaction.discount;
        self.net_sales += transaction.ledger_net();
        if !transaction.discount.is_zero() {
            self.discount_count += 1;
        }

        match transaction.status {
            TransactionStatus::Voided => {
                self.voids += transaction.discounted_subtotal();
                self.void_count += 1;
            }
            TransactionStatus::Refunded | TransactionStatus::PartiallyRefunded => {
                self.refunds += transaction.effective_refund();
                self.refund_count += 1;
            }
            TransactionStatus::Completed | TransactionStatus::Pending => {}
        }

        if transaction.status.is_settled() {
            self.completed_count += 1;
            self.tax += transaction.tax;
            self.tips += transaction.tip;
            let kept: Decimal = transaction.total - transaction.effective_refund();
            match transaction.payment_method {
                PaymentMethod::Cash => self.tender_cash += kept,
                PaymentMethod::Card => self.tender_card += kept,
                PaymentMethod::GiftCard => self.tender_gift += kept,
            }
        }
    }

    /// Net sales per settled transaction, or zero.
    #[must_use]
    pub fn average_ticket(&self) -> Decimal {
        if self.completed_count == 0 {
            Decimal::ZERO
        } else {
            self.net_sales / Decimal::from(self.completed_count)
        }
    }

    /// Sum of all tenders.
    #[must_use]
    pub fn tender_total(&self) -> Decimal {
        self.tender_cash + self.tender_card + self.tender_gift
    }
}

/// Tips earned by one employee, split by tender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTips {
    pub employee_id: Option<String>,
    pub name: String,
    pub cash_tips: Decimal,
    pub card_tips: Decimal,
}

impl EmployeeTips {
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cash_tips + self.card_tips
    }
}

/// Tips on settled transactions grouped by employee, highest total first.
///
/// Gift card tips count as card tips. Unattributed tips are grouped under
/// an `"Unknown"` row.
#[must_use]
pub fn tips_by_employee(records: &RecordSet) -> Vec<EmployeeTips> {
    let mut order: Vec<Option<&str>> = Vec::new();
    let mut by_employee: HashMap<Option<&str>, (Decimal, Decimal)> = HashMap::new();
    for transaction in records
        .transactions
        .iter()
        .filter(|transaction| transaction.status.is_settled())
    {
        let key: Option<&str> = transaction.employee_id.as_deref();
        let entry: &mut (Decimal, Decimal) = by_employee.entry(key).or_insert_with(|| {
            order.push(key);
            (Decimal::ZERO, Decimal::ZERO)
        });
        match transaction.payment_method {
            PaymentMethod::Cash => entry.0 += transaction.tip,
            PaymentMethod::Card | PaymentMethod::GiftCard => entry.1 += transaction.tip,
        }
    }

    let mut rows: Vec<EmployeeTips> = order
        .into_iter()
        .map(|key| {
            let (cash_tips, card_tips) = by_employee.get(&key).copied().unwrap_or_default();
            EmployeeTips {
                employee_id: key.map(str::to_string),
                name: records.employee_name(key),
                cash_tips,
                card_tips,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total().cmp(&a.total()));
    rows
}

/// Units and sales of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSales {
    pub name: String,
    pub quantity: u32,
    pub sales: Decimal,
}

/// Groups line items of settled transactions by a key, highest sales first.
fn group_line_items<F>(records: &RecordSet, limit: Option<usize>, key: F) -> Vec<ItemSales>
where
    F: Fn(&LineItem) -> Option<String>,
{
    let mut rows: Vec<ItemSales> = Vec::new();
    for transaction in records
        .transactions
        .iter()
        .filter(|transaction| transaction.status.is_settled())
    {
        for item in &transaction.line_items {
            let Some(name) = key(item) else {
                continue;
            };
            match rows.iter_mut().find(|row| row.name == name) {
                Some(row) => {
                    row.quantity += item.quantity;
                    row.sales += item.total;
                }
                None => rows.push(ItemSales {
                    name,
                    quantity: item.quantity,
                    sales: item.total,
                }),
            }
        }
    }
    rows.sort_by(|a, b| b.sales.cmp(&a.sales));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Best selling items of any kind. Unnamed items are `"Unknown Item"`.
#[must_use]
pub fn top_items(records: &RecordSet, limit: usize) -> Vec<ItemSales> {
    group_line_items(records, Some(limit), |item| {
        Some(
            item.description
                .clone()
                .unwrap_or_else(|| String::from("Unknown Item")),
        )
    })
}

/// Best selling services.
#[must_use]
pub fn top_services(records: &RecordSet, limit: usize) -> Vec<ItemSales> {
    group_line_items(records, Some(limit), |item| match item.kind {
        LineItemKind::Service => Some(
            item.description
                .clone()
                .unwrap_or_else(|| String::from("Unknown Service")),
        ),
        LineItemKind::Product => None,
    })
}

/// Service sales grouped by category.
#[must_use]
pub fn service_categories(records: &RecordSet) -> Vec<ItemSales> {
    group_line_items(records, None, |item| match item.kind {
        LineItemKind::Service => Some(
            item.category
                .clone()
                .unwrap_or_else(|| String::from("Uncategorized")),
        ),
        LineItemKind::Product => None,
    })
}

/// Spend of one client over the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSpend {
    pub client_id: String,
    pub name: String,
    pub visits: u32,
    pub total_spend: Decimal,
}

/// Clients ranked by settled spend, highest first.
#[must_use]
pub fn vip_customers(records: &RecordSet, limit: usize) -> Vec<ClientSpend> {
    let mut rows: Vec<ClientSpend> = Vec::new();
    for transaction in records
        .transactions
        .iter()
        .filter(|transaction| transaction.status.is_settled())
    {
        let Some(client_id) = transaction.client_id.as_deref() else {
            continue;
        };
        let spend: Decimal = transaction.total - transaction.effective_refund();
        match rows.iter_mut().find(|row| row.client_id == client_id) {
            Some(row) => {
                row.visits += 1;
                row.total_spend += spend;
            }
            None => rows.push(ClientSpend {
                client_id: client_id.to_string(),
                name: records
                    .clients
                    .iter()
                    .find(|client| client.id == client_id)
                    .map_or_else(|| String::from("Unknown"), |client| client.name.clone()),
                visits: 1,
                total_spend: spend,
            }),
        }
    }
    rows.sort_by(|a, b| b.total_spend.cmp(&a.total_spend));
    rows.truncate(limit);
    rows
}

/// Transactions sorted newest first, with the total row count.
///
/// Returns at most `limit` rows together with the number of transactions
/// available before truncation.
#[must_use]
pub fn ledger(records: &RecordSet, limit: usize) -> (Vec<&Transaction>, usize) {
    let mut rows: Vec<&Transaction> = records.transactions.iter().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total: usize = rows.len();
    rows.truncate(limit);
    (rows, total)
}

/// Refunded, voided or discounted transactions, newest first.
#[must_use]
pub fn audit_exceptions(records: &RecordSet) -> Vec<&Transaction> {
    let mut rows: Vec<&Transaction> = records
        .transactions
        .iter()
        .filter(|transaction| {
            matches!(
                transaction.status,
                TransactionStatus::Refunded
                    | TransactionStatus::PartiallyRefunded
                    | TransactionStatus::Voided
            ) || (transaction.status.is_rung() && !transaction.discount.is_zero())
        })
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

/// Tax collected at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTax {
    pub location_id: String,
    pub name: String,
    pub taxable_sales: Decimal,
    pub tax: Decimal,
}

/// Tax collected per location, in the order locations are given.
#[must_use]
pub fn tax_by_location(records: &RecordSet) -> Vec<LocationTax> {
    records
        .locations
        .iter()
        .map(|location| {
            let settled: Vec<&Transaction> = records
                .transactions
                .iter()
                .filter(|t| t.location_id == location.id && t.status.is_settled())
                .collect();
            LocationTax {
                location_id: location.id.clone(),
                name: location.name.clone(),
                taxable_sales: sum_money(settled.iter().map(|t| t.ledger_net())),
                tax: sum_money(settled.iter().map(|t| t.tax)),
            }
        })
        .collect()
}
