// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report body layouts.
//!
//! Each catalog report maps to exactly one layout. A layout turns a
//! scoped dataset into ordered body sections; it never reorders the rows
//! the aggregators produce.

use crate::dataset::ReportDataset;
use crate::error::CoreError;
use crate::sections::{Cell, Section};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use salon_reports_domain::{
    AggregationConfig, Alert, AppointmentCounts, EntityMetric, ItemSales, PerformanceSummary,
    RecordSet, ReportId, ReportTimezone, SalesTotals, ShiftClose, Transaction,
    aggregate_location_performance, aggregate_staff_performance, appointment_sheet,
    audit_exceptions, customer_growth, drawer_variances, exception_alerts, go_live_status,
    hours_by_employee, ledger, no_shows_by_employee, ratio_pct, service_categories, shift_close,
    summarize, tax_by_location, tips_by_employee, top_services, vip_customers,
};

/// The body layout used to build a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLayout {
    BrandSummary,
    LocationLeaderboard,
    Location360,
    ExceptionsAlerts,
    TaxSummary,
    AdjustmentAudit,
    GoLiveStatus,
    LocationComparison,
    SalesSummary,
    TransactionsLedger,
    AppointmentsSummary,
    AppointmentSheet,
    NoShowCancellation,
    CustomerGrowth,
    VipCustomers,
    ServiceCategories,
    TopServices,
    Tips,
    StaffPerformance,
    StylistUtilization,
    TimeclockAttendance,
    ShiftClose,
    DrawerVariance,
    MySales,
}

impl ReportLayout {
    /// Returns the layout for a report.
    #[must_use]
    pub const fn for_report(id: ReportId) -> Self {
        match id {
            ReportId::BrandPerformanceSummary => Self::BrandSummary,
            ReportId::LocationLeaderboard => Self::LocationLeaderboard,
            ReportId::Location360 => Self::Location360,
            ReportId::ExceptionsAlerts => Self::ExceptionsAlerts,
            ReportId::TaxCollectedSummary => Self::TaxSummary,
            ReportId::RefundVoidAudit => Self::AdjustmentAudit,
            ReportId::GoLiveStatus => Self::GoLiveStatus,
            ReportId::LocationComparison => Self::LocationComparison,
            ReportId::SalesSummary | ReportId::DailySalesSummary => Self::SalesSummary,
            ReportId::TransactionsLedger => Self::TransactionsLedger,
            ReportId::AppointmentsSummary => Self::AppointmentsSummary,
            ReportId::DailyAppointments | ReportId::MyAppointments => Self::AppointmentSheet,
            ReportId::NoShowCancellation => Self::NoShowCancellation,
            ReportId::CustomerGrowth => Self::CustomerGrowth,
            ReportId::VipCustomers => Self::VipCustomers,
            ReportId::ServiceCategoryPerformance => Self::ServiceCategories,
            ReportId::TopServices => Self::TopServices,
            ReportId::TipsSummary | ReportId::MyTips => Self::Tips,
            ReportId::StaffPerformance => Self::StaffPerformance,
            ReportId::StylistUtilization => Self::StylistUtilization,
            ReportId::TimeclockAttendance => Self::TimeclockAttendance,
            ReportId::ShiftCloseZReport => Self::ShiftClose,
            ReportId::CashDrawerVariance => Self::DrawerVariance,
            ReportId::MySales => Self::MySales,
        }
    }

    /// Builds the body sections for a dataset.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LayoutPrecondition` when the scope does not suit
    /// the layout, or a domain error if a timestamp cannot be rendered.
    pub fn build(
        self,
        dataset: &ReportDataset,
        config: &AggregationConfig,
    ) -> Result<Vec<Section>, CoreError> {
        let records: &RecordSet = dataset.records();
        let tz: &ReportTimezone = dataset.request().timezone();
        let per_staff_minutes: u64 = config.available_minutes(
            dataset.request().date_from(),
            dataset.request().date_to(),
        );

        let sections: Vec<Section> = match self {
            Self::BrandSummary => {
                let rows: Vec<EntityMetric> = location_rows(records, config, per_staff_minutes);
                vec![
                    performance_summary("Brand Summary", &summarize(&rows)),
                    location_table("Location Performance", &rows),
                ]
            }
            Self::LocationLeaderboard => {
                let rows: Vec<EntityMetric> = location_rows(records, config, per_staff_minutes);
                vec![leaderboard(&rows)]
            }
            Self::Location360 => location_360(dataset, config, per_staff_minutes)?,
            Self::ExceptionsAlerts => vec![alerts_table(&exception_alerts(records, config))],
            Self::TaxSummary => tax_sections(records),
            Self::AdjustmentAudit => adjustment_audit(records, tz)?,
            Self::GoLiveStatus => vec![go_live(records)],
            Self::LocationComparison => {
                let rows: Vec<EntityMetric> = location_rows(records, config, per_staff_minutes);
                vec![location_table("Location Comparison", &rows)]
            }
            Self::SalesSummary => sales_sections(records),
            Self::TransactionsLedger => {
                let mut sections: Vec<Section> = sales_sections(records);
                sections.push(ledger_table(records, tz, config.ledger_row_limit)?);
                sections
            }
            Self::AppointmentsSummary => vec![appointment_summary(
                "Appointments Summary",
                &AppointmentCounts::from_appointments(&records.appointments, config),
            )],
            Self::AppointmentSheet => vec![appointment_sheet_table(records, tz)?],
            Self::NoShowCancellation => no_show_sections(records, config),
            Self::CustomerGrowth => vec![growth(records, dataset)?],
            Self::VipCustomers => vec![vip_table(records, config.vip_limit)],
            Self::ServiceCategories => vec![category_table(&service_categories(records))],
            Self::TopServices => vec![item_table(
                "Top Services",
                "Service",
                &top_services(records, config.top_item_limit),
            )],
            Self::Tips => tips_sections(records),
            Self::StaffPerformance => {
                let rows: Vec<EntityMetric> = staff_rows(dataset, config, per_staff_minutes);
                vec![
                    performance_summary("Team Summary", &summarize(&rows)),
                    staff_table(&rows),
                ]
            }
            Self::StylistUtilization => {
                let rows: Vec<EntityMetric> = staff_rows(dataset, config, per_staff_minutes);
                vec![utilization_table(&rows)]
            }
            Self::TimeclockAttendance => vec![attendance_table(records)],
            Self::ShiftClose => shift_close_sections(&shift_close(records, config.top_item_limit)),
            Self::DrawerVariance => vec![drawer_table(records)],
            Self::MySales => my_sales(records, config),
        };
        Ok(sections)
    }
}

fn location_rows(
    records: &RecordSet,
    config: &AggregationConfig,
    per_staff_minutes: u64,
) -> Vec<EntityMetric> {
    aggregate_location_performance(records, &records.locations, per_staff_minutes, config)
}

fn staff_rows(
    dataset: &ReportDataset,
    config: &AggregationConfig,
    per_staff_minutes: u64,
) -> Vec<EntityMetric> {
    let location_ids: Vec<String> = dataset.scope().location_ids();
    aggregate_staff_performance(dataset.records(), &location_ids, per_staff_minutes, config)
}

fn minutes_to_hours(minutes: u64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

fn share_pct(part: Decimal, whole: Decimal) -> u32 {
    if whole <= Decimal::ZERO {
        return 0;
    }
    let pct: Decimal = (part * Decimal::from(100) / whole)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.to_u32().unwrap_or(0).min(100)
}

fn performance_summary(title: &str, summary: &PerformanceSummary) -> Section {
    Section::metrics(title)
        .metric("Entities", Cell::number(summary.total_entities))
        .metric("Total Revenue", Cell::money(summary.total_revenue))
        .metric("Average Utilization", Cell::percent(summary.avg_utilization))
        .metric("Total No-Shows", Cell::count(summary.total_no_shows))
}

fn location_table(title: &str, rows: &[EntityMetric]) -> Section {
    Section::table(
        title,
        &[
            "Location",
            "Revenue",
            "Transactions",
            "Avg Ticket",
            "Booked",
            "Completed",
            "No-Show Rate",
            "Utilization",
            "Unique Customers",
        ],
    )
    .with_rows(rows.iter().map(|row| {
        vec![
            Cell::text(row.name.clone()),
            Cell::money(row.revenue),
            Cell::count(row.transactions),
            Cell::money(row.average_ticket()),
            Cell::count(row.appointments_booked),
            Cell::count(row.appointments_completed),
            Cell::percent(row.no_show_rate()),
            Cell::percent(row.utilization_pct),
            Cell::count(row.unique_customers),
        ]
    }))
}

fn leaderboard(rows: &[EntityMetric]) -> Section {
    Section::table(
        "Location Leaderboard",
        &["Rank", "Location", "Revenue", "Avg Ticket", "Utilization", "No-Show Rate"],
    )
    .with_rows(rows.iter().enumerate().map(|(index, row)| {
        vec![
            Cell::number(index + 1),
            Cell::text(row.name.clone()),
            Cell::money(row.revenue),
            Cell::money(row.average_ticket()),
            Cell::percent(row.utilization_pct),
            Cell::percent(row.no_show_rate()),
        ]
    }))
}

fn location_360(
    dataset: &ReportDataset,
    config: &AggregationConfig,
    per_staff_minutes: u64,
) -> Result<Vec<Section>, CoreError> {
    let records: &RecordSet = dataset.records();
    let [location] = records.locations.as_slice() else {
        return Err(CoreError::LayoutPrecondition {
            report: ReportId::Location360,
            message: String::from("Location 360 requires exactly one location"),
        });
    };

    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    let counts: AppointmentCounts =
        AppointmentCounts::from_appointments(&records.appointments, config);
    let metrics: Vec<EntityMetric> = aggregate_location_performance(
        records,
        std::slice::from_ref(location),
        per_staff_minutes,
        config,
    );
    let utilization: u32 = metrics.first().map_or(0, |row| row.utilization_pct);
    let open_shifts: usize = records
        .time_entries
        .iter()
        .filter(|entry| entry.clock_out.is_none())
        .count();
    let worked: i64 = hours_by_employee(records)
        .iter()
        .map(|row| row.minutes_worked)
        .sum();

    let mut sections: Vec<Section> = vec![
        Section::metrics(format!("Location: {}", location.name))
            .metric(
                "Franchisee",
                Cell::text(location.franchisee_id.as_deref().unwrap_or("N/A")),
            )
            .metric("Status", Cell::text(location.status.as_str())),
        Section::metrics("Sales Overview")
            .metric("Gross Sales", Cell::money(totals.gross_sales))
            .metric("Net Sales", Cell::money(totals.net_sales))
            .metric("Transactions", Cell::count(totals.completed_count))
            .metric("Average Ticket", Cell::money(totals.average_ticket()))
            .metric("Tips Collected", Cell::money(totals.tips))
            .metric("Tax Collected", Cell::money(totals.tax)),
        appointment_summary("Appointments", &counts)
            .metric("Utilization", Cell::percent(utilization)),
        Section::metrics("Staff Hours")
            .metric("Time Entries", Cell::number(records.time_entries.len()))
            .metric("Active Shifts", Cell::number(open_shifts))
            .metric(
                "Hours Worked",
                Cell::hours(Decimal::from(worked) / Decimal::from(60)),
            ),
    ];

    let alerts: Vec<Alert> = exception_alerts(records, config);
    if !alerts.is_empty() {
        sections.push(alerts_table(&alerts));
    }
    Ok(sections)
}

fn alerts_table(alerts: &[Alert]) -> Section {
    let section: Section = Section::table("Exceptions", &["Location", "Alert", "Detail"])
        .with_rows(alerts.iter().map(|alert| {
            vec![
                Cell::text(alert.location_name.clone()),
                Cell::text(alert.kind.as_str()),
                Cell::text(alert.detail.clone()),
            ]
        }));
    if alerts.is_empty() {
        section.with_note("No exceptions in period.")
    } else {
        section
    }
}

fn tax_sections(records: &RecordSet) -> Vec<Section> {
    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    let taxable: Decimal = totals.net_sales;
    vec![
        Section::metrics("Tax Summary")
            .metric("Taxable Sales", Cell::money(taxable))
            .metric("Tax Collected", Cell::money(totals.tax))
            .metric("Total with Tax", Cell::money(taxable + totals.tax)),
        Section::table("Tax by Location", &["Location", "Taxable Sales", "Tax Collected"])
            .with_rows(tax_by_location(records).into_iter().map(|row| {
                vec![
                    Cell::text(row.name),
                    Cell::money(row.taxable_sales),
                    Cell::money(row.tax),
                ]
            })),
    ]
}

fn adjustment_audit(records: &RecordSet, tz: &ReportTimezone) -> Result<Vec<Section>, CoreError> {
    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    let summary: Section = Section::metrics("Adjustment Summary")
        .metric(format!("Refunds ({})", totals.refund_count), Cell::money(totals.refunds))
        .metric(format!("Voids ({})", totals.void_count), Cell::money(totals.voids))
        .metric(
            format!("Discounts ({})", totals.discount_count),
            Cell::money(totals.discounts),
        );

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for transaction in audit_exceptions(records) {
        rows.push(vec![
            Cell::text(tz.render(transaction.created_at)?),
            Cell::text(transaction.id.clone()),
            Cell::text(transaction.status.as_str()),
            Cell::money(transaction.subtotal),
            Cell::money(transaction.discount),
            Cell::money(transaction.effective_refund()),
            Cell::text(records.employee_name(transaction.employee_id.as_deref())),
        ]);
    }
    let detail: Section = Section::table(
        "Adjustments",
        &[
            "Date/Time",
            "Transaction",
            "Status",
            "Subtotal",
            "Discount",
            "Refunded",
            "Employee",
        ],
    )
    .with_rows(rows);
    Ok(vec![summary, detail])
}

fn go_live(records: &RecordSet) -> Section {
    Section::table(
        "Go-Live Status",
        &["Location", "Status", "Go-Live Date", "Trading"],
    )
    .with_rows(go_live_status(records).into_iter().map(|row| {
        vec![
            Cell::text(row.name),
            Cell::text(row.status),
            row.go_live_date
                .map_or(Cell::Empty, |date| Cell::text(date.to_string())),
            Cell::text(if row.trading { "Yes" } else { "No" }),
        ]
    }))
}

fn sales_sections(records: &RecordSet) -> Vec<Section> {
    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    vec![
        Section::metrics("Sales Summary")
            .metric("Gross Sales", Cell::money(totals.gross_sales))
            .metric(format!("Refunds ({})", totals.refund_count), Cell::money(totals.refunds))
            .metric(format!("Voids ({})", totals.void_count), Cell::money(totals.voids))
            .metric("Discounts", Cell::money(totals.discounts))
            .metric("Net Sales", Cell::money(totals.net_sales))
            .metric("Tax Collected", Cell::money(totals.tax))
            .metric("Tips Collected", Cell::money(totals.tips))
            .metric("Transactions", Cell::count(totals.completed_count))
            .metric("Average Ticket", Cell::money(totals.average_ticket())),
        Section::metrics("Tender Breakdown")
            .metric("Cash", Cell::money(totals.tender_cash))
            .metric("Card", Cell::money(totals.tender_card))
            .metric("Gift Card", Cell::money(totals.tender_gift))
            .metric("Total", Cell::money(totals.tender_total())),
    ]
}

fn ledger_row(
    records: &RecordSet,
    tz: &ReportTimezone,
    transaction: &Transaction,
) -> Result<Vec<Cell>, CoreError> {
    Ok(vec![
        Cell::text(tz.render(transaction.created_at)?),
        Cell::money(transaction.total),
        Cell::money(transaction.tax),
        Cell::money(transaction.tip),
        Cell::text(transaction.payment_method.as_str()),
        Cell::text(transaction.status.as_str()),
        Cell::text(
            transaction
                .employee_id
                .as_deref()
                .and_then(|id| records.employee(id))
                .map_or_else(|| String::from("-"), |employee| employee.name.clone()),
        ),
    ])
}

fn ledger_table(
    records: &RecordSet,
    tz: &ReportTimezone,
    limit: usize,
) -> Result<Section, CoreError> {
    let (rows, total) = ledger(records, limit);
    let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());
    for transaction in &rows {
        cells.push(ledger_row(records, tz, transaction)?);
    }
    let section: Section = Section::table(
        "Transaction Details",
        &["Date/Time", "Amount", "Tax", "Tip", "Payment", "Status", "Employee"],
    )
    .with_rows(cells);
    if total > rows.len() {
        Ok(section.with_note(format!(
            "Showing first {} of {total} transactions.",
            rows.len()
        )))
    } else {
        Ok(section)
    }
}

fn appointment_summary(title: &str, counts: &AppointmentCounts) -> Section {
    Section::metrics(title)
        .metric("Total Booked", Cell::count(counts.booked))
        .metric("Completed", Cell::count(counts.completed))
        .metric("No-Shows", Cell::count(counts.no_shows))
        .metric("Cancelled", Cell::count(counts.cancelled))
        .metric("Open", Cell::count(counts.open))
        .metric("No-Show Rate", Cell::percent(counts.no_show_rate()))
        .metric("Cancellation Rate", Cell::percent(counts.cancellation_rate()))
        .metric("Booked Hours", Cell::hours(minutes_to_hours(counts.booked_minutes)))
}

fn appointment_sheet_table(records: &RecordSet, tz: &ReportTimezone) -> Result<Section, CoreError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for appointment in appointment_sheet(records) {
        let client: String = appointment
            .client_id
            .as_deref()
            .and_then(|id| records.clients.iter().find(|client| client.id == id))
            .map_or_else(|| String::from("Walk-in"), |client| client.name.clone());
        rows.push(vec![
            Cell::text(tz.render(appointment.start_time)?),
            Cell::text(client),
            appointment
                .service_name
                .clone()
                .map_or(Cell::Empty, Cell::Text),
            Cell::text(records.employee_name(appointment.employee_id.as_deref())),
            appointment.duration_minutes.map_or(Cell::Empty, Cell::count),
            Cell::text(appointment.status.as_str()),
        ]);
    }
    let section: Section = Section::table(
        "Appointment Sheet",
        &["Time", "Client", "Service", "Stylist", "Minutes", "Status"],
    )
    .with_rows(rows);
    if section.rows.is_empty() {
        Ok(section.with_note("No appointments in period."))
    } else {
        Ok(section)
    }
}

fn no_show_sections(records: &RecordSet, config: &AggregationConfig) -> Vec<Section> {
    let counts: AppointmentCounts =
        AppointmentCounts::from_appointments(&records.appointments, config);
    vec![
        Section::metrics("No-Show & Cancellation Summary")
            .metric("Total Appointments", Cell::count(counts.total))
            .metric("No-Shows", Cell::count(counts.no_shows))
            .metric("Cancellations", Cell::count(counts.cancelled))
            .metric("No-Show Rate", Cell::percent(counts.no_show_rate()))
            .metric("Cancellation Rate", Cell::percent(counts.cancellation_rate())),
        Section::table(
            "By Stylist",
            &["Stylist", "Booked", "No-Shows", "Cancellations", "No-Show Rate"],
        )
        .with_rows(no_shows_by_employee(records, config).into_iter().map(|row| {
            vec![
                Cell::text(row.name),
                Cell::count(row.counts.booked),
                Cell::count(row.counts.no_shows),
                Cell::count(row.counts.cancelled),
                Cell::percent(row.counts.no_show_rate()),
            ]
        })),
    ]
}

fn growth(records: &RecordSet, dataset: &ReportDataset) -> Result<Section, CoreError> {
    let growth = customer_growth(records, dataset.request())?;
    Ok(Section::metrics("Customer Growth")
        .metric("Clients on File", Cell::count(growth.total_clients))
        .metric("New Clients", Cell::count(growth.new_clients))
        .metric("Active Clients", Cell::count(growth.active_clients))
        .metric("Returning Clients", Cell::count(growth.returning_clients))
        .metric(
            "Retention Rate",
            Cell::percent(
                u32::try_from(ratio_pct(
                    u64::from(growth.returning_clients),
                    u64::from(growth.active_clients),
                ))
                .unwrap_or(100),
            ),
        ))
}

fn vip_table(records: &RecordSet, limit: usize) -> Section {
    Section::table("VIP Customers", &["Rank", "Client", "Visits", "Total Spend"]).with_rows(
        vip_customers(records, limit)
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                vec![
                    Cell::number(index + 1),
                    Cell::text(row.name),
                    Cell::count(row.visits),
                    Cell::money(row.total_spend),
                ]
            }),
    )
}

fn category_table(rows: &[ItemSales]) -> Section {
    let total: Decimal = rows.iter().map(|row| row.sales).sum();
    Section::table(
        "Service Category Performance",
        &["Category", "Services Sold", "Sales", "Share of Sales"],
    )
    .with_rows(rows.iter().map(|row| {
        vec![
            Cell::text(row.name.clone()),
            Cell::count(row.quantity),
            Cell::money(row.sales),
            Cell::percent(share_pct(row.sales, total)),
        ]
    }))
}

fn item_table(title: &str, label: &str, rows: &[ItemSales]) -> Section {
    Section::table(title, &["Rank", label, "Qty", "Sales"]).with_rows(
        rows.iter().enumerate().map(|(index, row)| {
            vec![
                Cell::number(index + 1),
                Cell::text(row.name.clone()),
                Cell::count(row.quantity),
                Cell::money(row.sales),
            ]
        }),
    )
}

fn tips_sections(records: &RecordSet) -> Vec<Section> {
    let rows = tips_by_employee(records);
    let cash: Decimal = rows.iter().map(|row| row.cash_tips).sum();
    let card: Decimal = rows.iter().map(|row| row.card_tips).sum();
    vec![
        Section::table("Tips Summary", &["Type", "Amount"])
            .metric("Cash Tips", Cell::money(cash))
            .metric("Card Tips", Cell::money(card))
            .metric("Total Tips", Cell::money(cash + card)),
        Section::table(
            "Tips by Employee",
            &["Employee", "Cash Tips", "Card Tips", "Total"],
        )
        .with_rows(rows.iter().map(|row| {
            vec![
                Cell::text(row.name.clone()),
                Cell::money(row.cash_tips),
                Cell::money(row.card_tips),
                Cell::money(row.total()),
            ]
        })),
    ]
}

fn staff_table(rows: &[EntityMetric]) -> Section {
    Section::table(
        "Staff Performance",
        &[
            "Employee",
            "Revenue",
            "Transactions",
            "Avg Ticket",
            "Tips",
            "Booked",
            "Completed",
            "No-Show Rate",
            "Utilization",
            "Unique Customers",
        ],
    )
    .with_rows(rows.iter().map(|row| {
        vec![
            Cell::text(row.name.clone()),
            Cell::money(row.revenue),
            Cell::count(row.transactions),
            Cell::money(row.average_ticket()),
            Cell::money(row.tips),
            Cell::count(row.appointments_booked),
            Cell::count(row.appointments_completed),
            Cell::percent(row.no_show_rate()),
            Cell::percent(row.utilization_pct),
            Cell::count(row.unique_customers),
        ]
    }))
}

fn utilization_table(rows: &[EntityMetric]) -> Section {
    Section::table(
        "Stylist Utilization",
        &["Stylist", "Booked Hours", "Available Hours", "Utilization"],
    )
    .with_rows(rows.iter().map(|row| {
        vec![
            Cell::text(row.name.clone()),
            Cell::hours(minutes_to_hours(row.booked_minutes)),
            Cell::hours(minutes_to_hours(row.available_minutes)),
            Cell::percent(row.utilization_pct),
        ]
    }))
}

fn attendance_table(records: &RecordSet) -> Section {
    Section::table(
        "Time Clock & Attendance",
        &["Employee", "Shifts", "Open Shifts", "Hours"],
    )
    .with_rows(hours_by_employee(records).into_iter().map(|row| {
        vec![
            Cell::text(row.name.clone()),
            Cell::count(row.shifts),
            Cell::count(row.open_shifts),
            Cell::hours(row.hours()),
        ]
    }))
}

fn shift_close_sections(report: &ShiftClose) -> Vec<Section> {
    vec![
        Section::metrics("Summary")
            .metric("Total Sales", Cell::money(report.summary.total_sales))
            .metric(
                format!("Cash Sales ({})", report.summary.cash_count),
                Cell::money(report.summary.cash_sales),
            )
            .metric(
                format!("Card Sales ({})", report.summary.card_count),
                Cell::money(report.summary.card_sales),
            )
            .metric("Transactions", Cell::count(report.summary.transaction_count))
            .metric(
                format!("Refunds ({})", report.summary.refund_count),
                Cell::money(report.summary.refund_total),
            )
            .metric("Refunded Tax", Cell::money(report.summary.refund_tax))
            .metric("Net Sales", Cell::money(report.summary.net_sales)),
        Section::metrics("Cash Reconciliation")
            .metric("Opening Cash", Cell::money(report.cash.opening_cash))
            .metric("Cash Sales", Cell::money(report.cash.cash_sales))
            .metric("Expected Closing", Cell::money(report.cash.expected_closing))
            .metric(
                "Actual Closing",
                report.cash.actual_closing.map_or(Cell::Empty, Cell::money),
            )
            .metric("Variance", Cell::money(report.cash.variance)),
        Section::metrics("Tax Summary")
            .metric("Subtotal", Cell::money(report.tax.subtotal))
            .metric("Tax Collected", Cell::money(report.tax.tax))
            .metric("Total with Tax", Cell::money(report.tax.total_with_tax)),
        item_table("Top Selling Items", "Item", &report.top_items),
    ]
}

fn drawer_table(records: &RecordSet) -> Section {
    Section::table(
        "Cash Drawer Variance",
        &[
            "Session",
            "Opened By",
            "Opening",
            "Cash Sales",
            "Expected",
            "Counted",
            "Variance",
        ],
    )
    .with_rows(
        drawer_variances(records)
            .into_iter()
            .map(|row| {
                vec![
                    Cell::text(row.session_id),
                    Cell::text(row.employee_name),
                    Cell::money(row.drawer.opening_cash),
                    Cell::money(row.drawer.cash_sales),
                    Cell::money(row.drawer.expected_closing),
                    row.drawer.actual_closing.map_or(Cell::Empty, Cell::money),
                    Cell::money(row.drawer.variance),
                ]
            }),
    )
}

fn my_sales(records: &RecordSet, config: &AggregationConfig) -> Vec<Section> {
    let totals: SalesTotals = SalesTotals::from_transactions(&records.transactions);
    vec![
        Section::metrics("My Sales")
            .metric("Transactions", Cell::count(totals.completed_count))
            .metric("Net Sales", Cell::money(totals.net_sales))
            .metric("Average Ticket", Cell::money(totals.average_ticket()))
            .metric("Tips", Cell::money(totals.tips)),
        item_table(
            "My Services",
            "Service",
            &top_services(records, config.top_item_limit),
        ),
    ]
}
