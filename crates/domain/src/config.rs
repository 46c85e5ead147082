// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Role;
use time::{Date, Weekday};

/// Tunables for metric aggregation.
///
/// Available minutes are an estimate built from these values, not from
/// actual staff schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Working hours assumed per open day.
    pub working_hours_per_day: u32,
    /// Minutes per working hour.
    pub minutes_per_hour: u32,
    /// Days of the week the salon is open.
    pub open_weekdays: Vec<Weekday>,
    /// Duration assumed for appointments without one.
    pub default_appointment_minutes: u32,
    /// Employee roles that count as bookable staff.
    pub staff_roles: Vec<Role>,
    /// No-show rate, in percent, above which a location is flagged.
    pub high_no_show_pct: u32,
    /// Number of rows in top-item tables.
    pub top_item_limit: usize,
    /// Number of rows shown in transaction ledgers.
    pub ledger_row_limit: usize,
    /// Number of rows in the VIP customer table.
    pub vip_limit: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            working_hours_per_day: 8,
            minutes_per_hour: 60,
            open_weekdays: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Saturday,
            ],
            default_appointment_minutes: 60,
            staff_roles: vec![Role::Employee, Role::Manager],
            high_no_show_pct: 15,
            top_item_limit: 10,
            ledger_row_limit: 100,
            vip_limit: 25,
        }
    }
}

impl AggregationConfig {
    /// Returns whether employees with `role` count as bookable staff.
    #[must_use]
    pub fn is_staff_role(&self, role: Role) -> bool {
        self.staff_roles.contains(&role)
    }

    /// Counts open days in `date_from..=date_to`.
    #[must_use]
    pub fn working_days(&self, date_from: Date, date_to: Date) -> u64 {
        let mut count: u64 = 0;
        let mut day: Date = date_from;
        while day <= date_to {
            if self.open_weekdays.contains(&day.weekday()) {
                count += 1;
            }
            match day.next_day() {
                Some(next) => day = next,
                None => break,
            }
        }
        count
    }

    /// Estimated minutes one staff member is available over the period.
    #[must_use]
    pub fn available_minutes(&self, date_from: Date, date_to: Date) -> u64 {
        u64::from(self.working_hours_per_day)
            * u64::from(self.minutes_per_hour)
            * self.working_days(date_from, date_to)
    }
}
