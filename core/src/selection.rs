// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Weekday};

/// Which calendar view is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    /// The event list of the active day.
    #[default]
    SingleDay,

    /// The month grid around the active day.
    MonthGrid,
}

/// The day the user is looking at, plus the expand/collapse state of the
/// month grid. Pure view state, nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelection {
    current: Date,
    view: CalendarView,
}

impl DaySelection {
    /// Starts in the single-day view on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            current: today,
            view: CalendarView::SingleDay,
        }
    }

    pub fn current(&self) -> Date {
        self.current
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn is_expanded(&self) -> bool {
        self.view == CalendarView::MonthGrid
    }

    pub fn go_to_previous_day(&mut self) -> Date {
        match self.current.yesterday() {
            Ok(day) => self.current = day,
            Err(err) => tracing::warn!(current = %self.current, %err, "cannot go before the first day"),
        }
        self.current
    }

    pub fn go_to_next_day(&mut self) -> Date {
        match self.current.tomorrow() {
            Ok(day) => self.current = day,
            Err(err) => tracing::warn!(current = %self.current, %err, "cannot go past the last day"),
        }
        self.current
    }

    /// Selects a day directly, closing the month grid.
    pub fn jump_to(&mut self, day: Date) {
        self.current = day;
        self.view = CalendarView::SingleDay;
    }

    pub fn toggle_expanded(&mut self) -> CalendarView {
        self.view = match self.view {
            CalendarView::SingleDay => CalendarView::MonthGrid,
            CalendarView::MonthGrid => CalendarView::SingleDay,
        };
        self.view
    }

    /// The month of the active day laid out as weeks starting on Sunday.
    ///
    /// Cells outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<Date>; 7]> {
        let first = self.current.first_of_month();
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = weekday_column(first.weekday());
        for day in 1..=first.days_in_month() {
            week[col] = Some(first.with().day(day).build().unwrap_or(first));
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col != 0 {
            weeks.push(week);
        }
        weeks
    }
}

fn weekday_column(weekday: Weekday) -> usize {
    weekday.to_sunday_zero_offset() as usize
}
