//! Year view of the attendance calendar and per-student yearly tallies.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::model::attendance::Status;
use crate::model::holiday::Holiday;

/// Days the institution is closed: every Sunday plus the configured holidays.
#[derive(Debug, Clone, Default)]
pub struct HolidayMap {
    dates: HashSet<NaiveDate>,
}

impl HolidayMap {
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self {
            dates: holidays.iter().map(|h| h.date).collect(),
        }
    }

    pub fn is_listed(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sun || self.is_listed(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_holiday: bool,
    pub is_today: bool,
    /// Holidays cannot be picked for marking.
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: u32,
    pub name: &'static str,
    /// Empty cells before the 1st in a Monday-first week.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

impl YearCalendar {
    pub fn build(year: i32, holidays: &HolidayMap, today: NaiveDate) -> Self {
        let months = (1..=12)
            .filter_map(|month| {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let name = Month::try_from(month as u8).ok()?.name();
                let days = first
                    .iter_days()
                    .take_while(|d| d.month() == month)
                    .map(|date| {
                        let is_holiday = holidays.is_holiday(date);
                        DayCell {
                            date,
                            is_holiday,
                            is_today: date == today,
                            selectable: !is_holiday,
                        }
                    })
                    .collect();

                Some(MonthGrid {
                    month,
                    name,
                    leading_blanks: first.weekday().num_days_from_monday(),
                    days,
                })
            })
            .collect();

        Self { year, months }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        self.months
            .get(date.month0() as usize)?
            .days
            .get(date.day0() as usize)
    }
}

/// Day counts for one student over a calendar year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearSummary {
    pub present: u32,
    pub absent: u32,
    pub leave: u32,
    pub holiday: u32,
}

impl YearSummary {
    /// Present days as a percentage of working days.
    pub fn attendance_rate(&self) -> f64 {
        let working = self.present + self.absent + self.leave;
        if working == 0 {
            return 0.0;
        }
        f64::from(self.present) / f64::from(working) * 100.0
    }
}

/// Sundays always count as holidays, even if a mark exists; other unmarked
/// days count as present.
pub fn year_summary(year: i32, marks: &HashMap<NaiveDate, Status>) -> YearSummary {
    let mut summary = YearSummary::default();
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return summary;
    };

    for date in first.iter_days().take_while(|d| d.year() == year) {
        if date.weekday() == Weekday::Sun {
            summary.holiday += 1;
            continue;
        }
        match marks.get(&date).copied().unwrap_or(Status::Present) {
            Status::Present => summary.present += 1,
            Status::Absent => summary.absent += 1,
            Status::Leave => summary.leave += 1,
        }
    }
    summary
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;
