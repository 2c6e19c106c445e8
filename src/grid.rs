use chrono::{Month, Months, NaiveDate};
use std::ops::Index;
use std::slice;

use crate::date::CalendarDate;
use crate::error::{Error, ErrorKind, Result};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS: usize = 6;
pub const WINDOW_LEN: usize = WEEKS * DAYS_PER_WEEK;

pub fn days_of_month(month: &Month, year: i32) -> Result<u32> {
    let overflow = || {
        Error::new(
            ErrorKind::DateOverflow,
            &format!("cannot resolve {} {}", month.name(), year),
        )
    };

    let first =
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).ok_or_else(overflow)?;
    let next = first.checked_add_months(Months::new(1)).ok_or_else(overflow)?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Number of cells before the 1st that belong to the previous month.
///
/// `number_from_sunday` counts Sunday as 1, so shifting by six modulo seven
/// yields the distance back to the preceding Sunday: 0 for a Sunday, 6 for a
/// Saturday.
pub fn leading_days(first_of_month: &CalendarDate) -> u64 {
    ((first_of_month.weekday().number_from_sunday() + 6) % 7) as u64
}

/// The 42 consecutive days shown for a reference month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayWindow {
    reference: CalendarDate,
    days: Vec<CalendarDate>,
}

/// Generates the display window around the month of `reference`.
///
/// Fails with [`ErrorKind::DateOverflow`] if any of the 42 days cannot be
/// represented. No partial window is returned.
pub fn build(reference: CalendarDate) -> Result<DisplayWindow> {
    let first = reference.first_of_month();
    let leading = leading_days(&first);

    let start = first.checked_sub_days(leading).ok_or_else(|| {
        Error::new(
            ErrorKind::DateOverflow,
            &format!("window for {} starts before the first representable day", reference),
        )
    })?;

    let days = (0..WINDOW_LEN as u64)
        .map(|offset| {
            start.checked_add_days(offset).ok_or_else(|| {
                Error::new(
                    ErrorKind::DateOverflow,
                    &format!("window for {} ends after the last representable day", reference),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Built display window {}..={} for {} ({} leading days)",
        days[0],
        days[WINDOW_LEN - 1],
        reference,
        leading
    );

    Ok(DisplayWindow { reference, days })
}

impl DisplayWindow {
    pub fn reference(&self) -> CalendarDate {
        self.reference
    }

    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn first(&self) -> CalendarDate {
        self.days[0]
    }

    pub fn last(&self) -> CalendarDate {
        self.days[WINDOW_LEN - 1]
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.first() <= *date && *date <= self.last()
    }

    pub fn leading_days(&self) -> usize {
        leading_days(&self.reference.first_of_month()) as usize
    }

    pub fn iter(&self) -> slice::Iter<'_, CalendarDate> {
        self.days.iter()
    }

    /// Header label, e.g. "February, 2024".
    pub fn title(&self) -> String {
        format!("{}, {}", self.reference.month_name(), self.reference.year())
    }
}

impl Index<usize> for DisplayWindow {
    type Output = CalendarDate;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.days[idx]
    }
}
