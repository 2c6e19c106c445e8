use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::date::CalendarDate;
use crate::grid::DisplayWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: CalendarDate,
    pub occasion: String,
}

impl Holiday {
    pub fn new<D: Into<CalendarDate>>(date: D, occasion: &str) -> Self {
        Holiday {
            date: date.into(),
            occasion: occasion.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub date: CalendarDate,
    pub count: u32,
}

impl LeaveRecord {
    pub fn new<D: Into<CalendarDate>>(date: D, count: u32) -> Self {
        LeaveRecord {
            date: date.into(),
            count,
        }
    }
}

/// Anything pinned to a single calendar day.
pub trait Annotation {
    fn date(&self) -> CalendarDate;
}

impl Annotation for Holiday {
    fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Annotation for LeaveRecord {
    fn date(&self) -> CalendarDate {
        self.date
    }
}

/// Day-keyed lookup over a caller-owned annotation list.
///
/// Later entries sharing a day with an earlier one are shadowed, which gives
/// the same result as scanning the list and stopping at the first match.
pub struct AnnotationIndex<'a, T> {
    by_date: HashMap<CalendarDate, &'a T>,
}

impl<'a, T: Annotation> AnnotationIndex<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let mut by_date = HashMap::with_capacity(items.len());
        for item in items {
            let date = item.date();
            if by_date.contains_key(&date) {
                log::debug!("Ignoring duplicate annotation on {}", date);
                continue;
            }
            by_date.insert(date, item);
        }

        AnnotationIndex { by_date }
    }

    pub fn get(&self, date: &CalendarDate) -> Option<&'a T> {
        self.by_date.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// How a cell decides whether it belongs to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthMatch {
    /// Compare month numbers only, ignoring the year.
    MonthOnly,
    /// Compare the (year, month) pair.
    YearAndMonth,
}

impl Default for MonthMatch {
    fn default() -> Self {
        MonthMatch::YearAndMonth
    }
}

impl MonthMatch {
    pub fn matches(&self, date: &CalendarDate, reference: &CalendarDate) -> bool {
        match self {
            MonthMatch::MonthOnly => date.month() == reference.month(),
            MonthMatch::YearAndMonth => date.same_month(reference),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCellFacts {
    pub date: CalendarDate,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_in_reference_month: bool,
    pub holiday: Option<Holiday>,
    pub leave: Option<LeaveRecord>,
}

impl DayCellFacts {
    pub fn is_annotated(&self) -> bool {
        self.holiday.is_some() || self.leave.is_some()
    }
}

pub struct DayAnnotator<'a> {
    holidays: AnnotationIndex<'a, Holiday>,
    leaves: AnnotationIndex<'a, LeaveRecord>,
    today: CalendarDate,
    month_match: MonthMatch,
}

impl<'a> DayAnnotator<'a> {
    pub fn new(
        holidays: &'a [Holiday],
        leaves: &'a [LeaveRecord],
        today: CalendarDate,
        month_match: MonthMatch,
    ) -> Self {
        DayAnnotator {
            holidays: AnnotationIndex::new(holidays),
            leaves: AnnotationIndex::new(leaves),
            today,
            month_match,
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn annotate<D: Into<CalendarDate>>(
        &self,
        date: D,
        reference: CalendarDate,
    ) -> DayCellFacts {
        let date = date.into();

        DayCellFacts {
            date,
            day_of_month: date.day(),
            is_today: date == self.today,
            is_in_reference_month: self.month_match.matches(&date, &reference),
            holiday: self.holidays.get(&date).cloned(),
            leave: self.leaves.get(&date).copied(),
        }
    }

    /// Facts for every day of `window`, in display order.
    pub fn annotate_window(&self, window: &DisplayWindow) -> Vec<DayCellFacts> {
        window
            .iter()
            .map(|&date| self.annotate(date, window.reference()))
            .collect()
    }
}
