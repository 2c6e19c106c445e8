use chrono::{DateTime, Datelike, Days, Month, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A day in the proleptic Gregorian calendar.
///
/// Only the `(year, month, day)` triple is significant. Values built from
/// date-times keep the wall-clock date in the date-time's own zone and
/// discard the time of day, so two instants on the same local day compare
/// equal and hash to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn month_name(&self) -> &'static str {
        Month::from_u32(self.0.month())
            .map(|m| m.name())
            .unwrap_or("")
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn first_of_month(&self) -> Self {
        CalendarDate(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(CalendarDate)
    }

    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(CalendarDate)
    }

    pub fn succ(self) -> Result<Self> {
        self.0.succ_opt().map(CalendarDate).ok_or_else(|| {
            Error::new(
                ErrorKind::DateOverflow,
                &format!("no day after {}", self),
            )
        })
    }

    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        CalendarDate(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(datetime: DateTime<Tz>) -> Self {
        CalendarDate(datetime.date_naive())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Ok(date.into());
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Ok(datetime.into());
        }

        NaiveDateTime::parse_from_str(s, NAIVE_DATETIME_FORMAT)
            .map(CalendarDate::from)
            .map_err(|e| Error::from(e).with_msg(&format!("'{}' is not a calendar date", s)))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
