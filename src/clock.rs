use chrono::Local;

use crate::date::CalendarDate;

/// Source of the current calendar day used for "today" highlighting.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
