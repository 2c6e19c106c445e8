pub mod annotation;
pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod store;
pub mod ui;

pub use annotation::{DayAnnotator, DayCellFacts, Holiday, LeaveRecord, MonthMatch};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use error::{Error, ErrorKind, Result};
pub use grid::{build, DisplayWindow};
pub use store::{CalendarStore, StoreEvent};
