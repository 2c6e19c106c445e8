pub mod month_pane;
pub mod theme;
mod util;

pub use month_pane::{DayCell, MonthPane};
pub use theme::Theme;
