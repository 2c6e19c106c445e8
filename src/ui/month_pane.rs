use itertools::Itertools;
use std::fmt::{self, Display};
use termion::{color, style};

use crate::annotation::DayCellFacts;
use crate::clock::Clock;
use crate::grid::DAYS_PER_WEEK;
use crate::store::CalendarStore;

use super::theme::{rgb, Theme};
use super::util::{center, truncate};

pub const CELL_LINES: usize = 3;

pub struct DayCell<'a> {
    facts: &'a DayCellFacts,
    theme: &'a Theme,
    colored: bool,
}

impl<'a> DayCell<'a> {
    pub fn new(facts: &'a DayCellFacts, theme: &'a Theme) -> Self {
        DayCell {
            facts,
            theme,
            colored: false,
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn width(&self) -> usize {
        self.theme.cell_width
    }

    // escape sequence restoring the cell background after an inline color
    fn background(&self) -> String {
        if self.facts.holiday.is_some() {
            color::Bg(rgb(self.theme.holiday_color)).to_string()
        } else {
            color::Bg(color::Reset).to_string()
        }
    }

    fn number_line(&self) -> String {
        let marker = if self.facts.is_today {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };
        let text = format!(
            "{}{:>width$}",
            marker,
            self.facts.day_of_month,
            width = self.width() - 1
        );

        if !self.colored {
            text
        } else if self.facts.is_today {
            format!(
                "{}{}{}",
                color::Fg(rgb(self.theme.today_color)),
                text,
                color::Fg(color::Reset)
            )
        } else if !self.facts.is_in_reference_month {
            format!(
                "{}{}{}",
                color::Fg(rgb(self.theme.outside_color)),
                text,
                color::Fg(color::Reset)
            )
        } else {
            text
        }
    }

    fn holiday_line(&self) -> String {
        match &self.facts.holiday {
            Some(holiday) => center(&truncate(&holiday.occasion, self.width()), self.width()),
            None => " ".repeat(self.width()),
        }
    }

    fn leave_line(&self) -> String {
        let leave = match &self.facts.leave {
            Some(leave) => leave,
            None => return " ".repeat(self.width()),
        };

        let badge = truncate(&format!("({})", leave.count), self.width());
        let padding = " ".repeat(self.width() - badge.chars().count());

        if self.colored {
            format!(
                "{}{}{}{}{}{}",
                color::Bg(rgb(self.theme.leave_color)),
                color::Fg(color::Black),
                badge,
                color::Fg(color::Reset),
                self.background(),
                padding
            )
        } else {
            format!("{}{}", badge, padding)
        }
    }

    pub fn lines(&self) -> [String; CELL_LINES] {
        let lines = [self.number_line(), self.holiday_line(), self.leave_line()];

        if self.colored && self.facts.holiday.is_some() {
            let bg = self.background();
            let reset = color::Bg(color::Reset);
            let [number, holiday, leave] = lines;
            [
                format!("{}{}{}", bg, number, reset),
                format!("{}{}{}", bg, holiday, reset),
                format!("{}{}{}", bg, leave, reset),
            ]
        } else {
            lines
        }
    }
}

/// Text rendering of one annotated month: title, weekday labels and six
/// three-line week rows.
pub struct MonthPane<'a> {
    title: String,
    cells: &'a [DayCellFacts],
    theme: &'a Theme,
    colored: bool,
}

impl<'a> MonthPane<'a> {
    pub const HEADER: &'static [&'static str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    pub fn new(title: String, cells: &'a [DayCellFacts], theme: &'a Theme) -> Self {
        MonthPane {
            title,
            cells,
            theme,
            colored: false,
        }
    }

    pub fn from_store<C: Clock>(store: &'a CalendarStore<C>, theme: &'a Theme) -> Self {
        MonthPane::new(store.title(), store.cells(), theme)
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn width(&self) -> usize {
        DAYS_PER_WEEK * self.theme.cell_width + (DAYS_PER_WEEK - 1)
    }
}

impl Display for MonthPane<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = center(&self.title, self.width());
        if self.colored {
            writeln!(f, "{}{}{}", style::Bold, title.trim_end(), style::Reset)?;
        } else {
            writeln!(f, "{}", title.trim_end())?;
        }

        writeln!(
            f,
            "{}",
            Self::HEADER
                .iter()
                .map(|head| format!("{:>width$}", head, width = self.theme.cell_width))
                .join(" ")
        )?;

        for (idx, week) in self.cells.chunks(DAYS_PER_WEEK).enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }

            let rendered = week
                .iter()
                .map(|facts| DayCell::new(facts, self.theme).colored(self.colored).lines())
                .collect::<Vec<_>>();

            for line in 0..CELL_LINES {
                writeln!(f, "{}", rendered.iter().map(|cell| &cell[line]).join(" "))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Holiday, LeaveRecord, MonthMatch};
    use crate::clock::FixedClock;
    use crate::date::CalendarDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn february() -> CalendarStore<FixedClock> {
        CalendarStore::new(
            date(2024, 2, 1),
            vec![Holiday::new(date(2024, 2, 14), "Valentine's Day")],
            vec![LeaveRecord::new(date(2024, 2, 14), 3)],
            MonthMatch::default(),
            FixedClock(date(2024, 2, 20)),
        )
        .unwrap()
    }

    #[test]
    fn plain_layout() {
        let store = february();
        let theme = Theme::default();
        let out = MonthPane::from_store(&store, &theme).to_string();
        let lines = out.lines().collect::<Vec<_>>();

        // title, weekday header, 6 weeks of 3 lines with 5 separators
        assert_eq!(lines.len(), 2 + 6 * CELL_LINES + 5);
        assert_eq!(lines[0].trim(), "February, 2024");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            MonthPane::HEADER.to_vec()
        );
        assert!(!out.contains('\x1b'));

        // first week: 28 29 30 31 1 2 3
        let first_week = lines[2].split_whitespace().collect::<Vec<_>>();
        assert_eq!(first_week, vec!["28", "29", "30", "31", "1", "2", "3"]);
    }

    #[test]
    fn cell_lines_have_fixed_width() {
        let store = february();
        let theme = Theme::default();

        for facts in store.cells() {
            for line in DayCell::new(facts, &theme).lines().iter() {
                assert_eq!(line.chars().count(), theme.cell_width);
            }
        }
    }

    #[test]
    fn annotated_cell_shows_holiday_and_leave() {
        let store = february();
        let theme = Theme::default();
        let facts = store.cells().iter().find(|c| c.date == date(2024, 2, 14)).unwrap();

        let [number, holiday, leave] = DayCell::new(facts, &theme).lines();
        assert_eq!(number.trim(), "14");
        assert_eq!(holiday.trim(), "Valentine…");
        assert_eq!(leave.trim(), "(3)");
    }

    #[test]
    fn today_carries_marker() {
        let store = february();
        let theme = Theme::default();
        let facts = store.cells().iter().find(|c| c.is_today).unwrap();

        let [number, _, _] = DayCell::new(facts, &theme).lines();
        assert_eq!(number, "*       20");
    }

    #[test]
    fn colored_output_uses_theme_colors() {
        let store = february();
        let theme = Theme::default();
        let out = MonthPane::from_store(&store, &theme).colored(true).to_string();

        assert!(out.contains(&color::Fg(rgb(theme.today_color)).to_string()));
        assert!(out.contains(&color::Bg(rgb(theme.holiday_color)).to_string()));
        assert!(out.contains(&color::Bg(rgb(theme.leave_color)).to_string()));
        assert!(out.contains(&color::Fg(rgb(theme.outside_color)).to_string()));
    }
}
