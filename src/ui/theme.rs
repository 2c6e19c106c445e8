use serde::Deserialize;
use termion::color::Rgb;

use crate::error::{Error, ErrorKind, Result};

pub(crate) const MIN_CELL_WIDTH: usize = 4;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub today_color: u32,
    pub holiday_color: u32,
    pub leave_color: u32,
    pub outside_color: u32,
    pub today_char: Option<char>,
    pub cell_width: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_color: 0x5C8AFF,
            holiday_color: 0xEFFFEE,
            leave_color: 0xE7E8EA,
            outside_color: 0x8E8E93,
            today_char: Some('*'),
            cell_width: 10,
        }
    }
}

impl Theme {
    pub fn validate(&self) -> Result<()> {
        if self.cell_width < MIN_CELL_WIDTH {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                &format!(
                    "theme.cell_width must be at least {}, got {}",
                    MIN_CELL_WIDTH, self.cell_width
                ),
            ));
        }

        for (name, value) in [
            ("today_color", self.today_color),
            ("holiday_color", self.holiday_color),
            ("leave_color", self.leave_color),
            ("outside_color", self.outside_color),
        ]
        .iter()
        {
            if *value > 0xFF_FF_FF {
                return Err(Error::new(
                    ErrorKind::ConfigParse,
                    &format!("theme.{} is not a 0xRRGGBB color: {:#X}", name, value),
                ));
            }
        }

        Ok(())
    }
}

/// Splits `0xRRGGBB` into a terminal true-color value.
pub fn rgb(hex: u32) -> Rgb {
    Rgb(
        ((hex & 0xFF_00_00) >> 16) as u8,
        ((hex & 0x00_FF_00) >> 8) as u8,
        (hex & 0x00_00_FF) as u8,
    )
}
