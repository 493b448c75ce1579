//! In-game calendar.
//!
//! The game clock is a float counting days since the start of a new game;
//! the fraction is the time of day. A new game starts on Sundas, 17th of
//! Last Seed, 4E 201, which puts day zero 228 days into year 201. The
//! calendar has no leap years.

mod names;

pub use names::{Month, Weekday};

use crate::escape::{Escapes, NOT_AVAILABLE};

/// Days from the start of year 201 to the first day of a new game
pub const EPOCH_DAY_OFFSET: i64 = 228;
/// Year of the first day of a new game
pub const FIRST_YEAR: i64 = 201;
pub const DAYS_PER_YEAR: i64 = 365;
/// Weekday of the first day of year 201 (Middas)
const YEAR_START_WEEKDAY: i64 = 3;

/// Cumulative day count at the end of each month
pub const MONTH_END: [u32; 12] = [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// A broken-down game clock value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameDate {
    pub year: i64,
    pub month: Month,
    /// Day of the month, from 1
    pub day: u32,
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Days since the start of year 201
    pub day_index: i64,
    /// The clock value this date was computed from
    pub raw: f32,
}

impl GameDate {
    /// Convert a raw clock value. Returns `None` for negative or non-finite input.
    pub fn from_raw(raw: f32) -> Option<Self> {
        if !raw.is_finite() || raw < 0.0 {
            return None;
        }

        let whole = raw.trunc();
        let mut hms = (raw - whole) * 24.0;
        let hour = hms as u32;
        hms = (hms - hms.trunc()) * 60.0;
        let minute = hms as u32;
        hms = (hms - hms.trunc()) * 60.0;
        let second = hms as u32;

        let day_index = (whole as i64).saturating_add(EPOCH_DAY_OFFSET);
        let year = day_index / DAYS_PER_YEAR + FIRST_YEAR;
        let year_day = (day_index % DAYS_PER_YEAR + 1) as u32;
        let weekday = Weekday::from_index(((day_index % 7 + YEAR_START_WEEKDAY) % 7) as usize)?;
        let (month, day) = month_for_year_day(year_day)?;

        Some(Self {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
            day_index,
            raw,
        })
    }

    /// Year with the era prefix, e.g. `4E201`
    pub fn era_year(&self) -> String {
        format!("4E{}", self.year)
    }

    /// Escape values for this date, longer tokens before their prefixes
    pub fn escapes(&self) -> Escapes {
        let mut escapes = Escapes::new();
        escapes
            .push("%y", self.year.to_string())
            .push("%Y", self.era_year())
            .push("%lm", self.month.name())
            .push("%bm", self.month.birth_sign())
            .push("%am", self.month.argonian_name())
            .push("%mo", self.month.number().to_string())
            .push("%md", self.day.to_string())
            .push("%sd", self.weekday.short_name())
            .push("%ld", self.weekday.name())
            .push("%wd", self.weekday.number().to_string())
            .push("%h", self.hour.to_string())
            .push("%m", self.minute.to_string())
            .push("%s", self.second.to_string())
            .push("%ri", self.day_index.to_string())
            .push("%r", format!("{:.6}", self.raw));
        escapes
    }
}

/// Map a 1-based day of the year to its month and day of month
pub fn month_for_year_day(year_day: u32) -> Option<(Month, u32)> {
    if year_day == 0 {
        return None;
    }
    let index = MONTH_END.partition_point(|&end| end < year_day);
    let month = Month::from_index(index)?;
    let day = match index {
        0 => year_day,
        _ => year_day - MONTH_END[index - 1],
    };
    Some((month, day))
}

/// Render the game clock through a user format.
///
/// A missing clock value replaces the whole output with `(n/a)`.
pub fn format_game_time(format: &str, raw: Option<f32>) -> String {
    match raw.and_then(GameDate::from_raw) {
        Some(date) => date.escapes().apply(format),
        None => NOT_AVAILABLE.to_string(),
    }
}
