use super::util::{WeekdayExt, DAYS_IN_WEEK};
use std::ops::RangeInclusive;
use thiserror::Error;
use time::{
    Date, Duration,
    Month::{self, December, January},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Previous,
    Next,
}

/// The month shown in the calendar, represented by an anchor date within it.
///
/// Only the year and month of the anchor decide what is displayed; its day
/// of month is the cursor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ViewedMonth(Date);

impl ViewedMonth {
    pub(crate) fn new(anchor: Date) -> ViewedMonth {
        ViewedMonth(anchor)
    }

    pub(crate) fn anchor(&self) -> Date {
        self.0
    }

    pub(crate) fn year(&self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.0.month()
    }

    pub(crate) fn length(&self) -> u8 {
        self.month().length(self.year())
    }

    /// Number of empty cells before day 1, i.e., the weekday index of the
    /// first of the month counting from Sunday = 0
    pub(crate) fn blank_days(&self) -> u16 {
        let offset = u16::from(self.0.day() - 1) % DAYS_IN_WEEK;
        (self.0.weekday().index0() + DAYS_IN_WEEK - offset) % DAYS_IN_WEEK
    }

    /// The day numbers of the month in order
    pub(crate) fn days(&self) -> RangeInclusive<u8> {
        1..=self.length()
    }

    /// Returns the (row, column) of `day` in the grid, where column 0 is
    /// Sunday
    pub(crate) fn cell_of(&self, day: u8) -> (u16, u16) {
        let i = self.blank_days() + u16::from(day.saturating_sub(1));
        (i / DAYS_IN_WEEK, i % DAYS_IN_WEEK)
    }

    /// Inverse of `cell_of()`.  Returns `None` for blank cells and cells
    /// after the end of the month.
    pub(crate) fn day_at(&self, row: u16, column: u16) -> Option<u8> {
        if column >= DAYS_IN_WEEK {
            return None;
        }
        let i = row
            .checked_mul(DAYS_IN_WEEK)?
            .checked_add(column)?
            .checked_sub(self.blank_days())?;
        let day = u8::try_from(i + 1).ok()?;
        (day <= self.length()).then_some(day)
    }

    /// Resolve a day number to a date in this month
    pub(crate) fn date_of(&self, day: u8) -> Option<Date> {
        self.0.replace_day(day).ok()
    }

    /// Move one month in the given direction, keeping the cursor's day of
    /// month if possible and otherwise clamping it to the end of the month
    pub(crate) fn shift(self, direction: Direction) -> Result<ViewedMonth, OutOfTimeError> {
        let (year, month) = match (direction, self.month()) {
            (Direction::Previous, January) => {
                (self.year().checked_sub(1).ok_or(OutOfTimeError)?, December)
            }
            (Direction::Previous, m) => (self.year(), m.previous()),
            (Direction::Next, December) => {
                (self.year().checked_add(1).ok_or(OutOfTimeError)?, January)
            }
            (Direction::Next, m) => (self.year(), m.next()),
        };
        self.jump_to(year, month)
    }

    /// Move to the given month, clamping the cursor's day of month
    pub(crate) fn jump_to(self, year: i32, month: Month) -> Result<ViewedMonth, OutOfTimeError> {
        let day = self.0.day().min(month.length(year));
        Date::from_calendar_date(year, month, day)
            .map(ViewedMonth)
            .map_err(|_| OutOfTimeError)
    }

    /// Move the cursor by `days` days, switching months if the cursor leaves
    /// this one
    pub(crate) fn move_cursor(self, days: i64) -> Result<ViewedMonth, OutOfTimeError> {
        self.0
            .checked_add(Duration::days(days))
            .map(ViewedMonth)
            .ok_or(OutOfTimeError)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
