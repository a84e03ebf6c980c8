use super::month::{Direction, OutOfTimeError, ViewedMonth};
use super::widget::{CalendarLayout, Hit};
use crate::stay::{StayPeriod, StayStatus};
use ratatui::layout::Position;
use time::{Date, Month};

/// State of the calendar: the month being viewed and the selected stay
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RangePicker {
    pub(super) today: Date,
    viewed: ViewedMonth,
    period: StayPeriod,
    // Where the calendar was last drawn, for mapping mouse positions to
    // days.  `None` until the first render.
    pub(super) layout: Option<CalendarLayout>,
}

impl RangePicker {
    /// Start out viewing the month containing `today` with a one-night stay
    /// checking in on `today`
    pub(crate) fn new(today: Date) -> Result<RangePicker, OutOfTimeError> {
        let period = StayPeriod::starting(today)?;
        log::info!("Starting with today = {today}, stay = {period}");
        Ok(RangePicker {
            today,
            viewed: ViewedMonth::new(today),
            period,
            layout: None,
        })
    }

    pub(crate) fn viewed(&self) -> ViewedMonth {
        self.viewed
    }

    pub(crate) fn period(&self) -> StayPeriod {
        self.period
    }

    pub(crate) fn move_month(&mut self, direction: Direction) -> Result<(), OutOfTimeError> {
        self.viewed = self.viewed.shift(direction).inspect_err(|e| {
            log::warn!("Cannot move {direction:?} from {}: {e}", self.viewed.anchor());
        })?;
        log::debug!("Now viewing {}-{}", self.viewed.year(), self.viewed.month());
        Ok(())
    }

    pub(crate) fn jump_to(&mut self, year: i32, month: Month) -> Result<(), OutOfTimeError> {
        self.viewed = self.viewed.jump_to(year, month)?;
        log::debug!("Jumped to {year}-{month}");
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.viewed = ViewedMonth::new(self.today);
    }

    pub(crate) fn move_cursor(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        self.viewed = self.viewed.move_cursor(days)?;
        Ok(())
    }

    /// Put the cursor on the given day of the viewed month.  Returns `false`
    /// if there is no such day.
    pub(crate) fn point_at(&mut self, day: u8) -> bool {
        match self.viewed.date_of(day) {
            Some(date) => {
                self.viewed = ViewedMonth::new(date);
                true
            }
            None => false,
        }
    }

    /// Click the given day of the viewed month, updating the stay and moving
    /// the cursor to the day.  Returns `false` if there is no such day.
    pub(crate) fn click_day(&mut self, day: u8) -> bool {
        let Some(date) = self.viewed.date_of(day) else {
            return false;
        };
        self.period.click(date);
        self.viewed = ViewedMonth::new(date);
        log::info!("Clicked {date}; stay is now {}", self.period);
        true
    }

    pub(crate) fn click_cursor(&mut self) {
        let date = self.viewed.anchor();
        self.period.click(date);
        log::info!("Selected {date}; stay is now {}", self.period);
    }

    /// Classify the given day of the viewed month against the stay
    pub(crate) fn classify(&self, day: u8) -> Option<StayStatus> {
        self.viewed.date_of(day).map(|date| self.period.classify(date))
    }

    /// Find what part of the calendar, as last drawn, is at the given
    /// terminal position
    pub(crate) fn hit(&self, position: Position) -> Option<Hit> {
        self.layout?.hit(position, &self.viewed)
    }
}
