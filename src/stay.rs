use crate::calendar::OutOfTimeError;
use std::fmt;
use time::Date;

/// How a single date relates to the selected stay
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum StayStatus {
    /// The date is the check-in or the check-out date
    CheckInOut,
    /// The date falls strictly between check-in and check-out
    Staying,
    NotStaying,
}

/// The selected check-in/check-out range.  Both ends are inclusive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct StayPeriod {
    check_in: Date,
    check_out: Date,
}

impl StayPeriod {
    /// Construct a period from two dates in either order.  An inverted pair
    /// is swapped so that check-in is never after check-out.
    pub(crate) fn new(a: Date, b: Date) -> StayPeriod {
        if b < a {
            StayPeriod {
                check_in: b,
                check_out: a,
            }
        } else {
            StayPeriod {
                check_in: a,
                check_out: b,
            }
        }
    }

    /// A one-night stay checking in on `today`
    pub(crate) fn starting(today: Date) -> Result<StayPeriod, OutOfTimeError> {
        let tomorrow = today.next_day().ok_or(OutOfTimeError)?;
        Ok(StayPeriod::new(today, tomorrow))
    }

    pub(crate) fn check_in(&self) -> Date {
        self.check_in
    }

    pub(crate) fn check_out(&self) -> Date {
        self.check_out
    }

    /// Apply a click on `date`.
    ///
    /// Clicking before check-in, or on the current check-out, starts a new
    /// stay that checks in and out on `date`.  Any other click moves the
    /// check-out to `date`.
    pub(crate) fn click(&mut self, date: Date) {
        if date < self.check_in || date == self.check_out {
            self.check_in = date;
            self.check_out = date;
        } else {
            self.check_out = date;
        }
    }

    pub(crate) fn classify(&self, date: Date) -> StayStatus {
        if date == self.check_in || date == self.check_out {
            StayStatus::CheckInOut
        } else if (self.check_in..=self.check_out).contains(&date) {
            StayStatus::Staying
        } else {
            StayStatus::NotStaying
        }
    }
}

impl fmt::Display for StayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.check_in, self.check_out)
    }
}
