mod month;
mod picker;
mod util;
mod widget;
pub(crate) use self::month::{Direction, OutOfTimeError};
pub(crate) use self::picker::RangePicker;
pub(crate) use self::widget::{Calendar, Hit};
