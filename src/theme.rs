use crate::stay::StayStatus;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const CHECK_IN_OUT_STYLE: Style = BASE_STYLE.fg(Color::Red).add_modifier(Modifier::BOLD);

pub(crate) const STAYING_STYLE: Style = BASE_STYLE.fg(Color::LightMagenta);

/// Patched over a day's style when the cursor is on it
pub(crate) const CURSOR_STYLE: Style = Style::new().bg(Color::DarkGray);

pub(crate) const BUTTON_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) fn stay_style(status: StayStatus) -> Style {
    match status {
        StayStatus::CheckInOut => CHECK_IN_OUT_STYLE,
        StayStatus::Staying => STAYING_STYLE,
        StayStatus::NotStaying => BASE_STYLE,
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
