use super::month::ViewedMonth;
use super::picker::RangePicker;
use super::util::DAYS_IN_WEEK;
use crate::stay::StayPeriod;
use crate::theme::{
    stay_style, BASE_STYLE, BUTTON_STYLE, CURSOR_STYLE, MONTH_STYLE, WEEKDAY_STYLE,
};
use ratatui::{prelude::*, widgets::*};
use time::{format_description::FormatItem, macros::format_description};

static WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

static CHECK_IN_LABEL: &str = "체크인";

static CHECK_OUT_LABEL: &str = "체크아웃";

static PREVIOUS_BUTTON: &str = "[-]";

static NEXT_BUTTON: &str = "[+]";

static MONTH_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]");

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

/// Number of columns taken up by a day number and its padding or brackets
const DAY_TEXT_WIDTH: u16 = 4;

/// Width of the calendar in columns
const MAIN_WIDTH: u16 = DAY_WIDTH * DAYS_IN_WEEK;

/// Line on which the month and the navigation buttons are drawn
const NAV_LINE: u16 = 0;

const BUTTON_WIDTH: u16 = 3;

const PREVIOUS_COL: u16 = 9;

const MONTH_COL: u16 = 14;

const NEXT_COL: u16 = 23;

const HEADER_LINE: u16 = 2;

/// First line of the day grid
const GRID_TOP: u16 = HEADER_LINE + 2;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 2;

const MAX_WEEKS: u16 = 6;

/// Line on which the check-in date is drawn, followed by the check-out date.
/// This does not depend on how many weeks the month spans so that the
/// summary doesn't jump around while paging through months.
const SUMMARY_LINE: u16 = GRID_TOP + MAX_WEEKS * WEEK_LINES;

const ACS_HLINE: char = '─';

/// A part of the calendar that reacts to clicks
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Hit {
    Previous,
    Next,
    Day(u8),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarLayout {
    area: Rect,
}

impl CalendarLayout {
    fn new(area: Rect) -> CalendarLayout {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        CalendarLayout {
            area: Rect {
                x: area.x + left,
                y: area.y,
                width: MAIN_WIDTH.min(area.width),
                height: area.height,
            },
        }
    }

    pub(super) fn hit(&self, position: Position, viewed: &ViewedMonth) -> Option<Hit> {
        if !self.area.contains(position) {
            return None;
        }
        let x = position.x - self.area.x;
        let y = position.y - self.area.y;
        if y == NAV_LINE {
            if (PREVIOUS_COL..PREVIOUS_COL + BUTTON_WIDTH).contains(&x) {
                Some(Hit::Previous)
            } else if (NEXT_COL..NEXT_COL + BUTTON_WIDTH).contains(&x) {
                Some(Hit::Next)
            } else {
                None
            }
        } else {
            let row = y.checked_sub(GRID_TOP)?;
            if row % WEEK_LINES != 0 || x % DAY_WIDTH >= DAY_TEXT_WIDTH {
                return None;
            }
            viewed.day_at(row / WEEK_LINES, x / DAY_WIDTH).map(Hit::Day)
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Calendar;

impl StatefulWidget for Calendar {
    type State = RangePicker;

    /*
     *          [-]  2024-05  [+]
     *
     *  일   월   화   수   목   금   토
     * ───────────────────────────────────
     *                 [ 1]   2    3    4
     *
     *    5    6    7    8    9   10   11
     *  ...
     *
     *        체크인 : 2024-05-01
     *       체크아웃 : 2024-05-02
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = CalendarLayout::new(area);
        state.layout = Some(layout);
        let viewed = state.viewed();
        let mut canvas = BufferCanvas::new(layout.area, buf);
        canvas.draw_navigation(&viewed);
        canvas.draw_header();
        for day in viewed.days() {
            let Some(status) = state.classify(day) else {
                continue;
            };
            let mut style = stay_style(status);
            if day == viewed.anchor().day() {
                style = style.patch(CURSOR_STYLE);
            }
            let is_today = viewed.date_of(day) == Some(state.today);
            let (row, column) = viewed.cell_of(day);
            canvas.draw_day(row, column, day, is_today, style);
        }
        canvas.draw_summary(&state.period());
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_navigation(&mut self, viewed: &ViewedMonth) {
        self.mvprint(NAV_LINE, PREVIOUS_COL, PREVIOUS_BUTTON, Some(BUTTON_STYLE));
        self.mvprint(
            NAV_LINE,
            MONTH_COL,
            // A date always has a year and a month, so this cannot fail
            viewed.anchor().format(&MONTH_FMT).unwrap_or_default(),
            Some(MONTH_STYLE),
        );
        self.mvprint(NAV_LINE, NEXT_COL, NEXT_BUTTON, Some(BUTTON_STYLE));
    }

    fn draw_header(&mut self) {
        for (i, label) in std::iter::zip(0u16.., WEEKDAY_LABELS) {
            // Labels are two columns wide, so they sit over the digits of
            // " dd "
            self.mvprint(HEADER_LINE, DAY_WIDTH * i + 1, label, Some(WEEKDAY_STYLE));
        }
        self.hline(HEADER_LINE + 1, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, row: u16, column: u16, day: u8, is_today: bool, style: Style) {
        let s = if is_today {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        };
        self.mvprint(
            GRID_TOP + row * WEEK_LINES,
            DAY_WIDTH * column,
            s,
            Some(style),
        );
    }

    fn draw_summary(&mut self, period: &StayPeriod) {
        self.center_print(
            SUMMARY_LINE,
            format!("{CHECK_IN_LABEL} : {}", period.check_in()),
            Some(BASE_STYLE),
        );
        self.center_print(
            SUMMARY_LINE + 1,
            format!("{CHECK_OUT_LABEL} : {}", period.check_out()),
            Some(BASE_STYLE),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn center_print<S: AsRef<str>>(&mut self, y: u16, s: S, style: Option<Style>) {
        let width = u16::try_from(Line::raw(s.as_ref()).width()).unwrap_or(u16::MAX);
        self.mvprint(y, MAIN_WIDTH.saturating_sub(width) / 2, s, style);
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Direction;
    use time::{macros::date, Date, Month};

    fn may_2024() -> ViewedMonth {
        ViewedMonth::new(date!(2024 - 05 - 17))
    }

    #[test]
    fn test_layout_centers() {
        let layout = CalendarLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.area, Rect::new(22, 0, 35, 24));
        let layout = CalendarLayout::new(Rect::new(0, 0, 20, 24));
        assert_eq!(layout.area, Rect::new(0, 0, 20, 24));
    }

    #[test]
    fn test_hit_buttons() {
        let layout = CalendarLayout::new(Rect::new(0, 0, 80, 24));
        let vm = may_2024();
        assert_eq!(layout.hit(Position::new(30, 0), &vm), None);
        assert_eq!(layout.hit(Position::new(31, 0), &vm), Some(Hit::Previous));
        assert_eq!(layout.hit(Position::new(33, 0), &vm), Some(Hit::Previous));
        assert_eq!(layout.hit(Position::new(34, 0), &vm), None);
        assert_eq!(layout.hit(Position::new(40, 0), &vm), None);
        assert_eq!(layout.hit(Position::new(45, 0), &vm), Some(Hit::Next));
        assert_eq!(layout.hit(Position::new(47, 0), &vm), Some(Hit::Next));
        assert_eq!(layout.hit(Position::new(48, 0), &vm), None);
    }

    #[test]
    fn test_hit_days() {
        let layout = CalendarLayout::new(Rect::new(0, 0, 80, 24));
        let vm = may_2024();
        // Blank cell before May 1st
        assert_eq!(layout.hit(Position::new(22, 4), &vm), None);
        assert_eq!(layout.hit(Position::new(37, 4), &vm), Some(Hit::Day(1)));
        assert_eq!(layout.hit(Position::new(40, 4), &vm), Some(Hit::Day(1)));
        // Gap between days
        assert_eq!(layout.hit(Position::new(41, 4), &vm), None);
        // Spacer line between weeks
        assert_eq!(layout.hit(Position::new(47, 5), &vm), None);
        assert_eq!(layout.hit(Position::new(47, 6), &vm), Some(Hit::Day(10)));
        assert_eq!(layout.hit(Position::new(47, 12), &vm), Some(Hit::Day(31)));
        assert_eq!(layout.hit(Position::new(52, 12), &vm), None);
        // Header
        assert_eq!(layout.hit(Position::new(23, 2), &vm), None);
        // Outside the calendar
        assert_eq!(layout.hit(Position::new(10, 6), &vm), None);
        assert_eq!(layout.hit(Position::new(70, 6), &vm), None);
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    #[test]
    fn test_render() {
        let mut picker = RangePicker::new(date!(2024 - 05 - 10)).unwrap();
        assert!(picker.click_day(15));
        let area = Rect::new(0, 0, 35, 18);
        let mut buf = Buffer::empty(area);
        Calendar.render(area, &mut buf, &mut picker);
        assert_eq!(row_text(&buf, 0), "         [-]  2024-05  [+]");
        assert_eq!(row_text(&buf, 1), "");
        assert_eq!(row_text(&buf, 3), "─".repeat(35));
        assert_eq!(row_text(&buf, 4), format!("{}1    2    3    4", " ".repeat(17)));
        assert_eq!(row_text(&buf, 5), "");
        assert_eq!(row_text(&buf, 6), "  5    6    7    8    9  [10]  11");
        assert_eq!(row_text(&buf, 8), " 12   13   14   15   16   17   18");
        assert_eq!(row_text(&buf, 10), " 19   20   21   22   23   24   25");
        assert_eq!(row_text(&buf, 12), " 26   27   28   29   30   31");
        assert_eq!(row_text(&buf, 14), "");
        // Day 10 is at column 5 of the second week
        assert_eq!(buf[(26, 6)].fg, Color::Red);
        assert_eq!(buf[(26, 6)].bg, Color::Black);
        // Days 11 through 14
        assert_eq!(buf[(31, 6)].fg, Color::LightMagenta);
        assert_eq!(buf[(1, 8)].fg, Color::LightMagenta);
        assert_eq!(buf[(11, 8)].fg, Color::LightMagenta);
        // Day 15, also the cursor
        assert_eq!(buf[(16, 8)].fg, Color::Red);
        assert_eq!(buf[(16, 8)].bg, Color::DarkGray);
        // Days 9 and 16
        assert_eq!(buf[(21, 6)].fg, Color::White);
        assert_eq!(buf[(21, 8)].fg, Color::White);
        assert!(row_text(&buf, 16).ends_with("2024-05-10"));
        assert!(row_text(&buf, 17).ends_with("2024-05-15"));
    }

    #[test]
    fn test_render_negative_year() {
        let today = Date::from_calendar_date(-44, Month::March, 15).unwrap();
        let mut picker = RangePicker::new(today).unwrap();
        let area = Rect::new(0, 0, 35, 18);
        let mut buf = Buffer::empty(area);
        Calendar.render(area, &mut buf, &mut picker);
        assert_eq!(row_text(&buf, 0), "         [-]  -0044-03 [+]");
        assert!(row_text(&buf, 16).ends_with("-0044-03-15"));
        assert!(row_text(&buf, 17).ends_with("-0044-03-16"));
    }

    #[test]
    fn test_render_today_elsewhere() {
        let mut picker = RangePicker::new(date!(2024 - 05 - 01)).unwrap();
        picker.move_month(Direction::Next).unwrap();
        let area = Rect::new(0, 0, 35, 18);
        let mut buf = Buffer::empty(area);
        Calendar.render(area, &mut buf, &mut picker);
        assert_eq!(row_text(&buf, 0), "         [-]  2024-06  [+]");
        assert_eq!(row_text(&buf, 4), format!("{}1", " ".repeat(32)));
        assert_eq!(row_text(&buf, 14), " 30");
        // Today is not in view
        assert!(!(1..18).any(|y| row_text(&buf, y).contains('[')));
        assert!(row_text(&buf, 16).ends_with("2024-05-01"));
        assert!(row_text(&buf, 17).ends_with("2024-05-02"));
    }

    #[test]
    fn test_render_small_area() {
        let mut picker = RangePicker::new(date!(2024 - 05 - 01)).unwrap();
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        Calendar.render(area, &mut buf, &mut picker);
        assert_eq!(row_text(&buf, 0), "         [-]");
    }
}
