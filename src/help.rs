use crate::theme::{CHECK_IN_OUT_STYLE, CURSOR_STYLE, STAYING_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static KEYS: &[(&str, &str)] = &[
    ("h, LEFT", "Move cursor back one day"),
    ("l, RIGHT", "Move cursor ahead one day"),
    ("k, UP", "Move cursor back one week"),
    ("j, DOWN", "Move cursor ahead one week"),
    ("SPACE, ENTER", "Select day under cursor"),
    ("-, PAGE UP", "Show previous month"),
    ("+, PAGE DOWN", "Show next month"),
    ("0, HOME", "Jump to today"),
    ("g", "Input month to jump to"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

const KEY_COLUMN_WIDTH: usize = 16;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text(self) -> Text<'static> {
        let mut lines = KEYS
            .iter()
            .map(|&(key, desc)| Line::raw(format!("{key:KEY_COLUMN_WIDTH$}{desc}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        for (sample, style, desc) in [
            (" 10 ", CHECK_IN_OUT_STYLE, "Check-in or check-out"),
            (" 11 ", STAYING_STYLE, "Staying"),
            (" 12 ", self.0.patch(CURSOR_STYLE), "Cursor"),
        ] {
            lines.push(Line::from_iter([
                Span::styled(sample, style),
                Span::raw(" ".repeat(KEY_COLUMN_WIDTH - sample.len())),
                Span::raw(desc),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::raw("Click a day to set check-in or check-out."));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
