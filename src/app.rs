use crate::calendar::{Calendar, Direction, Hit, RangePicker};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::stay::StayPeriod;
use crate::theme::BASE_STYLE;
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: RangePicker,
    state: AppState,
}

impl App {
    pub(crate) fn new(picker: RangePicker) -> App {
        App {
            picker,
            state: AppState::Calendar,
        }
    }

    /// Run the event loop until the user quits, then return the selected stay
    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<StayPeriod> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker.period())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let event = read()?;
        if let Event::Mouse(mouse) = event {
            if !self.handle_mouse(mouse) {
                self.beep()?;
            }
        } else if let Some(KeyEvent {
            code, modifiers, ..
        }) = event.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.picker.click_cursor();
                    true
                }
                KeyCode::Char('-') | KeyCode::PageUp => self.move_month(Direction::Previous),
                KeyCode::Char('+') | KeyCode::PageDown => self.move_month(Direction::Next),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.picker.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c @ '0'..='9') => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(year, month) => {
                            if self.picker.jump_to(year, month).is_ok() {
                                self.state = AppState::Calendar;
                                true
                            } else {
                                false
                            }
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    // Returns `false` if the event asked for something impossible, like
    // paging past the end of time
    fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if self.state != AppState::Calendar {
            return true;
        }
        let position = Position::new(event.column, event.row);
        match (event.kind, self.picker.hit(position)) {
            (MouseEventKind::Down(MouseButton::Left), Some(Hit::Previous))
            | (MouseEventKind::ScrollUp, _) => self.move_month(Direction::Previous),
            (MouseEventKind::Down(MouseButton::Left), Some(Hit::Next))
            | (MouseEventKind::ScrollDown, _) => self.move_month(Direction::Next),
            (MouseEventKind::Down(MouseButton::Left), Some(Hit::Day(day))) => {
                self.picker.click_day(day)
            }
            (MouseEventKind::Moved, Some(Hit::Day(day))) => {
                self.picker.point_at(day);
                true
            }
            _ => true,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn move_cursor(&mut self, days: i64) -> bool {
        self.picker.move_cursor(days).is_ok()
    }

    fn move_month(&mut self, direction: Direction) -> bool {
        self.picker.move_month(direction).is_ok()
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        Calendar.render(area, buf, &mut self.picker);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
