mod app;
mod calendar;
mod help;
mod jumpto;
mod logging;
mod stay;
mod theme;
use crate::app::App;
use crate::calendar::RangePicker;
use crate::stay::StayPeriod;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        today: Option<Date>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut today = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if today.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => today = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { today, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { today, log_file } => {
                if let Some(path) = log_file {
                    logging::init_file_logger(&path)?;
                }
                let today = match today {
                    Some(d) => d,
                    None => OffsetDateTime::now_local()
                        .context("failed to determine local date")?
                        .date(),
                };
                let picker = RangePicker::new(today).context("cannot start a stay on that date")?;
                let period = with_terminal(|terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(picker)
                        .run(terminal)
                        .context("error running calendar")
                })?;
                log::info!("Final stay: {period}");
                println!("{period}");
                Ok(())
            }
            Command::Help => {
                println!("Usage: stayrange [-l <LOGFILE>] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar for picking a check-in/check-out date range");
                println!();
                println!("The date, if given, is used in place of today's date.  On exit, the");
                println!("selected check-in and check-out dates are printed.");
                println!();
                println!("Options:");
                println!("  -l, --log-file <PATH>");
                println!("                    Write logs to the given file; the log level is");
                println!("                    read from ${}", logging::LOG_ENV_VAR);
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F>(func: F) -> anyhow::Result<StayPeriod>
where
    F: FnOnce(&mut DefaultTerminal) -> anyhow::Result<StayPeriod>,
{
    let mut terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| func(&mut terminal));
    // Restore the terminal even if enabling mouse capture failed partway
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    r
}
