//! Interactive session loop.
//!
//! # Responsibility
//! - Read one command per line and dispatch it to the app.
//! - Re-render the active screen after every committed store change,
//!   before the next prompt is shown.

use crate::app::{App, Screen};
use anyhow::Result;
use log::warn;
use showtracker_core::{Clock, SearchQuery, StateStorage, TypeFilter, YearMonth};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

const HELP: &str = "\
commands:
  home | search <text> [--type all|movie|tv] | calendar [YYYY-MM] | prev | next
  notifications | track <id> | watch <id> | untrack <id> | unwatch <id>
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Show(Screen),
    PrevMonth,
    NextMonth,
    Track(String),
    Watch(String),
    Untrack(String),
    Unwatch(String),
    Help,
    Quit,
}

/// Runs the loop until `quit` or end of input.
pub fn run<S, C, R, W>(app: &mut App<S, C>, input: R, mut output: W) -> Result<()>
where
    S: StateStorage,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let subscription = app.store_mut().subscribe(move |_| flag.set(true));

    let mut screen = Screen::Home;
    writeln!(output, "{}", app.render(&screen))?;
    prompt(app, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(app, &mut output)?;
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Show(next)) => {
                screen = next;
                writeln!(output, "{}", app.render(&screen))?;
            }
            Ok(Command::PrevMonth) => {
                screen = Screen::Calendar(Some(calendar_month(app, &screen).prev()));
                writeln!(output, "{}", app.render(&screen))?;
            }
            Ok(Command::NextMonth) => {
                screen = Screen::Calendar(Some(calendar_month(app, &screen).next()));
                writeln!(output, "{}", app.render(&screen))?;
            }
            Ok(mutation) => {
                if let Err(err) = apply_mutation(app, mutation) {
                    warn!("event=shell_command module=cli status=error error={}", err);
                    writeln!(output, "error: {err:#}")?;
                }
            }
            Err(message) => writeln!(output, "{message}")?,
        }

        if dirty.replace(false) {
            writeln!(output, "{}", app.render(&screen))?;
        }
        prompt(app, &mut output)?;
    }

    app.store_mut().unsubscribe(subscription);
    Ok(())
}

fn apply_mutation<S: StateStorage, C: Clock>(app: &mut App<S, C>, command: Command) -> Result<()> {
    match command {
        Command::Track(id) => app.track(&id),
        Command::Watch(id) => app.watch(&id),
        Command::Untrack(id) => app.untrack(&id),
        Command::Unwatch(id) => app.unwatch(&id),
        _ => Ok(()),
    }
}

/// Month currently shown, or this month when the calendar is not open.
fn calendar_month<S: StateStorage, C: Clock>(app: &App<S, C>, screen: &Screen) -> YearMonth {
    match screen {
        Screen::Calendar(Some(month)) => *month,
        _ => YearMonth::of(app.store().clock().today()),
    }
}

fn prompt<S: StateStorage, C: Clock, W: Write>(app: &App<S, C>, output: &mut W) -> Result<()> {
    write!(output, "showtracker [alerts:{}]> ", app.alert_count())?;
    output.flush()?;
    Ok(())
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let require_id = |rest: &str| {
        if rest.is_empty() {
            Err(format!("`{verb}` needs a content id"))
        } else {
            Ok(rest.to_string())
        }
    };

    match verb.to_ascii_lowercase().as_str() {
        "home" => Ok(Command::Show(Screen::Home)),
        "search" => parse_search(rest).map(|query| Command::Show(Screen::Search(query))),
        "calendar" if rest.is_empty() => Ok(Command::Show(Screen::Calendar(None))),
        "calendar" => rest
            .parse::<YearMonth>()
            .map(|month| Command::Show(Screen::Calendar(Some(month))))
            .map_err(|err| err.to_string()),
        "prev" => Ok(Command::PrevMonth),
        "next" => Ok(Command::NextMonth),
        "notifications" | "alerts" => Ok(Command::Show(Screen::Notifications)),
        "track" => require_id(rest).map(Command::Track),
        "watch" => require_id(rest).map(Command::Watch),
        "untrack" => require_id(rest).map(Command::Untrack),
        "unwatch" => require_id(rest).map(Command::Unwatch),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

fn parse_search(rest: &str) -> Result<SearchQuery, String> {
    let (text, filter) = match rest.split_once("--type") {
        Some((text, filter)) => (
            text.trim(),
            filter
                .parse::<TypeFilter>()
                .map_err(|err| err.to_string())?,
        ),
        None => (rest, TypeFilter::All),
    };
    Ok(SearchQuery::new(text).with_filter(filter))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, Command};
    use crate::app::{App, Screen};
    use chrono::{FixedOffset, TimeZone, Utc};
    use showtracker_core::{
        FixedClock, MemoryStateStorage, SearchQuery, StaticCatalog, TrackingStore, TypeFilter,
        YearMonth,
    };

    fn app() -> App<MemoryStateStorage, FixedClock> {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let store = TrackingStore::open_with_clock(MemoryStateStorage::new(), FixedClock::new(now));
        App::new(Box::new(StaticCatalog::embedded()), store, 30)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("search bad --type tv").unwrap(),
            Command::Show(Screen::Search(
                SearchQuery::new("bad").with_filter(TypeFilter::Tv)
            ))
        );
        assert_eq!(
            parse_command("calendar 2030-01").unwrap(),
            Command::Show(Screen::Calendar(Some(YearMonth::new(2030, 1).unwrap())))
        );
        assert_eq!(
            parse_command("  TRACK tt0903747 ").unwrap(),
            Command::Track("tt0903747".to_string())
        );
        assert!(parse_command("watch").unwrap_err().contains("needs a content id"));
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn mutation_rerenders_active_screen_before_next_prompt() {
        let mut app = app();
        let input = b"notifications\ntrack tt1475582\ntrack tt1475582\nquit\n";
        let mut output = Vec::new();

        run(&mut app, &input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        // Initial home, notifications screen, one re-render for the committed track.
        assert_eq!(text.matches("== Notifications ==").count(), 2);
        assert_eq!(text.matches("Started tracking Sherlock").count(), 1);
        assert!(text.contains("showtracker [alerts:1]> "));
        assert!(app.store().is_tracking("tt1475582"));
    }

    #[test]
    fn errors_are_reported_inline() {
        let mut app = app();
        let input = b"watch nope\nquit\n";
        let mut output = Vec::new();

        run(&mut app, &input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: unknown content id `nope`"));
    }

    #[test]
    fn prev_and_next_step_through_months() {
        let mut app = app();
        let input = b"calendar 2030-01\nprev\nnext\nnext\nquit\n";
        let mut output = Vec::new();

        run(&mut app, &input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let headers: Vec<&str> = text
            .match_indices("< ")
            .filter_map(|(at, _)| text[at + 2..].split(" >").next())
            .collect();
        assert_eq!(
            headers,
            vec!["January 2030", "December 2029", "January 2030", "February 2030"]
        );
    }

    #[test]
    fn prev_outside_the_calendar_starts_from_the_local_month() {
        let instant = Utc.with_ymd_and_hms(2026, 11, 1, 3, 0, 0).unwrap();
        let clock = FixedClock::new(instant).with_offset(FixedOffset::west_opt(7 * 3600).unwrap());
        let store = TrackingStore::open_with_clock(MemoryStateStorage::new(), clock);
        let mut app = App::new(Box::new(StaticCatalog::embedded()), store, 30);
        let mut output = Vec::new();

        run(&mut app, &b"prev\nquit\n"[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("< September 2026 >"));
    }
}
