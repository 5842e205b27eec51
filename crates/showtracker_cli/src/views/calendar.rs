//! Monthly calendar screen.

use showtracker_core::{CalendarMonth, ContentItem, WEEKDAY_HEADERS};
use std::fmt;

const CELL_WIDTH: usize = 6;
const TITLES_PER_DAY: usize = 2;

pub struct CalendarView<'a> {
    pub grid: &'a CalendarMonth<'a>,
    pub schedule: &'a [&'a ContentItem],
}

impl fmt::Display for CalendarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid;
        writeln!(
            f,
            "< {} >   (prev: {}, next: {})",
            grid.month.title(),
            grid.month.prev(),
            grid.month.next()
        )?;

        for header in WEEKDAY_HEADERS {
            write!(f, "{header:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;

        let mut column = grid.leading_blanks as usize;
        write!(f, "{:width$}", "", width = column * CELL_WIDTH)?;
        for day in &grid.days {
            let marker = match (day.is_today, day.items.is_empty()) {
                (true, _) => '*',
                (false, false) => '•',
                (false, true) => ' ',
            };
            let label = format!("{}{}", day.date.format("%-d"), marker);
            write!(f, "{label:>CELL_WIDTH$}")?;
            column += 1;
            if column == 7 {
                writeln!(f)?;
                column = 0;
            }
        }
        if column != 0 {
            writeln!(f)?;
        }

        let release_days: Vec<_> = grid.days.iter().filter(|day| !day.items.is_empty()).collect();
        if !release_days.is_empty() {
            writeln!(f, "\nReleases this month:")?;
        }
        for day in release_days {
            let shown: Vec<&str> = day
                .items
                .iter()
                .take(TITLES_PER_DAY)
                .map(|item| item.title.as_str())
                .collect();
            write!(f, "  {}: {}", day.date.format("%b %-d"), shown.join(", "))?;
            if day.items.len() > TITLES_PER_DAY {
                write!(f, " +{} more", day.items.len() - TITLES_PER_DAY)?;
            }
            writeln!(f)?;
        }

        if self.schedule.is_empty() {
            return writeln!(f, "\nStart tracking shows to see release dates");
        }

        writeln!(f, "\n== Release Schedule ==")?;
        for item in self.schedule {
            let date = item
                .release_day()
                .map(|day| day.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| "Unknown date".to_string());
            writeln!(f, "  {date:<14} {} [{}]", item.title, item.kind.label())?;
        }
        Ok(())
    }
}

pub fn render_calendar(grid: &CalendarMonth<'_>, schedule: &[&ContentItem]) -> String {
    CalendarView { grid, schedule }.to_string()
}
