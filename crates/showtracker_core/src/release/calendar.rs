//! Month grid of tracked releases.

use crate::model::content::ContentItem;
use crate::release::window::group_by_release_day;
use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month, used for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Error for month values that are not `YYYY-MM` or out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMonth(pub String);

impl Display for InvalidMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid month `{}`; expected YYYY-MM", self.0)
    }
}

impl Error for InvalidMonth {}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        // Constructors guarantee the first of the month exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of days in this month.
    pub fn len_days(self) -> u32 {
        let next_first = self.next().first_day();
        next_first.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Display title such as `January 2030`.
    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidMonth;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || InvalidMonth(trimmed.to_string());
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub items: Vec<&'a ContentItem>,
}

/// Month grid with Sunday-first alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth<'a> {
    pub month: YearMonth,
    /// Empty cells before day 1 in a Sunday-first week.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay<'a>>,
}

impl<'a> CalendarMonth<'a> {
    /// Places `tracking` items on the days of `month`.
    pub fn build(month: YearMonth, tracking: &'a [ContentItem], today: NaiveDate) -> Self {
        let mut by_day = group_by_release_day(tracking);
        let first = month.first_day();
        let days = first
            .iter_days()
            .take(month.len_days() as usize)
            .map(|date| CalendarDay {
                date,
                is_today: date == today,
                items: by_day.remove(&date).unwrap_or_default(),
            })
            .collect();

        Self {
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Number of releases placed in this month.
    pub fn release_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }

    pub fn day(&self, day_of_month: u32) -> Option<&CalendarDay<'a>> {
        self.days.get(day_of_month.checked_sub(1)? as usize)
    }
}
