//! Filter dimensions and the values a session resolves for them.
//!
//! Every dimension has a closed, ordered set of valid values. A session picks
//! one [`City`] and, for month and weekday, a [`Choice`] that is either a
//! concrete value or [`Choice::All`].

use std::fmt;

use chrono::Weekday;

/// Named dimension along which trips may be restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterRequest {
    City,
    Month,
    DayOfWeek,
}

impl FilterRequest {
    /// Word used in prompts ("filter by month?").
    pub fn label(self) -> &'static str {
        match self {
            FilterRequest::City => "city",
            FilterRequest::Month => "month",
            FilterRequest::DayOfWeek => "day",
        }
    }

    /// Canonical spelling of every valid value, in order.
    pub fn valid_values(self) -> Vec<&'static str> {
        match self {
            FilterRequest::City => City::ALL.iter().map(|city| city.name()).collect(),
            FilterRequest::Month => Month::ALL.iter().map(|month| month.name()).collect(),
            FilterRequest::DayOfWeek => DayOfWeek::ALL.iter().map(|day| day.name()).collect(),
        }
    }
}

impl fmt::Display for FilterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed set of values the selection dialogue can resolve.
pub trait FilterDimension: Copy + Eq + fmt::Debug + 'static {
    const REQUEST: FilterRequest;
    const ALL: &'static [Self];

    /// Canonical spelling compared against normalized user input.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Name of the trip log inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl FilterDimension for City {
    const REQUEST: FilterRequest = FilterRequest::City;
    const ALL: &'static [Self] = &[City::Chicago, City::NewYorkCity, City::Washington];

    fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Months covered by the published trip logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl FilterDimension for Month {
    const REQUEST: FilterRequest = FilterRequest::Month;
    const ALL: &'static [Self] = &[
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl FilterDimension for DayOfWeek {
    const REQUEST: FilterRequest = FilterRequest::DayOfWeek;
    const ALL: &'static [Self] = &[
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|month| month.name())
}

/// Resolved value of a month or weekday filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    /// No restriction on this dimension.
    All,
    Only(T),
}

impl<T: FilterDimension> Choice<T> {
    /// Whether a row whose derived column holds `value` passes the filter.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(selected) => selected.name() == value,
        }
    }
}

impl<T: FilterDimension> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("all"),
            Choice::Only(value) => f.write_str(value.name()),
        }
    }
}

/// Outcome of a yes/no gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationFlag {
    Proceed,
    End,
}
