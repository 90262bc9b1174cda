//! Descriptive statistics over a filtered [`TripTable`](crate::data::TripTable).
//!
//! Each report is a pure computation; the CLI decides how to print it.

pub mod aggregate;
pub mod duration;
pub mod station;
pub mod time;
pub mod users;

pub use duration::DurationReport;
pub use station::StationReport;
pub use time::{Popularity, TimeReport};
pub use users::{BirthYearReport, EldestRide, UserReport};

/// The report sections, in the order a session prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Time,
    Station,
    Duration,
    Users,
}

impl ReportKind {
    pub const ORDER: [ReportKind; 4] = [
        ReportKind::Time,
        ReportKind::Station,
        ReportKind::Duration,
        ReportKind::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Time => "Calculating The Most Frequent Times of Travel",
            ReportKind::Station => "Calculating The Most Popular Stations and Trip",
            ReportKind::Duration => "Calculating Trip Duration",
            ReportKind::Users => "Calculating User Stats",
        }
    }

    /// Subject named by the pause prompt shown before the section.
    pub fn subject(self) -> &'static str {
        match self {
            ReportKind::Time => "riding times",
            ReportKind::Station => "stations",
            ReportKind::Duration => "trip duration",
            ReportKind::Users => "the users",
        }
    }
}
