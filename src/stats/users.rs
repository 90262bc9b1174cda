use chrono::Datelike;

use crate::data::{columns, parse_start_time, TripTable};
use crate::errors::Result;
use crate::stats::aggregate::{mode, value_counts};

/// Birth years before this are implausible enough to list the rides behind them.
pub const IMPLAUSIBLE_BIRTH_YEAR: i32 = 1920;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city file has no `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city file has no usable `Birth Year` column.
    pub birth_years: Option<BirthYearReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearReport {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
    /// Rides of the eldest riders, only filled when `earliest` predates
    /// [`IMPLAUSIBLE_BIRTH_YEAR`].
    pub eldest_rides: Vec<EldestRide>,
    pub max_riding_age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EldestRide {
    pub start_time: String,
    pub trip_duration: String,
    pub birth_year: i32,
    pub age_at_riding: Option<i32>,
}

impl UserReport {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let user_types = owned_counts(table.require_column(columns::USER_TYPE)?.present());
        let genders = table
            .column(columns::GENDER)
            .map(|column| owned_counts(column.present()));
        let birth_years = if table.has_column(columns::BIRTH_YEAR) {
            BirthYearReport::compute(table)?
        } else {
            None
        };
        Ok(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

impl BirthYearReport {
    fn compute(table: &TripTable) -> Result<Option<Self>> {
        let births = table.require_column(columns::BIRTH_YEAR)?;
        let starts = table.require_column(columns::START_TIME)?;
        let durations = table.column(columns::TRIP_DURATION);

        // (row, birth year, riding age)
        let riders: Vec<(usize, i32, Option<i32>)> = births
            .values()
            .enumerate()
            .filter_map(|(row, cell)| parse_year(cell).map(|year| (row, year)))
            .map(|(row, year)| {
                let age = starts
                    .get(row)
                    .and_then(parse_start_time)
                    .map(|started| started.year() - year);
                (row, year, age)
            })
            .collect();

        let years = || riders.iter().map(|(_, year, _)| *year);
        let (Some(earliest), Some(latest), Some(most_common)) =
            (years().min(), years().max(), mode(years()))
        else {
            return Ok(None);
        };

        let eldest_rides = if earliest < IMPLAUSIBLE_BIRTH_YEAR {
            riders
                .iter()
                .filter(|(_, year, _)| *year == earliest)
                .map(|&(row, birth_year, age_at_riding)| EldestRide {
                    start_time: starts.get(row).unwrap_or_default().to_string(),
                    trip_duration: durations
                        .and_then(|column| column.get(row))
                        .unwrap_or_default()
                        .to_string(),
                    birth_year,
                    age_at_riding,
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(Some(Self {
            earliest,
            latest,
            most_common,
            eldest_rides,
            max_riding_age: riders.iter().filter_map(|(_, _, age)| *age).max(),
        }))
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("The eldest user was born in {}.", self.earliest),
            format!("The youngest user was born in {}.", self.latest),
            format!("Most commonly, users were born in {}.", self.most_common),
        ];
        if let Some(age) = self.max_riding_age {
            lines.push(format!("The most advanced age at riding time is {age} years."));
        }
        lines
    }
}

// Birth years are stored as floats ("1989.0") in the published logs.
fn parse_year(cell: &str) -> Option<i32> {
    let value = cell.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value.trunc() as i32)
    } else {
        None
    }
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}
