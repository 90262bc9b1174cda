use chrono::Timelike;

use crate::data::{columns, parse_start_time, TripTable};
use crate::errors::Result;
use crate::stats::aggregate::mode;

/// Most common value of a derived column, and whether it is the only value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popularity {
    Varied(String),
    /// Every trip shares this value, usually because a filter was applied.
    Uniform(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    pub month: Popularity,
    pub day: Popularity,
    pub hour: u32,
}

impl TimeReport {
    pub fn compute(table: &TripTable) -> Result<Option<Self>> {
        let Some(month) = popularity(table, columns::MONTH)? else {
            return Ok(None);
        };
        let Some(day) = popularity(table, columns::DAY_OF_WEEK)? else {
            return Ok(None);
        };
        let hours = table
            .require_column(columns::START_TIME)?
            .present()
            .filter_map(parse_start_time)
            .map(|started| started.hour());
        let Some(hour) = mode(hours) else {
            return Ok(None);
        };
        Ok(Some(Self { month, day, hour }))
    }

    /// Sentence about the start hour, naming whichever of month and weekday
    /// the trips are confined to.
    pub fn hour_message(&self) -> String {
        let subject = format!("most popular start hour is {} o'clock.", self.hour);
        match (&self.day, &self.month) {
            (Popularity::Uniform(day), Popularity::Uniform(month)) => {
                format!("On {day}s of {month}, the {subject}")
            }
            (Popularity::Uniform(day), Popularity::Varied(_)) => format!("On {day}s, the {subject}"),
            (Popularity::Varied(_), Popularity::Uniform(month)) => {
                format!("In {month}, the {subject}")
            }
            (Popularity::Varied(_), Popularity::Varied(_)) => format!("The {subject}"),
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Popularity::Varied(month) = &self.month {
            lines.push(format!("The most popular month is {month}."));
        }
        if let Popularity::Varied(day) = &self.day {
            lines.push(format!("The most popular day of week is {day}."));
        }
        lines.push(self.hour_message());
        lines
    }
}

fn popularity(table: &TripTable, column: &str) -> Result<Option<Popularity>> {
    let values = table.require_column(column)?;
    let Some(top) = mode(values.present()) else {
        return Ok(None);
    };
    let uniform = values.present().all(|value| value == top);
    let top = top.to_string();
    Ok(Some(if uniform {
        Popularity::Uniform(top)
    } else {
        Popularity::Varied(top)
    }))
}
