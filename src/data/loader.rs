use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data::columns;
use crate::data::table::{Row, TripTable};
use crate::domain::{month_name, City, Choice, DayOfWeek, FilterDimension, Month};
use crate::errors::{ExplorerError, Result};

const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Reads a city's trip log and applies the month and weekday filters.
#[derive(Debug, Clone)]
pub struct TripLoader {
    data_dir: PathBuf,
}

impl TripLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Loads `city`, derives the `Month` and `Day of week` columns from
    /// `Start Time`, and keeps the rows admitted by both filters.
    pub fn load(
        &self,
        city: City,
        month: Choice<Month>,
        day: Choice<DayOfWeek>,
    ) -> Result<TripTable> {
        let path = self.path_for(city);
        if !path.is_file() {
            return Err(ExplorerError::DataFileMissing(path));
        }

        let csv_error = |source| ExplorerError::Csv {
            path: path.clone(),
            source,
        };
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_path(&path)
            .map_err(csv_error)?;
        let raw_headers = reader.headers().map_err(csv_error)?.clone();

        let kept: Vec<usize> = raw_headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !is_index_column(name))
            .map(|(index, _)| index)
            .collect();
        let mut headers: Vec<String> = kept
            .iter()
            .map(|&index| raw_headers[index].to_string())
            .collect();

        for required in columns::REQUIRED {
            if !headers.iter().any(|header| header == required) {
                return Err(ExplorerError::MissingColumn(required.to_string()));
            }
        }
        let start_index = headers
            .iter()
            .position(|header| header == columns::START_TIME)
            .ok_or_else(|| ExplorerError::MissingColumn(columns::START_TIME.to_string()))?;
        headers.push(columns::MONTH.to_string());
        headers.push(columns::DAY_OF_WEEK.to_string());

        let mut rows = Vec::new();
        let mut total = 0usize;
        for (offset, record) in reader.records().enumerate() {
            let record = record.map_err(csv_error)?;
            total += 1;
            let mut row = project(&record, &kept);
            let raw_start = row[start_index].as_str();
            let started =
                parse_start_time(raw_start).ok_or_else(|| ExplorerError::InvalidTimestamp {
                    row: offset + 1,
                    value: raw_start.to_string(),
                })?;

            let month_label = month_name(started.month()).unwrap_or_default();
            let day_label = DayOfWeek::from_weekday(started.weekday()).name();
            if !(month.admits(month_label) && day.admits(day_label)) {
                continue;
            }
            row.push(month_label.to_string());
            row.push(day_label.to_string());
            rows.push(row);
        }

        tracing::info!(
            %city,
            %month,
            %day,
            total,
            kept = rows.len(),
            "loaded trip data"
        );
        Ok(TripTable::new(headers, rows))
    }
}

/// Parses a `Start Time` cell as written in the published trip logs.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

// The published logs carry a leading, unnamed row-index column.
fn is_index_column(name: &str) -> bool {
    name.is_empty() || name.starts_with("Unnamed:")
}

fn project(record: &StringRecord, kept: &[usize]) -> Row {
    kept.iter()
        .map(|&index| record.get(index).unwrap_or("").to_string())
        .collect()
}
