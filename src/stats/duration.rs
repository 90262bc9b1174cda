use crate::data::{columns, TripTable};
use crate::errors::Result;
use crate::stats::aggregate::{mean, parse_numbers, sum};

#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub trips: usize,
}

impl DurationReport {
    pub fn compute(table: &TripTable) -> Result<Option<Self>> {
        let (durations, rejected) =
            parse_numbers(table.require_column(columns::TRIP_DURATION)?.present());
        if rejected > 0 {
            tracing::warn!(rejected, "skipped trip durations that are not numbers");
        }
        let Some(mean_seconds) = mean(&durations) else {
            return Ok(None);
        };
        Ok(Some(Self {
            total_seconds: sum(&durations),
            mean_seconds,
            trips: durations.len(),
        }))
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let total = self.total_seconds;
        let average = self.mean_seconds;
        vec![
            format!(
                "The total travel time is {} hours {} minutes and {} seconds.",
                (total / 3600.0).floor(),
                ((total / 60.0).floor() % 60.0),
                format_seconds(total % 60.0)
            ),
            format!(
                "The mean travel time is {} minutes and {} seconds.",
                (average / 60.0).floor(),
                format_seconds(average % 60.0)
            ),
        ]
    }
}

fn format_seconds(seconds: f64) -> String {
    if seconds.fract().abs() < 0.005 {
        format!("{:.0}", seconds)
    } else {
        format!("{:.2}", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(durations: &[&str]) -> TripTable {
        TripTable::new(
            vec![columns::TRIP_DURATION.into()],
            durations.iter().map(|value| vec![value.to_string()]).collect(),
        )
    }

    #[test]
    fn totals_break_down_into_hours_minutes_seconds() {
        let report = DurationReport::compute(&table(&["3600", "3725", ""]))
            .unwrap()
            .unwrap();
        assert_eq!(report.trips, 2);
        assert_eq!(report.total_seconds, 7325.0);
        assert_eq!(
            report.summary_lines(),
            vec![
                "The total travel time is 2 hours 2 minutes and 5 seconds.".to_string(),
                "The mean travel time is 61 minutes and 2.50 seconds.".to_string(),
            ]
        );
    }

    #[test]
    fn unparsable_durations_are_skipped() {
        let report = DurationReport::compute(&table(&["60", "n/a"]))
            .unwrap()
            .unwrap();
        assert_eq!(report.trips, 1);
        assert_eq!(report.mean_seconds, 60.0);
    }

    #[test]
    fn no_durations_no_report() {
        assert_eq!(DurationReport::compute(&table(&[])).unwrap(), None);
    }
}
