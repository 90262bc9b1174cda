use crate::data::{columns, TripTable};
use crate::errors::Result;
use crate::stats::aggregate::mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    pub start: String,
    pub end: String,
    /// Most used station counting both trip ends.
    pub overall: String,
    pub trip: (String, String),
}

impl StationReport {
    pub fn compute(table: &TripTable) -> Result<Option<Self>> {
        let starts = table.require_column(columns::START_STATION)?;
        let ends = table.require_column(columns::END_STATION)?;

        let trips = starts
            .values()
            .zip(ends.values())
            .map(|(from, to)| (from.trim(), to.trim()))
            .filter(|(from, to)| !from.is_empty() && !to.is_empty());

        let report = (|| {
            Some(Self {
                start: mode(starts.present())?.to_string(),
                end: mode(ends.present())?.to_string(),
                overall: mode(starts.present().chain(ends.present()))?.to_string(),
                trip: mode(trips).map(|(from, to)| (from.to_string(), to.to_string()))?,
            })
        })();
        Ok(report)
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("The most commonly used start station is {}.", self.start),
            format!("The most commonly used end station is {}.", self.end),
            format!(
                "Counting both ends of a trip, the busiest station is {}.",
                self.overall
            ),
            format!(
                "The most frequent trip is from {} to {}.",
                self.trip.0, self.trip.1
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> TripTable {
        TripTable::new(
            vec![columns::START_STATION.into(), columns::END_STATION.into()],
            rows.iter()
                .map(|(from, to)| vec![from.to_string(), to.to_string()])
                .collect(),
        )
    }

    #[test]
    fn computes_each_popularity() {
        let report = StationReport::compute(&table(&[
            ("Canal St", "Clark St"),
            ("Canal St", "Wells St"),
            ("Wells St", "Clark St"),
            ("Wells St", "Clark St"),
            ("Lake Shore", "Wells St"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(report.start, "Canal St");
        assert_eq!(report.end, "Clark St");
        assert_eq!(report.overall, "Wells St");
        assert_eq!(report.trip, ("Wells St".into(), "Clark St".into()));
    }

    #[test]
    fn trips_with_a_blank_end_are_ignored() {
        let report = StationReport::compute(&table(&[
            ("A", ""),
            ("A", ""),
            ("B", "C"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(report.start, "A");
        assert_eq!(report.trip, ("B".into(), "C".into()));
    }

    #[test]
    fn empty_table_has_no_report() {
        assert_eq!(StationReport::compute(&table(&[])).unwrap(), None);
    }
}
