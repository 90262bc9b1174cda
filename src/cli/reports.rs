//! Console rendering of raw pages and statistics reports.

use std::time::Instant;

use crate::cli::output;
use crate::cli::pager::Page;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::data::{Row, TripTable};
use crate::errors::Result;
use crate::stats::{
    DurationReport, EldestRide, ReportKind, StationReport, TimeReport, UserReport,
};

const MAX_CELL_WIDTH: usize = 28;

/// Prints one page of raw trip rows, prefixed with their row numbers.
pub fn print_page(headers: &[String], page: Page<'_, Row>) {
    if page.rows.is_empty() {
        output::info("No more rows to show.");
        return;
    }
    let mut columns = vec![TableColumn::new("#").right()];
    columns.extend(
        headers
            .iter()
            .map(|header| TableColumn::new(header.as_str()).with_max_width(MAX_CELL_WIDTH)),
    );
    let mut table = Table::new(columns);
    for (offset, row) in page.rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push((page.start + offset).to_string());
        cells.extend(row.iter().cloned());
        table.push_row(cells);
    }
    println!("{}", table.render());
}

/// Computes and prints one report section, timing the computation.
pub fn print_report(kind: ReportKind, table: &TripTable) -> Result<()> {
    output::section(kind.title());
    let started = Instant::now();

    let lines = match kind {
        ReportKind::Time => TimeReport::compute(table)?.map(|report| report.summary_lines()),
        ReportKind::Station => {
            StationReport::compute(table)?.map(|report| report.summary_lines())
        }
        ReportKind::Duration => {
            DurationReport::compute(table)?.map(|report| report.summary_lines())
        }
        ReportKind::Users => {
            print_users(&UserReport::compute(table)?);
            Some(Vec::new())
        }
    };

    match lines {
        Some(lines) => lines.iter().for_each(output::info),
        None => output::warning("Not enough data for this report."),
    }

    output::info(format!(
        "\nThis took {:.4} seconds.",
        started.elapsed().as_secs_f64()
    ));
    output::separator();
    Ok(())
}

fn print_users(report: &UserReport) {
    output::info("The counts of user types are the following:");
    print_counts("User Type", &report.user_types);

    if let Some(genders) = &report.genders {
        output::blank_line();
        output::info("The counts of user gender are the following:");
        print_counts("Gender", genders);
    }

    if let Some(births) = &report.birth_years {
        output::blank_line();
        let mut lines = births.summary_lines().into_iter();
        // Earliest, latest and most common year come first; the riding age
        // line follows the eldest riders' table.
        for line in lines.by_ref().take(3) {
            output::info(line);
        }
        if !births.eldest_rides.is_empty() {
            output::info(format!(
                "Some riders claim a birth year of {}. Here is how old they were when they rode:",
                births.earliest
            ));
            print_eldest_rides(&births.eldest_rides);
        }
        lines.for_each(output::info);
    }
}

fn print_counts(label: &str, counts: &[(String, usize)]) {
    let mut table = Table::new(vec![TableColumn::new(label), TableColumn::new("Count").right()]);
    for (value, count) in counts {
        table.push_row(vec![value.clone(), count.to_string()]);
    }
    println!("{}", table.render());
}

fn print_eldest_rides(rides: &[EldestRide]) {
    let mut table = Table::new(vec![
        TableColumn::new("Start Time"),
        TableColumn::new("Trip Duration").right(),
        TableColumn::new("Birth Year").right(),
        TableColumn::new("Age At Riding Time").right(),
    ]);
    for ride in rides {
        table.push_row(vec![
            ride.start_time.clone(),
            ride.trip_duration.clone(),
            ride.birth_year.to_string(),
            ride.age_at_riding
                .map(|age| age.to_string())
                .unwrap_or_default(),
        ]);
    }
    println!("{}", table.render());
}
