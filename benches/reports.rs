use std::fmt::Write as _;
use std::fs;

use bikeshare_explorer::data::TripLoader;
use bikeshare_explorer::domain::{Choice, City, Month};
use bikeshare_explorer::stats::{DurationReport, StationReport, TimeReport, UserReport};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

const STATIONS: [&str; 6] = [
    "Canal St",
    "Clark St",
    "Wells St",
    "Lake Shore",
    "Michigan Ave",
    "State St",
];

fn sample_csv(trip_count: usize) -> String {
    let mut csv = String::from(
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    let first_day = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();

    for idx in 0..trip_count {
        let started = first_day
            + Duration::days((idx % 181) as i64)
            + Duration::minutes(((idx * 37) % 960) as i64);
        let seconds = 120 + (idx * 13) % 3600;
        let ended = started + Duration::seconds(seconds as i64);
        let from = STATIONS[idx % STATIONS.len()];
        let to = STATIONS[(idx * 7 + 3) % STATIONS.len()];
        let user = if idx % 4 == 0 { "Customer" } else { "Subscriber" };
        let gender = match idx % 3 {
            0 => "Male",
            1 => "Female",
            _ => "",
        };
        let birth = 1940 + (idx % 60);
        writeln!(
            csv,
            "{idx},{},{},{seconds},{from},{to},{user},{gender},{birth}.0",
            started.format("%Y-%m-%d %H:%M:%S"),
            ended.format("%Y-%m-%d %H:%M:%S"),
        )
        .unwrap();
    }
    csv
}

fn bench_reports(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("chicago.csv"), sample_csv(black_box(20_000))).expect("seed");
    let loader = TripLoader::new(dir.path());

    c.bench_function("load_20k", |b| {
        b.iter(|| {
            let table = loader
                .load(City::Chicago, Choice::All, Choice::All)
                .expect("load trips");
            black_box(table);
        })
    });

    c.bench_function("load_20k_filtered", |b| {
        b.iter(|| {
            let table = loader
                .load(City::Chicago, Choice::Only(Month::March), Choice::All)
                .expect("load trips");
            black_box(table);
        })
    });

    let table = loader
        .load(City::Chicago, Choice::All, Choice::All)
        .expect("load trips");

    c.bench_function("time_report_20k", |b| {
        b.iter(|| black_box(TimeReport::compute(&table).expect("time report")))
    });
    c.bench_function("station_report_20k", |b| {
        b.iter(|| black_box(StationReport::compute(&table).expect("station report")))
    });
    c.bench_function("duration_report_20k", |b| {
        b.iter(|| black_box(DurationReport::compute(&table).expect("duration report")))
    });
    c.bench_function("user_report_20k", |b| {
        b.iter(|| black_box(UserReport::compute(&table).expect("user report")))
    });
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
