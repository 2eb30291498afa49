use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bikeshare_explorer::report::{DurationStats, Report, StationStats, TimeStats, UserStats};
use bikeshare_explorer::selection::{City, Day, DayFilter, Month, MonthFilter, Selection};
use bikeshare_explorer::trips::{load_trips_from_reader, TripTable};

const STATIONS: [&str; 6] = ["Clark St", "Lake St", "Canal St", "State St", "Wells St", "Dearborn St"];

/// Synthetic chicago-shaped CSV with `rows` trips spread over January..June.
fn synthetic_csv(rows: usize) -> String {
    let mut s = String::from(
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..rows {
        let month = i % 6 + 1;
        let day = i % 28 + 1;
        let hour = i % 24;
        s.push_str(&format!(
            "{i},2017-{month:02}-{day:02} {hour:02}:{min:02}:00,2017-{month:02}-{day:02} {hour:02}:59:00,{dur},{from},{to},{user},{gender},{year}.0\n",
            min = i % 50,
            dur = 60 + (i * 37) % 3000,
            from = STATIONS[i % STATIONS.len()],
            to = STATIONS[(i * 7) % STATIONS.len()],
            user = if i % 4 == 0 { "Customer" } else { "Subscriber" },
            gender = if i % 3 == 0 { "Female" } else { "Male" },
            year = 1950 + i % 50,
        ));
    }
    s
}

fn load(rows: usize) -> TripTable {
    let csv = synthetic_csv(rows);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());
    load_trips_from_reader(&mut rdr).expect("synthetic csv loads")
}

fn bench_pipeline(c: &mut Criterion) {
    let csv = synthetic_csv(20_000);
    c.bench_function("load_20k", |b| {
        b.iter(|| {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(csv.as_bytes());
            black_box(load_trips_from_reader(&mut rdr).expect("load"))
        })
    });

    let table = load(20_000);
    let june_mondays = Selection::new(
        City::Chicago,
        MonthFilter::Only(Month::June),
        DayFilter::Only(Day::Monday),
    );
    c.bench_function("filter_20k", |b| b.iter(|| black_box(table.apply(&june_mondays))));

    c.bench_function("reports_20k", |b| {
        b.iter(|| {
            black_box(TimeStats::compute(&table));
            black_box(StationStats::compute(&table));
            black_box(DurationStats::compute(&table));
            black_box(UserStats::compute(&table));
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
