use std::path::PathBuf;

use bikeshare_explorer::report::{
    write_all, write_section, Availability, BirthYears, DurationStats, PopularStations,
    PopularTimes, Report, StationStats, TimeStats, TripDurations, UserStats, NO_DATA, RULE,
};
use bikeshare_explorer::selection::{City, Day, DayFilter, Month, MonthFilter, Selection};
use bikeshare_explorer::trips::{load_city, LoadOptions, TripTable};

fn table(city: City, month: MonthFilter, day: DayFilter) -> TripTable {
    let opts = LoadOptions {
        data_dir: PathBuf::from("tests/fixtures"),
        ..Default::default()
    };
    load_city(city, &opts)
        .unwrap()
        .apply(&Selection::new(city, month, day))
}

fn chicago_all() -> TripTable {
    table(City::Chicago, MonthFilter::All, DayFilter::All)
}

fn empty() -> TripTable {
    // The fixture has no February trips.
    table(City::Chicago, MonthFilter::Only(Month::February), DayFilter::All)
}

#[test]
fn time_stats_for_all_chicago_trips() {
    let stats = TimeStats::compute(&chicago_all());
    assert_eq!(
        stats,
        TimeStats(Some(PopularTimes {
            month: 6,
            day_of_week: 0,
            hour: 17,
        }))
    );
    let text = stats.to_string();
    assert!(text.contains("Most Popular Month: june"));
    assert!(text.contains("Most Popular Day: monday"));
    assert!(text.contains("Most Popular Start Hour: 17"));
}

#[test]
fn chicago_june_reports_june() {
    let june = table(City::Chicago, MonthFilter::Only(Month::June), DayFilter::All);
    let stats = TimeStats::compute(&june);
    assert_eq!(stats.0.and_then(|p| p.month_name()), Some("june"));
}

#[test]
fn hour_ties_go_to_the_earlier_hour() {
    // Two May Monday trips: one at 09h, one at 17h.
    let may_mondays = table(
        City::Chicago,
        MonthFilter::Only(Month::May),
        DayFilter::Only(Day::Monday),
    );
    assert_eq!(may_mondays.row_count(), 2);
    assert_eq!(TimeStats::compute(&may_mondays).0.map(|p| p.hour), Some(9));
}

#[test]
fn station_stats_for_all_chicago_trips() {
    assert_eq!(
        StationStats::compute(&chicago_all()),
        StationStats(Some(PopularStations {
            start_station: "Clark St".into(),
            end_station: "Lake St".into(),
            trip: ("Clark St".into(), "Lake St".into()),
            trip_count: 3,
        }))
    );
}

#[test]
fn station_ties_go_to_the_first_name() {
    // Washington: "14th & Belmont St NW" -> "15th & K St NW" twice, everything else once.
    let stats = StationStats::compute(&table(City::Washington, MonthFilter::All, DayFilter::All));
    let p = stats.0.unwrap();
    assert_eq!(p.trip, ("14th & Belmont St NW".into(), "15th & K St NW".into()));
    assert_eq!(p.trip_count, 2);

    // New York: start stations "Broadway & W 60 St" x2; end stations tie 2-2.
    let stats = StationStats::compute(&table(City::NewYorkCity, MonthFilter::All, DayFilter::All));
    let p = stats.0.unwrap();
    assert_eq!(p.start_station, "Broadway & W 60 St");
    assert_eq!(p.end_station, "9 Ave & W 45 St");
}

#[test]
fn duration_stats_sum_and_mean() {
    assert_eq!(
        DurationStats::compute(&chicago_all()),
        DurationStats(Some(TripDurations {
            total: 7000.0,
            mean: 700.0,
        }))
    );

    let washington = DurationStats::compute(&table(City::Washington, MonthFilter::All, DayFilter::All));
    assert_eq!(
        washington,
        DurationStats(Some(TripDurations {
            total: 2529.0,
            mean: 632.25,
        }))
    );
    assert!(washington.to_string().contains("Total Trip Duration is 2529 seconds"));
}

#[test]
fn user_stats_for_chicago() {
    let stats = UserStats::compute(&chicago_all());
    assert_eq!(
        stats.user_types,
        vec![("Subscriber".to_string(), 7), ("Customer".to_string(), 3)]
    );
    assert_eq!(
        stats.gender,
        Availability::Available(vec![("Male".to_string(), 5), ("Female".to_string(), 3)])
    );
    assert_eq!(
        stats.birth_year,
        Availability::Available(Some(BirthYears {
            earliest: 1964,
            most_recent: 1999,
            most_common: 1985,
        }))
    );
    let text = stats.to_string();
    assert!(text.contains("Subscriber: 7"));
    assert!(text.contains("Most common year of birth: 1985"));
}

#[test]
fn washington_user_stats_degrade_gracefully() {
    let stats = UserStats::compute(&table(City::Washington, MonthFilter::All, DayFilter::All));
    assert_eq!(stats.gender, Availability::NotAvailable);
    assert_eq!(stats.birth_year, Availability::NotAvailable);

    let text = stats.to_string();
    assert!(text.contains("Gender data is not available"));
    assert!(text.contains("Birth year data is not available"));
    assert!(text.contains("Subscriber: 3"));
}

#[test]
fn empty_selection_reports_no_data_everywhere() {
    let t = empty();
    assert!(t.is_empty());

    assert_eq!(TimeStats::compute(&t), TimeStats(None));
    assert_eq!(StationStats::compute(&t), StationStats(None));
    assert_eq!(DurationStats::compute(&t), DurationStats(None));

    let users = UserStats::compute(&t);
    assert!(users.user_types.is_empty());
    assert_eq!(users.gender, Availability::Available(vec![]));
    assert_eq!(users.birth_year, Availability::Available(None));

    let mut out = Vec::new();
    write_all(&mut out, &t).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.matches(NO_DATA).count() >= 5, "{text}");
}

#[test]
fn write_section_prints_heading_timing_and_rule() {
    let mut out = Vec::new();
    let report: DurationStats = write_section(&mut out, &chicago_all()).unwrap();
    assert!(report.0.is_some());

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\nCalculating Trip Duration...\n\n"));
    assert!(text.contains("Mean Trip Duration is 700 seconds"));
    assert!(text.contains("This took "));
    assert!(text.trim_end().ends_with(RULE));
}
