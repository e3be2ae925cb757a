use bikestats::models::city::City;
use bikestats::models::filter::{DayFilter, MonthFilter};
use bikestats::utils::date::{hour_12, month_from_name, month_name, weekday_from_name};
use bikestats::utils::formatting::{display_width, format_duration, pad_right, strip_ansi};
use bikestats::utils::table::Table;
use chrono::Weekday;

#[test]
fn twelve_hour_clock_edges() {
    assert_eq!(hour_12(0), "12 AM");
    assert_eq!(hour_12(1), "01 AM");
    assert_eq!(hour_12(11), "11 AM");
    assert_eq!(hour_12(12), "12 PM");
    assert_eq!(hour_12(13), "01 PM");
    assert_eq!(hour_12(23), "11 PM");
}

#[test]
fn durations_truncate_fractional_seconds() {
    assert_eq!(format_duration(0.0), "0h 0m 0s");
    assert_eq!(format_duration(300.0), "0h 5m 0s");
    assert_eq!(format_duration(150.0), "0h 2m 30s");
    assert_eq!(format_duration(3725.9), "1h 2m 5s");
    assert_eq!(format_duration(86400.0), "24h 0m 0s");
}

#[test]
fn month_names_round_trip_for_filterable_months() {
    assert_eq!(month_from_name("january"), Some(1));
    assert_eq!(month_from_name("June"), Some(6));
    assert_eq!(month_from_name("july"), None);
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "?");
}

#[test]
fn weekday_names_parse_case_insensitively() {
    assert_eq!(weekday_from_name("Monday"), Some(Weekday::Mon));
    assert_eq!(weekday_from_name("SUNDAY"), Some(Weekday::Sun));
    assert_eq!(weekday_from_name("noday"), None);
}

#[test]
fn city_parse_is_case_insensitive() {
    assert_eq!(City::from_input("Chicago"), Some(City::Chicago));
    assert_eq!(City::from_input("  new york city "), Some(City::NewYorkCity));
    assert_eq!(City::from_input("WASHINGTON"), Some(City::Washington));
    assert_eq!(City::from_input("atlantis"), None);
}

#[test]
fn filters_parse_all_and_names() {
    assert_eq!(MonthFilter::from_input("all"), Some(MonthFilter::All));
    assert_eq!(MonthFilter::from_input("March"), Some(MonthFilter::Month(3)));
    assert_eq!(MonthFilter::from_input("december"), None);

    assert_eq!(DayFilter::from_input("ALL"), Some(DayFilter::All));
    assert_eq!(
        DayFilter::from_input("friday"),
        Some(DayFilter::Day(Weekday::Fri))
    );
    assert_eq!(DayFilter::from_input("someday"), None);
}

#[test]
fn ansi_sequences_do_not_count_toward_width() {
    let coloured = "\x1b[36mCanal St\x1b[0m";
    assert_eq!(strip_ansi(coloured), "Canal St");
    assert_eq!(display_width(coloured), 8);
    assert_eq!(pad_right(coloured, 10).len(), coloured.len() + 2);
}

#[test]
fn table_columns_line_up() {
    let mut table = Table::new(&["Station", "Rides"]);
    table.add_row(vec!["Canal St & Adams St".to_string(), "12".to_string()]);
    table.add_row(vec!["Lincoln Memorial".to_string(), "3".to_string()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Station"));
    // all lines padded to the widest cell per column
    assert!(lines[1].contains("Canal St & Adams St  12"));
    assert!(lines[2].contains("Lincoln Memorial     3"));
}
