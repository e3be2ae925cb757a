//! Terminal rendering of the five statistics reports.

use crate::stats::duration::{DurationStats, TripLeg};
use crate::stats::period::PeriodTrips;
use crate::stats::station::StationStats;
use crate::stats::time::TimeStats;
use crate::stats::user::{Demographic, UserStats};
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, dim, no_data};
use crate::utils::date::{hour_12, month_name, weekday_name};
use crate::utils::formatting::{bold, display_width, format_duration, pad_right};
use std::time::Duration;

pub fn section(title: &str) {
    println!("\n{}", bold(title));
}

pub fn print_elapsed(elapsed: Duration) {
    println!("{}", dim(&format!("This took {:.2}s", elapsed.as_secs_f64())));
    println!("{}", dim(&"-".repeat(40)));
}

fn stat_line(label: &str, value: &str) {
    println!("{CYAN}• {}:{RESET} {YELLOW}{}{RESET}", label, value);
}

fn route_display(route: &(String, String), separator: &str) -> String {
    format!("{} {} {}", route.0, separator, route.1)
}

pub fn print_time_stats(stats: &TimeStats) {
    stat_line(
        "Most common month",
        &stats
            .busiest_month
            .map(|m| month_name(m).to_string())
            .unwrap_or_else(no_data),
    );
    stat_line(
        "Most common day of week",
        &stats
            .busiest_weekday
            .map(|d| weekday_name(d).to_string())
            .unwrap_or_else(no_data),
    );
    stat_line(
        "Most common start hour",
        &stats.busiest_hour.map(hour_12).unwrap_or_else(no_data),
    );
    stat_line(
        "Busiest time of day",
        &stats
            .busiest_period
            .map(|p| p.colour().paint(p.as_str()).to_string())
            .unwrap_or_else(no_data),
    );
}

pub fn print_station_stats(stats: &StationStats, separator: &str) {
    stat_line(
        "Most common start station",
        stats.top_start.as_deref().unwrap_or(&no_data()),
    );
    stat_line(
        "Most common end station",
        stats.top_end.as_deref().unwrap_or(&no_data()),
    );
    stat_line(
        "Most common trip",
        &stats
            .top_route
            .as_ref()
            .map(|r| route_display(r, separator))
            .unwrap_or_else(no_data),
    );
}

pub fn print_duration_stats(stats: Option<&DurationStats>, separator: &str) {
    let Some(stats) = stats else {
        stat_line("Total travel time", &no_data());
        stat_line("Average travel time", &no_data());
        stat_line("Longest trip", &no_data());
        stat_line("Shortest trip", &no_data());
        return;
    };

    stat_line("Total travel time", &format_duration(stats.total_secs));
    stat_line("Average travel time", &format_duration(stats.mean_secs));
    stat_line("Longest trip", &leg_display(&stats.longest, separator));
    stat_line("Shortest trip", &leg_display(&stats.shortest, separator));
}

fn leg_display(leg: &TripLeg, separator: &str) -> String {
    let route = if leg.is_round_trip() {
        format!("round-trip at {}", leg.start_station)
    } else {
        format!("{} {} {}", leg.start_station, separator, leg.end_station)
    };
    format!("{} ({})", format_duration(leg.duration_secs), route)
}

pub fn print_user_stats(stats: &UserStats) {
    println!("{CYAN}• User types:{RESET}");
    print_counts(&stats.user_types);

    println!("{CYAN}• Gender:{RESET}");
    match &stats.genders {
        Demographic::Unavailable => {
            println!("{GREY}    Gender data not available for this city.{RESET}")
        }
        Demographic::NoData => println!("    {}", no_data()),
        Demographic::Stat(counts) => print_counts(counts),
    }

    match &stats.birth_years {
        Demographic::Unavailable => {
            println!(
                "{CYAN}• Birth year:{RESET} {GREY}Birth year data not available for this city.{RESET}"
            )
        }
        Demographic::NoData => stat_line("Birth year", &no_data()),
        Demographic::Stat(summary) => {
            stat_line("Earliest birth year", &summary.earliest.to_string());
            stat_line("Most recent birth year", &summary.most_recent.to_string());
            stat_line("Most common birth year", &summary.most_common.to_string());
        }
    }
}

fn print_counts(counts: &[(String, usize)]) {
    if counts.is_empty() {
        println!("    {}", no_data());
        return;
    }
    let width = counts
        .iter()
        .map(|(name, _)| display_width(name))
        .max()
        .unwrap_or(0);
    for (name, count) in counts {
        println!("    {}  {YELLOW}{}{RESET}", pad_right(name, width), count);
    }
}

pub fn print_period_trips(buckets: &[PeriodTrips], separator: &str) {
    if buckets.is_empty() {
        println!("    {}", no_data());
        return;
    }
    for bucket in buckets {
        println!(
            "{CYAN}• {}{RESET} {GREY}({} trips){RESET} {YELLOW}{}{RESET}",
            bucket.period.colour().paint(bucket.period.as_str()),
            bucket.rides,
            route_display(&bucket.top_route, separator),
        );
    }
}
