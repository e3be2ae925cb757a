//! The interactive analysis session: prompt for filters, load, print the
//! five reports, offer raw-data paging, then offer a restart.

use crate::cli::{pager, prompt, render};
use crate::config::Config;
use crate::data::catalog::Catalog;
use crate::data::loader;
use crate::data::table::TripTable;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::models::filter::{DayFilter, MonthFilter};
use crate::stats;
use crate::ui::messages;
use crate::utils::colors::dim;
use std::io::BufRead;
use std::time::Instant;

pub fn run_session(input: &mut impl BufRead, cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::new(&cfg.data_dir);

    loop {
        messages::banner("Hello! Let's explore some US bikeshare data!");

        let Some(city) = prompt::ask_until(
            input,
            "Choose a city (Chicago, New York City, Washington): ",
            "Invalid input. Please enter: Chicago, New York City, or Washington.",
            City::from_input,
        )?
        else {
            break;
        };

        let Some(month) = prompt::ask_until(
            input,
            "Choose a month (January - June) or 'all': ",
            "Invalid input. Please enter a valid month or 'all'.",
            MonthFilter::from_input,
        )?
        else {
            break;
        };

        let Some(day) = prompt::ask_until(
            input,
            "Choose a day of week or 'all': ",
            "Invalid input. Please enter a valid day of the week or 'all'.",
            DayFilter::from_input,
        )?
        else {
            break;
        };

        println!("{}", dim(&"-".repeat(40)));

        match loader::load_trips(&catalog, city, month, day) {
            Ok(table) => {
                messages::info(format!(
                    "{} trips loaded for {} ({}, {}).",
                    table.len(),
                    city.as_str(),
                    month.describe(),
                    day.describe(),
                ));
                report_all(&table, cfg);
                pager::browse_raw(input, &table, cfg.page_size)?;
            }
            // a broken dataset aborts this run, not the program
            Err(e) => messages::error(e),
        }

        if !prompt::confirm(input, "\nWould you like to restart? (yes/no): ")? {
            break;
        }
        println!();
    }

    farewell();
    Ok(())
}

fn report_all(table: &TripTable, cfg: &Config) {
    let separator = cfg.trip_separator.as_str();

    timed("Most frequent times of travel", || {
        render::print_time_stats(&stats::time::time_stats(table));
    });
    timed("Most popular stations and trip", || {
        render::print_station_stats(&stats::station::station_stats(table), separator);
    });
    timed("Trip durations", || {
        render::print_duration_stats(stats::duration::duration_stats(table).as_ref(), separator);
    });
    timed("User stats", || {
        render::print_user_stats(&stats::user::user_stats(table));
    });
    timed("Most popular trip by time of day", || {
        render::print_period_trips(&stats::period::period_trips(table), separator);
    });
}

fn timed(title: &str, body: impl FnOnce()) {
    render::section(title);
    let started = Instant::now();
    body();
    render::print_elapsed(started.elapsed());
}

fn farewell() {
    messages::success("Thanks for exploring US bikeshare data!");
    println!(
        "{}",
        dim(r#"
        __o
      _ \<_
     (_)/(_)   Keep riding!
"#)
    );
}
