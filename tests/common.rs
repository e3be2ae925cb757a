#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikestats::data::table::{Schema, TripTable};
use bikestats::models::trip::Trip;
use chrono::{Duration, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// Create a unique dataset directory inside the system temp dir and clear
/// any leftovers from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path.to_string_lossy().to_string()
}

pub fn write_dataset(dir: &str, file: &str, content: &str) {
    fs::write(PathBuf::from(dir).join(file), content).expect("write dataset");
}

/// Five Chicago trips with Gender and Birth Year columns. Designed so every
/// headline statistic is predictable:
/// months [Jan,Jan,Feb,Mar,Jun], weekdays [Mon,Mon,Tue,Fri,Mon],
/// hours [8,9,13,18,23] (all distinct), durations [300,100,200,400,500].
pub const CHICAGO_SAMPLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
100,2017-01-02 08:00:00,2017-01-02 08:05:00,300,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1992.0
101,2017-01-02 09:00:00,2017-01-02 09:01:40,100,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1984
102,2017-02-07 13:00:00,2017-02-07 13:03:20,200,Columbus Dr & Randolph St,Columbus Dr & Randolph St,Customer,Male,1992
103,2017-03-10 18:30:00,2017-03-10 18:36:40,400,Canal St & Adams St,Columbus Dr & Randolph St,Subscriber,,
104,2017-06-05 23:15:00,2017-06-05 23:23:20,500,Clinton St & Madison St,Canal St & Adams St,Customer,Female,2000
";

/// Two Washington trips; the dataset carries no Gender or Birth Year column.
pub const WASHINGTON_SAMPLE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
200,2017-04-03 06:30:00,2017-04-03 06:32:00,120,Jefferson Dr & 14th St SW,Lincoln Memorial,Subscriber
201,2017-04-08 12:00:00,2017-04-08 12:04:00,240,Lincoln Memorial,Jefferson Dr & 14th St SW,Customer
";

pub fn chicago_dir(name: &str) -> String {
    let dir = setup_data_dir(name);
    write_dataset(&dir, "chicago.csv", CHICAGO_SAMPLE);
    dir
}

pub fn washington_dir(name: &str) -> String {
    let dir = setup_data_dir(name);
    write_dataset(&dir, "washington.csv", WASHINGTON_SAMPLE);
    dir
}

// ---------------------------------------------------------------------------
// In-memory table builders for the stats tests
// ---------------------------------------------------------------------------

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("timestamp")
}

pub fn trip(start: &str, duration_secs: f64, from: &str, to: &str) -> Trip {
    full_trip(start, duration_secs, from, to, "Subscriber", None, None)
}

pub fn full_trip(
    start: &str,
    duration_secs: f64,
    from: &str,
    to: &str,
    user_type: &str,
    gender: Option<&str>,
    birth_year: Option<i32>,
) -> Trip {
    let start = ts(start);
    Trip::new(
        start,
        start + Duration::seconds(duration_secs as i64),
        duration_secs,
        from.to_string(),
        to.to_string(),
        user_type.to_string(),
        gender.map(str::to_string),
        birth_year,
    )
}

pub fn demographic_table(trips: Vec<Trip>) -> TripTable {
    TripTable::new(
        Schema {
            has_gender: true,
            has_birth_year: true,
        },
        trips,
    )
}

pub fn bare_table(trips: Vec<Trip>) -> TripTable {
    TripTable::new(
        Schema {
            has_gender: false,
            has_birth_year: false,
        },
        trips,
    )
}
