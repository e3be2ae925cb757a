//! Raw-data paging: show the filtered trips a page at a time on request.

use crate::cli::prompt;
use crate::data::table::TripTable;
use crate::errors::AppResult;
use crate::models::trip::Trip;
use crate::utils::table::Table;
use std::io::BufRead;

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

pub fn browse_raw(input: &mut impl BufRead, table: &TripTable, page_size: usize) -> AppResult<()> {
    let page_size = page_size.max(1);
    let trips = table.trips();
    let mut shown = 0;

    while shown < trips.len() {
        let question = if shown == 0 {
            format!("\nWould you like to see {page_size} lines of raw trip data? (yes/no): ")
        } else {
            format!("Would you like to see {page_size} more lines? (yes/no): ")
        };
        if !prompt::confirm(input, &question)? {
            break;
        }

        let page_end = (shown + page_size).min(trips.len());
        print!("{}", render_page(table, &trips[shown..page_end]));
        shown = page_end;
    }

    Ok(())
}

fn render_page(table: &TripTable, trips: &[Trip]) -> String {
    let schema = table.schema();

    let mut headers = vec![
        "Start Time",
        "End Time",
        "Duration (s)",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if schema.has_gender {
        headers.push("Gender");
    }
    if schema.has_birth_year {
        headers.push("Birth Year");
    }

    let mut page = Table::new(&headers);
    for trip in trips {
        let mut row = vec![
            trip.start_time.format(TIMESTAMP_DISPLAY).to_string(),
            trip.end_time.format(TIMESTAMP_DISPLAY).to_string(),
            format!("{}", trip.duration_secs.trunc() as i64),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone(),
        ];
        if schema.has_gender {
            row.push(trip.gender.clone().unwrap_or_else(|| "--".to_string()));
        }
        if schema.has_birth_year {
            row.push(
                trip.birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "--".to_string()),
            );
        }
        page.add_row(row);
    }

    page.render()
}
