use clap::Parser;

/// Command-line interface definition for bikestats
/// Interactive CLI to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: filter by city, month, and weekday, then browse descriptive statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory containing the city dataset files
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,

    /// Rows shown per page when browsing raw trips
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,
}
