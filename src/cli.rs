use std::path::PathBuf;

use clap::{Parser, ValueHint};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive launch records dashboard", long_about = None)]
pub struct Cli {
    /// Launch table to load (.csv, .json or .parquet)
    #[arg(default_value = "data/spacex_launch_dash.csv", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Debug logging and the egui inspection window
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["launch-dash"]);
        assert_eq!(cli.data, PathBuf::from("data/spacex_launch_dash.csv"));
        assert!(!cli.debug);
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn debug_toggle_and_path() {
        let cli = Cli::parse_from(["launch-dash", "--debug", "data/launches.parquet"]);
        assert_eq!(cli.data, PathBuf::from("data/launches.parquet"));
        assert_eq!(cli.default_log_filter(), "debug");
    }
}
