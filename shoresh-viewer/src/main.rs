//! Standalone binary for the shoresh interactive viewer.
//! Usage:
//!   shoreshv <verses> <highlights>

mod viewer;

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("shoreshv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for root-highlighted Hebrew verse texts")
        .arg(
            Arg::new("verses")
                .help("Path to the verse text file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("highlights")
                .help("Path to the highlight catalog (JSON)")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let verses = matches.get_one::<String>("verses").unwrap();
    let highlights = matches.get_one::<String>("highlights").unwrap();
    if let Err(err) = viewer::viewer::run_viewer(PathBuf::from(verses), PathBuf::from(highlights)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
