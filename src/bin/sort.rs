//! Array sorter - reads a count and that many integers from stdin, then
//! prints the array before and after an ascending sort.

use std::io;

use clap::Parser;
use console_exercises::{common, sort};

#[derive(Parser)]
#[command(name = "sort", about = "Read an array and sort it ascending")]
#[command(version, long_about = None)]
struct Cli {}

fn main() {
    common::logging::init();
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = sort::run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
