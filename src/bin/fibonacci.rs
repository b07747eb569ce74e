//! Fibonacci printer - reads a length n from stdin and prints the first
//! n terms of the Fibonacci sequence.

use std::io;

use clap::Parser;
use console_exercises::{common, fib};

#[derive(Parser)]
#[command(name = "fibonacci", about = "Print the first n Fibonacci terms")]
#[command(version, long_about = None)]
struct Cli {}

fn main() {
    common::logging::init();
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = fib::run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
