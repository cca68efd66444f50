//! Rover communication cipher command-line tool.
//!
//! Set `RUST_LOG=debug` to see grid construction, `RUST_LOG=trace` to see every
//! substituted group.

use std::{io, process};

use clap::Parser as _;
use rovercomm_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    if let Err(e) = rovercomm_cli::run(&args, stdin, &mut stdout, &mut stderr) {
        log::error!("{e}");
        eprintln!("rovercomm: {e}");
        process::exit(1);
    }
}
