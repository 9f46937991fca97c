pub mod cli;
mod domain;
mod errors;
mod prelude;
mod store;

use std::process::exit;

use crate::prelude::run_app;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
