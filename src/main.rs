use std::process::ExitCode;

mod config;
mod error;
mod library;
mod reconcile;
mod runtime;
mod tags;

fn main() -> ExitCode {
    runtime::run()
}
