use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use chrono::Local;
use clap::Parser;
use tracing::error;

use crate::reconcile::{self, ProcessingResult};
use crate::tags::{self, TagStore};

mod cli;
mod logging;
mod output;
mod settings;

use cli::Cli;

/// Run one pass on a worker thread, handing each log line to `emit` as it arrives.
///
/// Returns `None` only if the worker panicked.
fn run_pass(
    dir: PathBuf,
    album: String,
    store: Box<dyn TagStore + Send>,
    mut emit: impl FnMut(String),
) -> Option<ProcessingResult> {
    let (mut tx, rx) = mpsc::channel::<String>();

    let worker = thread::spawn(move || {
        reconcile::process_directory(&dir, &album, store.as_ref(), &mut tx)
    });

    // Ends when the worker drops its sender.
    for line in rx {
        emit(line);
    }

    worker.join().ok()
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let settings = settings::load_settings(cli.config.as_deref());
    logging::init(&settings.log);

    let album = match reconcile::validate_album(&cli.album) {
        Ok(album) => album,
        Err(e) => {
            eprintln!("audiosort: {e}");
            return ExitCode::from(2);
        }
    };

    let store = match tags::store_from_settings(&settings.tags) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("audiosort: {e}");
            return ExitCode::from(2);
        }
    };

    let timestamps = settings.output.timestamps && !cli.no_timestamps;
    let stdout = io::stdout();
    let print = |message: &str| {
        let time = timestamps.then(|| Local::now().time());
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", output::format_line(message, time));
    };

    print("Starting processing...");
    print(&format!("Directory: {}", cli.directory.display()));
    print(&format!("Book ID: '{album}'"));
    print("");

    let Some(result) = run_pass(cli.directory, album, store, |line| print(&line)) else {
        error!("processing worker panicked");
        eprintln!("audiosort: processing stopped unexpectedly");
        return ExitCode::FAILURE;
    };

    for line in output::summary_lines(&result) {
        print(&line);
    }

    if result.errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
