mod app;
mod form;

use std::fs::File;
use std::time::Instant;

use formdom::Terminal;
use signup_lib::Validator;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;

fn main() {
    let log_file = File::create("signup-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> std::io::Result<()> {
    let mut term = Terminal::new()?;
    let mut app = App::new(Validator::default());

    log::info!("signup form started");

    while app.running() {
        let root = form::build(&app);
        term.draw(&root)?;

        let now = Instant::now();
        let raw = term.poll(app.poll_timeout(now))?;
        app.process(&raw, &root, term.hits(), Instant::now());
    }

    Ok(())
}
