pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod io;
pub mod menu;
pub mod prompt;

use std::io as stdio;

use anyhow::{Context, Result};

pub use todo_core as core;
pub use todo_core::capture;
pub use todo_core::model;
pub use todo_core::store;

pub use app::{App, ExitReason};
pub use todo_core::AppConfig;

/// Run the interactive menu on stdin/stdout until the user exits.
pub fn run(config: AppConfig) -> Result<ExitReason> {
    let console = io::Console::new(stdio::stdin().lock(), stdio::stdout());
    let mut app = App::new(&config, console);
    app.run().context("console session failed")
}
