pub use todo_console::app;
pub use todo_console::cli;
pub use todo_console::commands;
pub use todo_console::config;
pub use todo_console::constants;
pub use todo_console::menu;
pub use todo_console::prompt;
pub use todo_console::AppConfig;

pub use todo_core as core;
pub use todo_core::capture;
pub use todo_core::model;
pub use todo_core::store;

pub use todo_console as console;
