use std::fmt;

use crate::constants::{MENU_RULE, MENU_TITLE, NO_TASKS, TASKS_HEADER, TASKS_RULE};
use crate::io::{ConsoleError, LineIo};
use crate::model::Task;

/// A validated main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Toggle,
    Exit,
}

impl MenuChoice {
    /// Display order of the menu.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Toggle,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Toggle => 5,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Task",
            MenuChoice::View => "View Tasks",
            MenuChoice::Update => "Update Task",
            MenuChoice::Delete => "Delete Task",
            MenuChoice::Toggle => "Mark as Complete/Incomplete",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(value)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

pub fn render_menu<I: LineIo + ?Sized>(io: &mut I) -> Result<(), ConsoleError> {
    io.write_line("")?;
    io.write_line(MENU_TITLE)?;
    io.write_line(MENU_RULE)?;
    for choice in MenuChoice::ALL {
        io.write_line(&choice.to_string())?;
    }
    Ok(())
}

pub fn format_task_line(task: &Task) -> String {
    format!(
        "{}. {} {} - {}",
        task.id,
        task.status_marker(),
        task.title,
        task.description
    )
}

pub fn render_tasks<I: LineIo + ?Sized>(io: &mut I, tasks: &[Task]) -> Result<(), ConsoleError> {
    if tasks.is_empty() {
        return io.write_line(NO_TASKS);
    }

    io.write_line(TASKS_HEADER)?;
    io.write_line(TASKS_RULE)?;
    for task in tasks {
        io.write_line(&format_task_line(task))?;
    }
    Ok(())
}
