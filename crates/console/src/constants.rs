pub const MENU_TITLE: &str = "Welcome to my Todo App";
pub const MENU_RULE: &str = "========";
pub const PROMPT_CHOICE: &str = "Choose an option: ";

pub const INVALID_INTEGER: &str = "Invalid input. Please enter a valid integer.";
pub const INVALID_YES_NO: &str = "Invalid input. Please enter 'y' or 'n'.";

pub const PROMPT_TITLE: &str = "Title: ";
pub const PROMPT_DESCRIPTION: &str = "Description: ";
pub const PROMPT_NEW_TITLE: &str = "New title (press Enter to keep): ";
pub const PROMPT_NEW_DESCRIPTION: &str = "New description (press Enter to keep): ";
pub const PROMPT_UPDATE_ID: &str = "Enter task ID to update: ";
pub const PROMPT_DELETE_ID: &str = "Enter task ID to delete: ";
pub const PROMPT_TOGGLE_ID: &str = "Enter task ID to toggle: ";

pub const NO_TASKS: &str = "No tasks yet. Add one!";
pub const TASKS_HEADER: &str = "Tasks:";
pub const TASKS_RULE: &str = "------";

pub const TASK_UPDATED: &str = "Task updated.";
pub const TASK_COMPLETE: &str = "Task marked as complete.";
pub const TASK_INCOMPLETE: &str = "Task marked as incomplete.";
pub const DELETE_CANCELLED: &str = "Deletion cancelled.";

pub const FAREWELL: &str = "Goodbye! Have a nice day.";
pub const FAREWELL_CANCELLED: &str = "\nGoodbye!";
