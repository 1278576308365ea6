use crate::capture::{TaskEdit, TaskInput};
use crate::constants::{
    DELETE_CANCELLED, PROMPT_DESCRIPTION, PROMPT_NEW_DESCRIPTION, PROMPT_NEW_TITLE, PROMPT_TITLE,
    TASK_COMPLETE, TASK_INCOMPLETE, TASK_UPDATED,
};
use crate::io::{ConsoleError, LineIo};
use crate::menu;
use crate::model::TaskId;
use crate::prompt;
use crate::store::{StoreError, TaskStore};

/// Whether a delete asks for a yes/no confirmation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    #[default]
    Immediate,
    Confirm,
}

/// Prompt for a title and description and append a new task.
pub fn add_task<I: LineIo + ?Sized>(
    store: &mut TaskStore,
    io: &mut I,
) -> Result<TaskId, ConsoleError> {
    let mut input = loop {
        let input = TaskInput::new(&prompt::read_text(io, PROMPT_TITLE)?, "");
        match input.require_title() {
            Ok(()) => break input,
            Err(err) => io.write_line(&err.to_string())?,
        }
    };
    input.description = prompt::read_text(io, PROMPT_DESCRIPTION)?;

    let outcome = store.add(&input)?;
    io.write_line(&format!("Task added successfully (ID: {}).", outcome.id))?;
    Ok(outcome.id)
}

pub fn view_tasks<I: LineIo + ?Sized>(store: &TaskStore, io: &mut I) -> Result<(), ConsoleError> {
    menu::render_tasks(io, store.tasks())
}

/// Show the current values and apply any non-blank replacements.
/// Returns `false` only when the task does not exist.
pub fn update_task<I: LineIo + ?Sized>(
    store: &mut TaskStore,
    io: &mut I,
    id: TaskId,
) -> Result<bool, ConsoleError> {
    let Some(task) = store.find(id) else {
        return report_missing(io, id);
    };

    io.write_line(&format!("Current title: {}", task.title))?;
    io.write_line(&format!("Current description: {}", task.description))?;

    let new_title = prompt::read_text(io, PROMPT_NEW_TITLE)?;
    let new_description = prompt::read_text(io, PROMPT_NEW_DESCRIPTION)?;
    let edit = TaskEdit::from_responses(&new_title, &new_description);

    match store.update(id, &edit) {
        Ok(outcome) => {
            if outcome.changed() {
                io.write_line(TASK_UPDATED)?;
            }
            Ok(true)
        }
        Err(StoreError::NotFound(id)) => report_missing(io, id),
    }
}

pub fn delete_task<I: LineIo + ?Sized>(
    store: &mut TaskStore,
    io: &mut I,
    id: TaskId,
    mode: DeleteMode,
) -> Result<bool, ConsoleError> {
    if store.find(id).is_none() {
        return report_missing(io, id);
    }

    let prompt_text = format!("Delete task {}? (y/n): ", id);
    if mode == DeleteMode::Confirm && !prompt::confirm(io, &prompt_text)? {
        tracing::debug!(task_id = id.get(), "delete declined");
        io.write_line(DELETE_CANCELLED)?;
        return Ok(false);
    }

    match store.delete(id) {
        Ok(_) => Ok(true),
        Err(StoreError::NotFound(id)) => report_missing(io, id),
    }
}

pub fn toggle_task<I: LineIo + ?Sized>(
    store: &mut TaskStore,
    io: &mut I,
    id: TaskId,
) -> Result<bool, ConsoleError> {
    match store.toggle(id) {
        Ok(outcome) => {
            let message = if outcome.completed {
                TASK_COMPLETE
            } else {
                TASK_INCOMPLETE
            };
            io.write_line(message)?;
            Ok(true)
        }
        Err(StoreError::NotFound(id)) => report_missing(io, id),
    }
}

fn report_missing<I: LineIo + ?Sized>(io: &mut I, id: TaskId) -> Result<bool, ConsoleError> {
    tracing::debug!(task_id = id.get(), "task lookup missed");
    io.write_line(&StoreError::NotFound(id).to_string())?;
    Ok(false)
}
