use crate::commands::{self, DeleteMode};
use crate::config::AppConfig;
use crate::constants::{
    FAREWELL, FAREWELL_CANCELLED, PROMPT_DELETE_ID, PROMPT_TOGGLE_ID, PROMPT_UPDATE_ID,
};
use crate::io::{ConsoleError, LineIo};
use crate::menu::MenuChoice;
use crate::prompt;
use crate::store::TaskStore;


/// How the main loop ended. Both are successful exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Requested,
    Cancelled,
}

enum Flow {
    Continue,
    Exit,
}

/// Owns the task store for the lifetime of the session and drives the menu.
pub struct App<I> {
    store: TaskStore,
    io: I,
    delete_mode: DeleteMode,
}

impl<I: LineIo> App<I> {
    pub fn new(config: &AppConfig, io: I) -> Self {
        let delete_mode = if config.confirm_delete() {
            DeleteMode::Confirm
        } else {
            DeleteMode::Immediate
        };
        Self {
            store: TaskStore::new(),
            io,
            delete_mode,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    /// Run menu cycles until the user exits or input is cancelled.
    pub fn run(&mut self) -> Result<ExitReason, ConsoleError> {
        loop {
            match self.cycle() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.io.write_line(FAREWELL)?;
                    tracing::debug!(tasks = self.store.len(), "session ended by user");
                    return Ok(ExitReason::Requested);
                }
                Err(ConsoleError::Cancelled) => {
                    self.io.write_line(FAREWELL_CANCELLED)?;
                    tracing::debug!(tasks = self.store.len(), "session cancelled");
                    return Ok(ExitReason::Cancelled);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn cycle(&mut self) -> Result<Flow, ConsoleError> {
        let choice = prompt::read_menu_choice(&mut self.io)?;
        tracing::debug!(choice = choice.label(), "menu selection");
        self.dispatch(choice)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, ConsoleError> {
        let io = &mut self.io;
        let store = &mut self.store;
        match choice {
            MenuChoice::Add => {
                commands::add_task(store, io)?;
            }
            MenuChoice::View => commands::view_tasks(store, io)?,
            MenuChoice::Update => {
                let id = prompt::read_task_id(io, PROMPT_UPDATE_ID)?;
                commands::update_task(store, io, id)?;
            }
            MenuChoice::Delete => {
                let id = prompt::read_task_id(io, PROMPT_DELETE_ID)?;
                commands::delete_task(store, io, id, self.delete_mode)?;
            }
            MenuChoice::Toggle => {
                let id = prompt::read_task_id(io, PROMPT_TOGGLE_ID)?;
                commands::toggle_task(store, io, id)?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}
