use thiserror::Error;

use crate::capture::{CaptureError, TaskEdit, TaskInput};
use crate::model::{AddOutcome, DeleteResult, Task, TaskId, ToggleOutcome, UpdateOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Task with ID {0} not found.")]
    NotFound(TaskId),
}

/// In-memory task list for a single run. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    // Highest identifier handed out so far, kept so a deleted maximum is not reissued.
    last_issued: Option<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Identifier the next captured task will receive: one past the highest
    /// identifier present or previously issued, or 1 for a fresh store.
    pub fn next_id(&self) -> TaskId {
        self.tasks
            .iter()
            .map(|task| task.id)
            .chain(self.last_issued)
            .max()
            .map_or(TaskId::FIRST, TaskId::next)
    }

    pub fn add(&mut self, input: &TaskInput) -> Result<AddOutcome, CaptureError> {
        input.require_title()?;
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            completed: false,
        });
        self.last_issued = Some(id);
        tracing::debug!(task_id = id.get(), "task added");
        Ok(AddOutcome { id })
    }

    pub fn update(&mut self, id: TaskId, edit: &TaskEdit) -> Result<UpdateOutcome, StoreError> {
        let task = self.find_mut(id)?;
        let mut outcome = UpdateOutcome {
            id,
            title_changed: false,
            description_changed: false,
        };
        if let Some(title) = edit.title.as_deref() {
            task.title = title.trim().to_string();
            outcome.title_changed = true;
        }
        if let Some(description) = edit.description.as_deref() {
            task.description = description.trim().to_string();
            outcome.description_changed = true;
        }
        tracing::debug!(
            task_id = id.get(),
            title_changed = outcome.title_changed,
            description_changed = outcome.description_changed,
            "task updated"
        );
        Ok(outcome)
    }

    pub fn toggle(&mut self, id: TaskId) -> Result<ToggleOutcome, StoreError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        tracing::debug!(task_id = id.get(), completed = task.completed, "task toggled");
        Ok(ToggleOutcome {
            id,
            completed: task.completed,
        })
    }

    pub fn delete(&mut self, id: TaskId) -> Result<DeleteResult, StoreError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.tasks.remove(position);
        tracing::debug!(task_id = id.get(), remaining = self.tasks.len(), "task deleted");
        Ok(DeleteResult { id, removed })
    }
}
