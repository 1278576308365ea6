use thiserror::Error;

/// Normalized input for capturing a new task. Both fields are trimmed on
/// construction; internal whitespace is kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
}

impl TaskInput {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        }
    }

    pub fn require_title(&self) -> Result<(), CaptureError> {
        if self.title.is_empty() {
            return Err(CaptureError::EmptyTitle);
        }
        Ok(())
    }
}

/// Replacement values for an existing task. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskEdit {
    /// Build an edit from raw responses, where a blank response means "keep".
    pub fn from_responses(title: &str, description: &str) -> Self {
        Self {
            title: non_blank(title),
            description: non_blank(description),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Title cannot be empty.")]
    EmptyTitle,
}
