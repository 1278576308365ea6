use std::fmt;
use std::str::FromStr;

/// Identifier issued to a task when it is captured. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(i64);

impl TaskId {
    pub const FIRST: TaskId = TaskId(1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(TaskId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn status_marker(&self) -> &'static str {
        if self.completed {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub id: TaskId,
}

/// Result of applying a [`TaskEdit`] to an existing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub id: TaskId,
    pub title_changed: bool,
    pub description_changed: bool,
}

impl UpdateOutcome {
    pub fn changed(&self) -> bool {
        self.title_changed || self.description_changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub id: TaskId,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub id: TaskId,
    pub removed: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_parses_surrounding_whitespace_and_sign() {
        assert_eq!(" 42 ".parse::<TaskId>().unwrap(), TaskId::new(42));
        assert_eq!("+7".parse::<TaskId>().unwrap(), TaskId::new(7));
        assert_eq!("-3".parse::<TaskId>().unwrap(), TaskId::new(-3));
        assert!("four".parse::<TaskId>().is_err());
    }

    #[test]
    fn status_marker_reflects_completion() {
        let mut task = Task {
            id: TaskId::FIRST,
            title: "Ship".into(),
            description: String::new(),
            completed: false,
        };
        assert_eq!(task.status_marker(), "[ ]");
        task.completed = true;
        assert_eq!(task.status_marker(), "[X]");
    }
}
