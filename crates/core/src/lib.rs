pub mod capture;
pub mod config;
pub mod model;
pub mod store;

pub use capture::{CaptureError, TaskEdit, TaskInput};
pub use config::{AppConfig, ConfigOverrides};
pub use model::*;
pub use store::{StoreError, TaskStore};
