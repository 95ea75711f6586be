//! Domain model for task tracking.
//!
//! Tasks are built only through [`TaskFactory`], which validates the title
//! and status before an entity exists. Updates are expressed as a
//! [`TaskPatch`] of optional, already-validated fields.

mod error;
mod factory;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use factory::TaskFactory;
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{Task, TaskPatch};
