pub mod task;
pub mod user;

pub use task::{StatusUpdate, Task, TaskInput, TaskStatus, TaskUpdate};
pub use user::{User, UserUpdate};
