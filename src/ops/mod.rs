pub mod task_ops;

pub use task_ops::*;
