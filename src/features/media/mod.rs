pub mod storage;
pub mod urls;

pub use storage::{LocalObjectStorage, ObjectStorage};
