pub mod bookmark;
pub mod category;
pub mod location;
pub mod priority;
pub mod task;
