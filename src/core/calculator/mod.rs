pub mod distance;
pub mod significance;
