//! Lightweight task suggestions from text patterns.
//!
//! Construct one [`TaskIntelligence`] and hand it to whoever needs it; the
//! pattern set is compiled once in [`TaskIntelligence::new`].

pub mod suggest;

pub use suggest::{Suggestion, TaskIntelligence};
