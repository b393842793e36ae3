pub mod add;
pub mod backup;
pub mod bookmark;
pub mod calculator;
pub mod complete;
pub mod config;
pub mod del;
pub mod edit;
pub mod locate;
pub mod log;
pub mod nearby;
pub mod runtime;
pub mod watch;
