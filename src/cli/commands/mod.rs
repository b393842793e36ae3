pub mod add;
pub mod backup;
pub mod bookmark;
pub mod config;
pub mod db;
pub mod del;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod locate;
pub mod log;
pub mod nearby;
pub mod suggest;
pub mod watch;

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::priority::Priority;

pub(crate) fn parse_category(code: &Option<String>) -> AppResult<Option<Category>> {
    code.as_deref()
        .map(|c| Category::from_code(c).ok_or_else(|| AppError::InvalidCategory(c.to_string())))
        .transpose()
}

pub(crate) fn parse_priority(code: &Option<String>) -> AppResult<Option<Priority>> {
    code.as_deref()
        .map(|p| Priority::from_code(p).ok_or_else(|| AppError::InvalidPriority(p.to_string())))
        .transpose()
}
