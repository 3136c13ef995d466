pub mod catalog;
pub mod fileset;
pub mod metalake;
pub mod schema;
pub mod table;
pub mod topic;

use crate::error::{Error, Result};

pub(crate) fn require_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::InvalidRequest(format!(
            "\"{field}\" field is required and cannot be empty"
        )))
    } else {
        Ok(())
    }
}
