use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use crate::{
    audit::AuditDto,
    error::{Error, Result},
    response::{check_code, check_not_blank, RestResponse},
};

fn default_nullable() -> bool {
    true
}

/// A table column. The data type is kept in its raw JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: Value,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub auto_increment: bool,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDto {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub columns: Vec<ColumnDto>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    #[serde(default)]
    pub code: i32,
    pub table: TableDto,
}

impl RestResponse for TableResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        check_not_blank("table 'name'", &self.table.name)?;
        if self.table.columns.is_empty() {
            return Err(Error::InvalidResponse(
                "table 'columns' must not be null or empty".to_string(),
            ));
        }
        Ok(())
    }
}
