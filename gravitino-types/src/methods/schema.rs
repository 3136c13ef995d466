use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::require_not_blank;
use crate::{
    audit::AuditDto,
    error::Result,
    response::{check_code, check_not_blank, RestResponse},
    update::{ChangePayload, EntityChange, UpdateRequest},
};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDto {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

/// A change to the mutable fields of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaChange {
    Rename { new_name: String },
    UpdateComment { new_comment: String },
    SetProperty { property: String, value: String },
    RemoveProperty { property: String },
}

impl SchemaChange {
    #[must_use]
    pub fn rename(new_name: impl Into<String>) -> Self {
        SchemaChange::Rename {
            new_name: new_name.into(),
        }
    }

    #[must_use]
    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        SchemaChange::UpdateComment {
            new_comment: new_comment.into(),
        }
    }

    #[must_use]
    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        SchemaChange::SetProperty {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn remove_property(property: impl Into<String>) -> Self {
        SchemaChange::RemoveProperty {
            property: property.into(),
        }
    }
}

impl Display for SchemaChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaChange::Rename { new_name } => write!(f, "RENAMESCHEMA {new_name}"),
            SchemaChange::UpdateComment { new_comment } => {
                write!(f, "UPDATESCHEMACOMMENT {new_comment}")
            }
            SchemaChange::SetProperty { property, value } => {
                write!(f, "SETPROPERTY {property} {value}")
            }
            SchemaChange::RemoveProperty { property } => write!(f, "REMOVEPROPERTY {property}"),
        }
    }
}

impl EntityChange for SchemaChange {
    const ENTITY: &'static str = "schema";

    fn to_update_request(&self) -> UpdateRequest {
        match self {
            SchemaChange::Rename { new_name } => UpdateRequest::rename(new_name.as_str()),
            SchemaChange::UpdateComment { new_comment } => {
                UpdateRequest::update_comment(new_comment.as_str())
            }
            SchemaChange::SetProperty { property, value } => {
                UpdateRequest::set_property(property.as_str(), value.as_str())
            }
            SchemaChange::RemoveProperty { property } => {
                UpdateRequest::remove_property(property.as_str())
            }
        }
    }

    fn from_update_request(req: UpdateRequest) -> Result<Self> {
        Ok(match ChangePayload::try_from(req)? {
            ChangePayload::Rename(new_name) => SchemaChange::Rename { new_name },
            ChangePayload::UpdateComment(new_comment) => SchemaChange::UpdateComment { new_comment },
            ChangePayload::SetProperty(property, value) => {
                SchemaChange::SetProperty { property, value }
            }
            ChangePayload::RemoveProperty(property) => SchemaChange::RemoveProperty { property },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl SchemaCreateRequest {
    pub fn validate(&self) -> Result<()> {
        require_not_blank("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub code: i32,
    pub schema: SchemaDto,
}

impl RestResponse for SchemaResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        check_not_blank("schema 'name'", &self.schema.name)
    }
}
