use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumString};

use super::require_not_blank;
use crate::{
    audit::AuditDto,
    error::Result,
    response::{check_code, check_not_blank, RestResponse},
    update::{ChangePayload, EntityChange, UpdateRequest},
};

/// Whether the data under a fileset's location is owned by Gravitino.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    StrumDisplay,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum FilesetType {
    /// Data is deleted together with the fileset.
    #[default]
    #[strum(ascii_case_insensitive, serialize = "managed")]
    Managed,
    /// Data outlives the fileset.
    #[strum(ascii_case_insensitive, serialize = "external")]
    External,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesetDto {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub fileset_type: FilesetType,
    pub storage_location: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

/// A change to the mutable fields of a fileset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilesetChange {
    Rename { new_name: String },
    UpdateComment { new_comment: String },
    SetProperty { property: String, value: String },
    RemoveProperty { property: String },
}

impl FilesetChange {
    #[must_use]
    pub fn rename(new_name: impl Into<String>) -> Self {
        FilesetChange::Rename {
            new_name: new_name.into(),
        }
    }

    #[must_use]
    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        FilesetChange::UpdateComment {
            new_comment: new_comment.into(),
        }
    }

    #[must_use]
    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        FilesetChange::SetProperty {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn remove_property(property: impl Into<String>) -> Self {
        FilesetChange::RemoveProperty {
            property: property.into(),
        }
    }
}

impl Display for FilesetChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilesetChange::Rename { new_name } => write!(f, "RENAMEFILESET {new_name}"),
            FilesetChange::UpdateComment { new_comment } => {
                write!(f, "UPDATEFILESETCOMMENT {new_comment}")
            }
            FilesetChange::SetProperty { property, value } => {
                write!(f, "SETPROPERTY {property} {value}")
            }
            FilesetChange::RemoveProperty { property } => write!(f, "REMOVEPROPERTY {property}"),
        }
    }
}

impl EntityChange for FilesetChange {
    const ENTITY: &'static str = "fileset";

    fn to_update_request(&self) -> UpdateRequest {
        match self {
            FilesetChange::Rename { new_name } => UpdateRequest::rename(new_name.as_str()),
            FilesetChange::UpdateComment { new_comment } => {
                UpdateRequest::update_comment(new_comment.as_str())
            }
            FilesetChange::SetProperty { property, value } => {
                UpdateRequest::set_property(property.as_str(), value.as_str())
            }
            FilesetChange::RemoveProperty { property } => {
                UpdateRequest::remove_property(property.as_str())
            }
        }
    }

    fn from_update_request(req: UpdateRequest) -> Result<Self> {
        Ok(match ChangePayload::try_from(req)? {
            ChangePayload::Rename(new_name) => FilesetChange::Rename { new_name },
            ChangePayload::UpdateComment(new_comment) => FilesetChange::UpdateComment { new_comment },
            ChangePayload::SetProperty(property, value) => {
                FilesetChange::SetProperty { property, value }
            }
            ChangePayload::RemoveProperty(property) => FilesetChange::RemoveProperty { property },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesetCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub fileset_type: FilesetType,
    /// Left empty for managed filesets to let the server pick a location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl FilesetCreateRequest {
    pub fn validate(&self) -> Result<()> {
        require_not_blank("name", &self.name)?;
        if let Some(location) = &self.storage_location {
            require_not_blank("storageLocation", location)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesetResponse {
    #[serde(default)]
    pub code: i32,
    pub fileset: FilesetDto,
}

impl RestResponse for FilesetResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        check_not_blank("fileset 'name'", &self.fileset.name)?;
        check_not_blank("fileset 'storageLocation'", &self.fileset.storage_location)
    }
}
