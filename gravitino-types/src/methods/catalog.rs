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

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    StrumDisplay,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum CatalogType {
    #[strum(ascii_case_insensitive, serialize = "relational")]
    Relational,
    #[strum(ascii_case_insensitive, serialize = "fileset")]
    Fileset,
    #[strum(ascii_case_insensitive, serialize = "messaging")]
    Messaging,
    #[strum(ascii_case_insensitive, serialize = "unsupported")]
    Unsupported,
}

/// Family of operations a catalog can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum Capability {
    #[strum(serialize = "schema")]
    Schemas,
    #[strum(serialize = "table")]
    Tables,
    #[strum(serialize = "fileset")]
    Filesets,
    #[strum(serialize = "topic")]
    Topics,
}

impl CatalogType {
    #[must_use]
    pub fn supports(self, capability: Capability) -> bool {
        self != CatalogType::Unsupported
            && matches!(
                (self, capability),
                (_, Capability::Schemas)
                    | (CatalogType::Relational, Capability::Tables)
                    | (CatalogType::Fileset, Capability::Filesets)
                    | (CatalogType::Messaging, Capability::Topics)
            )
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDto {
    pub name: String,
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

impl CatalogDto {
    fn validate(&self) -> Result<()> {
        check_not_blank("catalog 'name'", &self.name)
    }
}

/// A change to the mutable fields of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogChange {
    Rename { new_name: String },
    UpdateComment { new_comment: String },
    SetProperty { property: String, value: String },
    RemoveProperty { property: String },
}

impl CatalogChange {
    #[must_use]
    pub fn rename(new_name: impl Into<String>) -> Self {
        CatalogChange::Rename {
            new_name: new_name.into(),
        }
    }

    #[must_use]
    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        CatalogChange::UpdateComment {
            new_comment: new_comment.into(),
        }
    }

    #[must_use]
    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        CatalogChange::SetProperty {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn remove_property(property: impl Into<String>) -> Self {
        CatalogChange::RemoveProperty {
            property: property.into(),
        }
    }
}

impl Display for CatalogChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogChange::Rename { new_name } => write!(f, "RENAMECATALOG {new_name}"),
            CatalogChange::UpdateComment { new_comment } => {
                write!(f, "UPDATECATALOGCOMMENT {new_comment}")
            }
            CatalogChange::SetProperty { property, value } => {
                write!(f, "SETPROPERTY {property} {value}")
            }
            CatalogChange::RemoveProperty { property } => write!(f, "REMOVEPROPERTY {property}"),
        }
    }
}

impl EntityChange for CatalogChange {
    const ENTITY: &'static str = "catalog";

    fn to_update_request(&self) -> UpdateRequest {
        match self {
            CatalogChange::Rename { new_name } => UpdateRequest::rename(new_name.as_str()),
            CatalogChange::UpdateComment { new_comment } => {
                UpdateRequest::update_comment(new_comment.as_str())
            }
            CatalogChange::SetProperty { property, value } => {
                UpdateRequest::set_property(property.as_str(), value.as_str())
            }
            CatalogChange::RemoveProperty { property } => {
                UpdateRequest::remove_property(property.as_str())
            }
        }
    }

    fn from_update_request(req: UpdateRequest) -> Result<Self> {
        Ok(match ChangePayload::try_from(req)? {
            ChangePayload::Rename(new_name) => CatalogChange::Rename { new_name },
            ChangePayload::UpdateComment(new_comment) => CatalogChange::UpdateComment { new_comment },
            ChangePayload::SetProperty(property, value) => {
                CatalogChange::SetProperty { property, value }
            }
            ChangePayload::RemoveProperty(property) => CatalogChange::RemoveProperty { property },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl CatalogCreateRequest {
    pub fn validate(&self) -> Result<()> {
        require_not_blank("name", &self.name)?;
        require_not_blank("provider", &self.provider)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub code: i32,
    pub catalog: CatalogDto,
}

impl RestResponse for CatalogResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        self.catalog.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListResponse {
    #[serde(default)]
    pub code: i32,
    pub catalogs: Vec<CatalogDto>,
}

impl RestResponse for CatalogListResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        self.catalogs.iter().try_for_each(CatalogDto::validate)
    }
}
