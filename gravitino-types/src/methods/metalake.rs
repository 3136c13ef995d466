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
pub struct MetalakeDto {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

impl MetalakeDto {
    fn validate(&self) -> Result<()> {
        check_not_blank("metalake 'name'", &self.name)
    }
}

/// A change to the mutable fields of a metalake.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetalakeChange {
    Rename { new_name: String },
    UpdateComment { new_comment: String },
    SetProperty { property: String, value: String },
    RemoveProperty { property: String },
}

impl MetalakeChange {
    #[must_use]
    pub fn rename(new_name: impl Into<String>) -> Self {
        MetalakeChange::Rename {
            new_name: new_name.into(),
        }
    }

    #[must_use]
    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        MetalakeChange::UpdateComment {
            new_comment: new_comment.into(),
        }
    }

    #[must_use]
    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        MetalakeChange::SetProperty {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn remove_property(property: impl Into<String>) -> Self {
        MetalakeChange::RemoveProperty {
            property: property.into(),
        }
    }
}

impl Display for MetalakeChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetalakeChange::Rename { new_name } => write!(f, "RENAMEMETALAKE {new_name}"),
            MetalakeChange::UpdateComment { new_comment } => {
                write!(f, "UPDATEMETALAKECOMMENT {new_comment}")
            }
            MetalakeChange::SetProperty { property, value } => {
                write!(f, "SETPROPERTY {property} {value}")
            }
            MetalakeChange::RemoveProperty { property } => write!(f, "REMOVEPROPERTY {property}"),
        }
    }
}

impl EntityChange for MetalakeChange {
    const ENTITY: &'static str = "metalake";

    fn to_update_request(&self) -> UpdateRequest {
        match self {
            MetalakeChange::Rename { new_name } => UpdateRequest::rename(new_name.as_str()),
            MetalakeChange::UpdateComment { new_comment } => {
                UpdateRequest::update_comment(new_comment.as_str())
            }
            MetalakeChange::SetProperty { property, value } => {
                UpdateRequest::set_property(property.as_str(), value.as_str())
            }
            MetalakeChange::RemoveProperty { property } => {
                UpdateRequest::remove_property(property.as_str())
            }
        }
    }

    fn from_update_request(req: UpdateRequest) -> Result<Self> {
        Ok(match ChangePayload::try_from(req)? {
            ChangePayload::Rename(new_name) => MetalakeChange::Rename { new_name },
            ChangePayload::UpdateComment(new_comment) => {
                MetalakeChange::UpdateComment { new_comment }
            }
            ChangePayload::SetProperty(property, value) => {
                MetalakeChange::SetProperty { property, value }
            }
            ChangePayload::RemoveProperty(property) => MetalakeChange::RemoveProperty { property },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalakeCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl MetalakeCreateRequest {
    pub fn validate(&self) -> Result<()> {
        require_not_blank("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalakeResponse {
    #[serde(default)]
    pub code: i32,
    pub metalake: MetalakeDto,
}

impl RestResponse for MetalakeResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        self.metalake.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalakeListResponse {
    #[serde(default)]
    pub code: i32,
    pub metalakes: Vec<MetalakeDto>,
}

impl RestResponse for MetalakeListResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        self.metalakes.iter().try_for_each(MetalakeDto::validate)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{error::Error, update::UpdatesRequest};

    #[test]
    fn parse_metalake_with_null_properties() {
        let resp: MetalakeResponse = serde_json::from_str(
            r#"{"code":0,"metalake":{"name":"lake","comment":null,"properties":null,"audit":{"creator":"admin"}}}"#,
        )
        .unwrap();
        resp.validate().unwrap();
        assert!(resp.metalake.properties.is_empty());
        assert!(resp.metalake.comment.is_none());
    }

    #[test]
    fn list_response_validates_every_member() {
        let resp: MetalakeListResponse = serde_json::from_str(
            r#"{"code":0,"metalakes":[{"name":"a","audit":{}},{"name":"","audit":{}}]}"#,
        )
        .unwrap();
        assert!(matches!(resp.validate(), Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn render_changes() {
        assert_eq!(MetalakeChange::rename("b").to_string(), "RENAMEMETALAKE b");
        assert_eq!(
            MetalakeChange::update_comment("hi").to_string(),
            "UPDATEMETALAKECOMMENT hi"
        );
    }

    #[test]
    fn create_request_requires_name() {
        let req = MetalakeCreateRequest {
            name: " ".into(),
            comment: None,
            properties: HashMap::new(),
        };
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn re_encoding_is_idempotent() {
        let changes = [
            MetalakeChange::rename("a"),
            MetalakeChange::update_comment("c"),
            MetalakeChange::set_property("k", ""),
            MetalakeChange::remove_property("k"),
        ];
        for change in &changes {
            let encoded = change.to_update_request();
            let decoded = MetalakeChange::from_update_request(encoded.clone()).unwrap();
            assert_eq!(decoded, *change);
            assert_eq!(decoded.to_update_request(), encoded);
        }

        let decoded: Vec<MetalakeChange> = UpdatesRequest::from_changes(&changes)
            .into_changes()
            .unwrap();
        assert_eq!(decoded, changes);
    }

    #[test]
    fn structural_equality() {
        let mut set = HashSet::new();
        set.insert(MetalakeChange::set_property("k", "v"));
        set.insert(MetalakeChange::set_property("k", "v"));
        set.insert(MetalakeChange::set_property("k", "w"));
        set.insert(MetalakeChange::remove_property("k"));
        set.insert(MetalakeChange::rename("k"));
        set.insert(MetalakeChange::update_comment("k"));
        assert_eq!(set.len(), 5);
        assert_ne!(MetalakeChange::rename("k"), MetalakeChange::update_comment("k"));
    }
}
