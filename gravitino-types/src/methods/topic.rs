use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::require_not_blank;
use crate::{
    audit::AuditDto,
    error::{Error, Result},
    response::{check_code, check_not_blank, RestResponse},
    update::{ChangePayload, EntityChange, UpdateRequest},
};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDto {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub audit: AuditDto,
}

/// A change to the mutable fields of a topic. Topics cannot be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicChange {
    UpdateComment { new_comment: String },
    SetProperty { property: String, value: String },
    RemoveProperty { property: String },
}

impl TopicChange {
    #[must_use]
    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        TopicChange::UpdateComment {
            new_comment: new_comment.into(),
        }
    }

    #[must_use]
    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        TopicChange::SetProperty {
            property: property.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn remove_property(property: impl Into<String>) -> Self {
        TopicChange::RemoveProperty {
            property: property.into(),
        }
    }
}

impl Display for TopicChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicChange::UpdateComment { new_comment } => {
                write!(f, "UPDATETOPICCOMMENT {new_comment}")
            }
            TopicChange::SetProperty { property, value } => {
                write!(f, "SETPROPERTY {property} {value}")
            }
            TopicChange::RemoveProperty { property } => write!(f, "REMOVEPROPERTY {property}"),
        }
    }
}

impl EntityChange for TopicChange {
    const ENTITY: &'static str = "topic";

    fn to_update_request(&self) -> UpdateRequest {
        match self {
            TopicChange::UpdateComment { new_comment } => {
                UpdateRequest::update_comment(new_comment.as_str())
            }
            TopicChange::SetProperty { property, value } => {
                UpdateRequest::set_property(property.as_str(), value.as_str())
            }
            TopicChange::RemoveProperty { property } => {
                UpdateRequest::remove_property(property.as_str())
            }
        }
    }

    fn from_update_request(req: UpdateRequest) -> Result<Self> {
        let tag = req.type_tag();
        Ok(match ChangePayload::try_from(req)? {
            ChangePayload::Rename(new_name) => {
                return Err(Error::UnsupportedChange {
                    entity: Self::ENTITY,
                    change: format!("{tag} {new_name}"),
                })
            }
            ChangePayload::UpdateComment(new_comment) => TopicChange::UpdateComment { new_comment },
            ChangePayload::SetProperty(property, value) => {
                TopicChange::SetProperty { property, value }
            }
            ChangePayload::RemoveProperty(property) => TopicChange::RemoveProperty { property },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl TopicCreateRequest {
    pub fn validate(&self) -> Result<()> {
        require_not_blank("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResponse {
    #[serde(default)]
    pub code: i32,
    pub topic: TopicDto,
}

impl RestResponse for TopicResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        check_not_blank("topic 'name'", &self.topic.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_is_not_a_topic_change() {
        let err = TopicChange::from_update_request(UpdateRequest::rename("t2")).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedChange {
                entity: "topic",
                ..
            }
        ));
        assert_eq!(err.to_string(), "unsupported topic change `rename t2`");
    }

    #[test]
    fn other_changes_decode() {
        let change = TopicChange::set_property("retention.ms", "1000");
        let decoded = TopicChange::from_update_request(change.to_update_request()).unwrap();
        assert_eq!(decoded, change);
        assert_eq!(
            TopicChange::update_comment("c").to_string(),
            "UPDATETOPICCOMMENT c"
        );
    }
}
