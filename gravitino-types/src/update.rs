use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A change that can be applied to an entity through its update endpoint.
///
/// Encoding into an [`UpdateRequest`] is total. Decoding can fail when the
/// request misses a required field or when the entity has no matching
/// change variant.
pub trait EntityChange: Sized {
    /// Entity name used in diagnostics, e.g. `catalog`.
    const ENTITY: &'static str;

    fn to_update_request(&self) -> UpdateRequest;

    fn from_update_request(req: UpdateRequest) -> Result<Self>;
}

/// Wire form of a single change, discriminated by the `@type` field.
///
/// Payload fields are optional so that a `null` or absent value coming from
/// the wire is caught by [`UpdateRequest::validate`] instead of by serde.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum UpdateRequest {
    #[serde(rename = "rename", rename_all = "camelCase")]
    Rename { new_name: Option<String> },
    #[serde(rename = "updateComment", rename_all = "camelCase")]
    UpdateComment { new_comment: Option<String> },
    #[serde(rename = "setProperty")]
    SetProperty {
        property: Option<String>,
        value: Option<String>,
    },
    #[serde(rename = "removeProperty")]
    RemoveProperty { property: Option<String> },
}

fn required(field: &str, value: Option<&String>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::InvalidRequest(format!(
            "\"{field}\" field is required and cannot be empty"
        ))),
    }
}

impl UpdateRequest {
    pub fn rename(new_name: impl Into<String>) -> Self {
        UpdateRequest::Rename {
            new_name: Some(new_name.into()),
        }
    }

    pub fn update_comment(new_comment: impl Into<String>) -> Self {
        UpdateRequest::UpdateComment {
            new_comment: Some(new_comment.into()),
        }
    }

    pub fn set_property(property: impl Into<String>, value: impl Into<String>) -> Self {
        UpdateRequest::SetProperty {
            property: Some(property.into()),
            value: Some(value.into()),
        }
    }

    pub fn remove_property(property: impl Into<String>) -> Self {
        UpdateRequest::RemoveProperty {
            property: Some(property.into()),
        }
    }

    /// Wire discriminator of this request.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            UpdateRequest::Rename { .. } => "rename",
            UpdateRequest::UpdateComment { .. } => "updateComment",
            UpdateRequest::SetProperty { .. } => "setProperty",
            UpdateRequest::RemoveProperty { .. } => "removeProperty",
        }
    }

    /// Checks required fields. A property value may be empty but not null.
    pub fn validate(&self) -> Result<()> {
        match self {
            UpdateRequest::Rename { new_name } => {
                required("newName", new_name.as_ref())?;
            }
            UpdateRequest::UpdateComment { new_comment } => {
                required("newComment", new_comment.as_ref())?;
            }
            UpdateRequest::SetProperty { property, value } => {
                required("property", property.as_ref())?;
                if value.is_none() {
                    return Err(Error::InvalidRequest(
                        "\"value\" field is required and cannot be null".to_string(),
                    ));
                }
            }
            UpdateRequest::RemoveProperty { property } => {
                required("property", property.as_ref())?;
            }
        }
        Ok(())
    }

    /// Decodes this request into a change of entity `C`.
    pub fn into_change<C: EntityChange>(self) -> Result<C> {
        C::from_update_request(self)
    }
}

/// Payload of a decoded change, shared by every entity kind.
pub(crate) enum ChangePayload {
    Rename(String),
    UpdateComment(String),
    SetProperty(String, String),
    RemoveProperty(String),
}

impl TryFrom<UpdateRequest> for ChangePayload {
    type Error = Error;

    fn try_from(req: UpdateRequest) -> Result<Self> {
        req.validate()?;
        let missing = || Error::InvalidRequest("update request is missing its payload".into());
        Ok(match req {
            UpdateRequest::Rename { new_name } => {
                ChangePayload::Rename(new_name.ok_or_else(missing)?)
            }
            UpdateRequest::UpdateComment { new_comment } => {
                ChangePayload::UpdateComment(new_comment.ok_or_else(missing)?)
            }
            UpdateRequest::SetProperty { property, value } => ChangePayload::SetProperty(
                property.ok_or_else(missing)?,
                value.ok_or_else(missing)?,
            ),
            UpdateRequest::RemoveProperty { property } => {
                ChangePayload::RemoveProperty(property.ok_or_else(missing)?)
            }
        })
    }
}

/// A batch of changes sent to an entity's update endpoint in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatesRequest {
    #[serde(default)]
    pub updates: Vec<UpdateRequest>,
}

impl UpdatesRequest {
    #[must_use]
    pub fn new(updates: Vec<UpdateRequest>) -> Self {
        Self { updates }
    }

    pub fn from_changes<C: EntityChange>(changes: &[C]) -> Self {
        Self {
            updates: changes.iter().map(EntityChange::to_update_request).collect(),
        }
    }

    /// Fails on an empty batch, otherwise on the first invalid member.
    pub fn validate(&self) -> Result<()> {
        if self.updates.is_empty() {
            return Err(Error::EmptyBatch);
        }
        self.updates.iter().try_for_each(UpdateRequest::validate)
    }

    /// Decodes every member into a change of entity `C`.
    pub fn into_changes<C: EntityChange>(self) -> Result<Vec<C>> {
        self.updates
            .into_iter()
            .map(UpdateRequest::into_change)
            .collect()
    }
}
