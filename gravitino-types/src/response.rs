use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    ident::NameIdentifier,
};

/// Envelope returned by a successful REST call.
///
/// Implementors run structural checks after deserialization so that a body
/// which parsed but violates the server contract becomes an
/// [`Error::InvalidResponse`] instead of a missing value later on.
pub trait RestResponse: DeserializeOwned {
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] if the code is not zero or if a
    /// mandatory field of the payload is missing.
    fn validate(&self) -> Result<()>;
}

pub(crate) fn check_code(code: i32) -> Result<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(Error::InvalidResponse(format!(
            "unexpected response code `{code}`"
        )))
    }
}

pub(crate) fn check_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::InvalidResponse(format!(
            "{field} must not be null or empty"
        )))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityListResponse {
    #[serde(default)]
    pub code: i32,
    #[serde(rename = "identifiers")]
    pub idents: Vec<NameIdentifier>,
}

impl RestResponse for EntityListResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropResponse {
    #[serde(default)]
    pub code: i32,
    pub dropped: bool,
}

impl RestResponse for DropResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDto {
    pub version: String,
    #[serde(default)]
    pub compile_date: Option<String>,
    #[serde(default)]
    pub git_commit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    #[serde(default)]
    pub code: i32,
    pub version: VersionDto,
}

impl RestResponse for VersionResponse {
    fn validate(&self) -> Result<()> {
        check_code(self.code)?;
        check_not_blank("version 'version'", &self.version.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_list_requires_identifiers() {
        let body = r#"{"code":0,"identifiers":[{"namespace":["lake","hive"],"name":"db"}]}"#;
        let resp: EntityListResponse = serde_json::from_str(body).unwrap();
        resp.validate().unwrap();
        assert_eq!(resp.idents[0].to_string(), "lake.hive.db");

        assert!(serde_json::from_str::<EntityListResponse>(r#"{"code":0}"#).is_err());
        assert!(serde_json::from_str::<EntityListResponse>(r#"{"code":0,"identifiers":null}"#).is_err());
    }

    #[test]
    fn entity_list_rejects_blank_names() {
        let body = r#"{"code":0,"identifiers":[{"namespace":["lake","hive"],"name":"  "}]}"#;
        assert!(serde_json::from_str::<EntityListResponse>(body).is_err());
    }

    #[test]
    fn non_zero_code_is_invalid() {
        let resp: DropResponse = serde_json::from_str(r#"{"code":1002,"dropped":false}"#).unwrap();
        assert!(matches!(resp.validate(), Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn version_must_not_be_blank() {
        let resp: VersionResponse = serde_json::from_str(
            r#"{"code":0,"version":{"version":"0.5.0","compileDate":"2024-05-01","gitCommit":"abc"}}"#,
        )
        .unwrap();
        resp.validate().unwrap();
        assert_eq!(resp.version.git_commit.as_deref(), Some("abc"));

        let blank: VersionResponse =
            serde_json::from_str(r#"{"code":0,"version":{"version":" "}}"#).unwrap();
        assert!(blank.validate().is_err());
    }
}
