use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::methods::catalog::{Capability, CatalogType};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the Gravitino client.
///
/// Identifier and request validation errors are raised before anything is
/// sent to the server. Response errors mean the server answered but the
/// answer did not honour the REST contract.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("catalog `{catalog}` of type `{catalog_type}` does not support {capability} operations")]
    UnsupportedCapability {
        catalog: String,
        catalog_type: CatalogType,
        capability: Capability,
    },
    #[error("unsupported {entity} change `{change}`")]
    UnsupportedChange {
        entity: &'static str,
        change: String,
    },
    #[error("updates cannot be empty")]
    EmptyBatch,
    #[error("{kind} ({code}): {message}")]
    Server {
        code: ErrorCode,
        kind: String,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Server {
                code: ErrorCode::NotFound,
                ..
            }
        )
    }

    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Error::Server {
                code: ErrorCode::AlreadyExists,
                ..
            }
        )
    }
}

/// Numeric error codes carried by the server's error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    IllegalArguments,
    Internal,
    NotFound,
    AlreadyExists,
    NonEmpty,
    UnsupportedOperation,
    ConnectionFailed,
    Forbidden,
    Unknown(i32),
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        match code {
            1001 => ErrorCode::IllegalArguments,
            1002 => ErrorCode::Internal,
            1003 => ErrorCode::NotFound,
            1004 => ErrorCode::AlreadyExists,
            1005 => ErrorCode::NonEmpty,
            1006 => ErrorCode::UnsupportedOperation,
            1007 => ErrorCode::ConnectionFailed,
            1008 => ErrorCode::Forbidden,
            other => ErrorCode::Unknown(other),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::IllegalArguments => 1001,
            ErrorCode::Internal => 1002,
            ErrorCode::NotFound => 1003,
            ErrorCode::AlreadyExists => 1004,
            ErrorCode::NonEmpty => 1005,
            ErrorCode::UnsupportedOperation => 1006,
            ErrorCode::ConnectionFailed => 1007,
            ErrorCode::Forbidden => 1008,
            ErrorCode::Unknown(other) => other,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// Body returned by the server for any non-successful request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack: Option<Vec<String>>,
}

impl From<ErrorResponse> for Error {
    fn from(resp: ErrorResponse) -> Self {
        Error::Server {
            code: resp.code,
            kind: resp.kind.unwrap_or_else(|| "UnknownError".to_string()),
            message: resp.message.unwrap_or_default(),
        }
    }
}
