#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use base::BaseClient;

pub use gravitino_types::{
    audit::AuditDto,
    error::{Error, ErrorCode, Result},
    ident::{EntityKind, NameIdentifier, Namespace},
    update::{EntityChange, UpdateRequest, UpdatesRequest},
};

pub(crate) mod base;
pub mod catalog;
pub mod fileset;
pub mod metalake;
pub mod schema;
pub mod table;
pub mod topic;
pub(crate) mod utils;
pub mod version;

pub struct Client {
    pub metalake: crate::metalake::Client,
    pub catalog: crate::catalog::Client,
    pub version: crate::version::Client,
    base: Arc<BaseClient>,
}

impl Client {
    pub fn new(api_url: impl ToString) -> Self {
        let base_client = Arc::new(BaseClient::new(api_url));

        let metalake = crate::metalake::Client::new(Arc::clone(&base_client));
        let catalog = crate::catalog::Client::new(Arc::clone(&base_client));
        let version = crate::version::Client::new(Arc::clone(&base_client));

        Self {
            metalake,
            catalog,
            version,
            base: base_client,
        }
    }

    /// Sets the bearer token sent with every subsequent request.
    pub async fn set_token(&self, token: Option<String>) {
        self.base.set_token(token).await;
    }
}
