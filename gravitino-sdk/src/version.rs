use std::sync::Arc;

pub use gravitino_types::response::{VersionDto, VersionResponse};

use crate::{base::BaseClient, Result};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn server_version(&self) -> Result<VersionDto> {
        let path = ["api".to_string(), "version".to_string()];
        let resp: VersionResponse = self.client.get(&path, &[]).await?;
        Ok(resp.version)
    }
}
