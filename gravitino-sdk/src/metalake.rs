use std::{collections::HashMap, sync::Arc};

pub use gravitino_types::methods::metalake::{
    MetalakeChange, MetalakeCreateRequest, MetalakeDto, MetalakeListResponse, MetalakeResponse,
};
use gravitino_types::response::DropResponse;

use crate::{
    base::BaseClient,
    utils::{collection_path, entity_path, exists, lenient_drop},
    EntityKind, NameIdentifier, Namespace, Result, UpdatesRequest,
};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<MetalakeDto>> {
        let path = collection_path(&Namespace::empty(), EntityKind::Metalake)?;
        let resp: MetalakeListResponse = self.client.get(&path, &[]).await?;
        Ok(resp.metalakes)
    }

    pub async fn create(
        &self,
        ident: &NameIdentifier,
        comment: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<MetalakeDto> {
        ident.check_metalake()?;
        let req = MetalakeCreateRequest {
            name: ident.name().to_string(),
            comment: comment.map(ToString::to_string),
            properties,
        };
        req.validate()?;

        let path = collection_path(ident.namespace(), EntityKind::Metalake)?;
        let resp: MetalakeResponse = self.client.post(&path, &req).await?;
        Ok(resp.metalake)
    }

    pub async fn load(&self, ident: &NameIdentifier) -> Result<MetalakeDto> {
        let path = entity_path(ident, EntityKind::Metalake)?;
        let resp: MetalakeResponse = self.client.get(&path, &[]).await?;
        Ok(resp.metalake)
    }

    pub async fn exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load(ident).await)
    }

    pub async fn alter(
        &self,
        ident: &NameIdentifier,
        changes: &[MetalakeChange],
    ) -> Result<MetalakeDto> {
        let path = entity_path(ident, EntityKind::Metalake)?;
        let req = UpdatesRequest::from_changes(changes);
        req.validate()?;

        let resp: MetalakeResponse = self.client.put(&path, &req).await?;
        Ok(resp.metalake)
    }

    /// Drops a metalake. Returns `false` if it did not exist or could not
    /// be dropped; only an invalid identifier is reported as an error.
    pub async fn drop(&self, ident: &NameIdentifier) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Metalake)?;
        let resp: Result<DropResponse> = self.client.delete(&path, &[]).await;
        Ok(lenient_drop(ident, EntityKind::Metalake, resp))
    }
}
