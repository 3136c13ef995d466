use std::collections::HashMap;

pub use gravitino_types::methods::topic::{
    TopicChange, TopicCreateRequest, TopicDto, TopicResponse,
};
use gravitino_types::response::{DropResponse, EntityListResponse};

use crate::{
    catalog::Catalog,
    utils::{collection_path, entity_path, exists, lenient_drop},
    EntityKind, NameIdentifier, Namespace, Result, UpdatesRequest,
};

/// Topic operations of a messaging catalog, obtained with
/// [`Catalog::as_topic_catalog`].
pub struct TopicCatalog<'a> {
    catalog: &'a Catalog,
}

impl<'a> TopicCatalog<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub async fn list_topics(&self, namespace: &Namespace) -> Result<Vec<NameIdentifier>> {
        let path = collection_path(namespace, EntityKind::Topic)?;
        self.catalog.check_scope(namespace)?;
        let resp: EntityListResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.idents)
    }

    pub async fn load_topic(&self, ident: &NameIdentifier) -> Result<TopicDto> {
        let path = entity_path(ident, EntityKind::Topic)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: TopicResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.topic)
    }

    pub async fn topic_exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load_topic(ident).await)
    }

    pub async fn create_topic(
        &self,
        ident: &NameIdentifier,
        comment: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<TopicDto> {
        ident.check_topic()?;
        let req = TopicCreateRequest {
            name: ident.name().to_string(),
            comment: comment.map(ToString::to_string),
            properties,
        };
        req.validate()?;

        let path = collection_path(ident.namespace(), EntityKind::Topic)?;

        self.catalog.check_scope(ident.namespace())?;
        let resp: TopicResponse = self.catalog.client().post(&path, &req).await?;
        Ok(resp.topic)
    }

    pub async fn alter_topic(
        &self,
        ident: &NameIdentifier,
        changes: &[TopicChange],
    ) -> Result<TopicDto> {
        let path = entity_path(ident, EntityKind::Topic)?;
        self.catalog.check_scope(ident.namespace())?;
        let req = UpdatesRequest::from_changes(changes);
        req.validate()?;

        let resp: TopicResponse = self.catalog.client().put(&path, &req).await?;
        Ok(resp.topic)
    }

    pub async fn drop_topic(&self, ident: &NameIdentifier) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Topic)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: Result<DropResponse> = self.catalog.client().delete(&path, &[]).await;
        Ok(lenient_drop(ident, EntityKind::Topic, resp))
    }
}
