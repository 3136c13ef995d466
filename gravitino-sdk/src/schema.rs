use std::collections::HashMap;

pub use gravitino_types::methods::schema::{
    SchemaChange, SchemaCreateRequest, SchemaDto, SchemaResponse,
};
use gravitino_types::response::{DropResponse, EntityListResponse};

use crate::{
    catalog::Catalog,
    utils::{collection_path, entity_path, exists, lenient_drop},
    EntityKind, NameIdentifier, Namespace, Result, UpdatesRequest,
};

/// Schema operations of a catalog, obtained with [`Catalog::as_schemas`].
pub struct SchemaCatalog<'a> {
    catalog: &'a Catalog,
}

impl<'a> SchemaCatalog<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Lists the schemas under a `metalake.catalog` namespace.
    pub async fn list_schemas(&self, namespace: &Namespace) -> Result<Vec<NameIdentifier>> {
        let path = collection_path(namespace, EntityKind::Schema)?;
        self.catalog.check_scope(namespace)?;
        let resp: EntityListResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.idents)
    }

    pub async fn create_schema(
        &self,
        ident: &NameIdentifier,
        comment: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<SchemaDto> {
        ident.check_schema()?;
        let req = SchemaCreateRequest {
            name: ident.name().to_string(),
            comment: comment.map(ToString::to_string),
            properties,
        };
        req.validate()?;

        let path = collection_path(ident.namespace(), EntityKind::Schema)?;

        self.catalog.check_scope(ident.namespace())?;
        let resp: SchemaResponse = self.catalog.client().post(&path, &req).await?;
        Ok(resp.schema)
    }

    pub async fn load_schema(&self, ident: &NameIdentifier) -> Result<SchemaDto> {
        let path = entity_path(ident, EntityKind::Schema)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: SchemaResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.schema)
    }

    pub async fn schema_exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load_schema(ident).await)
    }

    pub async fn alter_schema(
        &self,
        ident: &NameIdentifier,
        changes: &[SchemaChange],
    ) -> Result<SchemaDto> {
        let path = entity_path(ident, EntityKind::Schema)?;
        self.catalog.check_scope(ident.namespace())?;
        let req = UpdatesRequest::from_changes(changes);
        req.validate()?;

        let resp: SchemaResponse = self.catalog.client().put(&path, &req).await?;
        Ok(resp.schema)
    }

    /// Drops a schema, recursively dropping its contents when `cascade` is
    /// set. An identifier outside this catalog is an error; any other
    /// failure is logged and reported as `false`.
    pub async fn drop_schema(&self, ident: &NameIdentifier, cascade: bool) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Schema)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: Result<DropResponse> = self
            .catalog
            .client()
            .delete(&path, &[("cascade", cascade.to_string())])
            .await;
        Ok(lenient_drop(ident, EntityKind::Schema, resp))
    }
}
