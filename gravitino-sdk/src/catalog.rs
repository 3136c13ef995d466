use std::{collections::HashMap, sync::Arc};

pub use gravitino_types::methods::catalog::{
    Capability, CatalogChange, CatalogCreateRequest, CatalogDto, CatalogListResponse,
    CatalogResponse, CatalogType,
};
use gravitino_types::response::{DropResponse, EntityListResponse};

use crate::{
    base::BaseClient,
    fileset::FilesetCatalog,
    schema::SchemaCatalog,
    table::TableCatalog,
    topic::TopicCatalog,
    utils::{collection_path, entity_path, exists, lenient_drop},
    AuditDto, EntityKind, Error, NameIdentifier, Namespace, Result, UpdatesRequest,
};

/// A catalog loaded from the server.
///
/// The catalog's type decides which operation families it can be narrowed
/// to: every typed catalog supports schemas, relational catalogs support
/// tables, fileset catalogs support filesets and messaging catalogs support
/// topics.
pub struct Catalog {
    dto: CatalogDto,
    client: Arc<BaseClient>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").field("dto", &self.dto).finish()
    }
}

impl Catalog {
    pub(crate) fn new(dto: CatalogDto, client: Arc<BaseClient>) -> Self {
        Self { dto, client }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.dto.name
    }

    #[must_use]
    pub fn catalog_type(&self) -> CatalogType {
        self.dto.catalog_type
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        &self.dto.provider
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.dto.comment.as_deref()
    }

    #[must_use]
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.dto.properties
    }

    #[must_use]
    pub fn audit(&self) -> &AuditDto {
        &self.dto.audit
    }

    #[must_use]
    pub fn dto(&self) -> &CatalogDto {
        &self.dto
    }

    pub(crate) fn client(&self) -> &BaseClient {
        &self.client
    }

    /// Checks that `namespace` points inside this catalog. Views obtained
    /// by narrowing only operate on their own catalog.
    pub(crate) fn check_scope(&self, namespace: &Namespace) -> Result<()> {
        if namespace.level(1) == Some(self.name()) {
            Ok(())
        } else {
            Err(Error::InvalidIdentifier(format!(
                "namespace `{namespace}` is outside catalog `{}`",
                self.name()
            )))
        }
    }

    fn narrow(&self, capability: Capability) -> Result<()> {
        if self.dto.catalog_type.supports(capability) {
            Ok(())
        } else {
            Err(Error::UnsupportedCapability {
                catalog: self.dto.name.clone(),
                catalog_type: self.dto.catalog_type,
                capability,
            })
        }
    }

    pub fn as_schemas(&self) -> Result<SchemaCatalog<'_>> {
        self.narrow(Capability::Schemas)?;
        Ok(SchemaCatalog::new(self))
    }

    pub fn as_fileset_catalog(&self) -> Result<FilesetCatalog<'_>> {
        self.narrow(Capability::Filesets)?;
        Ok(FilesetCatalog::new(self))
    }

    pub fn as_table_catalog(&self) -> Result<TableCatalog<'_>> {
        self.narrow(Capability::Tables)?;
        Ok(TableCatalog::new(self))
    }

    pub fn as_topic_catalog(&self) -> Result<TopicCatalog<'_>> {
        self.narrow(Capability::Topics)?;
        Ok(TopicCatalog::new(self))
    }
}

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, namespace: &Namespace) -> Result<Vec<NameIdentifier>> {
        let path = collection_path(namespace, EntityKind::Catalog)?;
        let resp: EntityListResponse = self.client.get(&path, &[]).await?;
        Ok(resp.idents)
    }

    pub async fn list_info(&self, namespace: &Namespace) -> Result<Vec<Catalog>> {
        let path = collection_path(namespace, EntityKind::Catalog)?;
        let resp: CatalogListResponse = self
            .client
            .get(&path, &[("details", "true".to_string())])
            .await?;
        Ok(resp
            .catalogs
            .into_iter()
            .map(|dto| Catalog::new(dto, Arc::clone(&self.client)))
            .collect())
    }

    pub async fn create(
        &self,
        ident: &NameIdentifier,
        catalog_type: CatalogType,
        provider: &str,
        comment: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<Catalog> {
        ident.check_catalog()?;
        let req = CatalogCreateRequest {
            name: ident.name().to_string(),
            catalog_type,
            provider: provider.to_string(),
            comment: comment.map(ToString::to_string),
            properties,
        };
        req.validate()?;

        let path = collection_path(ident.namespace(), EntityKind::Catalog)?;
        let resp: CatalogResponse = self.client.post(&path, &req).await?;
        Ok(Catalog::new(resp.catalog, Arc::clone(&self.client)))
    }

    pub async fn load(&self, ident: &NameIdentifier) -> Result<Catalog> {
        let path = entity_path(ident, EntityKind::Catalog)?;
        let resp: CatalogResponse = self.client.get(&path, &[]).await?;
        Ok(Catalog::new(resp.catalog, Arc::clone(&self.client)))
    }

    pub async fn exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load(ident).await)
    }

    pub async fn alter(&self, ident: &NameIdentifier, changes: &[CatalogChange]) -> Result<Catalog> {
        let path = entity_path(ident, EntityKind::Catalog)?;
        let req = UpdatesRequest::from_changes(changes);
        req.validate()?;

        let resp: CatalogResponse = self.client.put(&path, &req).await?;
        Ok(Catalog::new(resp.catalog, Arc::clone(&self.client)))
    }

    /// Drops a catalog. Returns `false` if it did not exist or could not be
    /// dropped; only an invalid identifier is reported as an error.
    pub async fn drop(&self, ident: &NameIdentifier) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Catalog)?;
        let resp: Result<DropResponse> = self.client.delete(&path, &[]).await;
        Ok(lenient_drop(ident, EntityKind::Catalog, resp))
    }
}
