use std::collections::HashMap;

pub use gravitino_types::methods::fileset::{
    FilesetChange, FilesetCreateRequest, FilesetDto, FilesetResponse, FilesetType,
};
use gravitino_types::response::{DropResponse, EntityListResponse};

use crate::{
    catalog::Catalog,
    utils::{collection_path, entity_path, exists, lenient_drop},
    EntityKind, NameIdentifier, Namespace, Result, UpdatesRequest,
};

/// Fileset operations of a fileset catalog, obtained with
/// [`Catalog::as_fileset_catalog`]. Identifiers passed to it must belong to
/// that catalog.
#[derive(Debug)]
pub struct FilesetCatalog<'a> {
    catalog: &'a Catalog,
}

impl<'a> FilesetCatalog<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Lists the filesets under a `metalake.catalog.schema` namespace.
    pub async fn list_filesets(&self, namespace: &Namespace) -> Result<Vec<NameIdentifier>> {
        let path = collection_path(namespace, EntityKind::Fileset)?;
        self.catalog.check_scope(namespace)?;
        let resp: EntityListResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.idents)
    }

    pub async fn load_fileset(&self, ident: &NameIdentifier) -> Result<FilesetDto> {
        let path = entity_path(ident, EntityKind::Fileset)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: FilesetResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.fileset)
    }

    pub async fn fileset_exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load_fileset(ident).await)
    }

    /// Creates a fileset. `storage_location` may be omitted for a managed
    /// fileset, in which case the server derives one.
    pub async fn create_fileset(
        &self,
        ident: &NameIdentifier,
        comment: Option<&str>,
        fileset_type: FilesetType,
        storage_location: Option<&str>,
        properties: HashMap<String, String>,
    ) -> Result<FilesetDto> {
        ident.check_fileset()?;
        let req = FilesetCreateRequest {
            name: ident.name().to_string(),
            comment: comment.map(ToString::to_string),
            fileset_type,
            storage_location: storage_location.map(ToString::to_string),
            properties,
        };
        req.validate()?;

        let path = collection_path(ident.namespace(), EntityKind::Fileset)?;

        self.catalog.check_scope(ident.namespace())?;
        let resp: FilesetResponse = self.catalog.client().post(&path, &req).await?;
        Ok(resp.fileset)
    }

    pub async fn alter_fileset(
        &self,
        ident: &NameIdentifier,
        changes: &[FilesetChange],
    ) -> Result<FilesetDto> {
        let path = entity_path(ident, EntityKind::Fileset)?;
        self.catalog.check_scope(ident.namespace())?;
        let req = UpdatesRequest::from_changes(changes);
        req.validate()?;

        let resp: FilesetResponse = self.catalog.client().put(&path, &req).await?;
        Ok(resp.fileset)
    }

    /// Drops a fileset. A missing fileset and a failed drop both report
    /// `false`.
    pub async fn drop_fileset(&self, ident: &NameIdentifier) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Fileset)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: Result<DropResponse> = self.catalog.client().delete(&path, &[]).await;
        Ok(lenient_drop(ident, EntityKind::Fileset, resp))
    }
}
