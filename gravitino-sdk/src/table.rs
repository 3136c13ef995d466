pub use gravitino_types::methods::table::{ColumnDto, TableDto, TableResponse};
use gravitino_types::response::{DropResponse, EntityListResponse};

use crate::{
    catalog::Catalog,
    utils::{collection_path, entity_path, exists, lenient_drop},
    EntityKind, NameIdentifier, Namespace, Result,
};

/// Read and drop access to the tables of a relational catalog, obtained
/// with [`Catalog::as_table_catalog`].
pub struct TableCatalog<'a> {
    catalog: &'a Catalog,
}

impl<'a> TableCatalog<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub async fn list_tables(&self, namespace: &Namespace) -> Result<Vec<NameIdentifier>> {
        let path = collection_path(namespace, EntityKind::Table)?;
        self.catalog.check_scope(namespace)?;
        let resp: EntityListResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.idents)
    }

    pub async fn load_table(&self, ident: &NameIdentifier) -> Result<TableDto> {
        let path = entity_path(ident, EntityKind::Table)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: TableResponse = self.catalog.client().get(&path, &[]).await?;
        Ok(resp.table)
    }

    pub async fn table_exists(&self, ident: &NameIdentifier) -> Result<bool> {
        exists(self.load_table(ident).await)
    }

    pub async fn drop_table(&self, ident: &NameIdentifier) -> Result<bool> {
        self.delete_table(ident, false).await
    }

    /// Drops a table and removes its data as well.
    pub async fn purge_table(&self, ident: &NameIdentifier) -> Result<bool> {
        self.delete_table(ident, true).await
    }

    async fn delete_table(&self, ident: &NameIdentifier, purge: bool) -> Result<bool> {
        let path = entity_path(ident, EntityKind::Table)?;
        self.catalog.check_scope(ident.namespace())?;
        let resp: Result<DropResponse> = self
            .catalog
            .client()
            .delete(&path, &[("purge", purge.to_string())])
            .await;
        Ok(lenient_drop(ident, EntityKind::Table, resp))
    }
}
