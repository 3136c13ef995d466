use gravitino_types::{
    error::Result,
    ident::{EntityKind, NameIdentifier, Namespace},
    response::DropResponse,
};
use tracing::warn;

/// Collection segment of each namespace level, outermost first.
const PARENT_COLLECTIONS: [&str; 3] = ["metalakes", "catalogs", "schemas"];

fn collection(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Metalake => "metalakes",
        EntityKind::Catalog => "catalogs",
        EntityKind::Schema => "schemas",
        EntityKind::Table => "tables",
        EntityKind::Fileset => "filesets",
        EntityKind::Topic => "topics",
    }
}

/// Path segments of the collection holding entities of `kind` under `ns`,
/// e.g. `api/metalakes/{m}/catalogs/{c}/schemas` for schemas.
pub(crate) fn collection_path(ns: &Namespace, kind: EntityKind) -> Result<Vec<String>> {
    ns.check(kind)?;
    let mut segments = vec!["api".to_string()];
    for (parent, level) in PARENT_COLLECTIONS.iter().zip(ns.levels()) {
        segments.push((*parent).to_string());
        segments.push(level.clone());
    }
    segments.push(collection(kind).to_string());
    Ok(segments)
}

/// Path segments of a single entity, e.g. `api/metalakes/{m}/catalogs/{c}`.
pub(crate) fn entity_path(ident: &NameIdentifier, kind: EntityKind) -> Result<Vec<String>> {
    ident.check(kind)?;
    let mut segments = collection_path(ident.namespace(), kind)?;
    segments.push(ident.name().to_string());
    Ok(segments)
}

/// Collapses the outcome of a drop call into a boolean. Failures are logged
/// and reported as `false`, the same as an entity that did not exist.
pub(crate) fn lenient_drop(
    ident: &NameIdentifier,
    kind: EntityKind,
    resp: Result<DropResponse>,
) -> bool {
    match resp {
        Ok(resp) => resp.dropped,
        Err(error) => {
            warn!(%ident, %error, "failed to drop {kind}");
            false
        }
    }
}

/// Maps a load result to an existence check: not found is `false`, any
/// other failure is propagated.
pub(crate) fn exists<T>(resp: Result<T>) -> Result<bool> {
    match resp {
        Ok(_) => Ok(true),
        Err(err) if err.is_not_found() => Ok(false),
        Err(err) => Err(err),
    }
}
