use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

use crate::error::{Error, Result};

/// Kind of entity addressed by a [`NameIdentifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Metalake,
    Catalog,
    Schema,
    Table,
    Fileset,
    Topic,
}

impl EntityKind {
    /// Number of levels, name included, of an identifier of this kind.
    #[must_use]
    pub fn depth(self) -> usize {
        match self {
            EntityKind::Metalake => 1,
            EntityKind::Catalog => 2,
            EntityKind::Schema => 3,
            EntityKind::Table | EntityKind::Fileset | EntityKind::Topic => 4,
        }
    }

    /// Number of levels of the namespace holding an entity of this kind.
    #[must_use]
    pub fn namespace_depth(self) -> usize {
        self.depth() - 1
    }
}

fn check_levels<S: AsRef<str>>(levels: &[S]) -> Result<()> {
    for (pos, level) in levels.iter().enumerate() {
        if level.as_ref().trim().is_empty() {
            return Err(Error::InvalidIdentifier(format!(
                "cannot create a namespace with blank level at position {pos}"
            )));
        }
    }
    Ok(())
}

/// Ordered path of the parent scope of an entity, e.g. `metalake.catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Namespace(Vec<String>);

impl Namespace {
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn of<I, S>(levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        check_levels(&levels)?;
        Ok(Self(levels))
    }

    pub fn of_catalog(metalake: &str) -> Result<Self> {
        Self::of([metalake])
    }

    pub fn of_schema(metalake: &str, catalog: &str) -> Result<Self> {
        Self::of([metalake, catalog])
    }

    pub fn of_table(metalake: &str, catalog: &str, schema: &str) -> Result<Self> {
        Self::of([metalake, catalog, schema])
    }

    pub fn of_fileset(metalake: &str, catalog: &str, schema: &str) -> Result<Self> {
        Self::of([metalake, catalog, schema])
    }

    pub fn of_topic(metalake: &str, catalog: &str, schema: &str) -> Result<Self> {
        Self::of([metalake, catalog, schema])
    }

    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn level(&self, pos: usize) -> Option<&str> {
        self.0.get(pos).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that this namespace can hold entities of the given kind.
    pub fn check(&self, kind: EntityKind) -> Result<()> {
        if self.len() != kind.namespace_depth() {
            return Err(Error::InvalidIdentifier(format!(
                "{kind} namespace must have {} level(s), the input namespace `{self}` has {}",
                kind.namespace_depth(),
                self.len()
            )));
        }
        check_levels(&self.0)
    }

    pub fn check_catalog(&self) -> Result<()> {
        self.check(EntityKind::Catalog)
    }

    pub fn check_schema(&self) -> Result<()> {
        self.check(EntityKind::Schema)
    }

    pub fn check_table(&self) -> Result<()> {
        self.check(EntityKind::Table)
    }

    pub fn check_fileset(&self) -> Result<()> {
        self.check(EntityKind::Fileset)
    }

    pub fn check_topic(&self) -> Result<()> {
        self.check(EntityKind::Topic)
    }
}

impl TryFrom<Vec<String>> for Namespace {
    type Error = Error;

    fn try_from(levels: Vec<String>) -> Result<Self> {
        Self::of(levels)
    }
}

impl From<Namespace> for Vec<String> {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Fully qualified name of an entity: its namespace plus a leaf name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawNameIdentifier")]
pub struct NameIdentifier {
    namespace: Namespace,
    name: String,
}

#[derive(Deserialize)]
struct RawNameIdentifier {
    #[serde(default)]
    namespace: Namespace,
    name: String,
}

impl TryFrom<RawNameIdentifier> for NameIdentifier {
    type Error = Error;

    fn try_from(raw: RawNameIdentifier) -> Result<Self> {
        Self::new(raw.namespace, raw.name)
    }
}

impl NameIdentifier {
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidIdentifier(
                "name cannot be blank".to_string(),
            ));
        }
        Ok(Self { namespace, name })
    }

    /// Builds an identifier from its levels; the last level is the name.
    pub fn of<I, S>(levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        let Some(name) = levels.pop() else {
            return Err(Error::InvalidIdentifier(
                "cannot create a name identifier with no levels".to_string(),
            ));
        };
        Self::new(Namespace::of(levels)?, name)
    }

    /// Builds an identifier that must have exactly the depth of `kind`.
    pub fn of_kind<I, S>(kind: EntityKind, levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ident = Self::of(levels)?;
        ident.check(kind)?;
        Ok(ident)
    }

    pub fn of_metalake(metalake: &str) -> Result<Self> {
        Self::of_kind(EntityKind::Metalake, [metalake])
    }

    pub fn of_catalog(metalake: &str, catalog: &str) -> Result<Self> {
        Self::of_kind(EntityKind::Catalog, [metalake, catalog])
    }

    pub fn of_schema(metalake: &str, catalog: &str, schema: &str) -> Result<Self> {
        Self::of_kind(EntityKind::Schema, [metalake, catalog, schema])
    }

    pub fn of_table(metalake: &str, catalog: &str, schema: &str, table: &str) -> Result<Self> {
        Self::of_kind(EntityKind::Table, [metalake, catalog, schema, table])
    }

    pub fn of_fileset(
        metalake: &str,
        catalog: &str,
        schema: &str,
        fileset: &str,
    ) -> Result<Self> {
        Self::of_kind(EntityKind::Fileset, [metalake, catalog, schema, fileset])
    }

    pub fn of_topic(metalake: &str, catalog: &str, schema: &str, topic: &str) -> Result<Self> {
        Self::of_kind(EntityKind::Topic, [metalake, catalog, schema, topic])
    }

    /// Parses a dotted identifier such as `metalake.catalog.schema`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::InvalidIdentifier(
                "cannot parse a blank identifier".to_string(),
            ));
        }
        Self::of(s.split('.'))
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Total number of levels, name included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.namespace.len() + 1
    }

    /// Re-validates this identifier as one of the given kind. Used as a
    /// precondition before any request is built.
    pub fn check(&self, kind: EntityKind) -> Result<()> {
        if self.depth() != kind.depth() {
            return Err(Error::InvalidIdentifier(format!(
                "{kind} identifier must have {} level(s), the input identifier `{self}` has {}",
                kind.depth(),
                self.depth()
            )));
        }
        self.namespace.check(kind)?;
        if self.name.trim().is_empty() {
            return Err(Error::InvalidIdentifier(format!(
                "{kind} name cannot be blank"
            )));
        }
        Ok(())
    }

    pub fn check_metalake(&self) -> Result<()> {
        self.check(EntityKind::Metalake)
    }

    pub fn check_catalog(&self) -> Result<()> {
        self.check(EntityKind::Catalog)
    }

    pub fn check_schema(&self) -> Result<()> {
        self.check(EntityKind::Schema)
    }

    pub fn check_table(&self) -> Result<()> {
        self.check(EntityKind::Table)
    }

    pub fn check_fileset(&self) -> Result<()> {
        self.check(EntityKind::Fileset)
    }

    pub fn check_topic(&self) -> Result<()> {
        self.check(EntityKind::Topic)
    }
}

impl FromStr for NameIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for NameIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_namespace() {
            write!(f, "{}.{}", self.namespace, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
