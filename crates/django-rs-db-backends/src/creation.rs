//! Column-type tables and backend selection.
//!
//! A [`TypeMap`] is the static table a backend publishes for schema
//! generation. It maps each abstract field-type name to a [`ColumnType`]:
//! either a SQL template whose `%(name)s` placeholders the schema generator
//! fills from field metadata, or [`ColumnType::NoColumn`] for fields that do
//! not own a column (many-to-many relations live in a join table).
//!
//! Tables are immutable statics, so they can be shared between threads
//! without synchronization.

use std::fmt;

use django_rs_core::{DjangoError, DjangoResult, Settings};

use crate::ado_mssql;

/// Prefix of fully qualified engine names in settings.
pub const ENGINE_PREFIX: &str = "django_rs.db.backends.";

/// The column type a backend uses for one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// A SQL column-type template, possibly containing `%(name)s` placeholders.
    Template(&'static str),
    /// The field type does not map to a column of its own.
    NoColumn,
}

impl ColumnType {
    /// Returns the template, or `None` for [`ColumnType::NoColumn`].
    pub const fn template(&self) -> Option<&'static str> {
        match *self {
            Self::Template(template) => Some(template),
            Self::NoColumn => None,
        }
    }

    /// Returns `true` if a column is generated for this field type.
    pub const fn is_column(&self) -> bool {
        matches!(self, Self::Template(_))
    }

    /// Returns the distinct placeholder names in the template, in order of
    /// first appearance.
    ///
    /// ```
    /// use django_rs_db_backends::ColumnType;
    ///
    /// let ty = ColumnType::Template("numeric(%(max_digits)s, %(decimal_places)s)");
    /// assert_eq!(ty.placeholders(), vec!["max_digits", "decimal_places"]);
    /// ```
    pub fn placeholders(&self) -> Vec<&'static str> {
        let Self::Template(template) = *self else {
            return Vec::new();
        };

        let mut names = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find("%(") {
            let after = &rest[start + 2..];
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..end];
            match after[end..].strip_prefix(")s") {
                Some(tail) if !name.is_empty() => {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    rest = tail;
                }
                // Malformed fragment; resume at the character that ended the name.
                _ => rest = &after[end..],
            }
        }
        names
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.write_str(template),
            Self::NoColumn => Ok(()),
        }
    }
}

/// A backend's field type to column type table.
///
/// Entries must be sorted by field-type name with no repeats; lookups binary
/// search the slice.
#[derive(Debug)]
pub struct TypeMap {
    vendor: &'static str,
    entries: &'static [(&'static str, ColumnType)],
}

impl TypeMap {
    /// Creates a table over sorted, unique entries.
    pub const fn new(vendor: &'static str, entries: &'static [(&'static str, ColumnType)]) -> Self {
        Self { vendor, entries }
    }

    /// Returns the engine name this table belongs to.
    pub const fn vendor(&self) -> &'static str {
        self.vendor
    }

    /// Returns the number of field types in the table.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `field_type` is part of this backend's vocabulary.
    pub fn contains(&self, field_type: &str) -> bool {
        self.position(field_type).is_some()
    }

    /// Looks up the column type for `field_type`.
    ///
    /// Returns [`DjangoError::UnknownFieldType`] if the name is outside the
    /// table, which means the model layer and the backend disagree.
    pub fn lookup(&self, field_type: &str) -> DjangoResult<ColumnType> {
        if let Some(index) = self.position(field_type) {
            let column_type = self.entries[index].1;
            tracing::debug!(
                vendor = self.vendor,
                field_type,
                column_type = %column_type,
                "resolved column type"
            );
            Ok(column_type)
        } else {
            tracing::warn!(vendor = self.vendor, field_type, "unknown field type");
            Err(DjangoError::UnknownFieldType(field_type.to_string()))
        }
    }

    /// Looks up the template for `field_type`, `None` when it has no column.
    pub fn column_type(&self, field_type: &str) -> DjangoResult<Option<&'static str>> {
        Ok(self.lookup(field_type)?.template())
    }

    /// Iterates over all entries in field-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ColumnType)> {
        self.entries.iter().copied()
    }

    /// Iterates over the field-type names in order.
    pub fn field_types(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    fn position(&self, field_type: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|(name, _)| (*name).cmp(field_type))
            .ok()
    }
}

/// Returns the column-type table for a configured engine.
///
/// Accepts either the short engine name (`"ado_mssql"`) or the fully
/// qualified one (`"django_rs.db.backends.ado_mssql"`).
pub fn data_types(engine: &str) -> DjangoResult<&'static TypeMap> {
    let short = engine.strip_prefix(ENGINE_PREFIX).unwrap_or(engine);
    let types = match short {
        ado_mssql::VENDOR => &ado_mssql::DATA_TYPES,
        _ => {
            return Err(DjangoError::ImproperlyConfigured(format!(
                "'{engine}' isn't an available database backend"
            )))
        }
    };
    tracing::debug!(engine, vendor = types.vendor(), "selected column-type table");
    Ok(types)
}

/// Returns the column-type table for the database registered under `alias`.
pub fn data_types_for_alias(settings: &Settings, alias: &str) -> DjangoResult<&'static TypeMap> {
    let _span = django_rs_core::logging::schema_span(alias).entered();
    let database = settings.database(alias).ok_or_else(|| {
        DjangoError::ImproperlyConfigured(format!("The database alias '{alias}' is not configured"))
    })?;
    data_types(&database.engine)
}
