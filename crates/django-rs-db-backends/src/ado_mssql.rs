//! Column types for SQL Server reached through ADO.
//!
//! Templates use `%(name)s` placeholders filled from field metadata:
//! `maxlength`, `max_digits`, `decimal_places`, and `column`. Entries are
//! kept in byte order of their field-type name.

use crate::creation::{ColumnType, TypeMap};

/// The engine name of this backend.
pub const VENDOR: &str = "ado_mssql";

/// Field type to column type table for `ado_mssql`.
pub static DATA_TYPES: TypeMap = TypeMap::new(
    VENDOR,
    &[
        ("AutoField", ColumnType::Template("int IDENTITY (1, 1)")),
        ("BooleanField", ColumnType::Template("bit")),
        ("CharField", ColumnType::Template("varchar(%(maxlength)s)")),
        (
            "CommaSeparatedIntegerField",
            ColumnType::Template("varchar(%(maxlength)s)"),
        ),
        ("DateField", ColumnType::Template("smalldatetime")),
        ("DateTimeField", ColumnType::Template("smalldatetime")),
        (
            "DecimalField",
            ColumnType::Template("numeric(%(max_digits)s, %(decimal_places)s)"),
        ),
        ("FileField", ColumnType::Template("varchar(100)")),
        ("FilePathField", ColumnType::Template("varchar(100)")),
        ("FloatField", ColumnType::Template("double precision")),
        ("IPAddressField", ColumnType::Template("char(15)")),
        ("ImageField", ColumnType::Template("varchar(100)")),
        ("IntegerField", ColumnType::Template("int")),
        // Realized as a join table.
        ("ManyToManyField", ColumnType::NoColumn),
        ("NullBooleanField", ColumnType::Template("bit")),
        ("OneToOneField", ColumnType::Template("int")),
        ("PhoneNumberField", ColumnType::Template("varchar(20)")),
        (
            "PositiveIntegerField",
            ColumnType::Template(
                "int CONSTRAINT [CK_int_pos_%(column)s] CHECK ([%(column)s] > 0)",
            ),
        ),
        (
            "PositiveSmallIntegerField",
            ColumnType::Template(
                "smallint CONSTRAINT [CK_smallint_pos_%(column)s] CHECK ([%(column)s] > 0)",
            ),
        ),
        ("SlugField", ColumnType::Template("varchar(%(maxlength)s)")),
        ("SmallIntegerField", ColumnType::Template("smallint")),
        ("TextField", ColumnType::Template("text")),
        ("TimeField", ColumnType::Template("time")),
        ("USStateField", ColumnType::Template("varchar(2)")),
    ],
);
