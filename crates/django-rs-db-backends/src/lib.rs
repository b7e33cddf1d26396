//! # django-rs-db-backends
//!
//! Backend column-type tables for the django-rs ORM. Each backend publishes a
//! static [`TypeMap`] from abstract field-type names (`"CharField"`,
//! `"DecimalField"`, ...) to the SQL column-type template the schema generator
//! emits for that field.
//!
//! Supported backends:
//! - SQL Server via ADO (`ado_mssql`)
//!
//! ```
//! use django_rs_db_backends::{creation, ColumnType};
//!
//! let types = creation::data_types("django_rs.db.backends.ado_mssql").unwrap();
//! assert_eq!(types.lookup("IntegerField").unwrap(), ColumnType::Template("int"));
//! assert_eq!(types.lookup("ManyToManyField").unwrap(), ColumnType::NoColumn);
//! ```

pub mod ado_mssql;
pub mod creation;

pub use creation::{ColumnType, TypeMap};
