//! CSV ranking driver.
//!
//! Reads a table, builds one fitness vector per row from the declared
//! columns, ranks the rows with [`FrontAssigner`](crate::front::FrontAssigner)
//! and writes the table back with a front index column, best front first.
//!
//! # Key Types
//!
//! - [`ColumnSpec`]: a column to optimize over, its value type and direction
//! - [`TableConfig`]: columns, output column name, delimiter, sort settings
//! - [`Score`]: the typed, direction-aware fitness component
//!
//! Cells are never compared as raw text unless the column is declared
//! [`ValueKind::Text`].

mod driver;
mod schema;
mod value;

pub use driver::{rank_csv, rank_csv_file, RankSummary, TableConfig};
pub use schema::{ColumnSpec, Schema};
pub use value::{Numeric, Score, Sense, Value, ValueKind};
