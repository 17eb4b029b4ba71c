//! # sqlporter
//!
//! A small query builder that synthesizes parameterized SQL with named
//! placeholders.
//!
//! ## Features
//!
//! - **Typed fluent API**: one builder per action (SELECT/INSERT/UPDATE/DELETE)
//! - **Named placeholders**: values are bound as `:field`, collected in an
//!   insertion-ordered [`PlaceholderRegistry`]
//! - **Backtick quoting**: every table and field name is quoted, except `*`
//! - **No execution**: SQL text and placeholders are handed to whatever
//!   driver the caller uses
//!
//! ## Placeholder collisions
//!
//! Placeholder names are derived from field names only. When the same field
//! appears twice (an UPDATE assignment and a where clause, or two where
//! clauses), both occurrences use the same placeholder and the registry keeps
//! the value registered last.
//!
//! ## Example
//!
//! ```
//! use sqlporter::{Porter, ScalarValue, Statement};
//!
//! let porter = Porter::new();
//! let mut query = porter
//!     .new_update()
//!     .update("test_table")
//!     .set([("name", "updated"), ("value", "true")])
//!     .where_("row_id", "=", 1)
//!     .order_by(["name"])
//!     .limit(1);
//!
//! assert_eq!(
//!     query.sql()?,
//!     "UPDATE `test_table` SET `name`=:name,`value`=:value WHERE `row_id`=:row_id ORDER BY `name` ASC LIMIT 1"
//! );
//! assert_eq!(query.placeholders().get(":row_id"), Some(&ScalarValue::Int(1)));
//! # Ok::<(), sqlporter::PorterError>(())
//! ```
//!
//! ## Threading
//!
//! Builders are plain owned values with no interior mutability. Share one
//! across threads only behind your own synchronization.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod ident;
pub mod placeholder;
pub mod porter;
pub mod qb;
pub mod synth;
pub mod value;

pub use config::{LogLevel, SynthesizerConfig};
pub use descriptor::{Action, FieldMap, Glue, QueryDescriptor, WhereClause};
pub use error::{PorterError, PorterResult};
pub use ident::quote_ident;
pub use placeholder::{PlaceholderRegistry, placeholder_name};
pub use porter::{AnyQuery, Porter};
pub use qb::{BuiltQuery, DeleteQuery, InsertQuery, SelectQuery, Statement, UpdateQuery};
pub use synth::{Synthesizer, synthesize};
pub use value::ScalarValue;
