//! Fluent query builders.
//!
//! Each builder owns a [`QueryDescriptor`](crate::QueryDescriptor) for one
//! fixed action, the [`PlaceholderRegistry`](crate::PlaceholderRegistry) its
//! placeholders go into, and the [`Synthesizer`](crate::Synthesizer) that
//! renders it. Every chain method consumes and returns the builder.
//!
//! # Usage
//!
//! ```
//! use sqlporter::qb::{self, Statement};
//!
//! // SELECT
//! let mut select = qb::select()
//!     .select(["name", "value"])
//!     .from("test_table")
//!     .where_("row_id", ">", 1)
//!     .and_where("name", "=", "test1")
//!     .order_by(["name"])
//!     .limit(1);
//! assert_eq!(
//!     select.sql()?,
//!     "SELECT `name`,`value` FROM `test_table` WHERE `row_id`>:row_id AND `name`=:name ORDER BY `name` ASC LIMIT 1"
//! );
//!
//! // INSERT
//! let built = qb::insert()
//!     .insert([("name", "alice"), ("email", "alice@example.com")])
//!     .into("users")
//!     .build()?;
//! assert_eq!(built.sql, "INSERT INTO `users` (`name`,`email`) VALUES (:name,:email)");
//!
//! // UPDATE
//! let mut update = qb::update()
//!     .update("users")
//!     .set([("status", "inactive")])
//!     .where_("id", "=", 7);
//! assert_eq!(update.sql()?, "UPDATE `users` SET `status`=:status WHERE `id`=:id");
//!
//! // DELETE
//! let mut delete = qb::delete().from("users").where_("id", "=", 7);
//! assert_eq!(delete.sql()?, "DELETE FROM `users` WHERE `id`=:id");
//! # Ok::<(), sqlporter::PorterError>(())
//! ```

mod capabilities;
mod delete;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQuery;
pub use insert::InsertQuery;
pub use select::SelectQuery;
pub use traits::{BuiltQuery, Statement};
pub use update::UpdateQuery;

/// Create a SELECT query builder.
pub fn select() -> SelectQuery {
    SelectQuery::new()
}

/// Create an INSERT query builder.
pub fn insert() -> InsertQuery {
    InsertQuery::new()
}

/// Create an UPDATE query builder.
pub fn update() -> UpdateQuery {
    UpdateQuery::new()
}

/// Create a DELETE query builder.
pub fn delete() -> DeleteQuery {
    DeleteQuery::new()
}

#[cfg(test)]
mod tests;
