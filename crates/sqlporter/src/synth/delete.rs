//! DELETE synthesis.

use super::clauses::{Fragments, limit_sql, order_by_sql, where_sql};
use crate::descriptor::{Action, QueryDescriptor};
use crate::ident::quote_ident;
use crate::placeholder::PlaceholderRegistry;

/// `DELETE FROM {table} {where} {order_by} {limit}`
///
/// A delete without where clauses is rendered as-is and removes every row.
pub(crate) fn delete_sql(descriptor: &QueryDescriptor, registry: &mut PlaceholderRegistry) -> String {
    let mut sql = Fragments::new();
    sql.push(Action::Delete.keyword())
        .push("FROM")
        .push(quote_ident(descriptor.table()))
        .push_opt(where_sql(descriptor, registry))
        .push_opt(order_by_sql(descriptor))
        .push_opt(limit_sql(descriptor));
    sql.finish()
}
