//! SELECT synthesis.

use super::clauses::{Fragments, limit_sql, order_by_sql, select_fields_sql, where_sql};
use crate::descriptor::{Action, QueryDescriptor};
use crate::ident::quote_ident;
use crate::placeholder::PlaceholderRegistry;

/// `SELECT {fields} FROM {table} {where} {order_by} {limit}`
pub(crate) fn select_sql(descriptor: &QueryDescriptor, registry: &mut PlaceholderRegistry) -> String {
    let mut sql = Fragments::new();
    sql.push(Action::Select.keyword())
        .push(select_fields_sql(descriptor))
        .push("FROM")
        .push(quote_ident(descriptor.table()))
        .push_opt(where_sql(descriptor, registry))
        .push_opt(order_by_sql(descriptor))
        .push_opt(limit_sql(descriptor));
    sql.finish()
}
