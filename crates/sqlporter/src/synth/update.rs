//! UPDATE synthesis.

use super::clauses::{Fragments, limit_sql, order_by_sql, where_sql};
use crate::descriptor::{Action, QueryDescriptor};
use crate::ident::{quote_ident, write_ident};
use crate::placeholder::PlaceholderRegistry;

/// `UPDATE {table} SET {assignments} {where} {order_by} {limit}`
///
/// Assignments register before where clauses, so a where clause on a field
/// that is also being set overwrites the assigned value in the registry.
pub(crate) fn update_sql(descriptor: &QueryDescriptor, registry: &mut PlaceholderRegistry) -> String {
    let mut assignments = String::new();
    for (i, (field, value)) in descriptor.modify_fields().iter().enumerate() {
        if i > 0 {
            assignments.push(',');
        }
        let placeholder = registry.register_field(field, value);
        write_ident(field, &mut assignments);
        assignments.push('=');
        assignments.push_str(&placeholder);
    }

    let mut sql = Fragments::new();
    sql.push(Action::Update.keyword())
        .push(quote_ident(descriptor.table()))
        .push("SET")
        .push(assignments)
        .push_opt(where_sql(descriptor, registry))
        .push_opt(order_by_sql(descriptor))
        .push_opt(limit_sql(descriptor));
    sql.finish()
}
