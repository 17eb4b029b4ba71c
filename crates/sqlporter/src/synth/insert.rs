//! INSERT synthesis.

use super::clauses::Fragments;
use crate::descriptor::{Action, QueryDescriptor};
use crate::ident::{quote_ident, quote_list};
use crate::placeholder::PlaceholderRegistry;

/// `INSERT INTO {table} ({field_names}) VALUES ({placeholders})`
///
/// Where clauses, ordering and limit have no place in this template and are
/// ignored. The caller has already checked that `modify_fields` is non-empty.
pub(crate) fn insert_sql(descriptor: &QueryDescriptor, registry: &mut PlaceholderRegistry) -> String {
    let fields = descriptor.modify_fields();
    let names: Vec<&str> = fields.keys().collect();
    let placeholders: Vec<String> = fields
        .iter()
        .map(|(field, value)| registry.register_field(field, value))
        .collect();

    let mut sql = Fragments::new();
    sql.push(Action::Insert.keyword())
        .push("INTO")
        .push(quote_ident(descriptor.table()))
        .push(format!("({})", quote_list(&names)))
        .push("VALUES")
        .push(format!("({})", placeholders.join(",")));
    sql.finish()
}
