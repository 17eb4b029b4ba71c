//! Fragments shared by several statement kinds.

use crate::descriptor::{Glue, QueryDescriptor, WhereClause};
use crate::ident::{quote_list, write_ident};
use crate::placeholder::PlaceholderRegistry;

/// Space-joined statement pieces. Empty pieces are dropped so omitted
/// clauses leave no stray whitespace.
#[derive(Debug, Default)]
pub(crate) struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, part: impl Into<String>) -> &mut Self {
        let part = part.into();
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            self.parts.push(trimmed.to_string());
        }
        self
    }

    pub(crate) fn push_opt(&mut self, part: Option<String>) -> &mut Self {
        if let Some(part) = part {
            self.push(part);
        }
        self
    }

    pub(crate) fn finish(&self) -> String {
        self.parts.join(" ")
    }
}

/// Comma-joined select fields, or `*` when none were given.
pub(crate) fn select_fields_sql(descriptor: &QueryDescriptor) -> String {
    if descriptor.select_fields().is_empty() {
        return "*".to_string();
    }
    quote_list(descriptor.select_fields())
}

/// `WHERE ...`, registering every clause value in order.
pub(crate) fn where_sql(
    descriptor: &QueryDescriptor,
    registry: &mut PlaceholderRegistry,
) -> Option<String> {
    let clauses = descriptor.where_clauses();
    if clauses.is_empty() {
        return None;
    }

    let mut sql = String::from("WHERE ");
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            sql.push(' ');
        }
        write_where_clause(clause, registry, &mut sql);
    }
    Some(sql)
}

fn write_where_clause(clause: &WhereClause, registry: &mut PlaceholderRegistry, out: &mut String) {
    let placeholder = registry.register_field(&clause.field_name, &clause.field_value);

    if clause.glue != Glue::None {
        out.push_str(clause.glue.keyword());
        out.push(' ');
    }
    write_ident(&clause.field_name, out);
    out.push_str(&clause.condition);
    out.push_str(&placeholder);
}

/// `ORDER BY <fields> <direction>`.
pub(crate) fn order_by_sql(descriptor: &QueryDescriptor) -> Option<String> {
    if descriptor.order_by_fields().is_empty() {
        return None;
    }
    Some(format!(
        "ORDER BY {} {}",
        quote_list(descriptor.order_by_fields()),
        descriptor.order_by_direction()
    ))
}

/// `LIMIT n` when a positive limit is set.
pub(crate) fn limit_sql(descriptor: &QueryDescriptor) -> Option<String> {
    match descriptor.limit() {
        Some(n) if n > 0 => Some(format!("LIMIT {n}")),
        _ => None,
    }
}
