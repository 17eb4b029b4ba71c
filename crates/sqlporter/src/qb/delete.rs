//! DELETE query builder.

use super::capabilities::{impl_limit_methods, impl_order_by_methods, impl_where_methods};
use super::traits::impl_statement;
use crate::descriptor::{Action, QueryDescriptor};
use crate::placeholder::PlaceholderRegistry;
use crate::synth::Synthesizer;

/// DELETE query builder.
///
/// A DELETE without where clauses is synthesized as-is.
#[derive(Debug, Clone)]
pub struct DeleteQuery {
    descriptor: QueryDescriptor,
    placeholders: PlaceholderRegistry,
    synthesizer: Synthesizer,
}

impl DeleteQuery {
    /// Create a new DELETE builder with a default synthesizer.
    pub fn new() -> Self {
        Self::with_synthesizer(Synthesizer::new())
    }

    pub fn with_synthesizer(synthesizer: Synthesizer) -> Self {
        Self {
            descriptor: QueryDescriptor::new(Action::Delete),
            placeholders: PlaceholderRegistry::new(),
            synthesizer,
        }
    }

    /// Start the chain. Does nothing; reads as `delete().from(..)`.
    pub fn delete(self) -> Self {
        self
    }

    /// Set the table.
    pub fn from(mut self, table: &str) -> Self {
        self.descriptor.set_table(table);
        self
    }

    impl_where_methods!();
    impl_order_by_methods!();
    impl_limit_methods!();
}

impl Default for DeleteQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_statement!(DeleteQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Glue, WhereClause};
    use crate::qb::Statement;

    #[test]
    fn delete_is_a_no_op_marker() {
        let mut qb = DeleteQuery::new().delete().from("t");
        assert_eq!(qb.sql().unwrap(), "DELETE FROM `t`");
        assert!(!qb.is_fetchable());
    }

    #[test]
    fn prebuilt_clause() {
        let mut qb = DeleteQuery::new()
            .from("t")
            .where_clause(WhereClause::new(Glue::None, "id", "IN", "(1,2)"));
        assert_eq!(qb.sql().unwrap(), "DELETE FROM `t` WHERE `id`IN:id");
    }
}
