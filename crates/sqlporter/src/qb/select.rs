//! SELECT query builder.

use super::capabilities::{impl_limit_methods, impl_order_by_methods, impl_where_methods};
use super::traits::impl_statement;
use crate::descriptor::{Action, QueryDescriptor};
use crate::placeholder::PlaceholderRegistry;
use crate::synth::Synthesizer;

/// SELECT query builder.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    descriptor: QueryDescriptor,
    placeholders: PlaceholderRegistry,
    synthesizer: Synthesizer,
}

impl SelectQuery {
    /// Create a new SELECT builder with a default synthesizer.
    pub fn new() -> Self {
        Self::with_synthesizer(Synthesizer::new())
    }

    pub fn with_synthesizer(synthesizer: Synthesizer) -> Self {
        Self {
            descriptor: QueryDescriptor::new(Action::Select),
            placeholders: PlaceholderRegistry::new(),
            synthesizer,
        }
    }

    /// Append fields to select. With none, `*` is selected.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.extend_select_fields(fields);
        self
    }

    /// Append a single field to select.
    pub fn select_field(mut self, field: &str) -> Self {
        self.descriptor.push_select_field(field);
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

impl Default for SelectQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_statement!(SelectQuery);
