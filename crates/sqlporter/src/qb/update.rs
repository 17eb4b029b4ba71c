//! UPDATE query builder.

use super::capabilities::{impl_limit_methods, impl_order_by_methods, impl_where_methods};
use super::traits::impl_statement;
use crate::descriptor::{Action, QueryDescriptor};
use crate::placeholder::PlaceholderRegistry;
use crate::synth::Synthesizer;
use crate::value::ScalarValue;

/// UPDATE query builder.
#[derive(Debug, Clone)]
pub struct UpdateQuery {
    descriptor: QueryDescriptor,
    placeholders: PlaceholderRegistry,
    synthesizer: Synthesizer,
}

impl UpdateQuery {
    /// Create a new UPDATE builder with a default synthesizer.
    pub fn new() -> Self {
        Self::with_synthesizer(Synthesizer::new())
    }

    pub fn with_synthesizer(synthesizer: Synthesizer) -> Self {
        Self {
            descriptor: QueryDescriptor::new(Action::Update),
            placeholders: PlaceholderRegistry::new(),
            synthesizer,
        }
    }

    /// Set the table.
    pub fn update(mut self, table: &str) -> Self {
        self.descriptor.set_table(table);
        self
    }

    /// Set column values.
    pub fn set<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ScalarValue>,
    {
        self.descriptor.extend_modify_fields(fields);
        self
    }

    /// Set a single column value.
    pub fn set_value(mut self, field: &str, value: impl Into<ScalarValue>) -> Self {
        self.descriptor.set_modify_field(field, value);
        self
    }

    impl_where_methods!();
    impl_order_by_methods!();
    impl_limit_methods!();
}

impl Default for UpdateQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_statement!(UpdateQuery);
