//! INSERT query builder.

use super::traits::impl_statement;
use crate::descriptor::{Action, QueryDescriptor};
use crate::placeholder::PlaceholderRegistry;
use crate::synth::Synthesizer;
use crate::value::ScalarValue;

/// INSERT query builder.
///
/// INSERT has no where/order/limit chain; the template has nowhere to put
/// them.
#[derive(Debug, Clone)]
pub struct InsertQuery {
    descriptor: QueryDescriptor,
    placeholders: PlaceholderRegistry,
    synthesizer: Synthesizer,
}

impl InsertQuery {
    /// Create a new INSERT builder with a default synthesizer.
    pub fn new() -> Self {
        Self::with_synthesizer(Synthesizer::new())
    }

    pub fn with_synthesizer(synthesizer: Synthesizer) -> Self {
        Self {
            descriptor: QueryDescriptor::new(Action::Insert),
            placeholders: PlaceholderRegistry::new(),
            synthesizer,
        }
    }

    /// Set field values. A field given twice keeps its first position and
    /// the last value.
    pub fn insert<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ScalarValue>,
    {
        self.descriptor.extend_modify_fields(fields);
        self
    }

    /// Set a single field value.
    pub fn value(mut self, field: &str, value: impl Into<ScalarValue>) -> Self {
        self.descriptor.set_modify_field(field, value);
        self
    }

    /// Set the table.
    pub fn into(mut self, table: &str) -> Self {
        self.descriptor.set_table(table);
        self
    }
}

impl Default for InsertQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_statement!(InsertQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PorterError;
    use crate::qb::Statement;

    #[test]
    fn not_fetchable() {
        assert!(!InsertQuery::new().is_fetchable());
    }

    #[test]
    fn mixed_value_types() {
        let mut qb = InsertQuery::new()
            .insert([("name", ScalarValue::from("widget"))])
            .value("price", 9.5)
            .value("stock", 3)
            .value("active", true)
            .into("products");
        assert_eq!(
            qb.sql().unwrap(),
            "INSERT INTO `products` (`name`,`price`,`stock`,`active`) VALUES (:name,:price,:stock,:active)"
        );
        assert_eq!(qb.placeholders().get(":price"), Some(&ScalarValue::Float(9.5)));
        assert_eq!(qb.placeholders().get(":active"), Some(&ScalarValue::Bool(true)));
    }

    #[test]
    fn repeated_field_is_overwritten() {
        let mut qb = InsertQuery::new()
            .value("a", 1)
            .value("b", 2)
            .value("a", 3)
            .into("t");
        assert_eq!(qb.sql().unwrap(), "INSERT INTO `t` (`a`,`b`) VALUES (:a,:b)");
        assert_eq!(qb.placeholders().get(":a"), Some(&ScalarValue::Int(3)));
    }

    #[test]
    fn empty_insert_fails() {
        let mut qb = InsertQuery::new().into("t");
        assert_eq!(qb.sql(), Err(PorterError::MissingFields(Action::Insert)));
        assert!(qb.placeholders().is_empty());
    }
}
