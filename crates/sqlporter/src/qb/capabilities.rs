//! Chain capabilities shared by several builders.
//!
//! Each macro expands to inherent methods inside an `impl` block of a builder
//! that owns a `descriptor: QueryDescriptor` field:
//!
//! ```ignore
//! impl SelectQuery {
//!     impl_where_methods!();
//!     impl_order_by_methods!();
//!     impl_limit_methods!();
//! }
//! ```

/// `where_` / `and_where` / `or_where` / `where_clause`.
macro_rules! impl_where_methods {
    () => {
        /// Add a where clause with no glue. Conventionally the first one.
        pub fn where_(
            mut self,
            field: &str,
            condition: &str,
            value: impl Into<$crate::value::ScalarValue>,
        ) -> Self {
            self.descriptor.push_where_clause($crate::descriptor::WhereClause::new(
                $crate::descriptor::Glue::None,
                field,
                condition,
                value,
            ));
            self
        }

        /// Add a where clause joined with `AND`.
        pub fn and_where(
            mut self,
            field: &str,
            condition: &str,
            value: impl Into<$crate::value::ScalarValue>,
        ) -> Self {
            self.descriptor.push_where_clause($crate::descriptor::WhereClause::new(
                $crate::descriptor::Glue::And,
                field,
                condition,
                value,
            ));
            self
        }

        /// Add a where clause joined with `OR`.
        pub fn or_where(
            mut self,
            field: &str,
            condition: &str,
            value: impl Into<$crate::value::ScalarValue>,
        ) -> Self {
            self.descriptor.push_where_clause($crate::descriptor::WhereClause::new(
                $crate::descriptor::Glue::Or,
                field,
                condition,
                value,
            ));
            self
        }

        /// Add a prebuilt where clause.
        pub fn where_clause(mut self, clause: $crate::descriptor::WhereClause) -> Self {
            self.descriptor.push_where_clause(clause);
            self
        }
    };
}

/// `order_by` / `order_by_field` / `direction`.
macro_rules! impl_order_by_methods {
    () => {
        /// Append ORDER BY fields.
        pub fn order_by<I, S>(mut self, fields: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.descriptor.extend_order_by_fields(fields);
            self
        }

        /// Append a single ORDER BY field.
        pub fn order_by_field(mut self, field: &str) -> Self {
            self.descriptor.push_order_by_field(field);
            self
        }

        /// Set the ORDER BY direction (`ASC` by default). Not validated.
        pub fn direction(mut self, direction: &str) -> Self {
            self.descriptor.set_order_by_direction(direction);
            self
        }
    };
}

/// `limit`.
macro_rules! impl_limit_methods {
    () => {
        /// Set LIMIT. Zero means no limit.
        pub fn limit(mut self, limit: u64) -> Self {
            self.descriptor.set_limit(limit);
            self
        }
    };
}

pub(crate) use impl_limit_methods;
pub(crate) use impl_order_by_methods;
pub(crate) use impl_where_methods;
