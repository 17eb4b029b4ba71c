//! Trait definitions for query builders.

use crate::descriptor::{Action, QueryDescriptor};
use crate::error::PorterResult;
use crate::placeholder::PlaceholderRegistry;

/// Read side shared by all query builders.
///
/// Each builder owns its descriptor and the registry its placeholders are
/// written into. The registry accumulates across calls to [`Statement::sql`].
pub trait Statement {
    /// The descriptor built so far.
    fn descriptor(&self) -> &QueryDescriptor;

    /// Placeholders registered by previous calls to [`Statement::sql`].
    fn placeholders(&self) -> &PlaceholderRegistry;

    /// Synthesize the SQL, registering placeholders into this builder.
    fn sql(&mut self) -> PorterResult<String>;

    /// Split into the descriptor and registry.
    fn into_parts(self) -> (QueryDescriptor, PlaceholderRegistry)
    where
        Self: Sized;

    fn action(&self) -> Action {
        self.descriptor().action()
    }

    /// Whether the statement returns rows.
    fn is_fetchable(&self) -> bool {
        self.descriptor().is_fetchable()
    }

    /// Synthesize and hand back the SQL together with its placeholders.
    fn build(mut self) -> PorterResult<BuiltQuery>
    where
        Self: Sized,
    {
        let sql = self.sql()?;
        let (_, placeholders) = self.into_parts();
        Ok(BuiltQuery { sql, placeholders })
    }
}

/// The result of building a query.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub placeholders: PlaceholderRegistry,
}

/// Implement [`Statement`] for a builder with `descriptor`, `placeholders`
/// and `synthesizer` fields.
macro_rules! impl_statement {
    ($ty:ty) => {
        impl $crate::qb::Statement for $ty {
            fn descriptor(&self) -> &$crate::descriptor::QueryDescriptor {
                &self.descriptor
            }

            fn placeholders(&self) -> &$crate::placeholder::PlaceholderRegistry {
                &self.placeholders
            }

            fn sql(&mut self) -> $crate::error::PorterResult<String> {
                self.synthesizer.synthesize(&self.descriptor, &mut self.placeholders)
            }

            fn into_parts(
                self,
            ) -> (
                $crate::descriptor::QueryDescriptor,
                $crate::placeholder::PlaceholderRegistry,
            ) {
                (self.descriptor, self.placeholders)
            }
        }
    };
}

pub(crate) use impl_statement;
