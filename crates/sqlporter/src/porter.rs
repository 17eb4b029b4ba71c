//! Per-statement factory.
//!
//! A [`Porter`] is an ordinary value owned by the caller. Each `new_*` call
//! hands out a fresh builder with its own descriptor and registry; builders
//! share only the synthesizer configuration.

use crate::config::SynthesizerConfig;
use crate::descriptor::{Action, QueryDescriptor};
use crate::error::PorterResult;
use crate::placeholder::PlaceholderRegistry;
use crate::qb::{DeleteQuery, InsertQuery, SelectQuery, Statement, UpdateQuery};
use crate::synth::Synthesizer;

/// Factory for query builders.
///
/// # Example
/// ```
/// use sqlporter::{Porter, Statement};
///
/// let porter = Porter::new();
/// let mut query = porter.new_delete().from("sessions").where_("expired", "=", true);
/// assert_eq!(query.sql()?, "DELETE FROM `sessions` WHERE `expired`=:expired");
/// # Ok::<(), sqlporter::PorterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Porter {
    synthesizer: Synthesizer,
}

impl Porter {
    /// Create a porter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SynthesizerConfig) -> Self {
        Self {
            synthesizer: Synthesizer::with_config(config),
        }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        self.synthesizer.config()
    }

    pub fn new_select(&self) -> SelectQuery {
        SelectQuery::with_synthesizer(self.synthesizer.clone())
    }

    pub fn new_insert(&self) -> InsertQuery {
        InsertQuery::with_synthesizer(self.synthesizer.clone())
    }

    pub fn new_update(&self) -> UpdateQuery {
        UpdateQuery::with_synthesizer(self.synthesizer.clone())
    }

    pub fn new_delete(&self) -> DeleteQuery {
        DeleteQuery::with_synthesizer(self.synthesizer.clone())
    }

    /// Create a builder for an action known only at runtime.
    ///
    /// Fails with [`PorterError::UnsupportedAction`](crate::PorterError::UnsupportedAction)
    /// for anything other than select/insert/update/delete.
    pub fn new_query(&self, action: &str) -> PorterResult<AnyQuery> {
        Ok(match action.parse::<Action>()? {
            Action::Select => AnyQuery::Select(self.new_select()),
            Action::Insert => AnyQuery::Insert(self.new_insert()),
            Action::Update => AnyQuery::Update(self.new_update()),
            Action::Delete => AnyQuery::Delete(self.new_delete()),
        })
    }
}

/// A builder of any kind.
///
/// Chain methods live on the concrete builders. Match on the variant, or use
/// the `into_*` accessors, to keep building.
///
/// # Example
/// ```
/// use sqlporter::{Porter, Statement};
///
/// let query = Porter::new().new_query("select")?;
/// let mut select = query.into_select().expect("select builder").from("users");
/// assert_eq!(select.sql()?, "SELECT * FROM `users`");
/// # Ok::<(), sqlporter::PorterError>(())
/// ```
#[derive(Debug, Clone)]
pub enum AnyQuery {
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
}

impl AnyQuery {
    pub fn into_select(self) -> Option<SelectQuery> {
        match self {
            AnyQuery::Select(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_insert(self) -> Option<InsertQuery> {
        match self {
            AnyQuery::Insert(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_update(self) -> Option<UpdateQuery> {
        match self {
            AnyQuery::Update(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_delete(self) -> Option<DeleteQuery> {
        match self {
            AnyQuery::Delete(q) => Some(q),
            _ => None,
        }
    }
}

impl Statement for AnyQuery {
    fn descriptor(&self) -> &QueryDescriptor {
        match self {
            AnyQuery::Select(q) => q.descriptor(),
            AnyQuery::Insert(q) => q.descriptor(),
            AnyQuery::Update(q) => q.descriptor(),
            AnyQuery::Delete(q) => q.descriptor(),
        }
    }

    fn placeholders(&self) -> &PlaceholderRegistry {
        match self {
            AnyQuery::Select(q) => q.placeholders(),
            AnyQuery::Insert(q) => q.placeholders(),
            AnyQuery::Update(q) => q.placeholders(),
            AnyQuery::Delete(q) => q.placeholders(),
        }
    }

    fn sql(&mut self) -> PorterResult<String> {
        match self {
            AnyQuery::Select(q) => q.sql(),
            AnyQuery::Insert(q) => q.sql(),
            AnyQuery::Update(q) => q.sql(),
            AnyQuery::Delete(q) => q.sql(),
        }
    }

    fn into_parts(self) -> (QueryDescriptor, PlaceholderRegistry) {
        match self {
            AnyQuery::Select(q) => q.into_parts(),
            AnyQuery::Insert(q) => q.into_parts(),
            AnyQuery::Update(q) => q.into_parts(),
            AnyQuery::Delete(q) => q.into_parts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use crate::error::PorterError;

    #[test]
    fn each_builder_is_fresh() {
        let porter = Porter::new();
        let mut a = porter.new_select().from("a").where_("x", "=", 1);
        let b = porter.new_select();

        a.sql().unwrap();
        assert_eq!(a.placeholders().len(), 1);
        assert!(b.placeholders().is_empty());
        assert!(b.descriptor().where_clauses().is_empty());
    }

    #[test]
    fn new_query_by_name() {
        let porter = Porter::new();
        for (name, action) in [
            ("select", Action::Select),
            ("Insert", Action::Insert),
            ("UPDATE", Action::Update),
            ("delete", Action::Delete),
        ] {
            let query = porter.new_query(name).unwrap();
            assert_eq!(query.action(), action);
            assert_eq!(query.is_fetchable(), action == Action::Select);
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Porter::new().new_query("upsert").unwrap_err();
        assert_eq!(err, PorterError::UnsupportedAction("upsert".into()));
    }

    #[test]
    fn dynamic_insert_without_fields_fails() {
        let query = Porter::new().new_query("insert").unwrap();
        let err = query.build().unwrap_err();
        assert!(err.is_missing_fields());
    }

    #[test]
    fn dynamic_builder_can_keep_chaining() {
        let porter = Porter::new();

        let mut update = porter
            .new_query("update")
            .unwrap()
            .into_update()
            .unwrap()
            .update("users")
            .set([("active", false)])
            .where_("id", "=", 3);
        assert_eq!(
            update.sql().unwrap(),
            "UPDATE `users` SET `active`=:active WHERE `id`=:id"
        );

        assert!(porter.new_query("delete").unwrap().into_select().is_none());
        assert!(porter.new_query("insert").unwrap().into_insert().is_some());
        assert!(porter.new_query("delete").unwrap().into_delete().is_some());
    }

    #[test]
    fn config_is_shared() {
        let porter = Porter::with_config(SynthesizerConfig::new().level(LogLevel::Info));
        assert_eq!(porter.config().log_level, LogLevel::Info);
    }
}
