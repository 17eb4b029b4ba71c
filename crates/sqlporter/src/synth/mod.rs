//! SQL synthesis.
//!
//! Turns a [`QueryDescriptor`] into SQL text, registering every bound value
//! into a [`PlaceholderRegistry`] in the order it is visited:
//! INSERT/UPDATE fields first, then where clauses.
//!
//! Synthesis is a template fill over the descriptor. Nothing is parsed and
//! nothing is validated beyond the presence of fields to write.
//!
//! # Example
//! ```
//! use sqlporter::{Action, PlaceholderRegistry, QueryDescriptor, Synthesizer};
//!
//! let mut descriptor = QueryDescriptor::new(Action::Select);
//! descriptor.set_table("users");
//!
//! let mut registry = PlaceholderRegistry::new();
//! let sql = Synthesizer::new().synthesize(&descriptor, &mut registry)?;
//! assert_eq!(sql, "SELECT * FROM `users`");
//! # Ok::<(), sqlporter::PorterError>(())
//! ```

mod clauses;
mod delete;
mod insert;
mod select;
mod update;

use crate::config::SynthesizerConfig;
use crate::descriptor::{Action, QueryDescriptor};
use crate::error::{PorterError, PorterResult};
use crate::placeholder::PlaceholderRegistry;

/// Translates descriptors into SQL text.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesizerConfig,
}

impl Synthesizer {
    /// Create a synthesizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Synthesize SQL for `descriptor`, registering placeholders in `registry`.
    ///
    /// On error no SQL is produced and `registry` is left untouched.
    pub fn synthesize(
        &self,
        descriptor: &QueryDescriptor,
        registry: &mut PlaceholderRegistry,
    ) -> PorterResult<String> {
        let result = render(descriptor, registry);
        self.log(descriptor, registry, &result);
        result
    }

    #[cfg(feature = "tracing")]
    fn log(
        &self,
        descriptor: &QueryDescriptor,
        registry: &PlaceholderRegistry,
        result: &PorterResult<String>,
    ) {
        use crate::config::LogLevel;

        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    LogLevel::Error => tracing::error!($($field)*),
                    LogLevel::Warn  => tracing::warn!($($field)*),
                    LogLevel::Info  => tracing::info!($($field)*),
                    LogLevel::Debug => tracing::debug!($($field)*),
                    LogLevel::Trace => tracing::trace!($($field)*),
                }
            };
        }

        let action = descriptor.action().name();
        match result {
            Ok(sql) => {
                let sql = self.truncate_sql(sql);
                emit_at_level!(
                    self.config.log_level,
                    target: "sqlporter.sql",
                    action,
                    table = descriptor.table(),
                    placeholder_count = registry.len(),
                    sql = %sql
                );
            }
            Err(err) => tracing::warn!(
                target: "sqlporter.sql",
                action,
                table = descriptor.table(),
                error = %err,
                "synthesis failed"
            ),
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn log(&self, _: &QueryDescriptor, _: &PlaceholderRegistry, _: &PorterResult<String>) {}

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn truncate_sql(&self, sql: &str) -> String {
        match self.config.max_logged_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }
}

/// Synthesize with a default [`Synthesizer`].
pub fn synthesize(
    descriptor: &QueryDescriptor,
    registry: &mut PlaceholderRegistry,
) -> PorterResult<String> {
    Synthesizer::new().synthesize(descriptor, registry)
}

fn render(descriptor: &QueryDescriptor, registry: &mut PlaceholderRegistry) -> PorterResult<String> {
    let action = descriptor.action();
    if action.writes_fields() && descriptor.modify_fields().is_empty() {
        return Err(PorterError::MissingFields(action));
    }

    Ok(match action {
        Action::Select => select::select_sql(descriptor, registry),
        Action::Insert => insert::insert_sql(descriptor, registry),
        Action::Update => update::update_sql(descriptor, registry),
        Action::Delete => delete::delete_sql(descriptor, registry),
    })
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::config::LogLevel;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    #[derive(Debug, Clone)]
    struct Captured {
        target: String,
        level: Level,
        sql: Option<String>,
        error: Option<String>,
    }

    #[derive(Default)]
    struct Fields {
        sql: Option<String>,
        error: Option<String>,
    }

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "sql" => self.sql = Some(format!("{value:?}")),
                "error" => self.error = Some(format!("{value:?}")),
                _ => {}
            }
        }
    }

    #[derive(Clone, Default)]
    struct Capture {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl Subscriber for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.events.lock().unwrap().push(Captured {
                target: event.metadata().target().to_string(),
                level: *event.metadata().level(),
                sql: fields.sql,
                error: fields.error,
            });
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let subscriber = Capture::default();
        let events = Arc::clone(&subscriber.events);
        tracing::subscriber::with_default(subscriber, f);
        let events = events.lock().unwrap().clone();
        events
            .into_iter()
            .filter(|e| e.target == "sqlporter.sql")
            .collect()
    }

    fn select_users() -> QueryDescriptor {
        let mut d = QueryDescriptor::new(Action::Select);
        d.set_table("users");
        d
    }

    #[test]
    fn success_logs_sql_at_debug() {
        let events = capture(|| {
            Synthesizer::new()
                .synthesize(&select_users(), &mut PlaceholderRegistry::new())
                .unwrap();
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::DEBUG);
        assert_eq!(events[0].sql.as_deref(), Some("SELECT * FROM `users`"));
    }

    #[test]
    fn configured_level_is_used() {
        let synthesizer = Synthesizer::with_config(SynthesizerConfig::new().level(LogLevel::Info));
        let events = capture(|| {
            synthesizer
                .synthesize(&select_users(), &mut PlaceholderRegistry::new())
                .unwrap();
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::INFO);
    }

    #[test]
    fn failure_logs_warn() {
        let mut d = QueryDescriptor::new(Action::Insert);
        d.set_table("users");
        let events = capture(|| {
            assert!(synthesize(&d, &mut PlaceholderRegistry::new()).is_err());
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(events[0].sql, None);
        assert_eq!(
            events[0].error.as_deref(),
            Some("No modify fields specified for INSERT query")
        );
    }

    #[test]
    fn long_sql_is_truncated_in_logs() {
        let synthesizer =
            Synthesizer::with_config(SynthesizerConfig::new().max_logged_sql_length(6));
        let events = capture(|| {
            synthesizer
                .synthesize(&select_users(), &mut PlaceholderRegistry::new())
                .unwrap();
        });

        assert_eq!(events[0].sql.as_deref(), Some("SELECT..."));
    }
}
