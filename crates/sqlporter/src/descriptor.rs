//! The statement descriptor and its where-clause model.
//!
//! A [`QueryDescriptor`] captures the full shape of one statement before
//! synthesis. It is plain data: builders fill it in, the synthesizer reads it.

use crate::error::{PorterError, PorterResult};
use crate::placeholder::upsert_entry;
use crate::value::ScalarValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default ORDER BY direction.
pub const DEFAULT_DIRECTION: &str = "ASC";

/// The statement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Select,
    Insert,
    Update,
    Delete,
}

impl Action {
    /// All supported actions.
    pub const ALL: [Action; 4] = [Action::Select, Action::Insert, Action::Update, Action::Delete];

    /// The uppercase SQL keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Action::Select => "SELECT",
            Action::Insert => "INSERT",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }

    /// The lowercase action name.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Select => "select",
            Action::Insert => "insert",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// Whether statements of this kind return rows.
    pub const fn is_fetchable(self) -> bool {
        matches!(self, Action::Select)
    }

    /// Whether statements of this kind write `modify_fields`.
    pub const fn writes_fields(self) -> bool {
        matches!(self, Action::Insert | Action::Update)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Action {
    type Err = PorterError;

    /// Parse an action name, ignoring ASCII case.
    fn from_str(s: &str) -> PorterResult<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PorterError::unsupported_action(s))
    }
}

/// The boolean connector joining a where clause to the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glue {
    /// No connector; conventionally the first clause.
    #[default]
    None,
    And,
    Or,
}

impl Glue {
    /// The uppercase keyword, empty for [`Glue::None`].
    pub const fn keyword(self) -> &'static str {
        match self {
            Glue::None => "",
            Glue::And => "AND",
            Glue::Or => "OR",
        }
    }
}

/// One conjunct/disjunct of a WHERE condition.
///
/// Glue sequences are not checked: two consecutive [`Glue::None`] clauses
/// render side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    pub glue: Glue,
    pub field_name: String,
    /// Comparison operator token, e.g. `=`, `>`, `LIKE`. Not validated.
    pub condition: String,
    pub field_value: ScalarValue,
}

impl WhereClause {
    pub fn new(
        glue: Glue,
        field_name: impl Into<String>,
        condition: impl Into<String>,
        field_value: impl Into<ScalarValue>,
    ) -> Self {
        Self {
            glue,
            field_name: field_name.into(),
            condition: condition.into(),
            field_value: field_value.into(),
        }
    }
}

/// Ordered field → value pairs for INSERT/UPDATE.
///
/// Setting a field that is already present replaces its value and keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<(String, ScalarValue)>",
    into = "Vec<(String, ScalarValue)>"
)]
pub struct FieldMap {
    entries: Vec<(String, ScalarValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<ScalarValue>) {
        upsert_entry(&mut self.entries, field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&ScalarValue> {
        self.entries.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

// Deserialized entries go through `set` so duplicate keys collapse.
impl From<Vec<(String, ScalarValue)>> for FieldMap {
    fn from(entries: Vec<(String, ScalarValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<FieldMap> for Vec<(String, ScalarValue)> {
    fn from(map: FieldMap) -> Self {
        map.entries
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> Extend<(K, V)> for FieldMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// The full shape of one statement.
///
/// `action` and `fetchable` are fixed together at construction; there is no
/// way to change either afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    action: Action,
    fetchable: bool,
    table: String,
    select_fields: Vec<String>,
    modify_fields: FieldMap,
    where_clauses: Vec<WhereClause>,
    order_by_fields: Vec<String>,
    order_by_direction: String,
    limit: Option<u64>,
}

impl QueryDescriptor {
    /// Create an empty descriptor for the given action.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            fetchable: action.is_fetchable(),
            table: String::new(),
            select_fields: Vec::new(),
            modify_fields: FieldMap::new(),
            where_clauses: Vec::new(),
            order_by_fields: Vec::new(),
            order_by_direction: DEFAULT_DIRECTION.to_string(),
            limit: None,
        }
    }

    /// Create an empty descriptor from an action name such as `"select"`.
    pub fn for_action_name(name: &str) -> PorterResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn is_fetchable(&self) -> bool {
        self.fetchable
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table = table.into();
    }

    pub fn select_fields(&self) -> &[String] {
        &self.select_fields
    }

    pub fn push_select_field(&mut self, field: impl Into<String>) {
        self.select_fields.push(field.into());
    }

    pub fn extend_select_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_fields.extend(fields.into_iter().map(Into::into));
    }

    pub fn modify_fields(&self) -> &FieldMap {
        &self.modify_fields
    }

    pub fn set_modify_field(&mut self, field: impl Into<String>, value: impl Into<ScalarValue>) {
        self.modify_fields.set(field, value);
    }

    pub fn extend_modify_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ScalarValue>,
    {
        self.modify_fields.extend(fields);
    }

    pub fn where_clauses(&self) -> &[WhereClause] {
        &self.where_clauses
    }

    pub fn push_where_clause(&mut self, clause: WhereClause) {
        self.where_clauses.push(clause);
    }

    pub fn extend_where_clauses(&mut self, clauses: impl IntoIterator<Item = WhereClause>) {
        self.where_clauses.extend(clauses);
    }

    pub fn order_by_fields(&self) -> &[String] {
        &self.order_by_fields
    }

    pub fn push_order_by_field(&mut self, field: impl Into<String>) {
        self.order_by_fields.push(field.into());
    }

    pub fn extend_order_by_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by_fields.extend(fields.into_iter().map(Into::into));
    }

    pub fn order_by_direction(&self) -> &str {
        &self.order_by_direction
    }

    pub fn set_order_by_direction(&mut self, direction: impl Into<String>) {
        self.order_by_direction = direction.into();
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    pub fn clear_limit(&mut self) {
        self.limit = None;
    }
}
