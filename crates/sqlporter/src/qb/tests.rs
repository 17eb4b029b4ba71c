//! Cross-builder tests for the qb module.

use crate::qb::{Statement, delete, insert, select, update};
use crate::value::ScalarValue;

#[test]
fn test_select_basic() {
    let mut qb = select().from("users");
    assert_eq!(qb.sql().unwrap(), "SELECT * FROM `users`");
}

#[test]
fn test_where_and_set_share_placeholder() {
    // The where value overwrites the assigned value under the same name.
    let mut qb = update()
        .update("users")
        .set([("name", "new")])
        .where_("name", "=", "old");

    let sql = qb.sql().unwrap();
    assert_eq!(sql, "UPDATE `users` SET `name`=:name WHERE `name`=:name");
    assert_eq!(sql.matches(":name").count(), 2);
    assert_eq!(qb.placeholders().len(), 1);
    assert_eq!(qb.placeholders().get(":name"), Some(&ScalarValue::from("old")));
}

#[test]
fn test_two_where_clauses_same_field() {
    let mut qb = select()
        .from("events")
        .where_("at", ">", 10)
        .and_where("at", "<", 20);

    assert_eq!(
        qb.sql().unwrap(),
        "SELECT * FROM `events` WHERE `at`>:at AND `at`<:at"
    );
    assert_eq!(qb.placeholders().len(), 1);
    assert_eq!(qb.placeholders().get(":at"), Some(&ScalarValue::Int(20)));
}

#[test]
fn test_unconventional_glue_is_rendered() {
    let mut qb = delete()
        .from("t")
        .where_("a", "=", 1)
        .where_("b", "=", 2)
        .and_where("c", "=", 3);
    assert_eq!(
        qb.sql().unwrap(),
        "DELETE FROM `t` WHERE `a`=:a `b`=:b AND `c`=:c"
    );
}

#[test]
fn test_leading_and_glue_is_rendered() {
    let mut qb = select().from("t").and_where("a", "=", 1);
    assert_eq!(qb.sql().unwrap(), "SELECT * FROM `t` WHERE AND `a`=:a");
}

#[test]
fn test_empty_table_is_accepted() {
    let mut qb = select();
    assert_eq!(qb.sql().unwrap(), "SELECT * FROM ``");
}

#[test]
fn test_repeated_sql_does_not_grow_registry() {
    let mut qb = insert().value("a", 1).into("t");
    qb.sql().unwrap();
    qb.sql().unwrap();
    assert_eq!(qb.placeholders().len(), 1);
}

#[test]
fn test_fetchability_by_action() {
    assert!(select().is_fetchable());
    assert!(!insert().is_fetchable());
    assert!(!update().is_fetchable());
    assert!(!delete().is_fetchable());
}
