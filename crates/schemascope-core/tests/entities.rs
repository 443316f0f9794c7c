use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use schemascope_core::{Column, ForeignKey, Routine, Table, View};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn column(name: &str) -> Column {
    Column::new(
        "dbo",
        name,
        1,
        Some("0".to_string()),
        false,
        "int",
        4,
        10,
        false,
    )
    .expect("column")
}

#[test]
fn columns_with_identical_fields_are_equal() {
    let a = column("Amount");
    let b = column("Amount");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn changing_any_column_field_breaks_equality() {
    let base = column("Amount");
    let renamed = Column::new(
        "dbo",
        "Total",
        1,
        Some("0".to_string()),
        false,
        "int",
        4,
        10,
        false,
    )
    .expect("column");
    let nullable = Column::new(
        "dbo",
        "Amount",
        1,
        Some("0".to_string()),
        true,
        "int",
        4,
        10,
        false,
    )
    .expect("column");
    let retyped = Column::new(
        "dbo",
        "Amount",
        1,
        Some("0".to_string()),
        false,
        "bigint",
        4,
        10,
        false,
    )
    .expect("column");
    let no_default = Column::new("dbo", "Amount", 1, None, false, "int", 4, 10, false)
        .expect("column");

    assert_ne!(base, renamed);
    assert_ne!(base, nullable);
    assert_ne!(base, retyped);
    assert_ne!(base, no_default);
}

#[test]
fn tables_with_same_columns_in_same_order_are_equal() {
    let a = Table::new("dbo", "T", vec![column("x"), column("y")]).expect("table");
    let b = Table::new("dbo", "T", vec![column("x"), column("y")]).expect("table");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn views_and_routines_compare_structurally() {
    let v1 = View::new("dbo", "V", "select 1").expect("view");
    let v2 = View::new("dbo", "V", "select 1").expect("view");
    let v3 = View::new("dbo", "V", "select 2").expect("view");
    assert_eq!(v1, v2);
    assert_eq!(hash_of(&v1), hash_of(&v2));
    assert_ne!(v1, v3);

    let r1 = Routine::new("dbo", "R", "select 1", "FUNCTION").expect("routine");
    let r2 = Routine::new("dbo", "R", "select 1", "FUNCTION").expect("routine");
    let r3 = Routine::new("dbo", "R", "select 1", "PROCEDURE").expect("routine");
    assert_eq!(r1, r2);
    assert_eq!(hash_of(&r1), hash_of(&r2));
    assert_ne!(r1, r3);
}

#[test]
fn foreign_keys_compare_structurally() {
    let parent = Table::new("dbo", "P", vec![column("Id")]).expect("table");
    let child = Table::new("dbo", "C", vec![column("Pid")]).expect("table");

    let fk = |col: &str| {
        ForeignKey::new("dbo", "FK", parent.clone(), "Id", child.clone(), col)
            .expect("foreign key")
    };
    assert_eq!(fk("Pid"), fk("Pid"));
    assert_eq!(hash_of(&fk("Pid")), hash_of(&fk("Pid")));
    assert_ne!(fk("Pid"), fk("Other"));
}
