use schemascope_core::{Column, Database, Routine, Table, View};

fn table(schema: &str, name: &str) -> Table {
    let id = Column::new(schema, "Id", 1, None, false, "int", 0, 0, true).expect("column");
    Table::new(schema, name, vec![id]).expect("table")
}

fn view(name: &str, definition: &str) -> View {
    View::new("dbo", name, definition).expect("view")
}

#[test]
fn qualified_reference_respects_schema() {
    let orders = table("dbo", "Orders");
    let db = Database::builder("Test")
        .tables(vec![orders.clone()])
        .views(vec![
            view("MatchingView", "SELECT * FROM dbo.Orders"),
            view("OtherSchemaView", "SELECT * FROM otherschema.Orders"),
        ])
        .build()
        .expect("database");

    let referencing = db.views_referencing(&orders);
    assert_eq!(referencing.len(), 1);
    assert_eq!(referencing[0].full_name(), "dbo.MatchingView");
}

#[test]
fn unqualified_reference_matches_any_schema() {
    let orders = table("sales", "Orders");
    let db = Database::builder("Test")
        .tables(vec![orders.clone()])
        .views(vec![view("BareView", "SELECT o.Id FROM Orders o")])
        .build()
        .expect("database");

    assert_eq!(db.views_referencing(&orders).len(), 1);
}

#[test]
fn matching_is_case_insensitive() {
    let orders = table("dbo", "Orders");
    let db = Database::builder("Test")
        .tables(vec![orders.clone()])
        .views(vec![view("ShoutingView", "SELECT * FROM DBO.ORDERS")])
        .build()
        .expect("database");

    assert_eq!(db.views_referencing(&orders).len(), 1);
}

#[test]
fn repeated_references_contribute_one_entry() {
    let orders = table("dbo", "Orders");
    let definition = "SELECT * FROM dbo.Orders;\nSELECT * FROM Orders;\nSELECT * FROM [dbo].[Orders]";
    let db = Database::builder("Test")
        .tables(vec![orders.clone()])
        .views(vec![view("TripleView", definition)])
        .build()
        .expect("database");

    assert_eq!(db.views_referencing(&orders).len(), 1);
}

#[test]
fn routines_are_scanned_like_views() {
    let orders = table("dbo", "Orders");
    let matching = Routine::new(
        "dbo",
        "GetOrders",
        "CREATE PROCEDURE GetOrders AS SELECT * FROM [dbo].[Orders]",
        "PROCEDURE",
    )
    .expect("routine");
    let unrelated = Routine::new(
        "dbo",
        "GetCustomers",
        "CREATE PROCEDURE GetCustomers AS SELECT * FROM dbo.Customers",
        "PROCEDURE",
    )
    .expect("routine");

    let db = Database::builder("Test")
        .tables(vec![orders.clone()])
        .routines(vec![matching, unrelated])
        .build()
        .expect("database");

    let referencing = db.routines_referencing(&orders);
    assert_eq!(referencing.len(), 1);
    assert_eq!(referencing[0].full_name(), "dbo.GetOrders");
}
