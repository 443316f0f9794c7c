use std::io::Write;

use schemascope_core::Database;

/// Writes the dependency report: tables in dependency order, each followed by
/// the child tables, views, and routines that depend on it.
pub fn dependency_report(db: &Database, out: &mut dyn Write) -> std::io::Result<()> {
    for table in db.tables_sorted_by_dependency() {
        writeln!(out, "{}.{}", table.schema(), table.name())?;

        let child_keys = db.child_foreign_keys(table);
        if !child_keys.is_empty() {
            writeln!(out, "\tTable Dependencies")?;
            for fk in child_keys {
                writeln!(out, "\t\t{}", fk.child_table().full_name())?;
            }
        }

        let views = db.views_referencing(table);
        if !views.is_empty() {
            writeln!(out, "\tView Dependencies")?;
            for view in views {
                writeln!(out, "\t\t{}", view.full_name())?;
            }
        }

        let routines = db.routines_referencing(table);
        if !routines.is_empty() {
            writeln!(out, "\tRoutine Dependencies")?;
            for routine in routines {
                writeln!(out, "\t\t{}", routine.full_name())?;
            }
        }
    }
    Ok(())
}

/// Writes the tables report: one CSV row per column, tables ordered by full
/// name, columns by their assigned position.
pub fn tables_report(db: &Database, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Schema,Table,Position,Column,Data Type,Precision,Max Length,Is Nullable,Default"
    )?;

    let mut tables: Vec<_> = db.tables().iter().collect();
    tables.sort_by_key(|table| table.full_name());

    for table in tables {
        for column in table.columns().values() {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                table.schema(),
                table.name(),
                column.ordinal_position(),
                column.name(),
                column.data_type(),
                column.numeric_precision(),
                column.max_length(),
                column.is_nullable(),
                column.column_default().unwrap_or(""),
            )?;
        }
    }
    Ok(())
}

/// Writes the views report: one CSV row per view with a truncated definition.
pub fn views_report(db: &Database, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Schema,View,Definition")?;

    let mut views: Vec<_> = db.views().iter().collect();
    views.sort_by_key(|view| view.full_name());

    for view in views {
        writeln!(
            out,
            "{},{},{}",
            view.object_name().schema(),
            view.object_name().name(),
            definition_preview(view.definition()),
        )?;
    }
    Ok(())
}

/// Writes the routines report: one CSV row per routine with a truncated
/// definition.
pub fn routines_report(db: &Database, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Schema,Routine,Definition")?;

    let mut routines: Vec<_> = db.routines().iter().collect();
    routines.sort_by_key(|routine| routine.full_name());

    for routine in routines {
        writeln!(
            out,
            "{},{},{}",
            routine.object_name().schema(),
            routine.object_name().name(),
            definition_preview(routine.definition()),
        )?;
    }
    Ok(())
}

// First 50 characters with line breaks flattened to spaces, enough to make a
// definition scannable in a spreadsheet.
fn definition_preview(definition: &str) -> String {
    definition
        .chars()
        .take(50)
        .collect::<String>()
        .replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemascope_core::{Column, ForeignKey, Table, View};

    fn table(name: &str) -> Table {
        let id = Column::new("dbo", "Id", 1, None, false, "int", 0, 10, true).expect("column");
        Table::new("dbo", name, vec![id]).expect("table")
    }

    fn render(f: impl Fn(&Database, &mut dyn Write) -> std::io::Result<()>, db: &Database) -> String {
        let mut buffer = Vec::new();
        f(db, &mut buffer).expect("render report");
        String::from_utf8(buffer).expect("utf-8 report")
    }

    #[test]
    fn dependency_report_lists_parents_before_children() {
        let parent = table("Customers");
        let child = table("Orders");
        let fk = ForeignKey::new("dbo", "FK", parent.clone(), "Id", child.clone(), "Id")
            .expect("foreign key");
        let db = Database::builder("Shop")
            .tables(vec![child, parent])
            .foreign_keys(vec![fk])
            .build()
            .expect("database");

        let text = render(dependency_report, &db);
        let expected = "dbo.Customers\n\tTable Dependencies\n\t\tdbo.Orders\ndbo.Orders\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn tables_report_orders_rows_and_emits_header() {
        let db = Database::builder("Shop")
            .tables(vec![table("Orders"), table("Customers")])
            .build()
            .expect("database");

        let text = render(tables_report, &db);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Schema,Table,Position,Column,Data Type,Precision,Max Length,Is Nullable,Default"
        );
        assert_eq!(lines[1], "dbo,Customers,1,Id,int,10,0,false,");
        assert_eq!(lines[2], "dbo,Orders,1,Id,int,10,0,false,");
    }

    #[test]
    fn views_report_truncates_long_definitions() {
        let long = "SELECT a, b, c, d, e, f, g\nFROM dbo.SomewhereQuiteLong WHERE a = 1";
        let db = Database::builder("Shop")
            .views(vec![View::new("dbo", "V", long).expect("view")])
            .build()
            .expect("database");

        let text = render(views_report, &db);
        let row = text.lines().nth(1).expect("data row");
        assert!(row.starts_with("dbo,V,SELECT a, b, c"));
        assert!(!row.contains('\n'));
        // Header line plus one data row only.
        assert_eq!(text.lines().count(), 2);
    }
}
