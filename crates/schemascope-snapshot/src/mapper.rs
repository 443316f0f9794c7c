use schemascope_core::{Column, Database, ForeignKey, Routine, Table, View};

use crate::error::{Result, SnapshotError};
use crate::model::{RawColumn, RawForeignKey, RawTable, SnapshotFile};
use crate::options::SnapshotOptions;

/// Maps a raw snapshot document into an immutable [`Database`] aggregate.
///
/// Tables map first; foreign keys then resolve both endpoints against the
/// mapped tables by `(schema, name)`. A key whose child table is absent from
/// the snapshot is skipped; a key whose parent table is absent is a malformed
/// snapshot and fails the whole build.
pub fn build_database(snapshot: &SnapshotFile, opts: &SnapshotOptions) -> Result<Database> {
    let tables = if opts.include_tables {
        snapshot
            .tables
            .iter()
            .map(map_table)
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let foreign_keys = if opts.include_foreign_keys {
        map_foreign_keys(&snapshot.foreign_keys, &tables)?
    } else {
        Vec::new()
    };

    let views = if opts.include_views {
        snapshot
            .views
            .iter()
            .map(|view| View::new(&view.schema, &view.name, &view.definition))
            .collect::<schemascope_core::Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let routines = if opts.include_routines {
        snapshot
            .routines
            .iter()
            .map(|routine| {
                Routine::new(
                    &routine.schema,
                    &routine.name,
                    &routine.definition,
                    &routine.routine_type,
                )
            })
            .collect::<schemascope_core::Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let mut builder = Database::builder(&snapshot.database)
        .tables(tables)
        .foreign_keys(foreign_keys)
        .views(views)
        .routines(routines);
    if let Some(connection_string) = &snapshot.connection_string {
        builder = builder.connection_string(connection_string);
    }
    builder.build().map_err(SnapshotError::from)
}

fn map_table(raw: &RawTable) -> Result<Table> {
    let columns = raw
        .columns
        .iter()
        .map(|column| map_column(&raw.schema, column))
        .collect::<Result<Vec<_>>>()?;
    Table::new(&raw.schema, &raw.name, columns).map_err(SnapshotError::from)
}

fn map_column(schema: &str, raw: &RawColumn) -> Result<Column> {
    Column::new(
        schema,
        &raw.name,
        raw.ordinal_position,
        raw.column_default.clone(),
        raw.is_nullable,
        &raw.data_type,
        raw.max_length,
        raw.numeric_precision,
        raw.is_primary_key,
    )
    .map_err(SnapshotError::from)
}

fn map_foreign_keys(raw: &[RawForeignKey], tables: &[Table]) -> Result<Vec<ForeignKey>> {
    let find = |schema: &str, name: &str| {
        tables
            .iter()
            .find(|table| table.schema() == schema && table.name() == name)
    };

    let mut foreign_keys = Vec::new();
    for fk in raw {
        // Child rows without a mapped table are silently dropped; the
        // introspection source can report keys for filtered-out tables.
        let Some(child) = find(&fk.schema, &fk.table_name) else {
            continue;
        };
        let parent =
            find(&fk.reference_schema, &fk.reference_table_name).ok_or_else(|| {
                SnapshotError::UnknownParentTable {
                    foreign_key: fk.name.clone(),
                    table: format!("{}.{}", fk.reference_schema, fk.reference_table_name),
                }
            })?;
        foreign_keys.push(ForeignKey::new(
            &fk.schema,
            &fk.name,
            parent.clone(),
            &fk.reference_column_name,
            child.clone(),
            &fk.column_name,
        )?);
    }
    Ok(foreign_keys)
}
