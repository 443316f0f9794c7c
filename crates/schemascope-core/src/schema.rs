use std::collections::BTreeMap;

use crate::error::Result;
use crate::identifier::{require_non_blank, ObjectName};

/// Column metadata as reported by the catalog.
///
/// `ordinal_position` is the position the catalog reported; the position a
/// [`Table`] actually assigns is independent of it (see [`Table::new`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: ObjectName,
    ordinal_position: i32,
    column_default: Option<String>,
    is_nullable: bool,
    data_type: String,
    max_length: i32,
    numeric_precision: i32,
    is_primary_key: bool,
}

impl Column {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        ordinal_position: i32,
        column_default: Option<String>,
        is_nullable: bool,
        data_type: impl Into<String>,
        max_length: i32,
        numeric_precision: i32,
        is_primary_key: bool,
    ) -> Result<Self> {
        let name = ObjectName::new("column", schema, name)?;
        let data_type = data_type.into();
        require_non_blank("column", "data_type", &data_type)?;
        Ok(Self {
            name,
            ordinal_position,
            column_default,
            is_nullable,
            data_type,
            max_length,
            numeric_precision,
            is_primary_key,
        })
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn ordinal_position(&self) -> i32 {
        self.ordinal_position
    }

    pub fn column_default(&self) -> Option<&str> {
        self.column_default.as_deref()
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn max_length(&self) -> i32 {
        self.max_length
    }

    pub fn numeric_precision(&self) -> i32 {
        self.numeric_precision
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }
}

/// A table with its columns keyed by assigned ordinal position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: ObjectName,
    columns: BTreeMap<u32, Column>,
}

impl Table {
    /// Builds a table, re-keying the columns `1..=N` in input iteration order.
    ///
    /// Each column's own `ordinal_position` is ignored here; callers that care
    /// about catalog order must supply the columns pre-sorted. Two tables built
    /// from the same columns in different input order are not equal.
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = Column>,
    ) -> Result<Self> {
        let name = ObjectName::new("table", schema, name)?;
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(idx, column)| (idx as u32 + 1, column))
            .collect();
        Ok(Self { name, columns })
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn schema(&self) -> &str {
        self.name.schema()
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    /// Columns keyed by assigned position, starting at 1.
    pub fn columns(&self) -> &BTreeMap<u32, Column> {
        &self.columns
    }
}

/// A named view definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View {
    name: ObjectName,
    definition: String,
}

impl View {
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self> {
        let name = ObjectName::new("view", schema, name)?;
        let definition = definition.into();
        require_non_blank("view", "definition", &definition)?;
        Ok(Self { name, definition })
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// A named routine (procedure or function) definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Routine {
    name: ObjectName,
    definition: String,
    routine_type: String,
}

impl Routine {
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        definition: impl Into<String>,
        routine_type: impl Into<String>,
    ) -> Result<Self> {
        let name = ObjectName::new("routine", schema, name)?;
        let definition = definition.into();
        let routine_type = routine_type.into();
        require_non_blank("routine", "definition", &definition)?;
        require_non_blank("routine", "routine_type", &routine_type)?;
        Ok(Self {
            name,
            definition,
            routine_type,
        })
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn routine_type(&self) -> &str {
        &self.routine_type
    }
}

/// A directed edge between two tables.
///
/// `parent` is the referenced side and sorts earlier in dependency order;
/// `child` holds the referencing column and sorts later. This mirrors the
/// convention the dependency engine and reports rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKey {
    name: ObjectName,
    parent_table: Table,
    parent_column: String,
    child_table: Table,
    child_column: String,
}

impl ForeignKey {
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        parent_table: Table,
        parent_column: impl Into<String>,
        child_table: Table,
        child_column: impl Into<String>,
    ) -> Result<Self> {
        let name = ObjectName::new("foreign key", schema, name)?;
        let parent_column = parent_column.into();
        let child_column = child_column.into();
        require_non_blank("foreign key", "parent_column", &parent_column)?;
        require_non_blank("foreign key", "child_column", &child_column)?;
        Ok(Self {
            name,
            parent_table,
            parent_column,
            child_table,
            child_column,
        })
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn parent_table(&self) -> &Table {
        &self.parent_table
    }

    pub fn parent_column(&self) -> &str {
        &self.parent_column
    }

    pub fn child_table(&self) -> &Table {
        &self.child_table
    }

    pub fn child_column(&self) -> &str {
        &self.child_column
    }
}
