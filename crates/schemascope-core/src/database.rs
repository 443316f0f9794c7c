use crate::deps::{dependency_order, DependencyOrder};
use crate::error::Result;
use crate::identifier::require_non_blank;
use crate::refscan::ReferencePattern;
use crate::schema::{ForeignKey, Routine, Table, View};

/// Aggregate root over a complete, immutable schema snapshot.
///
/// Constructed through [`DatabaseBuilder`] only; every method is a read-only
/// projection, so a `Database` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    connection_string: Option<String>,
    tables: Vec<Table>,
    foreign_keys: Vec<ForeignKey>,
    views: Vec<View>,
    routines: Vec<Routine>,
}

impl Database {
    pub fn builder(name: impl Into<String>) -> DatabaseBuilder {
        DatabaseBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string.as_deref()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Tables permuted so parents precede the children that reference them.
    ///
    /// Best-effort relocation heuristic, not a strict topological sort; see
    /// [`Database::dependency_order`] for the convergence diagnostics.
    pub fn tables_sorted_by_dependency(&self) -> Vec<&Table> {
        self.dependency_order().tables
    }

    /// Runs the dependency ordering and reports whether it reached a fixed
    /// point. Foreign-key cycles can defeat the relocation loop; the engine
    /// stops at a pass cap instead of hanging and flags `converged = false`.
    pub fn dependency_order(&self) -> DependencyOrder<'_> {
        dependency_order(&self.tables, &self.foreign_keys)
    }

    /// Foreign keys whose parent table is structurally equal to `table`.
    ///
    /// A key referencing a table absent from the snapshot simply never
    /// matches; dangling references are not an error here.
    pub fn child_foreign_keys(&self, table: &Table) -> Vec<&ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(|fk| fk.parent_table() == table)
            .collect()
    }

    /// Views whose definition appears to reference `table`.
    ///
    /// Textual heuristic: comments, string literals, and coincidental
    /// substrings can produce false positives. Each view appears at most once.
    pub fn views_referencing(&self, table: &Table) -> Vec<&View> {
        let pattern = ReferencePattern::for_table(table);
        self.views
            .iter()
            .filter(|view| pattern.matches(view.definition()))
            .collect()
    }

    /// Routines whose definition appears to reference `table`.
    ///
    /// Same heuristic and caveats as [`Database::views_referencing`].
    pub fn routines_referencing(&self, table: &Table) -> Vec<&Routine> {
        let pattern = ReferencePattern::for_table(table);
        self.routines
            .iter()
            .filter(|routine| pattern.matches(routine.definition()))
            .collect()
    }
}

/// Assembles a [`Database`] from an already-introspected snapshot.
///
/// Missing collections default to empty; only the database name is required.
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    name: String,
    connection_string: Option<String>,
    tables: Vec<Table>,
    foreign_keys: Vec<ForeignKey>,
    views: Vec<View>,
    routines: Vec<Routine>,
}

impl DatabaseBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    pub fn tables(mut self, tables: impl IntoIterator<Item = Table>) -> Self {
        self.tables.extend(tables);
        self
    }

    pub fn foreign_keys(mut self, foreign_keys: impl IntoIterator<Item = ForeignKey>) -> Self {
        self.foreign_keys.extend(foreign_keys);
        self
    }

    pub fn views(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.views.extend(views);
        self
    }

    pub fn routines(mut self, routines: impl IntoIterator<Item = Routine>) -> Self {
        self.routines.extend(routines);
        self
    }

    pub fn build(self) -> Result<Database> {
        require_non_blank("database", "name", &self.name)?;
        Ok(Database {
            name: self.name,
            connection_string: self.connection_string,
            tables: self.tables,
            foreign_keys: self.foreign_keys,
            views: self.views,
            routines: self.routines,
        })
    }
}
