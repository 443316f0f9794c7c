/// Options that control which parts of a snapshot are mapped.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub include_tables: bool,
    pub include_foreign_keys: bool,
    pub include_views: bool,
    pub include_routines: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_tables: true,
            include_foreign_keys: true,
            include_views: true,
            include_routines: true,
        }
    }
}
