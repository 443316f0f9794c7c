use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current contract version for snapshot documents.
pub const SNAPSHOT_VERSION: &str = "0.1";

/// On-disk snapshot of an already-introspected database.
///
/// Produced by an external introspection step (live query, export script,
/// test fixture); this crate only reads and maps it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotFile {
    /// Contract version for this snapshot format.
    pub snapshot_version: String,
    /// Database name.
    pub database: String,
    /// Connection string the snapshot was taken from, if recorded.
    pub connection_string: Option<String>,
    #[serde(default)]
    pub tables: Vec<RawTable>,
    #[serde(default)]
    pub foreign_keys: Vec<RawForeignKey>,
    #[serde(default)]
    pub views: Vec<RawView>,
    #[serde(default)]
    pub routines: Vec<RawRoutine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawTable {
    pub schema: String,
    pub name: String,
    /// Columns in catalog order; assigned table positions follow this order.
    #[serde(default)]
    pub columns: Vec<RawColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawColumn {
    pub name: String,
    pub ordinal_position: i32,
    pub column_default: Option<String>,
    pub is_nullable: bool,
    pub data_type: String,
    #[serde(default)]
    pub max_length: i32,
    #[serde(default)]
    pub numeric_precision: i32,
    #[serde(default)]
    pub is_primary_key: bool,
}

/// Raw foreign key row: child side plus the referenced (parent) side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawForeignKey {
    pub name: String,
    /// Schema of the child (referencing) table.
    pub schema: String,
    /// Name of the child table.
    pub table_name: String,
    /// Referencing column in the child table.
    pub column_name: String,
    /// Schema of the parent (referenced) table.
    pub reference_schema: String,
    /// Name of the parent table.
    pub reference_table_name: String,
    /// Referenced column in the parent table.
    pub reference_column_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawView {
    pub schema: String,
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawRoutine {
    pub schema: String,
    pub name: String,
    pub definition: String,
    pub routine_type: String,
}
