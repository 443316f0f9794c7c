use schemars::schema_for;
use schemascope_snapshot::SnapshotFile;

fn main() {
    let schema = schema_for!(SnapshotFile);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
