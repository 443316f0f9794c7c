use std::fs;
use std::path::PathBuf;

use schemascope_core::{Column, Database, Table};
use schemascope_report::{write_all_reports, ReportError, ReportOptions};

fn database() -> Database {
    let id = Column::new("dbo", "Id", 1, None, false, "int", 0, 0, true).expect("column");
    let table = Table::new("dbo", "Orders", vec![id]).expect("table");
    Database::builder("My Shop")
        .tables(vec![table])
        .build()
        .expect("database")
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("schemascope-report-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_full_report_set() {
    let dir = temp_dir("full");
    let opts = ReportOptions {
        output_dir: dir.clone(),
        overwrite: false,
    };

    let written = write_all_reports(&database(), &opts).expect("write reports");
    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "My_Shop_Dependency.txt",
            "My_Shop_Tables.csv",
            "My_Shop_Views.csv",
            "My_Shop_Routines.csv",
        ]
    );
    for path in &written {
        assert!(path.exists(), "missing report {}", path.display());
    }

    let dependency = fs::read_to_string(&written[0]).expect("read dependency report");
    assert!(dependency.contains("dbo.Orders"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn refuses_to_overwrite_without_flag() {
    let dir = temp_dir("overwrite");
    let opts = ReportOptions {
        output_dir: dir.clone(),
        overwrite: false,
    };

    write_all_reports(&database(), &opts).expect("first write");
    let err = write_all_reports(&database(), &opts).expect_err("second write should fail");
    assert!(matches!(err, ReportError::FileExists(_)));

    let opts = ReportOptions {
        output_dir: dir.clone(),
        overwrite: true,
    };
    write_all_reports(&database(), &opts).expect("overwrite succeeds");

    fs::remove_dir_all(&dir).expect("cleanup");
}
