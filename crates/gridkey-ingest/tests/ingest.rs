//! Integration tests for grid, workbook and spec file loading.

use std::fs;

use chrono::NaiveDate;
use gridkey_ingest::{
    IngestError, Workbook, check_file_size_with_limit, load_spec_file, read_csv_grid, read_grid,
    read_json_grid,
};
use gridkey_model::{Axis, CellValue, GridSnapshot, SpecError, TransformKind};
use tempfile::TempDir;

const ATTENDANCE_CSV: &str = "\u{FEFF},Alice,,Bob,\n\
,In,Out,In,Out\n\
2024-01-02,08:00,17:00,09:00,18:00\n\
2024-01-03,08:05,,09:10,18:20\n";

#[test]
fn csv_grid_keeps_first_line_and_strips_bom() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.csv");
    fs::write(&path, ATTENDANCE_CSV).unwrap();

    let grid = read_csv_grid(&path).expect("read grid");

    assert_eq!(grid.height(), 4);
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.value(0, 0), Some(&CellValue::Empty));
    assert_eq!(grid.value(0, 1), Some(&CellValue::from("Alice")));
    assert_eq!(
        grid.value(2, 0),
        Some(&CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()))
    );
    assert_eq!(grid.display(3, 2), Some(""));
    assert_eq!(grid.display(2, 1), Some("08:00"));
}

#[test]
fn read_grid_dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("a.CSV");
    let json_path = dir.path().join("b.json");
    fs::write(&csv_path, "x,1\n").unwrap();
    fs::write(&json_path, r#"[["x", 1]]"#).unwrap();

    let from_csv = read_grid(&csv_path).expect("csv");
    let from_json = read_grid(&json_path).expect("json");

    assert_eq!(from_csv, from_json);
}

#[test]
fn csv_and_json_agree_on_display_text() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("codes.csv");
    let json_path = dir.path().join("codes.json");
    fs::write(&csv_path, "007,1.50,TRUE\n").unwrap();
    fs::write(&json_path, r#"[["007", "1.50", "TRUE"]]"#).unwrap();

    let from_csv = read_csv_grid(&csv_path).expect("csv");
    let from_json = read_json_grid(&json_path).expect("json");

    let display = |grid: &GridSnapshot| -> Vec<String> {
        (0..3)
            .map(|col| grid.display(0, col).unwrap_or_default().to_string())
            .collect()
    };
    assert_eq!(display(&from_json), vec!["007", "1.50", "TRUE"]);
    assert_eq!(from_csv, from_json);
}

#[test]
fn utf16_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.csv");
    fs::write(&path, [0xFF, 0xFE, b'a', 0, b',', 0]).unwrap();

    let err = read_csv_grid(&path).unwrap_err();

    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}

#[test]
fn missing_grid_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_csv_grid(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn size_limit_is_enforced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.csv");
    fs::write(&path, "0123456789").unwrap();

    assert!(check_file_size_with_limit(&path, 10).is_ok());
    let err = check_file_size_with_limit(&path, 9).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { size: 10, .. }));
}

#[test]
fn workbook_names_sheets_by_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("GRAB.csv"), "DATE,Amount\n1/2/2024,100\n").unwrap();
    fs::write(
        dir.path().join("Daily Sales - Jan 2024.json"),
        r#"[["", "", "1/2/2024"]]"#,
    )
    .unwrap();
    fs::write(dir.path().join("readme.md"), "ignored").unwrap();

    let workbook = Workbook::open(dir.path()).expect("open workbook");

    let names: Vec<&str> = workbook.sheet_names().collect();
    assert_eq!(names, vec!["Daily Sales - Jan 2024", "GRAB"]);
    let grab = workbook.sheet("GRAB").expect("grab sheet");
    assert_eq!(grab.grid.value(1, 1), Some(&CellValue::Integer(100)));
    assert!(workbook.sheet("readme").is_none());
}

#[test]
fn workbook_rejects_duplicate_stems() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("GRAB.csv"), "a\n").unwrap();
    fs::write(dir.path().join("GRAB.json"), "[]").unwrap();

    let err = Workbook::open(dir.path()).unwrap_err();

    assert!(matches!(err, IngestError::DuplicateSheet { ref name, .. } if name == "GRAB"));
}

#[test]
fn toml_spec_file_round_trips_into_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.toml");
    fs::write(
        &path,
        r#"
[[headers.colwise]]
index = 0
cascading = true
label = "employee"

[[headers.colwise]]
index = 1
label = "subcolumns"

[[headers.rowwise]]
index = 0
label = "date"
transform = "date"
exclude = { values = ["TOTAL"], positions = [0] }

[range]
min_row = 2
"#,
    )
    .unwrap();

    let config = load_spec_file(&path).expect("load spec");

    assert_eq!(config.headers.colwise.len(), 2);
    assert!(config.headers.colwise[0].cascading);
    let date = &config.headers.rowwise[0];
    assert_eq!(date.transform, Some(TransformKind::Date));
    let exclude = date.exclude.as_ref().expect("exclude rule");
    assert_eq!(exclude.values, vec!["TOTAL"]);
    assert_eq!(exclude.positions, vec![0]);
    assert_eq!(config.range.and_then(|range| range.min_row), Some(2));
}

#[test]
fn json_spec_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spec.json");
    fs::write(
        &path,
        r#"{"headers": {"rowwise": [{"index": 0, "label": "employee"}]}}"#,
    )
    .unwrap();

    let config = load_spec_file(&path).expect("load spec");

    assert!(config.headers.colwise.is_empty());
    assert_eq!(config.headers.rowwise[0].label, "employee");
}

#[test]
fn spec_file_errors_are_typed() {
    let dir = TempDir::new().unwrap();

    let unknown = dir.path().join("unknown.toml");
    fs::write(&unknown, "[[headers.colwise]]\nlabel = \"a\"\nidx = 1\n").unwrap();
    assert!(matches!(
        load_spec_file(&unknown).unwrap_err(),
        IngestError::TomlParse { .. }
    ));

    let blank = dir.path().join("blank.toml");
    fs::write(&blank, "[[headers.rowwise]]\nlabel = \"\"\n").unwrap();
    assert!(matches!(
        load_spec_file(&blank).unwrap_err(),
        IngestError::InvalidSpec {
            source: SpecError::EmptyLabel {
                axis: Axis::Row,
                position: 0
            },
            ..
        }
    ));

    let yaml = dir.path().join("spec.yaml");
    fs::write(&yaml, "headers: {}").unwrap();
    assert!(matches!(
        load_spec_file(&yaml).unwrap_err(),
        IngestError::UnsupportedExtension { .. }
    ));
}
