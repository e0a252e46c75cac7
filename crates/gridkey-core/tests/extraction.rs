//! End-to-end extraction over small hand-built grids.

use gridkey_core::{Extractor, compile_specs, extract};
use gridkey_model::{
    Axis, CellValue, ExcludeRule, ExtractedRecord, ExtractionSpecs, GridSnapshot, HeaderSpec,
    HeaderSpecConfig, HeadersConfig, RangeConfig, SpecConfig, SpecError, TransformKind,
};

fn hours_grid() -> GridSnapshot {
    GridSnapshot::from_values(vec![
        vec!["".into(), "Jan".into(), "Feb".into()],
        vec!["Emp".into(), "Hrs".into(), "Hrs".into()],
        vec!["Alice".into(), 8i64.into(), 7i64.into()],
        vec!["Bob".into(), 6i64.into(), 9i64.into()],
    ])
    .expect("rectangular grid")
}

fn summary(records: &[ExtractedRecord]) -> Vec<(String, String, String)> {
    records
        .iter()
        .map(|record| {
            (
                record.key_text("employee").unwrap_or_default(),
                record.key_text("month").unwrap_or_default(),
                record.display_value.clone(),
            )
        })
        .collect()
}

fn triple(employee: &str, month: &str, value: &str) -> (String, String, String) {
    (employee.to_string(), month.to_string(), value.to_string())
}

#[test]
fn monthly_hours_with_excluded_label_row() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(
            HeaderSpec::new("employee")
                .at(0)
                .cascading()
                .with_exclude(|value, _| value.as_text() == Some("Emp")),
        );

    let records = extract(&hours_grid(), &specs);

    assert_eq!(
        summary(&records),
        vec![
            triple("Alice", "Jan", "8"),
            triple("Bob", "Jan", "6"),
            triple("Alice", "Feb", "7"),
            triple("Bob", "Feb", "9"),
        ]
    );
    assert_eq!(records[0].value, CellValue::Integer(8));
    assert_eq!(records[0].key("col-position"), Some(&CellValue::Integer(1)));
    assert_eq!(records[0].key("row-position"), Some(&CellValue::Integer(2)));
}

#[test]
fn second_header_row_moves_the_default_bound() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_colwise(HeaderSpec::new("unit").at(1))
        .with_rowwise(HeaderSpec::new("employee").at(0).cascading());

    let records = extract(&hours_grid(), &specs);

    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|record| record.key_text("unit").as_deref() == Some("Hrs")));
}

#[test]
fn default_bound_alone_keeps_the_label_row() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(HeaderSpec::new("employee").at(0).cascading());

    let records = extract(&hours_grid(), &specs);

    assert_eq!(records.len(), 6);
    assert_eq!(summary(&records)[0], triple("Emp", "Jan", "Hrs"));
}

#[test]
fn row_keys_overwrite_column_keys() {
    let grid = GridSnapshot::from_values(vec![
        vec!["".into(), "c1".into()],
        vec!["r1".into(), 1i64.into()],
    ])
    .expect("rectangular grid");
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("name").at(0))
        .with_rowwise(HeaderSpec::new("name").at(0));

    let records = extract(&grid, &specs);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key_text("name").as_deref(), Some("r1"));
}

#[test]
fn no_record_inside_the_header_region() {
    let grid = GridSnapshot::from_values(
        (0..5)
            .map(|row| (0..5).map(|col| CellValue::Integer(row * 10 + col)).collect())
            .collect(),
    )
    .expect("rectangular grid");
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("c").at(0))
        .with_rowwise(HeaderSpec::new("r").at(1));

    let records = extract(&grid, &specs);

    assert!(!records.is_empty());
    for record in &records {
        let row = record.key("row-position").and_then(CellValue::as_f64);
        let col = record.key("col-position").and_then(CellValue::as_f64);
        assert!(row.is_some_and(|row| row > 0.0));
        assert!(col.is_some_and(|col| col > 1.0));
    }
}

#[test]
fn custom_range_replaces_the_default() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(HeaderSpec::new("employee").at(0).cascading())
        .with_range(|row, col| row == 3 && col == 2);

    let extractor_grid = hours_grid();
    let extractor = Extractor::new(&extractor_grid, &specs);
    assert!(!extractor.within_range(2, 1));
    assert!(extractor.within_range(3, 2));

    let records = extractor.extract();
    assert_eq!(summary(&records), vec![triple("Bob", "Feb", "9")]);
}

#[test]
fn range_may_reach_into_header_cells() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_range(|row, _| row == 0);

    let records = extract(&hours_grid(), &specs);

    let values: Vec<&str> = records
        .iter()
        .map(|record| record.display_value.as_str())
        .collect();
    assert_eq!(values, vec!["Jan", "Feb"]);
}

#[test]
fn every_record_carries_every_label_with_a_value() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(HeaderSpec::new("employee").at(0).cascading());

    for record in extract(&hours_grid(), &specs) {
        for label in ["col-position", "row-position", "month", "employee"] {
            let value = record.key(label).expect("label present");
            assert!(!value.is_empty(), "{label} is empty");
        }
    }
}

#[test]
fn extraction_is_repeatable() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(HeaderSpec::new("employee").at(0).cascading());
    let grid = hours_grid();

    let first = serde_json::to_string(&extract(&grid, &specs)).expect("serialize");
    let second = serde_json::to_string(&extract(&grid, &specs)).expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn zero_specs_key_every_cell_by_position() {
    let records = extract(&hours_grid(), &ExtractionSpecs::new());

    assert_eq!(records.len(), 12);
    let keys: Vec<String> = records[0].keys.keys().cloned().collect();
    assert_eq!(keys, vec!["col-position", "row-position"]);
    assert_eq!(records[1].key("row-position"), Some(&CellValue::Integer(1)));
    assert_eq!(records[4].key("col-position"), Some(&CellValue::Integer(1)));
}

#[test]
fn out_of_range_header_index_yields_nothing() {
    let specs = ExtractionSpecs::new().with_colwise(HeaderSpec::new("month").at(10));
    let extractor_grid = hours_grid();
    let extractor = Extractor::new(&extractor_grid, &specs);

    assert!(extractor.layouts(Axis::Column).is_empty());
    assert!(extractor.extract().is_empty());
}

#[test]
fn empty_grid_yields_nothing() {
    let grid = GridSnapshot::from_values(Vec::new()).expect("empty grid");
    let specs = ExtractionSpecs::new().with_colwise(HeaderSpec::new("month").at(0));

    assert!(extract(&grid, &specs).is_empty());
}

#[test]
fn positional_zero_is_a_usable_key() {
    let grid = GridSnapshot::from_values(vec![vec![1i64.into()]]).expect("grid");

    let records = extract(&grid, &ExtractionSpecs::new());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key("col-position"), Some(&CellValue::Integer(0)));
}

fn header(label: &str, index: usize) -> HeaderSpecConfig {
    HeaderSpecConfig {
        index: Some(index),
        cascading: true,
        label: label.to_string(),
        transform: None,
        exclude: None,
    }
}

#[test]
fn compiled_config_matches_hand_built_specs() {
    let mut employee = header("employee", 0);
    employee.transform = Some(TransformKind::Upper);
    employee.exclude = Some(ExcludeRule {
        values: vec!["Emp".to_string()],
        ..ExcludeRule::default()
    });
    let config = SpecConfig {
        headers: HeadersConfig {
            colwise: vec![header("month", 0)],
            rowwise: vec![employee],
        },
        range: None,
    };

    let specs = compile_specs(&config).expect("valid config");
    let records = extract(&hours_grid(), &specs);

    assert_eq!(
        summary(&records),
        vec![
            triple("ALICE", "Jan", "8"),
            triple("BOB", "Jan", "6"),
            triple("ALICE", "Feb", "7"),
            triple("BOB", "Feb", "9"),
        ]
    );
}

#[test]
fn compiled_range_is_inclusive() {
    let config = SpecConfig {
        headers: HeadersConfig {
            colwise: vec![header("month", 0)],
            rowwise: vec![header("employee", 0)],
        },
        range: Some(RangeConfig {
            min_row: Some(2),
            max_row: Some(2),
            min_col: Some(1),
            max_col: None,
        }),
    };

    let specs = compile_specs(&config).expect("valid config");
    let records = extract(&hours_grid(), &specs);

    assert_eq!(
        summary(&records),
        vec![triple("Alice", "Jan", "8"), triple("Alice", "Feb", "7")]
    );
}

#[test]
fn compile_rejects_invalid_config() {
    let config = SpecConfig {
        headers: HeadersConfig {
            colwise: vec![header(" ", 0)],
            rowwise: Vec::new(),
        },
        range: None,
    };

    let error = compile_specs(&config).expect_err("blank label");
    assert!(matches!(
        error,
        SpecError::EmptyLabel {
            axis: Axis::Column,
            position: 0
        }
    ));
}

#[test]
fn exclude_matches_before_transform() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(
            HeaderSpec::new("employee")
                .at(0)
                .with_transform(|value, _| CellValue::Text(value.to_string().to_uppercase()))
                .with_exclude(|value, _| value.as_text() == Some("Emp")),
        );

    let records = extract(&hours_grid(), &specs);

    assert_eq!(
        summary(&records),
        vec![
            triple("ALICE", "Jan", "8"),
            triple("BOB", "Jan", "6"),
            triple("ALICE", "Feb", "7"),
            triple("BOB", "Feb", "9"),
        ]
    );
}

#[test]
fn specs_are_shared_across_threads() {
    let specs = ExtractionSpecs::new()
        .with_colwise(HeaderSpec::new("month").at(0).cascading())
        .with_rowwise(
            HeaderSpec::new("employee")
                .at(0)
                .with_exclude(|value, _| value.as_text() == Some("Emp")),
        );
    let grids = [hours_grid(), hours_grid()];
    let specs = &specs;

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = grids
            .iter()
            .map(|grid| scope.spawn(move || extract(grid, specs).len()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("extraction thread"))
            .collect()
    });

    assert_eq!(counts, vec![4, 4]);
}
