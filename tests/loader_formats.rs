use std::io::Write;
use std::sync::Arc;

use arrow::array::{BooleanArray, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use launch_dash::data::error::DataError;
use launch_dash::data::loader::load_file;
use launch_dash::data::model::Outcome;
use parquet::arrow::ArrowWriter;

#[test]
fn parquet_with_bool_class_and_nullable_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launches.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, true),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("class", DataType::Boolean, false),
        Field::new("Flight Number", DataType::Int32, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec!["KSC LC-39A", "VAFB SLC-4E"])),
            Arc::new(Float64Array::from(vec![Some(5300.0), None])),
            Arc::new(StringArray::from(vec!["F9 FT B1021.2", "F9 B4 B1043.1"])),
            Arc::new(BooleanArray::from(vec![true, false])),
            Arc::new(Int32Array::from(vec![19, 30])),
        ],
    )
    .unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 2);
    let first = &ds.records()[0];
    assert_eq!(first.outcome, Outcome::Success);
    assert_eq!(first.flight_number, Some(19));
    assert_eq!(ds.records()[1].payload_mass_kg, None);
    assert_eq!((ds.payload_min(), ds.payload_max()), (5300.0, 5300.0));
}

#[test]
fn parquet_missing_column_is_typed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("class", DataType::Int32, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec!["CCAFS LC-40"])),
            Arc::new(Float64Array::from(vec![525.0])),
            Arc::new(Int32Array::from(vec![0])),
        ],
    )
    .unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let err = load_file(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<DataError>(),
        Some(&DataError::MissingColumn("Booster Version".to_string()))
    );
}

#[test]
fn csv_bad_class_reports_row() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Launch Site,Payload Mass (kg),Booster Version,class").unwrap();
    writeln!(file, "CCAFS LC-40,525,F9 v1.0  B0005,0").unwrap();
    writeln!(file, "CCAFS LC-40,500,F9 v1.0  B0006,2").unwrap();
    file.flush().unwrap();

    let err = load_file(file.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<DataError>(),
        Some(&DataError::InvalidOutcome { row: 1, value: "2".to_string() })
    );
}

#[test]
fn csv_empty_table_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Launch Site,Payload Mass (kg),Booster Version,class").unwrap();
    file.flush().unwrap();

    let err = load_file(file.path()).unwrap_err();
    assert_eq!(err.downcast_ref::<DataError>(), Some(&DataError::Empty));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_file(&dir.path().join("nope.csv")).is_err());
}
