use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type, UInt32Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{ClassCell, LaunchDataset, LaunchRecord, RawLaunch};

pub const COL_FLIGHT: &str = "Flight Number";
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Columns every launch file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_BOOSTER, COL_CLASS];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch column names
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    let dataset = LaunchDataset::from_records(records)
        .with_context(|| format!("validating {}", path.display()))?;
    log::debug!(
        "{}: {} launches, sites {:?}, payload {}..{} kg",
        path.display(),
        dataset.len(),
        dataset.sites(),
        dataset.payload_min(),
        dataset.payload_max()
    );
    Ok(dataset)
}

fn check_columns(mut present: impl FnMut(&str) -> bool) -> Result<(), DataError> {
    for col in REQUIRED_COLUMNS {
        if !present(col) {
            return Err(DataError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; extra columns are ignored.
/// An empty payload cell means "unknown payload".
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(|col| headers.iter().any(|h| h == col))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunch>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version": "F9 v1.0  B0005",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        check_columns(|col| obj.contains_key(col))?;

        let raw: RawLaunch = serde_json::from_value(row.clone())
            .with_context(|| format!("Row {i}: unexpected value types"))?;
        records.push(raw.into_record(i)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat launch columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): numeric columns may be any of
/// Int32/Int64/Float32/Float64 and `class` may also be Boolean.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = records.len();
        read_batch(&batch, offset, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let schema = batch.schema();
    check_columns(|col| schema.index_of(col).is_ok())?;

    let site_col = required_column(batch, COL_SITE)?;
    let payload_col = required_column(batch, COL_PAYLOAD)?;
    let booster_col = required_column(batch, COL_BOOSTER)?;
    let class_col = required_column(batch, COL_CLASS)?;
    let flight_col = column(batch, COL_FLIGHT);
    let category_col = column(batch, COL_BOOSTER_CATEGORY);

    for row in 0..batch.num_rows() {
        let row_no = offset + row;
        let raw = RawLaunch {
            flight_number: flight_col
                .and_then(|c| extract_f64(c, row))
                .map(|v| v as u32),
            launch_site: extract_string(site_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{COL_SITE}'"))?,
            payload_mass_kg: extract_f64(payload_col, row),
            booster_version: extract_string(booster_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{COL_BOOSTER}'"))?,
            booster_category: category_col.and_then(|c| extract_string(c, row).ok()),
            class: extract_class(class_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{COL_CLASS}'"))?,
        };
        out.push(raw.into_record(row_no)?);
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Option<&'b ArrayRef> {
    batch.schema().index_of(name).ok().map(|i| batch.column(i))
}

fn required_column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef, DataError> {
    column(batch, name).ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

/// Extract a string cell from a Utf8 or LargeUtf8 column.
fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    if let Some(s) = col.as_string_opt::<i32>() {
        Ok(s.value(row).to_string())
    } else if let Some(s) = col.as_string_opt::<i64>() {
        Ok(s.value(row).to_string())
    } else {
        bail!("Expected Utf8 column, got {:?}", col.data_type())
    }
}

/// Extract a numeric cell as `f64`; nulls and non-numeric columns yield `None`.
fn extract_f64(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => Some(col.as_primitive_opt::<Float64Type>()?.value(row)),
        DataType::Float32 => Some(col.as_primitive_opt::<Float32Type>()?.value(row) as f64),
        DataType::Int64 => Some(col.as_primitive_opt::<Int64Type>()?.value(row) as f64),
        DataType::Int32 => Some(col.as_primitive_opt::<Int32Type>()?.value(row) as f64),
        DataType::UInt32 => Some(col.as_primitive_opt::<UInt32Type>()?.value(row) as f64),
        _ => None,
    }
}

fn extract_class(col: &ArrayRef, row: usize) -> Result<ClassCell> {
    if col.is_null(row) {
        bail!("null value in class column");
    }
    if let Some(b) = col.as_boolean_opt() {
        return Ok(ClassCell::Bool(b.value(row)));
    }
    if let Some(v) = extract_f64(col, row) {
        return Ok(ClassCell::Number(v));
    }
    extract_string(col, row).map(ClassCell::Text)
}
