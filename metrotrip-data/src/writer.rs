//! Persist a dataset as a JSON records array.

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use log::debug;
use metrotrip_core::{Column, Dataset, PoiRecord};
use metrotrip_fs::create_utf8_file;
use serde_json::{Map, Value};

use crate::WriteDatasetError;

fn record_object(record: &PoiRecord, dataset: &Dataset) -> Map<String, Value> {
    dataset
        .columns()
        .iter()
        .map(|column| {
            let value = match column {
                Column::RankNumeric => record
                    .rank
                    .and_then(|rank| serde_json::Number::from_f64(rank.get()))
                    .map_or(Value::Null, Value::Number),
                other => record
                    .text(other)
                    .map_or(Value::Null, |text| Value::String(text.to_owned())),
            };
            (column.canonical_source_name().to_owned(), value)
        })
        .collect()
}

/// Write `dataset` to `path` as a JSON array of records.
///
/// Keys are the canonical source column names and only columns the dataset
/// carries are written, so the file loads back into an equal dataset. The
/// parent directory is created when missing.
///
/// # Errors
/// Returns [`WriteDatasetError`] when the file cannot be created or written.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use metrotrip_core::Dataset;
/// use metrotrip_data::write_dataset;
///
/// write_dataset(Utf8Path::new("out/pois.json"), &Dataset::default())?;
/// # Ok::<(), metrotrip_data::WriteDatasetError>(())
/// ```
pub fn write_dataset(path: &Utf8Path, dataset: &Dataset) -> Result<(), WriteDatasetError> {
    let file = create_utf8_file(path).map_err(|source| WriteDatasetError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let rows: Vec<Map<String, Value>> = dataset
        .records()
        .iter()
        .map(|record| record_object(record, dataset))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rows).map_err(|source| {
        WriteDatasetError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| WriteDatasetError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} records to {path}", dataset.len());
    Ok(())
}
