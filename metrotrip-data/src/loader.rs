//! Load a curated dataset from disk.
//!
//! The format is chosen by file extension. Loading is a pure read: nothing is
//! written back, and loading the same file twice yields equal datasets.

use std::io::{BufRead, BufReader, ErrorKind};

use camino::Utf8Path;
use cap_std::fs_utf8;
use log::debug;
use metrotrip_core::Dataset;
use metrotrip_fs::{file_is_file, open_utf8_file};
use parquet::errors::ParquetError;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::Field;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde_json::{Number, Value};

use crate::DatasetError;
use crate::rows::{Row, assemble, key_union};

/// Table holding POI rows in `SQLite` datasets.
pub const SQLITE_TABLE: &str = "pois";

/// Supported on-disk dataset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// A JSON array of record objects.
    Json,
    /// One JSON object per line.
    JsonLines,
    /// An `SQLite` database with a [`SQLITE_TABLE`] table.
    Sqlite,
    /// An Apache Parquet file, one row per record.
    Parquet,
}

impl DatasetFormat {
    /// Detect the format from a path's extension, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8Path;
    /// use metrotrip_data::DatasetFormat;
    ///
    /// assert_eq!(DatasetFormat::from_path(Utf8Path::new("pois.JSONL")), Some(DatasetFormat::JsonLines));
    /// assert_eq!(DatasetFormat::from_path(Utf8Path::new("final_pois.parquet")), Some(DatasetFormat::Parquet));
    /// assert_eq!(DatasetFormat::from_path(Utf8Path::new("pois.csv")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            "db" | "sqlite" | "sqlite3" => Some(Self::Sqlite),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Load the dataset stored at `path`.
///
/// Rank cells are coerced to numbers; unusable ranks become "no rank" rather
/// than zero. Missing optional columns are tolerated.
///
/// # Errors
/// Returns [`DatasetError::NotFound`] when no file exists at `path`,
/// [`DatasetError::UnsupportedFormat`] for an unknown extension, and a
/// read, parse, database or Parquet error when the file cannot be decoded.
/// A path that cannot be inspected for reasons other than absence is a
/// [`DatasetError::Read`].
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use metrotrip_data::load_dataset;
///
/// let dataset = load_dataset(Utf8Path::new("data/pois.json"))?;
/// println!("{} records", dataset.len());
/// # Ok::<(), metrotrip_data::DatasetError>(())
/// ```
pub fn load_dataset(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    match file_is_file(path) {
        Ok(true) => {}
        Err(source) if source.kind() != ErrorKind::NotFound => {
            return Err(DatasetError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(false) | Err(_) => {
            return Err(DatasetError::NotFound {
                path: path.to_path_buf(),
            });
        }
    }
    debug!("loading {format:?} dataset from {path}");
    match format {
        DatasetFormat::Json => load_json(path),
        DatasetFormat::JsonLines => load_json_lines(path),
        DatasetFormat::Sqlite => load_sqlite(path),
        DatasetFormat::Parquet => load_parquet(path),
    }
}

fn open_reader(path: &Utf8Path) -> Result<impl BufRead, DatasetError> {
    open_utf8_file(path)
        .map(BufReader::new)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn into_row(path: &Utf8Path, index: usize, value: Value) -> Result<Row, DatasetError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DatasetError::NotARecord {
            path: path.to_path_buf(),
            index,
        }),
    }
}

fn load_json(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let reader = open_reader(path)?;
    let values: Vec<Value> =
        serde_json::from_reader(reader).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            line: None,
            source,
        })?;
    let rows = values
        .into_iter()
        .zip(1..)
        .map(|(value, index)| into_row(path, index, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(assemble(key_union(&rows), &rows, path.as_str()))
}

fn load_json_lines(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let reader = open_reader(path)?;
    let mut rows = Vec::new();
    for (line, number) in reader.lines().zip(1..) {
        let text = line.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            line: Some(number),
            source,
        })?;
        rows.push(into_row(path, number, value)?);
    }
    Ok(assemble(key_union(&rows), &rows, path.as_str()))
}

fn database_error<'a>(
    path: &'a Utf8Path,
    operation: &'static str,
) -> impl FnOnce(rusqlite::Error) -> DatasetError + 'a {
    move |source| DatasetError::Database {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

fn sqlite_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Integer(number) => Value::Number(Number::from(number)),
        ValueRef::Real(number) => Number::from_f64(number).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
    }
}

fn load_sqlite(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let connection = Connection::open_with_flags(path.as_std_path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(database_error(path, "open the database"))?;
    let exists = connection
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
            [SQLITE_TABLE],
            |_| Ok(()),
        )
        .optional()
        .map_err(database_error(path, "inspect the schema"))?;
    if exists.is_none() {
        return Err(DatasetError::MissingTable {
            path: path.to_path_buf(),
            table: SQLITE_TABLE,
        });
    }

    let mut statement = connection
        .prepare(&format!("SELECT * FROM \"{SQLITE_TABLE}\""))
        .map_err(database_error(path, "prepare the row query"))?;
    let names: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(str::to_owned)
        .collect();
    let mut rows = Vec::new();
    let mut cursor = statement
        .query([])
        .map_err(database_error(path, "query rows"))?;
    while let Some(row) = cursor.next().map_err(database_error(path, "read a row"))? {
        let mut record = Row::new();
        for (index, name) in names.iter().enumerate() {
            let value = row
                .get_ref(index)
                .map_err(database_error(path, "read a cell"))?;
            record.insert(name.clone(), sqlite_value(value));
        }
        rows.push(record);
    }
    Ok(assemble(
        names.iter().map(String::as_str),
        &rows,
        path.as_str(),
    ))
}

fn parquet_error(path: &Utf8Path) -> impl FnOnce(ParquetError) -> DatasetError + '_ {
    move |source| DatasetError::Parquet {
        path: path.to_path_buf(),
        source,
    }
}

fn parquet_value(field: &Field) -> Value {
    match field {
        Field::Null => Value::Null,
        Field::Bool(flag) => Value::Bool(*flag),
        Field::Byte(number) => Value::Number(Number::from(*number)),
        Field::Short(number) => Value::Number(Number::from(*number)),
        Field::Int(number) => Value::Number(Number::from(*number)),
        Field::Long(number) => Value::Number(Number::from(*number)),
        Field::UByte(number) => Value::Number(Number::from(*number)),
        Field::UShort(number) => Value::Number(Number::from(*number)),
        Field::UInt(number) => Value::Number(Number::from(*number)),
        Field::ULong(number) => Value::Number(Number::from(*number)),
        Field::Float(number) => Number::from_f64(f64::from(*number)).map_or(Value::Null, Value::Number),
        Field::Double(number) => Number::from_f64(*number).map_or(Value::Null, Value::Number),
        Field::Str(text) => Value::String(text.clone()),
        other => Value::String(other.to_string()),
    }
}

fn load_parquet(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let file = open_utf8_file(path)
        .map(fs_utf8::File::into_std)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let reader = SerializedFileReader::new(file).map_err(parquet_error(path))?;
    let names: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .root_schema()
        .get_fields()
        .iter()
        .map(|field| field.name().to_owned())
        .collect();
    let mut rows = Vec::new();
    for entry in reader.get_row_iter(None).map_err(parquet_error(path))? {
        let record: Row = entry
            .map_err(parquet_error(path))?
            .get_column_iter()
            .map(|(name, field)| (name.clone(), parquet_value(field)))
            .collect();
        rows.push(record);
    }
    Ok(assemble(
        names.iter().map(String::as_str),
        &rows,
        path.as_str(),
    ))
}
