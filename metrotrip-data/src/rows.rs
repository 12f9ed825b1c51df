//! Assemble typed records from loosely typed source rows.
//!
//! Every input format is reduced to rows of JSON values keyed by source
//! column name. This module resolves source names to logical columns, coerces
//! cells and ranks, and reports how many ranks could not be repaired.

use std::collections::BTreeSet;

use log::{debug, info, warn};
use metrotrip_core::{Column, ColumnSet, Dataset, PoiRecord, Rank};
use serde_json::{Map, Value};

/// A source row keyed by source column name.
pub(crate) type Row = Map<String, Value>;

/// Source name chosen for each logical column.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    sources: Vec<(Column, &'static str)>,
}

impl ColumnMap {
    fn resolve<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let available: BTreeSet<&str> = names.into_iter().collect();
        let sources = Column::ALL
            .into_iter()
            .filter_map(|column| {
                column
                    .source_names()
                    .iter()
                    .find(|name| available.contains(**name))
                    .map(|name| (column, *name))
            })
            .collect();
        Self { sources }
    }

    fn source(&self, column: Column) -> Option<&'static str> {
        self.sources
            .iter()
            .find(|(candidate, _)| *candidate == column)
            .map(|(_, name)| *name)
    }

    fn column_set(&self) -> ColumnSet {
        let mut columns: ColumnSet = self.sources.iter().map(|(column, _)| *column).collect();
        if columns.has_rank() {
            columns.insert(Column::RankNumeric);
        }
        columns
    }
}

/// Text form of a cell: strings verbatim, numbers rendered, anything else
/// missing.
pub(crate) fn text_cell(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric rank of a cell; booleans and non-numeric text are no rank.
pub(crate) fn rank_cell(value: &Value) -> Option<Rank> {
    match value {
        Value::Number(number) => number.as_f64().and_then(Rank::new),
        Value::String(text) => Rank::parse(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn build_record(row: &Row, columns: &ColumnMap) -> PoiRecord {
    let cell = |column: Column| columns.source(column).and_then(|name| row.get(name));
    let text = |column: Column| cell(column).and_then(text_cell);
    let rank = if columns.source(Column::RankNumeric).is_some() {
        cell(Column::RankNumeric).and_then(rank_cell)
    } else {
        cell(Column::Rank).and_then(rank_cell)
    };
    PoiRecord {
        area: text(Column::Area),
        sub_region: text(Column::SubRegion),
        name: text(Column::Name),
        related_name: text(Column::RelatedName),
        category_l: text(Column::CategoryL),
        category_m: text(Column::CategoryM),
        category_s: text(Column::CategoryS),
        rank_raw: text(Column::Rank),
        rank,
    }
}

/// Build a dataset from rows whose union of keys is `column_names`.
pub(crate) fn assemble<'a>(
    column_names: impl IntoIterator<Item = &'a str>,
    rows: &[Row],
    origin: &str,
) -> Dataset {
    let columns = ColumnMap::resolve(column_names);
    let column_set = columns.column_set();
    let records: Vec<PoiRecord> = rows
        .iter()
        .map(|row| build_record(row, &columns))
        .collect();
    debug!("loaded {} records from {origin}", records.len());
    if column_set.has_rank() {
        let unranked = records.iter().filter(|record| record.rank.is_none()).count();
        if unranked > 0 {
            warn!("{unranked} of {} records in {origin} have no usable rank", records.len());
        }
    } else {
        info!("{origin} has no rank column; every record scores equally");
    }
    Dataset::new(records, column_set)
}

/// Union of the keys of `rows`.
pub(crate) fn key_union(rows: &[Row]) -> BTreeSet<&str> {
    rows.iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect()
}
