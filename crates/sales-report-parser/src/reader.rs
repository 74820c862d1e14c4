use std::collections::BTreeMap;
use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::errors::LoadError;
use crate::model::StoreRecord;

pub fn parse_store_records(content: &str) -> Result<Vec<StoreRecord>, LoadError> {
    read_store_records(content.as_bytes())
}

/// Reads every data row in file order. The first row names the columns; any row
/// whose width differs from it fails the whole read.
pub fn read_store_records<R: Read>(source: R) -> Result<Vec<StoreRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(source);

    let headers = reader.headers().map_err(LoadError::from_csv)?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(LoadError::EmptyHeader);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(LoadError::from_csv)?;
        let line = row.position().map_or(0, |pos| pos.line());
        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        records.push(StoreRecord::new(line, fields));
    }

    Ok(records)
}
