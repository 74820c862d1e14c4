use std::path::Path;

use sales_report_parser::{parse_store_records, LoadError, StoreRecord};

/// Reads and decodes the whole sales export before any report goes out.
pub async fn load_records(path: &Path) -> Result<Vec<StoreRecord>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    parse_store_records(&content)
}
