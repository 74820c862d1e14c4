use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::columns;

/// One data row of the sales export, keyed by header name. Values are kept as
/// the raw (trimmed) text; interpretation happens downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreRecord {
    line: u64,
    fields: BTreeMap<String, String>,
}

impl StoreRecord {
    pub fn new(line: u64, fields: BTreeMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// 1-based line in the source file (the header is line 1).
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn shop_name(&self) -> Option<&str> {
        columns::SHOP_NAME
            .iter()
            .find_map(|column| self.get(column))
            .filter(|name| !name.is_empty())
    }

    pub fn total_sales(&self) -> Option<&str> {
        self.get(columns::TOTAL_SALES)
    }

    pub fn manager_email(&self) -> Option<&str> {
        self.get(columns::MANAGER_EMAIL)
            .filter(|email| !email.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl fmt::Display for StoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shop_name() {
            Some(name) => write!(f, "{name} (line {})", self.line),
            None => write!(f, "<unnamed store> (line {})", self.line),
        }
    }
}
