pub mod columns;
pub mod errors;
pub mod model;
mod reader;

pub use errors::LoadError;
pub use model::StoreRecord;
pub use reader::{parse_store_records, read_store_records};
