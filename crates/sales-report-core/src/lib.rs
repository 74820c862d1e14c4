pub mod chart;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod loader;
pub mod mailer;
pub mod metrics;

pub use sales_report_parser::{LoadError, StoreRecord};
