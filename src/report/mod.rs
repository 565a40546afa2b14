pub mod csv;

pub use csv::{CsvReport, CSV_HEADER};
