pub mod table;

pub use table::{ProfileReport, ReportRow};
