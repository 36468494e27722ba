//! In-memory budgeting dashboard: a transaction store, the pure aggregation
//! engine deriving margin, break-even and budget ratios from it, and the CSV
//! views that present those figures.

pub mod csv_writer;
pub mod errors;
pub mod format;
pub mod metrics;
pub mod models;
pub mod processor;
pub mod report;
pub mod settings;
pub mod store;
pub mod traits;
