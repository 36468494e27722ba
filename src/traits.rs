use anyhow::Result;
use serde::Serialize;

use crate::models::{Command, Transaction};

/// CSVWrite trait provides a method to write a record to a CSV sink.
pub trait CSVWrite {
    /// Writes a record to a CSV sink.
    ///
    /// # Arguments
    /// * `record` - The record to write that is Serializable.
    ///
    /// # Returns
    /// A Result indicating success or failure.
    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()>;

    /// Flushes buffered records.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// CSVExport trait provides a method to render a view as CSV records.
pub trait CSVExport {
    /// Exports every record of the view.
    ///
    /// # Arguments
    /// * `writer` - The writer to write the records to.
    ///
    /// # Returns
    /// A Result indicating success or failure.
    fn export(&self, writer: &mut impl CSVWrite) -> Result<()>;
}

/// Bookkeeping trait applies validated data-entry commands and exposes the
/// resulting snapshot.
pub trait Bookkeeping {
    /// Applies a command. Store mutations cannot fail, so neither can this.
    ///
    /// # Arguments
    /// * `command` - The add or remove command to apply.
    fn apply(&mut self, command: Command);

    /// Current transactions in insertion order.
    fn transactions(&self) -> &[Transaction];
}
