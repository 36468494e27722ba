use std::io::Read;

use crate::{
    errors::EntryError,
    models::EntryRecord,
    report::{self, View},
    traits::{Bookkeeping, CSVWrite},
};
use anyhow::Result;
use csv::Reader;
use tracing::{info, warn};

/// A data-entry row that failed validation and was left out of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based position of the record in the input, headers excluded.
    pub record: usize,
    pub reason: EntryError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
}

/// Feeds data-entry commands into a store, then renders one view of it.
pub struct Engine<T, S> {
    writer: T,
    reader: Option<Reader<Box<dyn Read>>>,
    store: S,
}

impl<T, S> Engine<T, S>
where
    T: CSVWrite,
    S: Bookkeeping,
{
    pub fn new(writer: T, reader: Option<Reader<Box<dyn Read>>>, store: S) -> Self {
        Self {
            writer,
            reader,
            store,
        }
    }

    pub fn run(&mut self, view: View) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if let Some(reader) = self.reader.as_mut() {
            for (index, rec) in reader.deserialize::<EntryRecord>().enumerate() {
                let record: EntryRecord = rec?;
                match record.validate() {
                    Ok(command) => {
                        self.store.apply(command);
                        summary.applied += 1;
                    }
                    Err(reason) => {
                        warn!(record = index + 1, %reason, "entry rejected");
                        summary.rejected.push(Rejection {
                            record: index + 1,
                            reason,
                        });
                    }
                }
            }
        }

        report::render(view, self.store.transactions(), &mut self.writer)?;
        self.writer.flush()?;

        info!(
            ?view,
            applied = summary.applied,
            rejected = summary.rejected.len(),
            transactions = self.store.transactions().len(),
            "view rendered"
        );

        Ok(summary)
    }
}
