use anyhow::Result;
use budget_dashboard::{
    csv_writer::StdOutCSVWriter, processor::Engine, settings::Settings, store::TransactionStore,
};
use clap::Parser;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{self, Read};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)?;
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

fn main() -> Result<()> {
    let settings = Settings::parse();
    init_tracing(&settings.log_level)?;

    let reader = if settings.no_input {
        None
    } else {
        let input: Box<dyn Read> = match &settings.input {
            Some(path) => Box::new(File::open(path)?),
            None => Box::new(io::stdin()),
        };
        Some(
            ReaderBuilder::new()
                .has_headers(!settings.no_headers)
                .from_reader(input),
        )
    };

    let store = if settings.empty {
        TransactionStore::new()
    } else {
        TransactionStore::seeded()
    };

    let mut engine = Engine::new(StdOutCSVWriter::new(), reader, store);
    engine.run(settings.view)?;

    Ok(())
}
