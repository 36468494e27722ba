use thiserror::Error;

/// Reasons a data-entry command is turned away before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("amount is missing")]
    MissingAmount,

    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),

    #[error("category is missing")]
    MissingCategory,

    #[error("type is missing")]
    MissingType,

    #[error("remove needs a transaction id")]
    MissingId,
}

/// Arithmetic limits hit while deriving a figure from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("value overflow while computing {0}")]
    ValueOverflow(&'static str),
}
