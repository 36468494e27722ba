use crate::{
    models::{Category, Command, NewTransaction, Transaction, TransactionId, TransactionType},
    traits::Bookkeeping,
};
use rust_decimal::prelude::*;
use tracing::debug;

const SEED: [(&str, Decimal, Category, TransactionType); 10] = [
    ("Raw Materials Purchase", dec!(5000), Category::VariableCost, TransactionType::Realized),
    ("Raw Materials Purchase", dec!(4500), Category::VariableCost, TransactionType::Budget),
    ("Factory Rent", dec!(2000), Category::FixedCost, TransactionType::Realized),
    ("Factory Rent", dec!(2000), Category::FixedCost, TransactionType::Budget),
    ("Sales Revenue Product A", dec!(12000), Category::Revenue, TransactionType::Realized),
    ("Sales Revenue Product A", dec!(15000), Category::Revenue, TransactionType::Budget),
    ("Marketing Campaign", dec!(1500), Category::FixedCost, TransactionType::Realized),
    ("Marketing Campaign", dec!(1000), Category::FixedCost, TransactionType::Budget),
    ("Electricity", dec!(300), Category::VariableCost, TransactionType::Realized),
    ("Electricity", dec!(250), Category::VariableCost, TransactionType::Budget),
];

/// In-memory, insertion-ordered collection of transactions.
///
/// The store is the only place ids are issued. Ids come from a counter that
/// never goes back, so an id freed by [`TransactionStore::remove`] is not
/// handed out again.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            last_id: 0,
        }
    }

    /// A store holding the ten example transactions, ids 1 to 10.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (description, amount, category, kind) in SEED {
            store.add(NewTransaction::new(description, amount, category, kind));
        }
        store
    }

    /// Appends a transaction under a fresh id and returns the stored record.
    pub fn add(&mut self, new: NewTransaction) -> Transaction {
        self.last_id += 1;
        let transaction = Transaction::from_new(TransactionId::new(self.last_id), new);
        debug!(id = %transaction.id(), category = %transaction.category(), "transaction added");
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Removes the transaction with `id`. Unknown ids are ignored.
    ///
    /// The returned flag only tells whether something was removed; callers are
    /// not expected to treat `false` as a failure.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        match self.transactions.iter().position(|tx| *tx.id() == id) {
            Some(index) => {
                self.transactions.remove(index);
                debug!(%id, "transaction removed");
                true
            }
            None => {
                debug!(%id, "remove ignored, no such transaction");
                false
            }
        }
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Bookkeeping for TransactionStore {
    fn apply(&mut self, command: Command) {
        match command {
            Command::Add(new) => {
                self.add(new);
            }
            Command::Remove(id) => {
                self.remove(id);
            }
        }
    }

    fn transactions(&self) -> &[Transaction] {
        self.snapshot()
    }
}
