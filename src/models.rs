use std::fmt;

use crate::errors::EntryError;
use getset::Getters;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub fn new(raw: u64) -> Self {
        TransactionId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Revenue", alias = "revenue")]
    Revenue,
    #[serde(rename = "Fixed Cost", alias = "fixed_cost", alias = "fixed-cost")]
    FixedCost,
    #[serde(rename = "Variable Cost", alias = "variable_cost", alias = "variable-cost")]
    VariableCost,
}

impl Category {
    pub fn is_cost(self) -> bool {
        !matches!(self, Category::Revenue)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Revenue => "Revenue",
            Category::FixedCost => "Fixed Cost",
            Category::VariableCost => "Variable Cost",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Budget", alias = "budget")]
    Budget,
    #[serde(rename = "Realized", alias = "realized")]
    Realized,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionType::Budget => "Budget",
            TransactionType::Realized => "Realized",
        })
    }
}

/// Field set of a transaction before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub kind: TransactionType,
}

impl NewTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: Category,
        kind: TransactionType,
    ) -> Self {
        NewTransaction {
            description: description.into(),
            amount,
            category,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Transaction {
    #[getset(get = "pub")]
    id: TransactionId,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    amount: Decimal,
    #[getset(get = "pub")]
    category: Category,
    #[getset(get = "pub")]
    #[serde(rename = "type")]
    kind: TransactionType,
}

impl Transaction {
    /// Ids are issued by the store.
    pub(crate) fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Transaction {
            id,
            description: new.description,
            amount: new.amount,
            category: new.category,
            kind: new.kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Action {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "remove")]
    Remove,
}

/// One row of the data-entry command stream.
///
/// Every column except `action` is optional at the CSV level; which ones are
/// required depends on the action and is checked by [`EntryRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct EntryRecord {
    #[getset(get = "pub")]
    action: Action,
    #[getset(get = "pub")]
    id: Option<u64>,
    #[getset(get = "pub")]
    #[serde(default)]
    description: String,
    #[getset(get = "pub")]
    amount: Option<String>,
    #[getset(get = "pub")]
    category: Option<Category>,
    #[getset(get = "pub")]
    #[serde(rename = "type")]
    type_: Option<TransactionType>,
}

/// A validated data-entry command, ready to be applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewTransaction),
    Remove(TransactionId),
}

impl EntryRecord {
    /// Checks the record the way the entry form does before submitting.
    ///
    /// An `add` needs a non-empty description and a parseable amount. The sign
    /// of the amount is not checked. A `remove` only needs an id.
    pub fn validate(&self) -> Result<Command, EntryError> {
        match self.action {
            Action::Add => {
                if self.description.is_empty() {
                    return Err(EntryError::EmptyDescription);
                }
                let raw = match self.amount.as_deref().map(str::trim) {
                    Some(raw) if !raw.is_empty() => raw,
                    _ => return Err(EntryError::MissingAmount),
                };
                let amount = raw
                    .parse::<Decimal>()
                    .or_else(|_| Decimal::from_scientific(raw))
                    .map_err(|_| EntryError::InvalidAmount(raw.to_string()))?;
                let category = self.category.ok_or(EntryError::MissingCategory)?;
                let kind = self.type_.ok_or(EntryError::MissingType)?;

                Ok(Command::Add(NewTransaction::new(
                    self.description.clone(),
                    amount,
                    category,
                    kind,
                )))
            }
            Action::Remove => self
                .id
                .map(|id| Command::Remove(TransactionId::new(id)))
                .ok_or(EntryError::MissingId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn parse_records(input: &str) -> Result<Vec<EntryRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());
        let records = reader
            .deserialize::<EntryRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    #[test]
    fn test_category_accepts_display_name_and_aliases() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\n\
             add,,a,1,Fixed Cost,Budget\n\
             add,,b,1,variable-cost,realized\n\
             add,,c,1,revenue,Realized\n",
        )?;

        assert_eq!(*records[0].category(), Some(Category::FixedCost));
        assert_eq!(*records[0].type_(), Some(TransactionType::Budget));
        assert_eq!(*records[1].category(), Some(Category::VariableCost));
        assert_eq!(*records[1].type_(), Some(TransactionType::Realized));
        assert_eq!(*records[2].category(), Some(Category::Revenue));
        Ok(())
    }

    #[test]
    fn test_remove_record_leaves_entry_columns_empty() -> Result<()> {
        let records = parse_records("action,id,description,amount,category,type\nremove,7,,,,\n")?;

        assert_eq!(*records[0].action(), Action::Remove);
        assert_eq!(*records[0].id(), Some(7));
        assert_eq!(*records[0].amount(), None);
        assert_eq!(*records[0].category(), None);
        Ok(())
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let res = parse_records("action,id,description,amount,category,type\nadd,,a,1,Tax,Budget\n");
        assert!(res.is_err());
    }

    #[test]
    fn test_validate_add_builds_new_transaction() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\nadd,99,Consulting,1250.50,Revenue,Realized\n",
        )?;

        let command = records[0].validate()?;
        assert_eq!(
            command,
            Command::Add(NewTransaction::new(
                "Consulting",
                dec!(1250.50),
                Category::Revenue,
                TransactionType::Realized,
            ))
        );
        Ok(())
    }

    #[test]
    fn test_validate_accepts_negative_amount() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\nadd,,Refund,-300,Revenue,Realized\n",
        )?;

        match records[0].validate()? {
            Command::Add(new) => assert_eq!(new.amount, dec!(-300)),
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_validate_rejects_empty_description() -> Result<()> {
        let records =
            parse_records("action,id,description,amount,category,type\nadd,,,10,Revenue,Budget\n")?;
        assert_eq!(records[0].validate(), Err(EntryError::EmptyDescription));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_missing_or_bad_amount() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\n\
             add,,Rent,,Fixed Cost,Budget\n\
             add,,Rent,abc,Fixed Cost,Budget\n",
        )?;
        assert_eq!(records[0].validate(), Err(EntryError::MissingAmount));
        assert_eq!(
            records[1].validate(),
            Err(EntryError::InvalidAmount("abc".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_validate_rejects_missing_category_and_type() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\n\
             add,,Rent,10,,Budget\n\
             add,,Rent,10,Fixed Cost,\n",
        )?;
        assert_eq!(records[0].validate(), Err(EntryError::MissingCategory));
        assert_eq!(records[1].validate(), Err(EntryError::MissingType));
        Ok(())
    }

    #[test]
    fn test_validate_remove_needs_id() -> Result<()> {
        let records = parse_records(
            "action,id,description,amount,category,type\nremove,3,,,,\nremove,,,,,\n",
        )?;
        assert_eq!(records[0].validate()?, Command::Remove(TransactionId::new(3)));
        assert_eq!(records[1].validate(), Err(EntryError::MissingId));
        Ok(())
    }

    #[test]
    fn test_only_revenue_is_not_a_cost() {
        assert!(!Category::Revenue.is_cost());
        assert!(Category::FixedCost.is_cost());
        assert!(Category::VariableCost.is_cost());
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(Category::FixedCost.to_string(), "Fixed Cost");
        assert_eq!(Category::VariableCost.to_string(), "Variable Cost");
        assert_eq!(TransactionType::Realized.to_string(), "Realized");
    }
}
