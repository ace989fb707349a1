use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::account::AccountId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer { recipient: AccountId },
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
            TransactionKind::Transfer { recipient } => write!(f, "Transfer to {recipient}"),
        }
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One completed operation. Created once, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.kind, self.amount)
    }
}

/// Append-only, insertion ordered.
#[derive(Debug, Default)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
