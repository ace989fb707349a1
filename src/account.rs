use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Account number, kept as text since it is only ever compared and printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountEventKind {
    Credited,
    Debited,
}

#[derive(Debug)]
struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },
    #[error("Balance overflow while crediting {amount}")]
    Overflow { amount: Decimal },
    #[error("Amount must not be negative, got {amount}")]
    NegativeAmount { amount: Decimal },
}

/// Single balance holder.
///
/// The balance never drops below zero: every debit is checked against it
/// before anything is applied, so a rejected operation leaves the account
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_credit(amount)?;
        self.apply(&evt);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_debit(amount)?;
        self.apply(&evt);
        Ok(())
    }

    /// Moves `amount` into `recipient`.
    ///
    /// Both sides are validated first, then both events are applied, so on
    /// error neither balance has moved.
    pub fn transfer(&mut self, amount: Decimal, recipient: &mut Account) -> Result<(), AccountError> {
        let debit = self.handle_debit(amount)?;
        let credit = recipient.handle_credit(amount)?;
        self.apply(&debit);
        recipient.apply(&credit);
        Ok(())
    }

    fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
        }
    }

    fn handle_credit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_not_negative(amount)?;
        if self.balance.checked_add(amount).is_none() {
            return Err(AccountError::Overflow { amount });
        }
        Ok(AccountEvent {
            amount,
            kind: AccountEventKind::Credited,
        })
    }

    fn handle_debit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_not_negative(amount)?;
        if amount <= self.balance {
            Ok(AccountEvent {
                amount,
                kind: AccountEventKind::Debited,
            })
        } else {
            Err(AccountError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            })
        }
    }
}

fn ensure_not_negative(amount: Decimal) -> Result<(), AccountError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AccountError::NegativeAmount { amount });
    }
    Ok(())
}
