use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountId},
    command::CommandError,
    history::TransactionRecord,
};

pub mod controller;

pub use controller::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Session is not authenticated")]
    NotAuthenticated,
    #[error("Session is already authenticated")]
    AlreadyAuthenticated,
    #[error("Session is closed")]
    SessionClosed,
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

impl SessionError {
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            SessionError::AccountErr(AccountError::InsufficientFunds { .. })
        )
    }

    pub fn is_invalid_choice(&self) -> bool {
        matches!(
            self,
            SessionError::CommandErr(CommandError::InvalidChoice(_))
        )
    }

    /// Errors after which the session accepts no more commands.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SessionError::AuthenticationFailed | SessionError::SessionClosed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAuthentication,
    Active,
    Closed,
}

/// What a successfully executed command produced, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    History(Vec<TransactionRecord>),
    Withdrawn {
        amount: Decimal,
        balance: Decimal,
    },
    Deposited {
        amount: Decimal,
        balance: Decimal,
    },
    Transferred {
        amount: Decimal,
        recipient: AccountId,
        recipient_balance: Decimal,
        balance: Decimal,
    },
    Quit,
}
