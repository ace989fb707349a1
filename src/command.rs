use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::AccountId;

/// Menu entries, numbered the way they are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    History,
    Withdraw,
    Deposit,
    Transfer,
    Quit,
}

impl CommandKind {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::History),
            2 => Some(Self::Withdraw),
            3 => Some(Self::Deposit),
            4 => Some(Self::Transfer),
            5 => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    History,
    Withdraw { amount: Decimal },
    Deposit { amount: Decimal },
    Transfer { amount: Decimal, recipient: AccountId },
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid choice {0}, expected a number from 1 to 5")]
    InvalidChoice(u32),
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: CommandKind },
    #[error("Amount must not be negative for {kind:?}, got {amount}")]
    NegativeAmount { kind: CommandKind, amount: Decimal },
    #[error("Recipient account number is required for a transfer")]
    RecipientRequired,
}

impl SessionCommand {
    pub fn parse(
        choice: u32,
        amount: Option<Decimal>,
        recipient: Option<&str>,
    ) -> Result<Self, CommandError> {
        let kind = CommandKind::from_choice(choice).ok_or(CommandError::InvalidChoice(choice))?;
        match kind {
            CommandKind::History => Ok(Self::History),
            CommandKind::Quit => Ok(Self::Quit),
            CommandKind::Withdraw => Ok(Self::Withdraw {
                amount: Self::parse_amount(kind, amount)?,
            }),
            CommandKind::Deposit => Ok(Self::Deposit {
                amount: Self::parse_amount(kind, amount)?,
            }),
            CommandKind::Transfer => {
                let recipient = recipient
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(CommandError::RecipientRequired)?;
                Ok(Self::Transfer {
                    amount: Self::parse_amount(kind, amount)?,
                    recipient: AccountId::new(recipient),
                })
            }
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::History => CommandKind::History,
            Self::Withdraw { .. } => CommandKind::Withdraw,
            Self::Deposit { .. } => CommandKind::Deposit,
            Self::Transfer { .. } => CommandKind::Transfer,
            Self::Quit => CommandKind::Quit,
        }
    }

    fn parse_amount(kind: CommandKind, amount: Option<Decimal>) -> Result<Decimal, CommandError> {
        let Some(amount) = amount else {
            return Err(CommandError::AmountRequired { kind });
        };
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CommandError::NegativeAmount { kind, amount });
        }
        Ok(amount)
    }
}
