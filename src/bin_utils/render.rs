use crate::{
    account::AccountError,
    command::{CommandError, CommandKind},
    session::{Outcome, SessionError},
};

pub const MENU: [&str; 6] = [
    "ATM Menu:",
    "1. Transactions History",
    "2. Withdraw",
    "3. Deposit",
    "4. Transfer",
    "5. Quit",
];

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";
pub const GOODBYE: &str = "Thank you for using the ATM. Goodbye!";

pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::History(records) if records.is_empty() => vec![
            "Transaction History:".to_string(),
            "No transactions yet.".to_string(),
        ],
        Outcome::History(records) => std::iter::once("Transaction History:".to_string())
            .chain(records.iter().map(ToString::to_string))
            .collect(),
        Outcome::Withdrawn { balance, .. } => vec![
            "Withdrawal successful!".to_string(),
            format!("Current balance: ${balance}"),
        ],
        Outcome::Deposited { balance, .. } => vec![
            "Deposit successful!".to_string(),
            format!("Current balance: ${balance}"),
        ],
        Outcome::Transferred {
            amount,
            recipient,
            balance,
            ..
        } => vec![
            format!("Transfer successful! Sent ${amount} to {recipient}."),
            format!("Current balance: ${balance}"),
        ],
        Outcome::Quit => vec![GOODBYE.to_string()],
    }
}

/// Message for a rejected command. `kind` is the menu entry that was picked,
/// if it was a known one.
pub fn error_line(kind: Option<CommandKind>, err: &SessionError) -> String {
    match err {
        SessionError::AccountErr(AccountError::InsufficientFunds { .. }) => match kind {
            Some(CommandKind::Transfer) => "Insufficient funds for transfer!".to_string(),
            _ => "Insufficient funds!".to_string(),
        },
        SessionError::CommandErr(CommandError::InvalidChoice(_)) => INVALID_CHOICE.to_string(),
        SessionError::CommandErr(CommandError::NegativeAmount { .. })
        | SessionError::AccountErr(AccountError::NegativeAmount { .. }) => {
            "Amount must not be negative.".to_string()
        }
        other => other.to_string(),
    }
}
