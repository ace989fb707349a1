use crate::account::{Account, AccountId};

/// Supplies the other side of a transfer.
pub trait AccountRegistry {
    /// Account that will receive the funds.
    fn open(&mut self, id: &AccountId) -> Account;

    /// Hands the recipient back after every transfer attempt, successful or not.
    fn settle(&mut self, account: Account);
}

/// Every transfer goes to a brand new, empty account that is dropped as
/// soon as it has been credited.
#[derive(Debug, Default)]
pub struct EphemeralRegistry;

impl AccountRegistry for EphemeralRegistry {
    fn open(&mut self, id: &AccountId) -> Account {
        Account::new(id.clone())
    }

    fn settle(&mut self, account: Account) {
        tracing::debug!(
            recipient = %account.id(),
            balance = %account.balance(),
            "discarding ephemeral recipient"
        );
    }
}
