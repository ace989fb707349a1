use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId},
    command::SessionCommand,
    credential::Credential,
    history::{TransactionKind, TransactionLog, TransactionRecord},
    registry::{AccountRegistry, EphemeralRegistry},
};

use super::{Outcome, SessionError, SessionState};

pub struct Session<G = EphemeralRegistry> {
    credential: Credential,
    account: Account,
    registry: G,
    history: TransactionLog,
    state: SessionState,
}

impl Session<EphemeralRegistry> {
    pub fn new(credential: Credential, account: Account) -> Self {
        Self::with_registry(credential, account, EphemeralRegistry)
    }
}

impl<G> Session<G>
where
    G: AccountRegistry,
{
    pub fn with_registry(credential: Credential, account: Account, registry: G) -> Self {
        Self {
            credential,
            account,
            registry,
            history: TransactionLog::default(),
            state: SessionState::AwaitingAuthentication,
        }
    }

    /// Single attempt: a mismatch closes the session for good.
    pub fn authenticate(&mut self, identity: &str, secret: &str) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingAuthentication => {}
            SessionState::Active => return Err(SessionError::AlreadyAuthenticated),
            SessionState::Closed => return Err(SessionError::SessionClosed),
        }
        if self.credential.matches(identity, secret) {
            tracing::info!(user = identity, "authentication succeeded");
            self.state = SessionState::Active;
            Ok(())
        } else {
            tracing::warn!(user = identity, "authentication failed, closing session");
            self.state = SessionState::Closed;
            Err(SessionError::AuthenticationFailed)
        }
    }

    pub fn execute(
        &mut self,
        choice: u32,
        amount: Option<Decimal>,
        recipient: Option<&str>,
    ) -> Result<Outcome, SessionError> {
        match self.state {
            SessionState::Active => {}
            SessionState::AwaitingAuthentication => return Err(SessionError::NotAuthenticated),
            SessionState::Closed => return Err(SessionError::SessionClosed),
        }
        let cmd = SessionCommand::parse(choice, amount, recipient)?;
        tracing::debug!(kind = ?cmd.kind(), ?cmd, "executing command");
        let outcome = match cmd {
            SessionCommand::History => {
                Outcome::History(self.history.records().cloned().collect())
            }
            SessionCommand::Withdraw { amount } => {
                self.account.withdraw(amount)?;
                self.record(TransactionKind::Withdrawal, amount);
                Outcome::Withdrawn {
                    amount,
                    balance: self.account.balance(),
                }
            }
            SessionCommand::Deposit { amount } => {
                self.account.deposit(amount)?;
                self.record(TransactionKind::Deposit, amount);
                Outcome::Deposited {
                    amount,
                    balance: self.account.balance(),
                }
            }
            SessionCommand::Transfer { amount, recipient } => {
                self.transfer(amount, recipient)?
            }
            SessionCommand::Quit => {
                tracing::info!(records = self.history.len(), "session closed by user");
                self.state = SessionState::Closed;
                Outcome::Quit
            }
        };
        Ok(outcome)
    }

    fn transfer(&mut self, amount: Decimal, recipient: AccountId) -> Result<Outcome, SessionError> {
        let mut target = self.registry.open(&recipient);
        let transferred = self.account.transfer(amount, &mut target);
        let recipient_balance = target.balance();
        self.registry.settle(target);
        transferred?;
        self.record(
            TransactionKind::Transfer {
                recipient: recipient.clone(),
            },
            amount,
        );
        Ok(Outcome::Transferred {
            amount,
            recipient,
            recipient_balance,
            balance: self.account.balance(),
        })
    }

    // only reached once the account accepted the operation
    fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.append(TransactionRecord::new(kind, amount));
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn identity(&self) -> &str {
        self.credential.identity()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    pub fn history(&self) -> &TransactionLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{account::AccountError, command::CommandError};

    use super::*;

    const USER: &str = "Mansi";
    const PIN: &str = "Mansi@1234";

    fn session() -> Session {
        Session::new(
            Credential::new(USER, PIN),
            Account::new(AccountId::new("123456789")),
        )
    }

    fn active_session() -> Session {
        let mut s = session();
        s.authenticate(USER, PIN).unwrap();
        s
    }

    fn labels(s: &Session) -> Vec<String> {
        s.history().records().map(ToString::to_string).collect()
    }

    #[test]
    fn authenticate_once() {
        let mut s = session();
        assert_eq!(s.state(), SessionState::AwaitingAuthentication);
        s.authenticate(USER, PIN).unwrap();
        assert!(s.is_active());
        assert!(matches!(
            s.authenticate(USER, PIN).unwrap_err(),
            SessionError::AlreadyAuthenticated
        ));
        assert_eq!(s.identity(), USER);
    }

    #[test]
    fn failed_authentication_closes_session() {
        let mut s = session();
        let err = s.authenticate(USER, "wrong").unwrap_err();
        assert!(matches!(err, SessionError::AuthenticationFailed));
        assert!(err.is_fatal());
        assert_eq!(s.state(), SessionState::Closed);

        // no retry
        let err = s.authenticate(USER, PIN).unwrap_err();
        assert!(matches!(err, SessionError::SessionClosed));
        let err = s.execute(3, Some(Decimal::from(10)), None).unwrap_err();
        assert!(matches!(err, SessionError::SessionClosed));
        assert_eq!(s.balance(), Decimal::ZERO);
    }

    #[test]
    fn commands_require_authentication() {
        let mut s = session();
        let err = s.execute(1, None, None).unwrap_err();
        assert!(matches!(err, SessionError::NotAuthenticated));
        assert!(!err.is_fatal());
    }

    #[test]
    fn banking_scenario() {
        let mut s = active_session();

        let out = s.execute(3, Some(Decimal::from(100)), None).unwrap();
        assert_eq!(
            out,
            Outcome::Deposited {
                amount: Decimal::from(100),
                balance: Decimal::from(100)
            }
        );
        assert_eq!(labels(&s), vec!["Deposit: $100"]);

        let err = s.execute(2, Some(Decimal::from(150)), None).unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(s.balance(), Decimal::from(100));
        assert_eq!(labels(&s), vec!["Deposit: $100"]);

        let out = s.execute(2, Some(Decimal::from(40)), None).unwrap();
        assert_eq!(
            out,
            Outcome::Withdrawn {
                amount: Decimal::from(40),
                balance: Decimal::from(60)
            }
        );
        assert_eq!(labels(&s), vec!["Deposit: $100", "Withdrawal: $40"]);

        let out = s.execute(4, Some(Decimal::from(60)), Some("999")).unwrap();
        assert_eq!(
            out,
            Outcome::Transferred {
                amount: Decimal::from(60),
                recipient: AccountId::new("999"),
                recipient_balance: Decimal::from(60),
                balance: Decimal::ZERO,
            }
        );
        assert_eq!(
            labels(&s),
            vec!["Deposit: $100", "Withdrawal: $40", "Transfer to 999: $60"]
        );
    }

    #[test]
    fn failed_transfer_is_not_recorded() {
        let mut s = active_session();
        s.execute(3, Some(Decimal::from(10)), None).unwrap();
        let err = s.execute(4, Some(Decimal::from(11)), Some("999")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::AccountErr(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(s.balance(), Decimal::from(10));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn history_playback_does_not_change_log() {
        let mut s = active_session();
        s.execute(3, Some(Decimal::from(5)), None).unwrap();
        s.execute(3, Some(Decimal::from(7)), None).unwrap();

        let first = s.execute(1, None, None).unwrap();
        let second = s.execute(1, None, None).unwrap();
        assert_eq!(first, second);
        let Outcome::History(records) = first else {
            panic!("expected history, got {first:?}");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount(), Decimal::from(5));
        assert_eq!(records[1].amount(), Decimal::from(7));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn invalid_choice_keeps_session_open() {
        let mut s = active_session();
        let err = s.execute(9, None, None).unwrap_err();
        assert!(err.is_invalid_choice());
        assert!(s.is_active());
        assert!(s.history().is_empty());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut s = active_session();
        let err = s.execute(3, Some(Decimal::from(-5)), None).unwrap_err();
        assert!(matches!(
            err,
            SessionError::CommandErr(CommandError::NegativeAmount { .. })
        ));
        assert_eq!(s.balance(), Decimal::ZERO);
        assert!(s.history().is_empty());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut s = active_session();
        assert_eq!(s.execute(5, None, None).unwrap(), Outcome::Quit);
        assert_eq!(s.state(), SessionState::Closed);
        let err = s.execute(1, None, None).unwrap_err();
        assert!(matches!(err, SessionError::SessionClosed));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = active_session();
        let mut b = active_session();
        a.execute(3, Some(Decimal::from(50)), None).unwrap();
        b.execute(3, Some(Decimal::from(5)), None).unwrap();
        assert_eq!(a.balance(), Decimal::from(50));
        assert_eq!(b.balance(), Decimal::from(5));
        assert_eq!(a.history().len(), 1);
        assert_eq!(b.history().len(), 1);
    }

    #[derive(Default)]
    struct KeepingRegistry {
        accounts: HashMap<AccountId, Account>,
    }

    impl AccountRegistry for KeepingRegistry {
        fn open(&mut self, id: &AccountId) -> Account {
            self.accounts
                .remove(id)
                .unwrap_or_else(|| Account::new(id.clone()))
        }

        fn settle(&mut self, account: Account) {
            self.accounts.insert(account.id().clone(), account);
        }
    }

    #[test]
    fn custom_registry_keeps_recipient_state() {
        let mut s = Session::with_registry(
            Credential::new(USER, PIN),
            Account::new(AccountId::new("123456789")),
            KeepingRegistry::default(),
        );
        s.authenticate(USER, PIN).unwrap();
        s.execute(3, Some(Decimal::from(100)), None).unwrap();
        s.execute(4, Some(Decimal::from(30)), Some("999")).unwrap();
        let out = s.execute(4, Some(Decimal::from(30)), Some("999")).unwrap();
        assert!(matches!(
            out,
            Outcome::Transferred { recipient_balance, .. } if recipient_balance == Decimal::from(60)
        ));
        assert_eq!(s.balance(), Decimal::from(40));
    }
}
