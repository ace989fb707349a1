//! Terminal front end for [`crate::session::Session`]: prompts, menu, number
//! parsing and rendering. The session itself never touches I/O.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Result;
use rust_decimal::Decimal;

use crate::{
    command::CommandKind,
    config::SessionConfig,
    history::TransactionRecord,
    session::{Outcome, Session},
};
use render::{GOODBYE, INVALID_CHOICE, MENU, error_line, outcome_lines};
use terminal::Terminal;

pub mod csv_printer;
pub mod render;
pub mod terminal;

const QUIT_CHOICE: u32 = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum ServiceExit {
    /// User quit, or input ran out. Carries the history of the session.
    Finished(Vec<TransactionRecord>),
    AuthenticationFailed,
}

/// Answers to the prompts that follow a menu choice.
enum Details {
    Ready {
        amount: Option<Decimal>,
        recipient: Option<String>,
    },
    InvalidAmount(String),
    EndOfInput,
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: SessionConfig,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(self) -> Result<ServiceExit> {
        let mut session = Session::new(self.config.credential(), self.config.account());
        let mut terminal = Terminal::new(self.input, self.output);

        terminal.say("Welcome to the ATM!")?;
        let user_id = terminal.prompt("Enter User ID: ")?.unwrap_or_default();
        let pin = terminal.prompt("Enter PIN: ")?.unwrap_or_default();
        if let Err(err) = session.authenticate(&user_id, &pin) {
            tracing::debug!(%err, "leaving after failed login");
            terminal.say("Authentication failed. Exiting...")?;
            return Ok(ServiceExit::AuthenticationFailed);
        }
        terminal.say(format!(
            "Authentication successful. Welcome, {}!",
            session.identity()
        ))?;

        while session.is_active() {
            terminal.say("")?;
            for line in MENU {
                terminal.say(line)?;
            }
            let Some(answer) = terminal.prompt("Enter your choice: ")? else {
                quit_on_end_of_input(&mut session, &mut terminal)?;
                break;
            };
            let Ok(choice) = answer.parse::<u32>() else {
                tracing::debug!(answer = %answer, "unparsable menu choice");
                terminal.say(INVALID_CHOICE)?;
                continue;
            };
            let kind = CommandKind::from_choice(choice);

            let (amount, recipient) = match read_details(&mut terminal, kind)? {
                Details::Ready { amount, recipient } => (amount, recipient),
                Details::InvalidAmount(text) => {
                    terminal.say(format!("Invalid amount: '{text}'"))?;
                    continue;
                }
                Details::EndOfInput => {
                    quit_on_end_of_input(&mut session, &mut terminal)?;
                    break;
                }
            };

            match session.execute(choice, amount, recipient.as_deref()) {
                Ok(outcome) => {
                    for line in outcome_lines(&outcome) {
                        terminal.say(line)?;
                    }
                }
                Err(err) => {
                    tracing::info!(%err, ?kind, "command rejected");
                    terminal.say(error_line(kind, &err))?;
                }
            }
        }

        Ok(ServiceExit::Finished(
            session.history().records().cloned().collect(),
        ))
    }
}

fn read_details<R, W>(terminal: &mut Terminal<'_, R, W>, kind: Option<CommandKind>) -> Result<Details>
where
    R: BufRead,
    W: Write,
{
    let recipient = if kind == Some(CommandKind::Transfer) {
        match terminal.prompt("Enter recipient's account number: ")? {
            Some(recipient) => Some(recipient),
            None => return Ok(Details::EndOfInput),
        }
    } else {
        None
    };

    let amount_prompt = match kind {
        Some(CommandKind::Withdraw) => "Enter withdrawal amount: ",
        Some(CommandKind::Deposit) => "Enter deposit amount: ",
        Some(CommandKind::Transfer) => "Enter transfer amount: ",
        _ => return Ok(Details::Ready { amount: None, recipient }),
    };
    let Some(text) = terminal.prompt(amount_prompt)? else {
        return Ok(Details::EndOfInput);
    };
    match Decimal::from_str(&text) {
        Ok(amount) => Ok(Details::Ready {
            amount: Some(amount),
            recipient,
        }),
        Err(_) => Ok(Details::InvalidAmount(text)),
    }
}

fn quit_on_end_of_input<R, W>(session: &mut Session, terminal: &mut Terminal<'_, R, W>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    tracing::debug!("input exhausted, quitting");
    terminal.say("")?;
    if let Ok(Outcome::Quit) = session.execute(QUIT_CHOICE, None, None) {
        terminal.say(GOODBYE)?;
    }
    Ok(())
}
