/// The single balance a session operates on. Rejects negative amounts and
/// anything that would overdraw it.
pub mod account;

/// Session commands built from a raw menu choice, executed by [`session`].
pub mod command;

/// Login credential held by the session.
pub mod credential;

/// Immutable transaction records and the append-only log that keeps them.
pub mod history;

/// Where transfer recipients come from.
///
/// NOTE: the only implementation hands out throwaway accounts, but this is
/// the place to plug in a real directory of accounts.
pub mod registry;

/// Session controller: authenticates once, then dispatches commands and
/// records every successful operation.
pub mod session;

/// Environment backed configuration for the binary.
pub mod config;

/// Terminal glue that drives a [`session::Session`] over any reader/writer.
/// Lives in the library so the integration tests can script whole sessions.
pub mod bin_utils;
