/// Balance-bearing accounts and the withdrawal rule of each account kind.
pub mod account;

/// Ledger interface, plus "in memory" implementation owning every account.
///
/// NOTE: the interface lets callers (and [`command`]) stay independent of
/// how accounts are stored.
pub mod ledger;

/// Ledger operations parsed from raw input, applied against any [`ledger::Ledger`].
pub mod command;

/// Bootstrap for the binary: CSV replay and the demonstration scenario.
/// Lives in the library so integration tests can use it.
pub mod bin_utils;
