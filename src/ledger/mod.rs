use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError, AccountId};

pub mod in_memory_ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {id} not found")]
    AccountNotFound { id: AccountId },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Registry of accounts keyed by id.
///
/// Implementations hold no internal synchronization; sharing one between
/// callers requires a single lock around the whole ledger.
pub trait Ledger {
    /// Inserts `account` under its id, replacing any account already stored there.
    fn create_account(&mut self, account: Account);

    fn delete_account(&mut self, id: &str) -> Result<Account, LedgerError>;

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<(), LedgerError>;

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<(), LedgerError>;

    /// Sum of all balances, zero when empty. Saturates at the `Decimal` bounds.
    fn total_balance(&self) -> Decimal;
}
