use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::account::{Account, AccountId};

use super::{Ledger, LedgerError};

#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryLedger {
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, id: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.to_owned() })
    }
}

impl Ledger for InMemoryLedger {
    fn create_account(&mut self, account: Account) {
        let id = account.id().to_owned();
        let kind = account.kind();
        let balance = account.balance();
        if let Some(replaced) = self.accounts.insert(id.clone(), account) {
            warn!(
                account = %id,
                replaced_kind = %replaced.kind(),
                replaced_balance = %replaced.balance(),
                "account overwritten"
            );
        }
        debug!(account = %id, %kind, %balance, "account created");
    }

    fn delete_account(&mut self, id: &str) -> Result<Account, LedgerError> {
        let account = self
            .accounts
            .remove(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.to_owned() })?;
        debug!(account = %id, "account deleted");
        Ok(account)
    }

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.account_mut(id)?;
        account.deposit(amount)?;
        debug!(account = %id, %amount, balance = %account.balance(), "deposit");
        Ok(())
    }

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.account_mut(id)?;
        account.withdraw(amount)?;
        debug!(account = %id, %amount, balance = %account.balance(), "withdrawal");
        Ok(())
    }

    fn total_balance(&self) -> Decimal {
        self.accounts
            .values()
            .fold(Decimal::ZERO, |total, acc| total.saturating_add(acc.balance()))
    }
}
