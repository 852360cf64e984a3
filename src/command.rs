use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    account::{Account, AccountId, AccountKind},
    ledger::{Ledger, LedgerError},
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Close,
    Deposit,
    Withdraw,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Account kind is required for {kind:?}")]
    KindRequired { kind: OperationKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open(Account),
    Close { id: AccountId },
    Deposit { id: AccountId, amount: Decimal },
    Withdraw { id: AccountId, amount: Decimal },
}

impl LedgerCommand {
    pub fn parse_command(
        kind: OperationKind,
        id: AccountId,
        account_kind: Option<AccountKind>,
        amount: Option<Decimal>,
    ) -> Result<Self, CommandError> {
        match kind {
            OperationKind::Open => {
                let account_kind = account_kind.ok_or(CommandError::KindRequired { kind })?;
                let initial_balance = amount.ok_or(CommandError::AmountRequired { kind })?;
                Ok(Self::Open(Account::new(id, account_kind, initial_balance)))
            }
            OperationKind::Close => Ok(Self::Close { id }),
            OperationKind::Deposit => Ok(Self::Deposit {
                id,
                amount: amount.ok_or(CommandError::AmountRequired { kind })?,
            }),
            OperationKind::Withdraw => Ok(Self::Withdraw {
                id,
                amount: amount.ok_or(CommandError::AmountRequired { kind })?,
            }),
        }
    }

    pub fn apply<L>(self, ledger: &mut L) -> Result<(), LedgerError>
    where
        L: Ledger + ?Sized,
    {
        match self {
            Self::Open(account) => {
                ledger.create_account(account);
                Ok(())
            }
            Self::Close { id } => ledger.delete_account(&id).map(|_| ()),
            Self::Deposit { id, amount } => ledger.deposit(&id, amount),
            Self::Withdraw { id, amount } => ledger.withdraw(&id, amount),
        }
    }
}
