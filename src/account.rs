use std::fmt;

use rust_decimal::{Decimal, prelude::Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Checking => f.write_str("checking"),
            AccountKind::Savings => f.write_str("savings"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds in {kind} account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        id: AccountId,
        kind: AccountKind,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Balance of account {id} would overflow")]
    BalanceOverflow { id: AccountId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, kind: AccountKind, initial_balance: Decimal) -> Self {
        Self {
            id: id.into(),
            kind,
            balance: initial_balance,
        }
    }

    pub fn checking(id: impl Into<AccountId>, initial_balance: Decimal) -> Self {
        Self::new(id, AccountKind::Checking, initial_balance)
    }

    pub fn savings(id: impl Into<AccountId>, initial_balance: Decimal) -> Self {
        Self::new(id, AccountKind::Savings, initial_balance)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Non-positive amounts are ignored.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > Decimal::zero() {
            self.balance = self.checked(self.balance.checked_add(amount))?;
        }
        Ok(())
    }

    /// Fails with [`AccountError::InsufficientFunds`] when `amount` exceeds the balance.
    /// The amount itself has no lower bound, so a negative withdrawal raises the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_withdrawal(amount)?;
        self.balance = self.checked(self.balance.checked_sub(amount))?;
        Ok(())
    }

    fn checked(&self, balance: Option<Decimal>) -> Result<Decimal, AccountError> {
        balance.ok_or_else(|| AccountError::BalanceOverflow {
            id: self.id.clone(),
        })
    }

    fn check_withdrawal(&self, amount: Decimal) -> Result<(), AccountError> {
        let allowed = match self.kind {
            AccountKind::Checking => amount <= self.balance,
            AccountKind::Savings => amount <= self.balance,
        };
        if allowed {
            Ok(())
        } else {
            Err(AccountError::InsufficientFunds {
                id: self.id.clone(),
                kind: self.kind,
                balance: self.balance,
                requested: amount,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn deposit_ignores_non_positive_amounts() {
        let mut acc = Account::checking("001", Decimal::from_u32(500).unwrap());
        acc.deposit(Decimal::from_u32(200).unwrap()).unwrap();
        assert_eq!(acc.balance(), Decimal::from_u32(700).unwrap());

        acc.deposit(Decimal::zero()).unwrap();
        acc.deposit(Decimal::from_i32(-50).unwrap()).unwrap();
        assert_eq!(acc.balance(), Decimal::from_u32(700).unwrap());
    }

    #[test]
    fn withdraw() {
        let mut acc = Account::savings("002", Decimal::from_u32(1000).unwrap());
        acc.withdraw(Decimal::from_u32(300).unwrap()).unwrap();
        assert_eq!(acc.balance(), Decimal::from_u32(700).unwrap());

        // whole balance may be withdrawn
        acc.withdraw(Decimal::from_u32(700).unwrap()).unwrap();
        assert_eq!(acc.balance(), Decimal::zero());

        // negative withdrawal is not rejected
        acc.withdraw(Decimal::from_i32(-25).unwrap()).unwrap();
        assert_eq!(acc.balance(), Decimal::from_u32(25).unwrap());
    }

    #[test]
    fn withdraw_more_than_balance() {
        let mut acc = Account::savings("002", Decimal::from_u32(1000).unwrap());
        let err = acc.withdraw(Decimal::from_u32(2000).unwrap()).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                id: "002".to_string(),
                kind: AccountKind::Savings,
                balance: Decimal::from_u32(1000).unwrap(),
                requested: Decimal::from_u32(2000).unwrap(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Insufficient funds in savings account 002: balance 1000, requested 2000"
        );
        assert_eq!(acc.balance(), Decimal::from_u32(1000).unwrap());
    }

    #[test]
    fn overflowing_balance_is_rejected() {
        let mut acc = Account::checking("001", Decimal::MAX);
        let err = acc.deposit(Decimal::ONE).unwrap_err();
        assert_eq!(
            err,
            AccountError::BalanceOverflow {
                id: "001".to_string()
            }
        );
        assert_eq!(err.to_string(), "Balance of account 001 would overflow");
        assert_eq!(acc.balance(), Decimal::MAX);

        // negative withdrawal raises the balance, so it can overflow too
        let err = acc.withdraw(Decimal::NEGATIVE_ONE).unwrap_err();
        assert!(matches!(err, AccountError::BalanceOverflow { .. }));
        assert_eq!(acc.balance(), Decimal::MAX);

        acc.withdraw(Decimal::ONE).unwrap();
        assert_eq!(acc.balance(), Decimal::MAX - Decimal::ONE);
    }

    #[test]
    fn kinds_share_withdrawal_rule() {
        for kind in [AccountKind::Checking, AccountKind::Savings] {
            let mut acc = Account::new("x", kind, Decimal::from_u32(10).unwrap());
            assert!(acc.withdraw(Decimal::from_u32(11).unwrap()).is_err());
            assert!(acc.withdraw(Decimal::from_u32(10).unwrap()).is_ok());
            assert_eq!(acc.kind(), kind);
        }
    }

    fn any_kind() -> impl Strategy<Value = AccountKind> {
        prop_oneof![Just(AccountKind::Checking), Just(AccountKind::Savings)]
    }

    proptest! {
        #[test]
        fn deposit_changes_balance_only_when_positive(
            kind in any_kind(),
            initial in 0i64..1_000_000,
            amount in -1_000_000i64..1_000_000,
        ) {
            let mut acc = Account::new("p", kind, Decimal::from(initial));
            prop_assert!(acc.deposit(Decimal::from(amount)).is_ok());
            let expected = if amount > 0 { initial + amount } else { initial };
            prop_assert_eq!(acc.balance(), Decimal::from(expected));
        }

        #[test]
        fn withdraw_succeeds_iff_amount_within_balance(
            kind in any_kind(),
            initial in 0i64..1_000_000,
            amount in -1_000_000i64..2_000_000,
        ) {
            let mut acc = Account::new("p", kind, Decimal::from(initial));
            let result = acc.withdraw(Decimal::from(amount));
            if amount > initial {
                let is_insufficient = matches!(result, Err(AccountError::InsufficientFunds { .. }));
                prop_assert!(is_insufficient);
                prop_assert_eq!(acc.balance(), Decimal::from(initial));
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(acc.balance(), Decimal::from(initial - amount));
            }
        }
    }
}
