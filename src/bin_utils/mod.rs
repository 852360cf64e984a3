//! Bootstraps [`bank_ledger`](crate) for the binary: replays operations from CSV and
//! runs the demonstration scenario. Kept in the library so integration tests can drive it.

use std::io::{Read, Write};

use crate::{
    command::{CommandError, LedgerCommand},
    ledger::{Ledger, LedgerError, in_memory_ledger::InMemoryLedger},
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, print_balances};
use thiserror::Error;
use tracing::info;

pub mod csv_parser;
pub mod csv_printer;
pub mod demo;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input).context("Failed to read CSV headers")?;

        let mut ledger = InMemoryLedger::default();
        let mut processed = 0usize;

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed operation at line {line}"))?;
            let result =
                LedgerCommand::parse_command(row.kind, row.account, row.account_kind, row.amount)
                    .map_err(OperationError::from)
                    .and_then(|cmd| cmd.apply(&mut ledger).map_err(OperationError::from));
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
            processed += 1;
        }
        info!(processed, accounts = ledger.len(), "replay finished");

        let mut accounts: Vec<_> = ledger.accounts().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        print_balances(
            self.output,
            accounts.into_iter().map(|acc| AccountRow {
                account: acc.id().to_owned(),
                kind: Some(acc.kind()),
                balance: acc.balance(),
            }),
            ledger.total_balance(),
        )
    }
}
