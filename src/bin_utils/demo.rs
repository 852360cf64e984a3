use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::{
    account::Account,
    ledger::{Ledger, LedgerError, in_memory_ledger::InMemoryLedger},
};

/// Opens a checking and a savings account and runs [`run_demo_on`] against them.
pub fn run_demo<W>(output: &mut W) -> Result<()>
where
    W: Write,
{
    let mut ledger = InMemoryLedger::default();
    ledger.create_account(Account::checking("001", Decimal::from(500)));
    ledger.create_account(Account::savings("002", Decimal::from(1000)));
    run_demo_on(&mut ledger, output)
}

/// Deposits into `001`, withdraws from `002`, prints the total and closes `001`.
/// The first failing step is printed and ends the run.
pub fn run_demo_on<L, W>(ledger: &mut L, output: &mut W) -> Result<()>
where
    L: Ledger,
    W: Write,
{
    let moved = ledger
        .deposit("001", Decimal::from(200))
        .and_then(|()| ledger.withdraw("002", Decimal::from(300)));
    if let Err(err) = moved {
        return print_error(output, err);
    }
    writeln!(output, "Total balance: {}", ledger.total_balance())?;

    if let Err(err) = ledger.delete_account("001") {
        return print_error(output, err);
    }
    Ok(())
}

fn print_error<W>(output: &mut W, err: LedgerError) -> Result<()>
where
    W: Write,
{
    writeln!(output, "Error: {err}")?;
    Ok(())
}
