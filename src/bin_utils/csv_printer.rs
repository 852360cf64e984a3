use std::io::Write;

use crate::account::{AccountId, AccountKind};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub account: AccountId,
    pub kind: Option<AccountKind>,
    pub balance: Decimal,
}

/// Writes one row per account followed by a `total` row.
pub fn print_balances<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow>,
    total: Decimal,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    let total_row = AccountRow {
        account: "total".to_string(),
        kind: None,
        balance: total,
    };
    for row in accounts.chain(std::iter::once(total_row)) {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
