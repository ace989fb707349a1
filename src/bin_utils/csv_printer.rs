use std::{fs::File, io::Write, path::Path};

use anyhow::Context;
use csv::WriterBuilder;

use crate::history::TransactionRecord;

/// Writes the session history as `kind,amount` rows.
pub fn print_statement<'a, W>(
    output: &mut W,
    records: impl Iterator<Item = &'a TransactionRecord>,
) -> anyhow::Result<()>
where
    W: Write,
{
    // header written by hand so an empty statement still has one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(["kind", "amount"])?;
    for record in records {
        if let Err(err) = writer.serialize(record) {
            anyhow::bail!("Failed to write statement row: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush statement writer: {err}")
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the statement into it.
pub fn save_statement(path: &Path, records: &[TransactionRecord]) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create `{}`", path.display()))?;
    print_statement(&mut file, records.iter())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{account::AccountId, history::TransactionKind};

    use super::*;

    #[test]
    fn statement_rows() {
        let records = [
            TransactionRecord::new(TransactionKind::Deposit, Decimal::from(100)),
            TransactionRecord::new(
                TransactionKind::Transfer {
                    recipient: AccountId::new("999"),
                },
                Decimal::new(6050, 2),
            ),
        ];
        let mut output = Vec::new();
        print_statement(&mut output, records.iter()).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "kind,amount\nDeposit,100\nTransfer to 999,60.50\n"
        );
    }

    #[test]
    fn empty_statement_has_header() {
        let mut output = Vec::new();
        print_statement(&mut output, std::iter::empty()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "kind,amount\n");
    }
}
