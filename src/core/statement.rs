use crate::adapters::storage::LocalStorage;
use crate::core::{Account, Console, StatementFormat, Transaction};
use crate::domain::account::format_currency;
use crate::utils::error::{BankError, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct StatementDocument<'a> {
    owner: &'a str,
    number: &'a str,
    balance: String,
    transactions: &'a [Transaction],
}

pub fn render_csv<C: Console>(account: &Account<C>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["timestamp", "kind", "amount", "balance_after"])?;

    for tx in account.history() {
        writer.write_record([
            tx.timestamp.to_rfc3339(),
            tx.kind.to_string(),
            tx.amount.to_string(),
            format_currency(tx.balance_after),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| BankError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| BankError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render_json<C: Console>(account: &Account<C>) -> Result<String> {
    let document = StatementDocument {
        owner: account.owner(),
        number: account.number(),
        balance: format_currency(account.balance()),
        transactions: account.history(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn export_statement<C: Console>(
    account: &Account<C>,
    storage: &LocalStorage,
    formats: &[StatementFormat],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(formats.len());

    for format in formats {
        let content = match format {
            StatementFormat::Csv => render_csv(account)?,
            StatementFormat::Json => render_json(account)?,
        };
        let path = storage.write_file(format.file_name(), content.as_bytes())?;
        tracing::info!("📁 Statement saved to: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
