use crate::adapters::storage::LocalStorage;
use crate::core::session::{Session, SessionSummary};
use crate::core::statement::export_statement;
use crate::core::{Account, ConfigProvider, Console};
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SessionReport {
    pub summary: SessionSummary,
    pub statement_files: Vec<PathBuf>,
}

pub struct BankEngine<P: ConfigProvider> {
    config: P,
}

impl<P: ConfigProvider> BankEngine<P> {
    pub fn new(config: P) -> Self {
        Self { config }
    }

    pub fn run<C: Console>(&self, console: C) -> Result<SessionReport> {
        let plan = self.config.session_plan()?;

        tracing::info!(
            "🏦 Opening account {} for {} with {} operation(s)",
            plan.number,
            plan.owner,
            plan.operations.len()
        );

        let account = Account::with_console(plan.owner, plan.number, plan.initial_balance, console);
        let mut session = Session::new(account, plan.policy);
        let summary = session.run(&plan.operations)?;

        tracing::info!(
            "✅ Applied {} operation(s), rejected {}; final balance {}",
            summary.applied,
            summary.rejected.len(),
            summary.final_balance
        );

        let statement_files = match &plan.statement {
            Some(settings) if !settings.formats.is_empty() => {
                let storage = LocalStorage::new(&settings.output_path);
                export_statement(session.account(), &storage, &settings.formats)?
            }
            _ => Vec::new(),
        };

        Ok(SessionReport {
            summary,
            statement_files,
        })
    }
}
