use crate::core::{Account, Console, InsufficientFundsPolicy, Operation};
use crate::utils::error::{BankError, Result};
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct SessionSummary {
    pub applied: usize,
    pub rejected: Vec<BankError>,
    pub final_balance: Decimal,
}

/// 依序對單一帳戶執行一串操作
pub struct Session<C: Console> {
    account: Account<C>,
    policy: InsufficientFundsPolicy,
}

impl<C: Console> Session<C> {
    pub fn new(account: Account<C>, policy: InsufficientFundsPolicy) -> Self {
        Self { account, policy }
    }

    pub fn account(&self) -> &Account<C> {
        &self.account
    }

    pub fn into_account(self) -> Account<C> {
        self.account
    }

    pub fn run(&mut self, operations: &[Operation]) -> Result<SessionSummary> {
        let mut applied = 0;
        let mut rejected = Vec::new();

        for (index, operation) in operations.iter().enumerate() {
            tracing::debug!("Operation #{}: {}", index + 1, operation);

            match self.account.apply(operation) {
                Ok(()) => applied += 1,
                Err(e)
                    if e.is_insufficient_funds()
                        && self.policy == InsufficientFundsPolicy::Continue =>
                {
                    tracing::warn!("⚠️ Operation #{} ({}) rejected: {}", index + 1, operation, e);
                    rejected.push(e);
                }
                Err(e) => {
                    tracing::error!("❌ Operation #{} ({}) failed: {}", index + 1, operation, e);
                    return Err(e);
                }
            }
        }

        Ok(SessionSummary {
            applied,
            rejected,
            final_balance: self.account.balance(),
        })
    }
}
