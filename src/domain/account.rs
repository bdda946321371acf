use crate::adapters::console::StdoutConsole;
use crate::domain::model::{Operation, Transaction, TransactionKind};
use crate::domain::ports::Console;
use crate::utils::error::{BankError, Result};
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

/// A single customer account.
///
/// The balance is changed in place by [`Account::deposit`] and
/// [`Account::withdraw`]. A withdrawal larger than the balance is refused and
/// leaves both the balance and the history untouched.
#[derive(Debug)]
pub struct Account<C: Console = StdoutConsole> {
    owner: String,
    number: String,
    balance: Decimal,
    history: Vec<Transaction>,
    console: C,
}

impl Account<StdoutConsole> {
    pub fn new(owner: impl Into<String>, number: impl Into<String>, balance: Decimal) -> Self {
        Self::with_console(owner, number, balance, StdoutConsole)
    }
}

impl<C: Console> Account<C> {
    pub fn with_console(
        owner: impl Into<String>,
        number: impl Into<String>,
        balance: Decimal,
        console: C,
    ) -> Self {
        let account = Self {
            owner: owner.into(),
            number: number.into(),
            balance,
            history: Vec::new(),
            console,
        };
        tracing::debug!(
            "Opened account {} for {} with balance {}",
            account.number,
            account.owner,
            account.balance
        );
        account
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// 存款不做任何檢查，負數金額也會直接套用；只有超出 Decimal 範圍時失敗
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| overflow(Operation::Deposit { amount }))?;
        self.record(TransactionKind::Deposit, amount);
        tracing::debug!(
            "Deposited {} into {}; balance is now {}",
            amount,
            self.number,
            self.balance
        );
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            tracing::debug!(
                "Refused withdrawal of {} from {}: balance {}",
                amount,
                self.number,
                self.balance
            );
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| overflow(Operation::Withdraw { amount }))?;
        self.record(TransactionKind::Withdrawal, amount);
        self.console
            .write_line(&format!("Withdrew {} from {}'s account.", amount, self.owner));
        Ok(())
    }

    pub fn report_balance(&self) {
        self.console.write_line(&format!(
            "{}'s account balance: ${}",
            self.owner,
            format_currency(self.balance)
        ));
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::Deposit { amount } => self.deposit(*amount),
            Operation::Withdraw { amount } => self.withdraw(*amount),
            Operation::ReportBalance => {
                self.report_balance();
                Ok(())
            }
        }
    }

    fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.push(Transaction {
            timestamp: Utc::now(),
            kind,
            amount,
            balance_after: self.balance,
        });
    }
}

fn overflow(operation: Operation) -> BankError {
    BankError::InvalidOperation {
        input: operation.to_string(),
        reason: "amount overflows balance".to_string(),
    }
}

/// 銀行家捨入 (half-even) 到兩位小數，並固定顯示兩位
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded.to_string()
}
