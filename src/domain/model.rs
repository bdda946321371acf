use crate::utils::error::BankError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// 一筆成功的存款或提款
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    ReportBalance,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "deposit:{}", amount),
            Operation::Withdraw { amount } => write!(f, "withdraw:{}", amount),
            Operation::ReportBalance => write!(f, "balance"),
        }
    }
}

impl FromStr for Operation {
    type Err = BankError;

    /// 格式: `deposit:<amount>`、`withdraw:<amount>` 或 `balance`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: String| BankError::InvalidOperation {
            input: s.to_string(),
            reason,
        };

        let (name, amount) = match input.split_once(':') {
            Some((name, amount)) => (name.trim(), Some(amount.trim())),
            None => (input, None),
        };

        let parse_amount = |raw: Option<&str>| -> Result<Decimal, BankError> {
            let raw = raw
                .filter(|a| !a.is_empty())
                .ok_or_else(|| invalid(format!("'{}' requires an amount", name)))?;
            Decimal::from_str(raw).map_err(|e| invalid(format!("invalid amount '{}': {}", raw, e)))
        };

        match name.to_ascii_lowercase().as_str() {
            "deposit" => Ok(Operation::Deposit {
                amount: parse_amount(amount)?,
            }),
            "withdraw" => Ok(Operation::Withdraw {
                amount: parse_amount(amount)?,
            }),
            "balance" | "report_balance" => match amount {
                None => Ok(Operation::ReportBalance),
                Some(_) => Err(invalid("'balance' takes no amount".to_string())),
            },
            other => Err(invalid(format!("unknown operation '{}'", other))),
        }
    }
}

/// 餘額不足時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsufficientFundsPolicy {
    /// 立即把錯誤交回呼叫端
    #[default]
    Abort,
    /// 記錄後繼續執行下一個操作
    Continue,
}

impl FromStr for InsufficientFundsPolicy {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(InsufficientFundsPolicy::Abort),
            "continue" => Ok(InsufficientFundsPolicy::Continue),
            other => Err(BankError::InvalidConfigValueError {
                field: "on_insufficient_funds".to_string(),
                value: other.to_string(),
                reason: "Expected 'abort' or 'continue'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementFormat {
    Csv,
    Json,
}

impl StatementFormat {
    pub const ALL: [&'static str; 2] = ["csv", "json"];

    pub fn file_name(&self) -> &'static str {
        match self {
            StatementFormat::Csv => "statement.csv",
            StatementFormat::Json => "statement.json",
        }
    }
}

impl FromStr for StatementFormat {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(StatementFormat::Csv),
            "json" => Ok(StatementFormat::Json),
            other => Err(BankError::InvalidConfigValueError {
                field: "statement.formats".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSettings {
    pub output_path: String,
    pub formats: Vec<StatementFormat>,
}

/// 一次執行所需的全部資料：開戶資訊、操作序列與輸出設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub owner: String,
    pub number: String,
    pub initial_balance: Decimal,
    pub operations: Vec<Operation>,
    pub policy: InsufficientFundsPolicy,
    pub statement: Option<StatementSettings>,
}
