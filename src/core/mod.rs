pub mod engine;
pub mod session;
pub mod statement;

pub use crate::domain::account::Account;
pub use crate::domain::model::{
    InsufficientFundsPolicy, Operation, SessionPlan, StatementFormat, StatementSettings,
    Transaction, TransactionKind,
};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
