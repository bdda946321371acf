pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::console::{MemoryConsole, StdoutConsole};
pub use adapters::storage::LocalStorage;
pub use core::{engine::BankEngine, session::Session};
pub use domain::account::Account;
pub use domain::model::{InsufficientFundsPolicy, Operation};
pub use utils::error::{BankError, Result};
