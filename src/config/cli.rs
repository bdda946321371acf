use crate::core::{
    ConfigProvider, InsufficientFundsPolicy, Operation, SessionPlan, StatementFormat,
    StatementSettings,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-bank")]
#[command(about = "Run deposits, withdrawals and balance reports against a single account")]
pub struct CliConfig {
    /// Path to a TOML session file; replaces the account and operation flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub account_number: Option<String>,

    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub initial_balance: Decimal,

    /// deposit:<amount>, withdraw:<amount> or balance. May be repeated.
    #[arg(long = "op", value_name = "OPERATION", allow_hyphen_values = true)]
    pub operations: Vec<Operation>,

    #[arg(long, default_value = "abort")]
    pub on_insufficient_funds: InsufficientFundsPolicy,

    /// Directory to write the account statement to
    #[arg(long)]
    pub statement_dir: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub statement_format: Vec<StatementFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn session_plan(&self) -> Result<SessionPlan> {
        let owner = validation::validate_required_field("owner", &self.owner)?;
        let number = validation::validate_required_field("account_number", &self.account_number)?;

        Ok(SessionPlan {
            owner: owner.clone(),
            number: number.clone(),
            initial_balance: self.initial_balance,
            operations: self.operations.clone(),
            policy: self.on_insufficient_funds,
            statement: self.statement_dir.as_ref().map(|dir| StatementSettings {
                output_path: dir.clone(),
                formats: self.statement_format.clone(),
            }),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            return validation::validate_path("config", path);
        }

        let owner = validation::validate_required_field("owner", &self.owner)?;
        validation::validate_non_empty_string("owner", owner)?;
        let number = validation::validate_required_field("account_number", &self.account_number)?;
        validation::validate_non_empty_string("account_number", number)?;

        if let Some(dir) = &self.statement_dir {
            validation::validate_path("statement_dir", dir)?;
        }

        for (index, operation) in self.operations.iter().enumerate() {
            if let Operation::Deposit { amount } = operation {
                validation::warn_if_negative(&format!("--op #{}", index + 1), *amount);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BankError;

    #[test]
    fn test_parse_cli_session() {
        let config = CliConfig::try_parse_from([
            "small-bank",
            "--owner",
            "X",
            "--account-number",
            "ACC-001",
            "--initial-balance",
            "100.00",
            "--op",
            "deposit:50",
            "--op",
            "withdraw:30",
            "--op",
            "balance",
            "--on-insufficient-funds",
            "continue",
            "--statement-dir",
            "./out",
            "--statement-format",
            "csv,json",
        ])
        .unwrap();

        assert!(config.validate().is_ok());
        let plan = config.session_plan().unwrap();
        assert_eq!(plan.initial_balance, Decimal::new(10000, 2));
        assert_eq!(plan.operations.len(), 3);
        assert_eq!(plan.policy, InsufficientFundsPolicy::Continue);
        assert_eq!(
            plan.statement.unwrap().formats,
            vec![StatementFormat::Csv, StatementFormat::Json]
        );
    }

    #[test]
    fn test_missing_owner_is_reported() {
        let config =
            CliConfig::try_parse_from(["small-bank", "--account-number", "1"]).unwrap();

        assert!(matches!(
            config.validate(),
            Err(BankError::MissingConfigError { .. })
        ));
        assert!(config.session_plan().is_err());
    }

    #[test]
    fn test_config_file_skips_account_flags() {
        let config = CliConfig::try_parse_from(["small-bank", "--config", "session.toml"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_operation_rejected_by_parser() {
        let result = CliConfig::try_parse_from(["small-bank", "--op", "transfer:5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_deposit_accepted() {
        let config = CliConfig::try_parse_from([
            "small-bank",
            "--owner",
            "X",
            "--account-number",
            "1",
            "--op",
            "deposit:-10",
        ])
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.session_plan().unwrap().operations[0],
            Operation::Deposit {
                amount: Decimal::new(-10, 0)
            }
        );
    }
}
