use crate::core::{
    ConfigProvider, InsufficientFundsPolicy, Operation, SessionPlan, StatementFormat,
    StatementSettings,
};
use crate::utils::error::{BankError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub account: AccountConfig,
    #[serde(default)]
    pub operations: Vec<Operation>,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub statement: Option<StatementConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub owner: String,
    #[serde(deserialize_with = "text_or_number")]
    pub number: String,
    #[serde(default)]
    pub initial_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_insufficient_funds: Option<InsufficientFundsPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementConfig {
    pub output_path: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

/// 帳號可以寫成字串或整數
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BankError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BankError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OWNER})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BankError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("account.owner", &self.account.owner)?;
        validation::validate_non_empty_string("account.number", &self.account.number)?;

        if let Some(statement) = &self.statement {
            validation::validate_path("statement.output_path", &statement.output_path)?;
            validation::validate_allowed_values(
                "statement.formats",
                &statement.formats,
                &StatementFormat::ALL,
            )?;
        }

        for (index, operation) in self.operations.iter().enumerate() {
            if let Operation::Deposit { amount } = operation {
                validation::warn_if_negative(&format!("operations[{}].amount", index), *amount);
            }
        }

        Ok(())
    }

    pub fn policy(&self) -> InsufficientFundsPolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_insufficient_funds)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    fn statement_settings(&self) -> Result<Option<StatementSettings>> {
        let Some(statement) = &self.statement else {
            return Ok(None);
        };

        let formats = statement
            .formats
            .iter()
            .map(|f| f.parse::<StatementFormat>())
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(StatementSettings {
            output_path: statement.output_path.clone(),
            formats,
        }))
    }
}

impl ConfigProvider for TomlConfig {
    fn session_plan(&self) -> Result<SessionPlan> {
        Ok(SessionPlan {
            owner: self.account.owner.clone(),
            number: self.account.number.clone(),
            initial_balance: self.account.initial_balance,
            operations: self.operations.clone(),
            policy: self.policy(),
            statement: self.statement_settings()?,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"
[account]
owner = "X"
number = "ACC-001"
initial_balance = "100.00"

[[operations]]
type = "deposit"
amount = "50"

[[operations]]
type = "withdraw"
amount = "30"

[[operations]]
type = "report_balance"

[error_handling]
on_insufficient_funds = "continue"

[statement]
output_path = "./statements"
formats = ["csv", "json"]
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(SCENARIO).unwrap();

        assert_eq!(config.account.owner, "X");
        assert_eq!(config.account.initial_balance, Decimal::new(10000, 2));
        assert_eq!(config.operations.len(), 3);
        assert_eq!(config.operations[2], Operation::ReportBalance);
        assert_eq!(config.policy(), InsufficientFundsPolicy::Continue);
        assert!(config.validate().is_ok());

        let plan = config.session_plan().unwrap();
        let statement = plan.statement.unwrap();
        assert_eq!(
            statement.formats,
            vec![StatementFormat::Csv, StatementFormat::Json]
        );
    }

    #[test]
    fn test_numeric_account_number_and_defaults() {
        let toml_content = r#"
[account]
owner = "Bob"
number = 12345
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.account.number, "12345");
        assert!(config.account.initial_balance.is_zero());
        assert!(config.operations.is_empty());
        assert_eq!(config.policy(), InsufficientFundsPolicy::Abort);
        assert!(!config.verbose());
        assert!(config.session_plan().unwrap().statement.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_BANK_TEST_OWNER", "Carol");

        let toml_content = r#"
[account]
owner = "${SMALL_BANK_TEST_OWNER}"
number = "${SMALL_BANK_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.account.owner, "Carol");
        assert_eq!(config.account.number, "${SMALL_BANK_TEST_UNSET_VAR}");

        std::env::remove_var("SMALL_BANK_TEST_OWNER");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[account]
owner = "  "
number = "1"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[account]
owner = "X"
number = "1"

[statement]
output_path = "./out"
formats = ["xml"]
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BankError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_statement_formats_are_case_insensitive() {
        let toml_content = r#"
[account]
owner = "X"
number = "1"

[statement]
output_path = "./out"
formats = ["CSV", "Json"]
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.session_plan().unwrap().statement.unwrap().formats,
            vec![StatementFormat::Csv, StatementFormat::Json]
        );
    }

    #[test]
    fn test_negative_deposit_passes_validation() {
        let toml_content = r#"
[account]
owner = "X"
number = "1"

[[operations]]
type = "deposit"
amount = "-20"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_operation_type_is_rejected() {
        let toml_content = r#"
[account]
owner = "X"
number = "1"

[[operations]]
type = "transfer"
amount = "5"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(BankError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SCENARIO.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.account.number, "ACC-001");
    }
}
