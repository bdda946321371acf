use clap::Parser;
use small_bank::core::ConfigProvider;
use small_bank::utils::{logger, validation::Validate};
use small_bank::{BankEngine, BankError, CliConfig, StdoutConsole, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                logger::init_cli_logger(cli.verbose);
                tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                exit_with(e);
            }
        },
        None => None,
    };

    // 命令列旗標優先於設定檔
    let verbose = cli.verbose || toml_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.json_logs || toml_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting small-bank CLI");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match toml_config {
        Some(config) => {
            tracing::info!("📁 Using session file: {}", cli.config.as_deref().unwrap_or_default());
            run(config)
        }
        None => run(cli),
    };

    if let Err(e) = result {
        exit_with(e);
    }
    Ok(())
}

fn exit_with(e: BankError) -> ! {
    tracing::error!(
        "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}

fn run<P: ConfigProvider + Validate>(config: P) -> Result<(), BankError> {
    config.validate()?;

    let engine = BankEngine::new(config);
    let report = engine.run(StdoutConsole)?;

    for rejection in &report.summary.rejected {
        eprintln!("⚠️ {}", rejection.user_friendly_message());
    }
    for path in &report.statement_files {
        tracing::info!("📁 Statement written: {}", path.display());
    }

    Ok(())
}
