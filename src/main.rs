use clap::Parser;
use spiral_matrix::app::{exit_code, run};
use spiral_matrix::utils::error::MatrixError;
use spiral_matrix::utils::{logger, validation::Validate};
use spiral_matrix::{CliConfig, FileTextSource, HttpTextSource, MatrixEngine, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting spiral-matrix CLI");

    if let Some(path) = config.config.clone() {
        let loaded = TomlConfig::from_file(&path).and_then(|toml| {
            toml.validate()?;
            Ok(toml)
        });
        match loaded {
            Ok(toml) => {
                tracing::debug!("Loaded config file: {}", path.display());
                config.merge_toml(&toml);
            }
            Err(e) => exit_on_config_error(&e),
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_on_config_error(&e);
    }

    let options = config.run_options();
    let result = match config.file.clone() {
        Some(path) => {
            let engine = MatrixEngine::new(FileTextSource::default());
            run(&engine, &path.to_string_lossy(), &options).await
        }
        None => match HttpTextSource::from_config(&config) {
            Ok(source) => run(&MatrixEngine::new(source), &config.url, &options).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Matrix processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    }
}

fn exit_on_config_error(e: &MatrixError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
