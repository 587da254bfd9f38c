use clap::Parser;
use menu_catalog::adapters::source_for;
use menu_catalog::config::cli::Command;
use menu_catalog::config::OutputFormat;
use menu_catalog::utils::parse::string_to_int;
use menu_catalog::utils::{logger, validation::Validate};
use menu_catalog::{CatalogEngine, CatalogError, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Command::ParseInt { text } = &config.command {
        match string_to_int(text) {
            Some(value) => println!("{}", value),
            None => tracing::debug!("'{}' is not an integer", text),
        }
        return Ok(());
    }

    let Some(query) = config.query() else {
        return Ok(());
    };

    let source = match source_for(config.menu.as_deref()) {
        Ok(source) => source,
        Err(e) => fail(e),
    };
    let engine = CatalogEngine::new(source).with_thresholds(config.thresholds());

    match engine.run(&query).await {
        Ok(output) => match config.format {
            OutputFormat::Text => print!("{}", output.render_text()),
            OutputFormat::Json => println!("{}", output.to_json()?),
        },
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: CatalogError) -> ! {
    tracing::error!(
        "Query failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
