use clap::Parser;
use menu_catalog::config::toml_config::ReportConfig;
use menu_catalog::config::OutputFormat;
use menu_catalog::core::report::QueryOutput;
use menu_catalog::utils::{logger, validation::Validate};
use menu_catalog::CatalogEngine;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "catalog-report")]
#[command(about = "Run the named menu queries of a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "catalog-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show the configured queries without loading the menu
    #[arg(long)]
    dry_run: bool,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    output: QueryOutput,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading configuration from: {}", args.config);

    let config = match ReportConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("DRY RUN MODE - the menu will not be loaded");
        for (name, query) in config.queries() {
            println!("{} ({})", name, query.kind());
        }
        return Ok(());
    }

    let format = args.format.unwrap_or(config.output.format);
    let engine = CatalogEngine::new(config.source()?).with_thresholds(config.caloric_levels);

    match engine.run_all(config.queries()).await {
        Ok(outputs) => match format {
            OutputFormat::Text => {
                for (name, output) in &outputs {
                    println!("== {} ==", name);
                    print!("{}", output.render_text());
                }
            }
            OutputFormat::Json => {
                let entries: Vec<ReportEntry> = outputs
                    .into_iter()
                    .map(|(name, output)| ReportEntry { name, output })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        },
        Err(e) => {
            tracing::error!(
                "Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &ReportConfig) {
    tracing::info!("Catalog: {}", config.catalog.name);
    if let Some(description) = &config.catalog.description {
        tracing::info!("Description: {}", description);
    }
    tracing::info!(
        "Source: {:?}{}",
        config.source.kind,
        config
            .source
            .path
            .as_deref()
            .map(|path| format!(" ({})", path))
            .unwrap_or_default()
    );
    tracing::info!(
        "Caloric levels: DIET <= {}, NORMAL <= {}",
        config.caloric_levels.diet_max,
        config.caloric_levels.normal_max
    );
    tracing::info!("Queries: {}", config.queries.len());
}
