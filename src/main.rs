use anyhow::Context;
use clap::Parser;
use freshrss_cleaner::utils::logger;
use freshrss_cleaner::{config, version, Cleaner, CleanerError, Cli, ClientOptions, Commands};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Clean { config } => {
            if let Err(e) = run_clean(&config).await {
                tracing::error!("❌ Clean failed: {}", e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
        Commands::CreateConfig => {
            let path = config::create_default_config_file(config::default_config_path())
                .context("failed to create default config file")?;
            println!("config file created at: {}", path.display());
        }
        Commands::Version => {
            println!("{}", version::version_info());
        }
    }

    Ok(())
}

async fn run_clean(config_path: &Path) -> Result<(), CleanerError> {
    tracing::info!("📁 Loading configuration from: {}", config_path.display());
    let cfg = config::load(config_path)?;

    let client = ClientOptions::new()
        .with_base_url(&cfg.url)
        .with_credentials(&cfg.username, &cfg.password)
        .build()?;

    let cleaner = Cleaner::builder()
        .with_client(client)
        .with_config(cfg)
        .build()?;

    tokio::select! {
        result = cleaner.clean_old_entries() => {
            let summary = result?;
            for (feed_id, error) in &summary.failed {
                tracing::warn!(feed_id = %feed_id, "Feed was not cleaned: {}", error);
            }
            println!(
                "✅ Cleaned {} of {} feed(s)",
                summary.processed.len(),
                summary.attempted()
            );
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, aborting in-flight request");
            Err(CleanerError::Cancelled {
                message: "interrupted before the run completed".to_string(),
            })
        }
    }
}
