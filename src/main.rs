use anyhow::Context;
use env_logger::Env;
use newsdesk::config::AppConfig;
use newsdesk::pipeline;
use newsdesk::shell;
use newsdesk::storage::StorageWriter;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse the specified (or default) .env file
    let dotenv_path = env::var("NEWSDESK_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match dotenv_result {
        Ok(()) => log::info!("Loaded env from {}", dotenv_path),
        Err(err) => log::debug!("No .env loaded from {}: {}", dotenv_path, err),
    }

    println!("{}", shell::BANNER);

    let config = AppConfig::from_env().context("Reading configuration")?;
    let storage =
        StorageWriter::new(config.storage.clone()).context("Checking storage directories")?;
    let request = shell::collect(&config).context("Reading operator input")?;

    let summary = pipeline::run(&config, &storage, &request).await?;

    println!("\n🎉 {}\n", summary);
    Ok(())
}
