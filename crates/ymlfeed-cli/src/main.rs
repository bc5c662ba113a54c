use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ymlfeed_core::{AppConfig, ConfigError, ExportCatalog, ExportSummary};
use ymlfeed_graphql::{GraphqlCatalogSource, GraphqlClient};
use ymlfeed_yml::YmlWriter;

/// Flags override the matching environment variables.
#[derive(Debug, Parser)]
#[command(name = "ymlfeed-cli")]
#[command(about = "Export a GraphQL product catalog to a YML (Yandex Market) feed")]
struct Cli {
    /// GraphQL endpoint URL, including any access token [env: GRAPHQL_ENDPOINT]
    #[arg(long)]
    endpoint: Option<String>,

    /// Output YML file path [env: OUTPUT_PATH]
    #[arg(long)]
    out: Option<PathBuf>,

    /// Shop name [env: SHOP_NAME]
    #[arg(long)]
    shop_name: Option<String>,

    /// Company name [env: SHOP_COMPANY]
    #[arg(long)]
    shop_company: Option<String>,

    /// Shop URL, also the base for product and image URLs [env: SHOP_URL]
    #[arg(long)]
    shop_url: Option<String>,

    /// Currency code, e.g. BYN, USD, RUB [env: CURRENCY]
    #[arg(long)]
    currency: Option<String>,

    /// Product status ID to export (1 for new) [env: STATUS_ID]
    #[arg(long)]
    status_id: Option<i32>,

    /// HTTP request timeout, e.g. 30, 30s, 500ms [env: HTTP_TIMEOUT]
    #[arg(long, value_parser = ymlfeed_core::parse_timeout)]
    timeout: Option<Duration>,

    /// Log level: debug, info, warn, error [env: LOG_LEVEL]
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Applies flags on top of the environment-derived config.
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(endpoint) = self.endpoint.filter(|e| !e.is_empty()) {
            config.graphql_endpoint = Some(endpoint);
        }
        if let Some(out) = self.out {
            config.output_path = out;
        }
        if let Some(name) = self.shop_name {
            config.shop_name = name;
        }
        if let Some(company) = self.shop_company {
            config.shop_company = company;
        }
        if let Some(url) = self.shop_url {
            config.shop_url = url;
        }
        if let Some(currency) = self.currency {
            config.currency = currency;
        }
        if let Some(status_id) = self.status_id {
            config.status_id = status_id;
        }
        if let Some(timeout) = self.timeout {
            config.http_timeout = timeout;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config
    }
}

/// Maps the accepted level names onto `EnvFilter` directives. Unknown
/// names fall back to `info`.
fn normalize_log_level(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<ExportSummary> {
    let endpoint = config
        .graphql_endpoint
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("GRAPHQL_ENDPOINT".to_string()))
        .context("GraphQL endpoint is required (use --endpoint or GRAPHQL_ENDPOINT)")?;

    tracing::info!("connecting to GraphQL endpoint");
    let client = GraphqlClient::new(
        endpoint,
        config.http_timeout,
        config.fetch_max_attempts,
        config.fetch_backoff_secs,
    )
    .context("failed to build GraphQL client")?;
    let source = GraphqlCatalogSource::new(client, config.products_page_size);

    let export = ExportCatalog::new(source, YmlWriter);
    let summary = export
        .execute(&config.export_request())
        .await
        .inspect_err(|e| tracing::error!(phase = %e.phase(), error = %e, "export failed"))?;
    Ok(summary)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(ymlfeed_core::load_app_config()?);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(normalize_log_level(&config.log_level)))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(?config, "starting YML export");
    let summary = run(&config).await?;
    tracing::info!(
        categories = summary.categories_written,
        offers = summary.products_written,
        categories_dropped = summary.categories_dropped,
        offers_dropped = summary.products_dropped,
        "export completed successfully"
    );

    Ok(())
}

#[cfg(test)]
mod tests;
