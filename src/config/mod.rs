use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "trade-value")]
#[command(about = "Shows the total ArsonWarehouse value for a one-sided trade")]
pub struct CliConfig {
    #[arg(long, default_value = "https://arsonwarehouse.com/api/v1/trade-value")]
    pub api_endpoint: String,

    /// Version string forwarded to the valuation API as plugin_version.
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    pub plugin_version: String,

    /// URL of the page the click happened on.
    #[arg(long)]
    pub page_url: String,

    #[arg(long, help = "Use the legacy messaging path (string-encoded replies)")]
    pub legacy_messaging: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn plugin_version(&self) -> &str {
        &self.plugin_version
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("plugin_version", &self.plugin_version)?;
        validate_non_empty_string("page_url", &self.page_url)?;
        Ok(())
    }
}
