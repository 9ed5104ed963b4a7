use clap::Parser;
use trade_value::utils::{logger, validation::Validate};
use trade_value::{
    ClickFlow, CliConfig, JsonChannel, LegacyJsonChannel, MessageChannel, PricingResult,
    TradeValueEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting trade-value");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // The page context talks to us over stdin/stdout; the channel
    // implementation is chosen once here and never branched on again.
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let verbose = config.verbose;

    let result = if config.legacy_messaging {
        price_trade(LegacyJsonChannel::new(stdin, stdout), config).await
    } else {
        price_trade(JsonChannel::new(stdin, stdout), config).await
    };

    match result {
        Ok(value) => {
            tracing::info!("✅ Trade value delivered to page");
            if verbose {
                tracing::debug!("Priced result: {}", serde_json::to_string(&value)?);
            }
        }
        Err(e) => {
            // The engine already alerted the page; mirror the same message
            // on stderr and fail the process.
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn price_trade<M: MessageChannel>(
    channel: M,
    config: CliConfig,
) -> trade_value::Result<PricingResult> {
    let flow = ClickFlow::new(channel, config);
    let engine = TradeValueEngine::new(flow);
    engine.run().await
}
