use crate::core::{Flow, PricingResult};
use crate::utils::error::Result;

/// Drives one click's chain: extract, build, submit, publish. A failure at
/// any stage aborts the rest and surfaces exactly one message.
pub struct TradeValueEngine<F: Flow> {
    flow: F,
}

impl<F: Flow> TradeValueEngine<F> {
    pub fn new(flow: F) -> Self {
        Self { flow }
    }

    pub async fn run(&self) -> Result<PricingResult> {
        match self.run_chain().await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("Trade value chain failed: {}", e);
                if let Err(alert_err) = self.flow.alert(&e.user_friendly_message()).await {
                    tracing::warn!("Could not show alert in page: {}", alert_err);
                }
                Err(e)
            }
        }
    }

    async fn run_chain(&self) -> Result<PricingResult> {
        tracing::info!("Extracting trade data from page...");
        let trade = self.flow.extract().await?;

        tracing::info!("Building pricing request...");
        let request = self.flow.build(&trade)?;
        tracing::info!(
            "Submitting {} items for valuation (buyer: {})",
            request.items.len(),
            request.buyer
        );

        let value = self.flow.submit(&request).await?;

        tracing::info!("Publishing trade value to page...");
        self.flow.publish(value.clone()).await?;

        Ok(value)
    }
}
