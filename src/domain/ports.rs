use crate::domain::model::{PricingRequest, PricingResult, TradeData};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One message round-trip surface into the page context. Concrete
/// implementations differ in how the page encodes replies; callers never
/// branch on which one is in use.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn request_trade_data(&self) -> Result<TradeData>;
    async fn emit_trade_value(&self, payload: PricingResult) -> Result<()>;
    async fn show_alert(&self, message: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn plugin_version(&self) -> &str;
    fn page_url(&self) -> &str;
}

/// The four stages of one click, executed strictly in sequence.
#[async_trait]
pub trait Flow: Send + Sync {
    async fn extract(&self) -> Result<TradeData>;
    fn build(&self, trade: &TradeData) -> Result<PricingRequest>;
    async fn submit(&self, request: &PricingRequest) -> Result<PricingResult>;
    async fn publish(&self, value: PricingResult) -> Result<()>;
    async fn alert(&self, message: &str) -> Result<()>;
}
