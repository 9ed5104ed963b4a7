use serde::{Deserialize, Serialize};

/// An item record as extracted from the page. Opaque to the core; the
/// valuation API understands its shape, we only carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeItem(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeData {
    pub current_user_id: String,
    pub other_user_name: String,
    #[serde(default)]
    pub current_user_items: Vec<TradeItem>,
    #[serde(default)]
    pub other_user_items: Vec<TradeItem>,
}

/// Normalized payload for the valuation API. Items always come from exactly
/// one side of the trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub plugin_version: String,
    pub buyer: String,
    pub items: Vec<TradeItem>,
}

/// Priced result returned by the valuation API; relayed to the page as-is.
pub type PricingResult = serde_json::Value;

/// Messages sent into the page context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PageMessage {
    GetTradeData,
    DidCalculateTradeValue { payload: PricingResult },
    ShowAlert { message: String },
}
