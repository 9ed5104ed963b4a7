use crate::domain::model::{PricingRequest, TradeData};
use crate::utils::error::{Result, TradeValueError};

/// Validates a trade and shapes the valuation payload. Only one-sided
/// trades (a gift or trade-up) can be priced.
pub struct TradeValueRequestBuilder;

impl TradeValueRequestBuilder {
    pub fn build(trade: &TradeData, plugin_version: &str) -> Result<PricingRequest> {
        if trade.current_user_items.is_empty() && trade.other_user_items.is_empty() {
            return Err(TradeValueError::EmptyTrade);
        }
        if !trade.current_user_items.is_empty() && !trade.other_user_items.is_empty() {
            return Err(TradeValueError::TwoSidedTrade);
        }

        // After validation exactly one side holds items.
        let current_user_is_buyer = trade.current_user_items.is_empty();
        let (buyer, items) = if current_user_is_buyer {
            (trade.current_user_id.clone(), trade.other_user_items.clone())
        } else {
            (trade.other_user_name.clone(), trade.current_user_items.clone())
        };

        Ok(PricingRequest {
            plugin_version: plugin_version.to_string(),
            buyer,
            items,
        })
    }
}
