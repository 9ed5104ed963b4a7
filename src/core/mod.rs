pub mod engine;
pub mod flow;
pub mod request;

pub use crate::domain::model::{PageMessage, PricingRequest, PricingResult, TradeData, TradeItem};
pub use crate::domain::ports::{ConfigProvider, Flow, MessageChannel};
pub use crate::utils::error::Result;
