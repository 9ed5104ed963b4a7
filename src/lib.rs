pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::channel::{JsonChannel, LegacyJsonChannel};
pub use config::CliConfig;
pub use core::{
    engine::TradeValueEngine, flow::ClickFlow, request::TradeValueRequestBuilder,
};
pub use domain::model::{PageMessage, PricingRequest, PricingResult, TradeData, TradeItem};
pub use domain::ports::{ConfigProvider, Flow, MessageChannel};
pub use utils::error::{Result, TradeValueError};
