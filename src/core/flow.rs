use crate::core::request::TradeValueRequestBuilder;
use crate::core::{ConfigProvider, Flow, MessageChannel, PricingRequest, PricingResult, TradeData};
use crate::utils::error::{Result, TradeValueError};
use reqwest::Client;

pub struct ClickFlow<M: MessageChannel, C: ConfigProvider> {
    channel: M,
    config: C,
    client: Client,
}

impl<M: MessageChannel, C: ConfigProvider> ClickFlow<M, C> {
    pub fn new(channel: M, config: C) -> Self {
        Self {
            channel,
            config,
            // Single attempt, no timeout: either the one response arrives
            // or the chain fails.
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<M: MessageChannel, C: ConfigProvider> Flow for ClickFlow<M, C> {
    async fn extract(&self) -> Result<TradeData> {
        if !self.config.page_url().contains("trade.php") {
            return Err(TradeValueError::NotATradePage);
        }

        tracing::debug!("Requesting trade data from page context");
        let trade = self.channel.request_trade_data().await?;
        tracing::debug!(
            current_user_items = trade.current_user_items.len(),
            other_user_items = trade.other_user_items.len(),
            "Received trade data"
        );

        Ok(trade)
    }

    fn build(&self, trade: &TradeData) -> Result<PricingRequest> {
        TradeValueRequestBuilder::build(trade, self.config.plugin_version())
    }

    async fn submit(&self, request: &PricingRequest) -> Result<PricingResult> {
        tracing::debug!("Posting pricing request to: {}", self.config.api_endpoint());
        let response = self
            .client
            .post(self.config.api_endpoint())
            .json(request)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if response.status() != reqwest::StatusCode::OK {
            return Err(TradeValueError::ServerStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn publish(&self, value: PricingResult) -> Result<()> {
        tracing::debug!("Relaying trade value to page context");
        self.channel.emit_trade_value(value).await
    }

    async fn alert(&self, message: &str) -> Result<()> {
        self.channel.show_alert(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TradeItem;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockChannel {
        trade: TradeData,
        emitted: Arc<Mutex<Vec<PricingResult>>>,
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl MockChannel {
        fn new(trade: TradeData) -> Self {
            Self {
                trade,
                emitted: Arc::new(Mutex::new(Vec::new())),
                alerts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl MessageChannel for MockChannel {
        async fn request_trade_data(&self) -> Result<TradeData> {
            Ok(self.trade.clone())
        }

        async fn emit_trade_value(&self, payload: PricingResult) -> Result<()> {
            self.emitted.lock().await.push(payload);
            Ok(())
        }

        async fn show_alert(&self, message: &str) -> Result<()> {
            self.alerts.lock().await.push(message.to_string());
            Ok(())
        }
    }

    struct MockConfig {
        api_endpoint: String,
        page_url: String,
    }

    impl MockConfig {
        fn new(api_endpoint: String) -> Self {
            Self {
                api_endpoint,
                page_url: "https://www.torn.com/trade.php#step=view&ID=123".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn plugin_version(&self) -> &str {
            "0.1.0"
        }

        fn page_url(&self) -> &str {
            &self.page_url
        }
    }

    fn one_sided_trade() -> TradeData {
        TradeData {
            current_user_id: "u1".to_string(),
            other_user_name: "bob".to_string(),
            current_user_items: vec![],
            other_user_items: vec![TradeItem(json!({"id": 1}))],
        }
    }

    #[tokio::test]
    async fn test_extract_rejects_non_trade_page() {
        let channel = MockChannel::new(one_sided_trade());
        let mut config = MockConfig::new("http://unused.test".to_string());
        config.page_url = "https://www.torn.com/item.php".to_string();
        let flow = ClickFlow::new(channel, config);

        let err = flow.extract().await.unwrap_err();

        assert!(matches!(err, TradeValueError::NotATradePage));
        assert!(err.is_user_facing());
    }

    #[tokio::test]
    async fn test_extract_returns_page_trade_data() {
        let channel = MockChannel::new(one_sided_trade());
        let flow = ClickFlow::new(channel, MockConfig::new("http://unused.test".to_string()));

        let trade = flow.extract().await.unwrap();

        assert_eq!(trade, one_sided_trade());
    }

    #[tokio::test]
    async fn test_submit_parses_priced_result_on_200() {
        let server = MockServer::start();
        let priced = json!({"total": 1250, "items": [{"id": 1, "value": 1250}]});

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/trade-value")
                .json_body(json!({
                    "plugin_version": "0.1.0",
                    "buyer": "u1",
                    "items": [{"id": 1}]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(priced.clone());
        });

        let channel = MockChannel::new(one_sided_trade());
        let config = MockConfig::new(server.url("/api/v1/trade-value"));
        let flow = ClickFlow::new(channel, config);

        let request = flow.build(&one_sided_trade()).unwrap();
        let result = flow.submit(&request).await.unwrap();

        api_mock.assert();
        assert_eq!(result, priced);
    }

    #[tokio::test]
    async fn test_submit_classifies_bad_status_as_user_facing() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1/trade-value");
            then.status(500);
        });

        let channel = MockChannel::new(one_sided_trade());
        let config = MockConfig::new(server.url("/api/v1/trade-value"));
        let flow = ClickFlow::new(channel, config);

        let request = flow.build(&one_sided_trade()).unwrap();
        let err = flow.submit(&request).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, TradeValueError::ServerStatus { status: 500 }));
        assert_eq!(
            err.user_friendly_message(),
            "Something went wrong on the ArsonWarehouse server (or the service is temporarily down)."
        );
    }

    #[tokio::test]
    async fn test_submit_propagates_network_failure_as_internal() {
        // Nothing listens on this port; the request itself fails.
        let channel = MockChannel::new(one_sided_trade());
        let config = MockConfig::new("http://127.0.0.1:1/api/v1/trade-value".to_string());
        let flow = ClickFlow::new(channel, config);

        let request = flow.build(&one_sided_trade()).unwrap();
        let err = flow.submit(&request).await.unwrap_err();

        assert!(matches!(err, TradeValueError::ApiError(_)));
        assert!(!err.is_user_facing());
        assert_eq!(err.user_friendly_message(), "Failed to get trade value.");
    }

    #[tokio::test]
    async fn test_submit_treats_non_200_success_as_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1/trade-value");
            then.status(204);
        });

        let channel = MockChannel::new(one_sided_trade());
        let config = MockConfig::new(server.url("/api/v1/trade-value"));
        let flow = ClickFlow::new(channel, config);

        let request = flow.build(&one_sided_trade()).unwrap();
        let err = flow.submit(&request).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, TradeValueError::ServerStatus { status: 204 }));
    }

    #[tokio::test]
    async fn test_publish_emits_payload_through_channel() {
        let channel = MockChannel::new(one_sided_trade());
        let emitted = channel.emitted.clone();
        let flow = ClickFlow::new(channel, MockConfig::new("http://unused.test".to_string()));

        flow.publish(json!({"total": 42})).await.unwrap();

        assert_eq!(*emitted.lock().await, vec![json!({"total": 42})]);
    }
}
