use crate::domain::model::{PageMessage, PricingResult, TradeData};
use crate::domain::ports::MessageChannel;
use crate::utils::error::{Result, TradeValueError};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

/// Newline-delimited JSON framing over the host transport. One message out,
/// at most one reply back in.
struct NdjsonTransport<R, W> {
    reader: Mutex<BufReader<R>>,
    writer: Mutex<W>,
}

impl<R, W> NdjsonTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(reader)),
            writer: Mutex::new(writer),
        }
    }

    async fn send(&self, message: &PageMessage) -> Result<()> {
        let mut line = serde_json::to_vec(message)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(())
    }

    async fn round_trip(&self, message: &PageMessage) -> Result<serde_json::Value> {
        self.send(message).await?;

        let mut reader = self.reader.lock().await;
        let mut line = String::new();
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(TradeValueError::ChannelError {
                message: "page context closed the channel".to_string(),
            });
        }

        Ok(serde_json::from_str(line.trim_end())?)
    }
}

/// Standard messaging path: the page replies with a structured record.
pub struct JsonChannel<R, W> {
    transport: NdjsonTransport<R, W>,
}

impl<R, W> JsonChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            transport: NdjsonTransport::new(reader, writer),
        }
    }
}

#[async_trait::async_trait]
impl<R, W> MessageChannel for JsonChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn request_trade_data(&self) -> Result<TradeData> {
        let reply = self.transport.round_trip(&PageMessage::GetTradeData).await?;
        Ok(serde_json::from_value(reply)?)
    }

    async fn emit_trade_value(&self, payload: PricingResult) -> Result<()> {
        self.transport
            .send(&PageMessage::DidCalculateTradeValue { payload })
            .await
    }

    async fn show_alert(&self, message: &str) -> Result<()> {
        self.transport
            .send(&PageMessage::ShowAlert {
                message: message.to_string(),
            })
            .await
    }
}

/// Legacy messaging path: the page replies with the record serialized to a
/// JSON string, so replies carry one extra encoding layer. Callers see the
/// same `TradeData` either way.
pub struct LegacyJsonChannel<R, W> {
    transport: NdjsonTransport<R, W>,
}

impl<R, W> LegacyJsonChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            transport: NdjsonTransport::new(reader, writer),
        }
    }
}

#[async_trait::async_trait]
impl<R, W> MessageChannel for LegacyJsonChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn request_trade_data(&self) -> Result<TradeData> {
        let reply = self.transport.round_trip(&PageMessage::GetTradeData).await?;
        let serialized: String = serde_json::from_value(reply)?;
        Ok(serde_json::from_str(&serialized)?)
    }

    async fn emit_trade_value(&self, payload: PricingResult) -> Result<()> {
        self.transport
            .send(&PageMessage::DidCalculateTradeValue { payload })
            .await
    }

    async fn show_alert(&self, message: &str) -> Result<()> {
        self.transport
            .send(&PageMessage::ShowAlert {
                message: message.to_string(),
            })
            .await
    }
}
