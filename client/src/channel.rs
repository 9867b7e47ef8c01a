//! Websocket session channel.
//!
//! [`connect`] opens one connection and splits it in two. Outbound messages go
//! through a [`ChannelSender`] into an unbounded queue that a writer task
//! drains into the socket, so sends never block the caller and leave in the
//! order they were queued. Inbound frames are read with
//! [`ChannelReceiver::recv`], one at a time, in transport order.
//!
//! Malformed frames are dropped at `debug` level and reading continues.
//! There is no reconnect: after `recv` returns `None`, call [`connect`] again.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use frames::{ClientMessage, ServerMessage};
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("websocket connect failed: {0}")]
    Connect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("channel closed")]
    Closed,
}

/// Cloneable handle for queueing outbound messages.
#[derive(Debug, Clone)]
pub struct ChannelSender {
    tx: mpsc::UnboundedSender<ClientMessage>,
}

impl ChannelSender {
    /// Queue a message for the writer task.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Closed`] once the writer has stopped.
    pub fn send(&self, message: ClientMessage) -> Result<(), ChannelError> {
        self.tx.send(message).map_err(|_| ChannelError::Closed)
    }
}

/// Read half of the connection.
pub struct ChannelReceiver {
    stream: SplitStream<WsStream>,
}

impl ChannelReceiver {
    /// Next decoded message, or `None` once the connection is closed.
    pub async fn recv(&mut self) -> Option<ServerMessage> {
        while let Some(item) = self.stream.next().await {
            let message = match item {
                Ok(message) => message,
                Err(error) => {
                    tracing::info!(%error, "websocket read failed");
                    return None;
                }
            };
            let decoded = match message {
                Message::Text(text) => frames::decode_server_message(text.as_str()),
                Message::Binary(bytes) => frames::decode_binary_frame(&bytes).and_then(ServerMessage::from_frame),
                Message::Close(_) => {
                    tracing::info!("websocket closed by server");
                    return None;
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
            };
            match decoded {
                Ok(message) => return Some(message),
                Err(error) => tracing::debug!(%error, "dropping malformed frame"),
            }
        }
        None
    }
}

/// Open a connection to `url`. `on_ready` runs exactly once, after the
/// handshake and before this returns, with a sender for the opening messages.
///
/// # Errors
///
/// Returns [`ChannelError::Connect`] if the websocket handshake fails.
pub async fn connect<F>(url: &str, on_ready: F) -> Result<(ChannelSender, ChannelReceiver), ChannelError>
where
    F: FnOnce(&ChannelSender),
{
    let (stream, _) = connect_async(url)
        .await
        .map_err(|error| ChannelError::Connect(Box::new(error)))?;
    tracing::info!(url, "connected");

    let (mut sink, stream) = stream.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ClientMessage>();
    tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            tracing::debug!(kind = message.kind(), "send");
            let text = match message.to_frame().and_then(|frame| frames::encode_frame(&frame)) {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(%error, "dropping unencodable message");
                    continue;
                }
            };
            if let Err(error) = sink.send(Message::Text(text.into())).await {
                tracing::warn!(%error, "websocket send failed");
                return;
            }
        }
        if let Err(error) = sink.close().await {
            tracing::debug!(%error, "websocket close failed");
        }
    });

    let sender = ChannelSender { tx };
    on_ready(&sender);
    Ok((sender, ChannelReceiver { stream }))
}
