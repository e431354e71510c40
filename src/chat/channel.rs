//! Realtime chat channel
//!
//! One channel per group conversation: history is fetched over HTTP,
//! then a socket is opened and the group room joined, after which live
//! messages stream in append-only. Sending is echo-based — an outgoing
//! message only appears locally once the server broadcasts it back
//! through the same `newMessage` path.
//!
//! The channel is a scoped resource: whatever the exit path (navigation,
//! error, drop of the owning screen), the socket is disconnected exactly
//! once via [`ChatChannel::close`].

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use crate::api::{self, ApiClient};
use crate::chat::conversation::Conversation;
use crate::chat::protocol::{ClientFrame, OutgoingMessage, ServerFrame};
use crate::models::ChatMessage;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::logging::log_chat_event;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Channel lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Disconnected,
    Connecting,
    Joined,
    Receiving,
    Error,
}

impl std::fmt::Display for ChannelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChannelState::Disconnected => "disconnected",
            ChannelState::Connecting => "connecting",
            ChannelState::Joined => "joined",
            ChannelState::Receiving => "receiving",
            ChannelState::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Live connection to one group conversation
#[derive(Debug)]
pub struct ChatChannel {
    socket: Option<Socket>,
    state: ChannelState,
    group_id: String,
    conversation: Conversation,
}

impl ChatChannel {
    /// Open a channel: fetch history, connect the socket, join the room.
    /// On any failure the partially opened channel is released before the
    /// error propagates.
    pub async fn open(client: &ApiClient, socket_url: &str, group_id: &str) -> Result<Self> {
        let mut channel = Self {
            socket: None,
            state: ChannelState::Disconnected,
            group_id: group_id.to_string(),
            conversation: Conversation::new(),
        };
        match channel.connect(client, socket_url).await {
            Ok(()) => Ok(channel),
            Err(e) => {
                channel.state = ChannelState::Error;
                channel.close().await;
                Err(e)
            }
        }
    }

    async fn connect(&mut self, client: &ApiClient, socket_url: &str) -> Result<()> {
        let history = api::messages::history(client, &self.group_id).await?;
        debug!(
            group_id = %self.group_id,
            count = history.len(),
            "Replaying message history"
        );
        self.conversation.replay(history);

        self.transition(ChannelState::Connecting)?;
        let url = match client.session().token() {
            Some(token) => format!("{socket_url}?token={}", urlencoding::encode(&token)),
            None => socket_url.to_string(),
        };
        let (socket, _response) = connect_async(url.as_str()).await?;
        self.socket = Some(socket);

        self.send_frame(&ClientFrame::JoinGroup(self.group_id.clone()))
            .await?;
        self.transition(ChannelState::Joined)?;
        log_chat_event(&self.group_id, "joined", None);
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The conversation view driven by this channel
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Mutable access for viewport updates (scroll position, jump taps)
    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    /// Emit a message over the socket. There is no local echo: the
    /// message appears in the conversation when the server broadcasts it
    /// back. Whitespace-only input is dropped without a frame.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.send_frame(&ClientFrame::SendMessage(OutgoingMessage {
            group_id: self.group_id.clone(),
            message: trimmed.to_string(),
        }))
        .await
    }

    /// Wait for the next inbound message, apply it to the conversation
    /// and return it. `Ok(None)` means the server closed the stream; the
    /// socket has already been released in that case.
    pub async fn next_event(&mut self) -> Result<Option<ChatMessage>> {
        loop {
            let socket = self
                .socket
                .as_mut()
                .ok_or(CampusHubError::ChannelClosed)?;
            match socket.next().await {
                None => {
                    log_chat_event(&self.group_id, "stream ended", None);
                    self.close().await;
                    return Ok(None);
                }
                Some(Err(e)) => {
                    self.state = ChannelState::Error;
                    log_chat_event(&self.group_id, "socket error", Some(&e.to_string()));
                    self.close().await;
                    return Err(e.into());
                }
                Some(Ok(Message::Close(_))) => {
                    log_chat_event(&self.group_id, "server closed", None);
                    self.close().await;
                    return Ok(None);
                }
                Some(Ok(Message::Text(text))) => {
                    if let Some(message) = self.apply_frame(&text) {
                        return Ok(Some(message));
                    }
                }
                // Pings and pongs are handled by the transport; anything
                // else on the stream is ignored.
                Some(Ok(_)) => {}
            }
        }
    }

    fn apply_frame(&mut self, text: &str) -> Option<ChatMessage> {
        match serde_json::from_str::<ServerFrame>(text) {
            Ok(ServerFrame::NewMessage(message)) => {
                if self.state == ChannelState::Joined {
                    self.state = ChannelState::Receiving;
                }
                self.conversation.append(message.clone());
                Some(message)
            }
            Err(e) => {
                warn!(group_id = %self.group_id, error = %e, "Ignoring unknown frame");
                None
            }
        }
    }

    async fn send_frame(&mut self, frame: &ClientFrame) -> Result<()> {
        let socket = self
            .socket
            .as_mut()
            .ok_or(CampusHubError::ChannelClosed)?;
        let text = serde_json::to_string(frame)?;
        socket.send(Message::Text(text)).await?;
        Ok(())
    }

    /// Disconnect the socket. Idempotent: only the first call touches
    /// the underlying stream, and the return value says whether this
    /// call performed the close.
    pub async fn close(&mut self) -> bool {
        match self.socket.take() {
            Some(mut socket) => {
                if let Err(e) = socket.close(None).await {
                    debug!(group_id = %self.group_id, error = %e, "Socket close handshake failed");
                }
                if self.state != ChannelState::Error {
                    self.state = ChannelState::Disconnected;
                }
                log_chat_event(&self.group_id, "disconnected", None);
                true
            }
            None => false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.socket.is_none()
    }

    fn transition(&mut self, to: ChannelState) -> Result<()> {
        let allowed = matches!(
            (self.state, to),
            (ChannelState::Disconnected, ChannelState::Connecting)
                | (ChannelState::Connecting, ChannelState::Joined)
                | (ChannelState::Joined, ChannelState::Receiving)
        );
        if !allowed {
            return Err(CampusHubError::InvalidStateTransition {
                from: self.state.to_string(),
                to: to.to_string(),
            });
        }
        self.state = to;
        Ok(())
    }
}
