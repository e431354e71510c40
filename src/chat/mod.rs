//! Realtime chat module
//!
//! Wire protocol, conversation view state and the socket channel for a
//! single group conversation.

pub mod channel;
pub mod conversation;
pub mod protocol;

pub use channel::{ChannelState, ChatChannel};
pub use conversation::Conversation;
pub use protocol::{ClientFrame, OutgoingMessage, ServerFrame};
