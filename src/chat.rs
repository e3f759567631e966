//! Chat message queue.
//!
//! Stand-in for a real messaging transport: channels keyed by chat id, an
//! explicit connect/disconnect lifecycle, and fan-out to every subscriber
//! of a channel. Posting returns a synthesized system acknowledgement so
//! the HTTP placeholder endpoint has a stable contract to keep when a real
//! broker replaces this.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
}

/// In-process publish/subscribe hub, one broadcast channel per chat id.
#[derive(Debug, Default)]
pub struct ChatHub {
    channels: RwLock<HashMap<String, broadcast::Sender<ChatMessage>>>,
}

impl ChatHub {
    pub fn new() -> Self {
        ChatHub {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Open (or join) a channel and start receiving its messages.
    pub fn connect(&self, chat_id: &str) -> broadcast::Receiver<ChatMessage> {
        let mut channels = self.channels.write().unwrap();
        let sender = channels.entry(chat_id.to_string()).or_insert_with(|| {
            debug!(chat_id, "chat channel opened");
            broadcast::channel(CHANNEL_CAPACITY).0
        });
        sender.subscribe()
    }

    pub fn is_connected(&self, chat_id: &str) -> bool {
        self.channels.read().unwrap().contains_key(chat_id)
    }

    /// Tear a channel down; existing receivers see the stream end.
    pub fn disconnect(&self, chat_id: &str) {
        if self.channels.write().unwrap().remove(chat_id).is_some() {
            debug!(chat_id, "chat channel closed");
        }
    }

    /// Publish a message into a channel and return the system
    /// acknowledgement record. Publishing to a channel nobody has joined
    /// still succeeds — the message is simply not retained.
    pub fn publish(
        &self,
        chat_id: &str,
        sender_id: &str,
        sender_name: &str,
        text: &str,
    ) -> ChatMessage {
        let message = ChatMessage {
            id: synth_message_id(),
            chat_id: chat_id.to_string(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
            status: DeliveryStatus::Sent,
        };

        if let Some(sender) = self.channels.read().unwrap().get(chat_id) {
            // A send only fails when every receiver is gone; that is not an
            // error for a fire-and-forget post.
            let _ = sender.send(message.clone());
        }

        ChatMessage {
            id: synth_message_id(),
            chat_id: chat_id.to_string(),
            sender_id: "system".to_string(),
            sender_name: "System".to_string(),
            text: format!("Message received: \"{}\"", text),
            timestamp: Utc::now(),
            status: DeliveryStatus::Delivered,
        }
    }
}

fn synth_message_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("msg-{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn publish_returns_a_delivered_system_ack() {
        let hub = ChatHub::new();
        let ack = hub.publish("chat-1", "pat-001", "John Doe", "Hello doctor");

        assert_eq!(ack.chat_id, "chat-1");
        assert_eq!(ack.sender_id, "system");
        assert_eq!(ack.status, DeliveryStatus::Delivered);
        assert_eq!(ack.text, "Message received: \"Hello doctor\"");
        assert!(ack.id.starts_with("msg-"));
    }

    #[tokio::test]
    async fn subscribers_receive_published_messages() {
        let hub = ChatHub::new();
        let mut receiver = hub.connect("chat-1");

        hub.publish("chat-1", "pat-001", "John Doe", "Hello");
        let received = receiver.recv().await.unwrap();
        assert_eq!(received.sender_id, "pat-001");
        assert_eq!(received.text, "Hello");
        assert_eq!(received.status, DeliveryStatus::Sent);
    }

    #[tokio::test]
    async fn disconnect_ends_the_stream() {
        let hub = ChatHub::new();
        let mut receiver = hub.connect("chat-1");
        assert!(hub.is_connected("chat-1"));

        hub.disconnect("chat-1");
        assert!(!hub.is_connected("chat-1"));
        assert!(receiver.recv().await.is_err());
    }

    #[test]
    fn publishing_without_subscribers_still_acks() {
        let hub = ChatHub::new();
        let ack = hub.publish("chat-lonely", "doc-001", "Dr. Sarah Smith", "Anyone?");
        assert_eq!(ack.status, DeliveryStatus::Delivered);
    }
}
