//! Domain Events
//!
//! Immutable facts recorded by the Comment aggregate when its state changes.
//! The aggregate only records; delivery guarantees, cross-aggregate ordering,
//! and retry belong to the external dispatcher that drains the queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, OrderId};
use crate::value_objects::{AttachedFile, CommentMessage, Email};

/// Domain event for significant state changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CommentEvent {
    /// An order received a new comment
    OrderCommented {
        comment_id: CommentId,
        order_id: OrderId,
        author_email: Email,
        message: CommentMessage,
        created_at: DateTime<Utc>,
    },

    /// A file was attached to a comment
    FileAttached { path: AttachedFile },
}

impl CommentEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::OrderCommented { .. } => "order_commented",
            Self::FileAttached { .. } => "file_attached",
        }
    }
}
