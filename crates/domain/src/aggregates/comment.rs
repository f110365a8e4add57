//! Comment aggregate - A single comment attached to an order
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Valid by construction**: raw inputs are validated by the value objects
//!   before any state exists
//! - **Event recording**: state-changing operations append to a private
//!   pending-events queue drained by the external dispatcher via
//!   [`Comment::take_events`]

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::events::CommentEvent;
use crate::ids::{CommentId, OrderId};
use crate::ports::{ClockPort, RandomPort};
use crate::value_objects::{AttachedFile, CommentMessage, Email};

/// A comment left on an order by a customer or an admin.
///
/// # Invariants
///
/// - Always has a non-empty `message` and a valid `author_email`
/// - `id` and `created_at` are assigned once, at construction
/// - `attached_file` only goes absent -> present (or present -> replaced),
///   never back to absent
/// - Read flags are independent of each other and of the attachment
///
/// # Event recording
///
/// Construction records `OrderCommented`; each successful `attach_file`
/// records `FileAttached`. The queue preserves call order and must be drained
/// exactly once per unit of work, or the dispatcher will publish duplicates.
///
/// # Example
///
/// ```
/// use order_comments_domain::aggregates::Comment;
/// use order_comments_domain::ports::{SystemClock, SystemRandom};
/// use order_comments_domain::OrderId;
///
/// let mut comment = Comment::new(
///     OrderId::new(),
///     "customer@example.com",
///     "Where is my package?",
///     &SystemClock::new(),
///     &SystemRandom::new(),
/// )
/// .unwrap();
///
/// assert_eq!(comment.message().as_str(), "Where is my package?");
/// assert_eq!(comment.take_events().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Comment {
    // Identity
    id: CommentId,
    order_id: OrderId,

    // Core attributes
    author_email: Email,
    message: CommentMessage,
    created_at: DateTime<Utc>,

    // Read tracking, one flag per audience
    read_by_user: bool,
    read_by_admin: bool,

    // At most one attachment; later attachments replace the earlier one
    attached_file: Option<AttachedFile>,

    // Events recorded since the last drain
    pending_events: Vec<CommentEvent>,
}

impl Comment {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new comment on the given order.
    ///
    /// `clock` supplies `created_at` and `random` supplies the new
    /// `CommentId`, so tests can pin both. On success the comment is unread
    /// by both audiences, has no attachment, and carries exactly one pending
    /// `OrderCommented` event.
    ///
    /// # Errors
    ///
    /// - `DomainError::EmptyMessage` if `message` is empty or whitespace-only
    /// - `DomainError::InvalidEmail` if `author_email` is malformed
    ///
    /// On error nothing is constructed and no event is recorded.
    pub fn new(
        order_id: OrderId,
        author_email: impl Into<String>,
        message: impl Into<String>,
        clock: &dyn ClockPort,
        random: &dyn RandomPort,
    ) -> Result<Self, DomainError> {
        let message = CommentMessage::new(message)?;
        let author_email = Email::new(author_email)?;

        let id = CommentId::from_uuid(random.gen_uuid());
        let created_at = clock.now();

        let mut comment = Self {
            id,
            order_id,
            author_email,
            message,
            created_at,
            read_by_user: false,
            read_by_admin: false,
            attached_file: None,
            pending_events: Vec::new(),
        };

        comment.record(CommentEvent::OrderCommented {
            comment_id: comment.id,
            order_id: comment.order_id,
            author_email: comment.author_email.clone(),
            message: comment.message.clone(),
            created_at: comment.created_at,
        });

        Ok(comment)
    }

    // =========================================================================
    // Identity Accessors (read-only)
    // =========================================================================

    /// Returns the comment's unique identifier.
    #[inline]
    pub fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the ID of the order this comment belongs to.
    #[inline]
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    // =========================================================================
    // Content Accessors
    // =========================================================================

    /// Returns the comment author's email address.
    #[inline]
    pub fn author_email(&self) -> &Email {
        &self.author_email
    }

    /// Returns the comment message.
    #[inline]
    pub fn message(&self) -> &CommentMessage {
        &self.message
    }

    /// Returns when the comment was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the attached file, if any.
    #[inline]
    pub fn attached_file(&self) -> Option<&AttachedFile> {
        self.attached_file.as_ref()
    }

    // =========================================================================
    // Read-state Accessors
    // =========================================================================

    /// Returns true if the customer has read this comment.
    #[inline]
    pub fn is_read_by_user(&self) -> bool {
        self.read_by_user
    }

    /// Returns true if an admin has read this comment.
    #[inline]
    pub fn is_read_by_admin(&self) -> bool {
        self.read_by_admin
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Attach a file to the comment, replacing any existing attachment.
    ///
    /// Last write wins: there is no duplicate-attachment guard. Records a
    /// `FileAttached` event per successful call.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFilePath` if the path fails validation;
    /// the comment, including any prior attachment, is left unchanged.
    pub fn attach_file(&mut self, path: impl Into<String>) -> Result<(), DomainError> {
        let file = AttachedFile::new(path)?;

        self.record(CommentEvent::FileAttached { path: file.clone() });
        self.attached_file = Some(file);

        Ok(())
    }

    /// Set whether the customer has read this comment. No event is recorded.
    pub fn set_read_by_user(&mut self, read: bool) {
        self.read_by_user = read;
    }

    /// Set whether an admin has read this comment. No event is recorded.
    pub fn set_read_by_admin(&mut self, read: bool) {
        self.read_by_admin = read;
    }

    // =========================================================================
    // Event Recording
    // =========================================================================

    /// Drain (read and clear) the pending-events queue.
    ///
    /// Events come back in recording order; `OrderCommented` always precedes
    /// any `FileAttached` for the same instance. Call once per unit of work.
    pub fn take_events(&mut self) -> Vec<CommentEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Returns the pending events without draining them.
    #[inline]
    pub fn pending_events(&self) -> &[CommentEvent] {
        &self.pending_events
    }

    fn record(&mut self, event: CommentEvent) {
        self.pending_events.push(event);
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format.
/// Note: pending events are not serialized with the aggregate - they belong
/// to the unit of work that recorded them, and rehydrating them from storage
/// would double-publish.
#[derive(Serialize, Deserialize)]
struct CommentWireFormat {
    id: CommentId,
    order_id: OrderId,
    author_email: String,
    message: String,
    created_at: DateTime<Utc>,
    read_by_user: bool,
    read_by_admin: bool,
    attached_file: Option<AttachedFile>,
}

impl Serialize for Comment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CommentWireFormat {
            id: self.id,
            order_id: self.order_id,
            author_email: self.author_email.to_string(),
            message: self.message.to_string(),
            created_at: self.created_at,
            read_by_user: self.read_by_user,
            read_by_admin: self.read_by_admin,
            attached_file: self.attached_file.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Comment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CommentWireFormat::deserialize(deserializer)?;

        let author_email = Email::new(wire.author_email).map_err(DeError::custom)?;
        let message = CommentMessage::new(wire.message).map_err(DeError::custom)?;

        Ok(Comment {
            id: wire.id,
            order_id: wire.order_id,
            author_email,
            message,
            created_at: wire.created_at,
            read_by_user: wire.read_by_user,
            read_by_admin: wire.read_by_admin,
            attached_file: wire.attached_file,
            pending_events: Vec::new(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
