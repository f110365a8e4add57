//! Order comments domain
//!
//! A comment attached to an order: one aggregate root ([`aggregates::Comment`])
//! with validated value objects, uuid-backed identity, and a pending-events
//! queue drained by an external dispatcher. Persistence, HTTP, and message
//! delivery live in adapter layers outside this crate.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod ports;
pub mod value_objects;

pub use aggregates::Comment;

pub use error::DomainError;
pub use events::CommentEvent;

// Re-export ID types
pub use ids::{CommentId, OrderId};

// Re-export testability ports
pub use ports::{ClockPort, RandomPort, SystemClock, SystemRandom};

// Re-export value objects
pub use value_objects::{AttachedFile, CommentMessage, Email};
