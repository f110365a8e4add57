//! Value objects - Immutable objects defined by their attributes

mod attached_file;
mod email;
mod message;

pub use attached_file::AttachedFile;
pub use email::Email;
pub use message::CommentMessage;
