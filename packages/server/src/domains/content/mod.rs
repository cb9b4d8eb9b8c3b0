//! Content domain - generated pieces awaiting review and publication.

pub mod models;

pub use models::{Content, ContentKind, ContentStatus, NewContent};
