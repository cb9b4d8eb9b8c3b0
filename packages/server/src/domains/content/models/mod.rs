pub mod content;

pub use content::{Content, ContentKind, ContentStatus, NewContent};
