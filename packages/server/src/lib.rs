// AI SEO Platform - content generation core
//
// This crate provides the backend API that drafts marketing content for
// businesses with whichever AI backend is available, falling back to
// built-in copy when none is.
//
// Generation logic lives in domains/generation; infrastructure in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
