//! Businesses domain - the companies content is generated for.
//!
//! Read-only from the generation pipeline's point of view.

pub mod models;

pub use models::Business;
