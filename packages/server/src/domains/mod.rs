// Domain modules
pub mod businesses;
pub mod content;
pub mod generation;
