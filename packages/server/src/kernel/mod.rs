//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod llm_request;
pub mod store;
pub mod test_dependencies;
pub mod traits;

pub use ai::{AnthropicAdapter, OllamaAdapter, OpenAiAdapter, LOCAL_PROBE_TIMEOUT};
pub use deps::{GenerationBackends, ServerDeps};
pub use llm_request::CompletionRequest;
pub use store::PgStore;
pub use test_dependencies::TestDependencies;
pub use traits::*;
