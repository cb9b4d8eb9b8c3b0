//! Shared business records and canned model replies.

use content_core::domains::businesses::models::Business;
use content_core::domains::generation::BusinessContext;
use content_core::kernel::test_dependencies::sample_business;

pub const ACME_ID: i32 = 1;

pub fn acme_business() -> Business {
    let mut business = sample_business(ACME_ID, "Acme Robotics", Some("Technology"));
    business.target_audience = Some("Warehouse operations managers".to_string());
    business
}

pub fn acme() -> BusinessContext {
    acme_business().context()
}

/// A numbered list reply with `n` items
pub fn numbered_reply(n: usize, noun: &str) -> String {
    (1..=n).map(|i| format!("{i}. Robotics {noun} {i}\n")).collect()
}
