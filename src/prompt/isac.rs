//! Isac prompt
//!
//! Replaces the stock prompt with the isac-shell branding.

use super::{Order, PromptProvider};

/// Isac prompt provider
pub(crate) struct IsacPromptProvider;

impl IsacPromptProvider {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Default for IsacPromptProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptProvider for IsacPromptProvider {
    fn name(&self) -> &'static str {
        "isac"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["simple"]
    }

    fn prompt(&self) -> &str {
        "isac-shell>"
    }

    fn provider_name(&self) -> &str {
        "Isac Prompt"
    }

    fn order(&self) -> Order {
        Order::HIGHEST_PRECEDENCE
    }
}
