//! Prompt provider abstraction layer
//!
//! Each prompt provider implements the PromptProvider trait so the shell
//! can pick one at startup and ask it for display strings.

pub(crate) mod default;
pub(crate) mod isac;
pub(crate) mod order;
pub(crate) mod registry;

/// Prompt provider trait - implemented by each prompt customization
pub(crate) trait PromptProvider: Send + Sync {
    /// Unique lookup key (used by `--provider`)
    fn name(&self) -> &'static str;

    /// Short aliases for lookup
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Prompt shown when the shell is ready for input
    fn prompt(&self) -> &str;

    /// Human-readable provider name
    fn provider_name(&self) -> &str;

    /// Priority this provider declares for itself
    fn order(&self) -> Order {
        Order::LOWEST_PRECEDENCE
    }
}

/// Box type for dynamic dispatch
pub(crate) type BoxedProvider = Box<dyn PromptProvider>;

pub(crate) use default::DefaultPromptProvider;
pub(crate) use isac::IsacPromptProvider;
pub(crate) use order::Order;
pub(crate) use registry::{ProviderRegistry, Registration};
