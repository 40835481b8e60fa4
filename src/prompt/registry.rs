//! Prompt provider registry
//!
//! Holds registered providers with their priority and picks the one the
//! shell should use.

use std::sync::LazyLock;

use crate::error::AppError;
use crate::utils::debug_log;

use super::{BoxedProvider, DefaultPromptProvider, IsacPromptProvider, Order, PromptProvider};

/// A provider together with the priority it was registered at
pub(crate) struct Registration {
    provider: BoxedProvider,
    order: Order,
}

impl Registration {
    pub(crate) fn provider(&self) -> &dyn PromptProvider {
        self.provider.as_ref()
    }

    /// Priority this entry competes at (not necessarily the declared one)
    pub(crate) fn order(&self) -> Order {
        self.order
    }

    /// Identity comparison; the same provider may be registered more than once
    pub(crate) fn is(&self, other: &Registration) -> bool {
        std::ptr::eq(self, other)
    }

    fn matches(&self, name_lower: &str) -> bool {
        self.provider.name() == name_lower || self.provider.aliases().contains(&name_lower)
    }
}

#[derive(Default)]
pub(crate) struct ProviderRegistry {
    entries: Vec<Registration>,
}

/// Providers shipped with the shell
static BUILTIN: LazyLock<ProviderRegistry> = LazyLock::new(|| {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(IsacPromptProvider::new()));
    registry.register(Box::new(DefaultPromptProvider::new()));
    registry
});

impl ProviderRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn builtin() -> &'static ProviderRegistry {
        &BUILTIN
    }

    /// Register at the priority the provider declares for itself
    pub(crate) fn register(&mut self, provider: BoxedProvider) {
        let order = provider.order();
        self.register_with_order(provider, order);
    }

    /// Register at an explicit priority, ignoring the declared one
    pub(crate) fn register_with_order(&mut self, provider: BoxedProvider, order: Order) {
        debug_log(format_args!(
            "Registered prompt provider {} (order {})",
            provider.name(),
            order
        ));
        self.entries.push(Registration { provider, order });
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest order wins; on a tie the earliest registration wins
    pub(crate) fn select(&self) -> Option<&Registration> {
        self.entries.iter().min_by_key(|r| r.order)
    }

    /// Get a registration by provider name or alias.
    ///
    /// When a provider is registered more than once, the entry that would
    /// win selection is returned.
    pub(crate) fn get(&self, name: &str) -> Option<&Registration> {
        let name_lower = name.to_lowercase();
        self.entries
            .iter()
            .filter(|r| r.matches(&name_lower))
            .min_by_key(|r| r.order)
    }

    /// All registrations in selection order
    pub(crate) fn ordered(&self) -> Vec<&Registration> {
        let mut entries: Vec<&Registration> = self.entries.iter().collect();
        entries.sort_by_key(|r| r.order);
        entries
    }

    /// Use the preferred provider if one is named, otherwise select by priority
    pub(crate) fn resolve(&self, preferred: Option<&str>) -> Result<&Registration, AppError> {
        if self.is_empty() {
            return Err(AppError::NoProviders);
        }
        match preferred {
            Some(name) => self.get(name).ok_or_else(|| AppError::UnknownProvider {
                name: name.to_string(),
            }),
            None => self.select().ok_or(AppError::NoProviders),
        }
    }
}
