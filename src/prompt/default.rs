use super::PromptProvider;

/// Fallback prompt used when nothing else is registered
pub(crate) struct DefaultPromptProvider;

impl DefaultPromptProvider {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Default for DefaultPromptProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptProvider for DefaultPromptProvider {
    fn name(&self) -> &'static str {
        "default"
    }

    fn prompt(&self) -> &str {
        "shell>"
    }

    fn provider_name(&self) -> &str {
        "Default Prompt"
    }
}
