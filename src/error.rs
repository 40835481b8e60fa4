use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unknown prompt provider: {name}")]
    UnknownProvider { name: String },

    #[error("No prompt providers registered")]
    NoProviders,

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_unknown_provider() {
        let e = AppError::UnknownProvider {
            name: "zsh".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown prompt provider: zsh");
    }

    #[test]
    fn app_error_display_no_providers() {
        assert_eq!(
            AppError::NoProviders.to_string(),
            "No prompt providers registered"
        );
    }

    #[test]
    fn jq_error_not_found() {
        assert_eq!(
            JqError::NotFound.to_string(),
            "jq not found. Please install jq to use --jq option."
        );
    }

    #[test]
    fn app_error_from_jq_error() {
        let jq = JqError::Filter("bad filter".to_string());
        let app: AppError = jq.into();
        assert_eq!(app.to_string(), "jq error: bad filter");
    }
}
