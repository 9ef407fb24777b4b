// Error types for the test suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the driver seam, the page objects, and the assertion
/// layer. None of these are recovered inside page objects or scenarios;
/// every error propagates up and fails the test that triggered it.
#[derive(Debug, Error)]
pub enum Error {
    /// The driver could not reach a URL
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    /// Selector resolved to zero elements
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Element exists but is not actionable in its current state
    #[error("Element not interactable: selector '{selector}': {message}")]
    NotInteractable { selector: String, message: String },

    /// A wait (URL wait or action-level implicit wait) exceeded its budget
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Expected vs. observed mismatch after the assertion polling deadline
    #[error("Assertion failed: expected {expected}, last observed {actual}")]
    AssertionFailed { expected: String, actual: String },

    /// Display text could not be parsed into the expected value
    /// (e.g. a price string that is not numeric)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend failure that does not map onto the suite's taxonomy
    #[error("Driver error: {0}")]
    Driver(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}

impl From<playwright_rs::Error> for Error {
    fn from(err: playwright_rs::Error) -> Self {
        use playwright_rs::Error as Pw;
        match err {
            Pw::ElementNotFound(selector) => Error::ElementNotFound(selector),
            Pw::NavigationTimeout { url, duration_ms } => Error::Navigation {
                url,
                message: format!("timed out after {duration_ms}ms"),
            },
            Pw::Timeout(message) | Pw::AssertionTimeout(message) => Error::Timeout(message),
            other => Error::Driver(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_keeps_selector() {
        let err: Error = playwright_rs::Error::ElementNotFound("#user-name".into()).into();
        match err {
            Error::ElementNotFound(selector) => assert_eq!(selector, "#user-name"),
            other => panic!("unexpected mapping: {other}"),
        }
    }

    #[test]
    fn navigation_timeout_maps_to_navigation() {
        let err: Error = playwright_rs::Error::NavigationTimeout {
            url: "https://www.saucedemo.com/".into(),
            duration_ms: 30000,
        }
        .into();
        match err {
            Error::Navigation { url, message } => {
                assert_eq!(url, "https://www.saucedemo.com/");
                assert!(message.contains("30000"));
            }
            other => panic!("unexpected mapping: {other}"),
        }
    }

    #[test]
    fn unmapped_backend_errors_fall_through_to_driver() {
        let err: Error = playwright_rs::Error::ChannelClosed.into();
        assert!(matches!(err, Error::Driver(_)));
    }

    #[test]
    fn context_wraps_and_displays() {
        let err = Error::Timeout("waited 5s".into()).context("logging in");
        assert_eq!(err.to_string(), "logging in: Timeout: waited 5s");
    }
}
