//! Driver seam between the page-object layer and the automation backend.
//!
//! Page objects only ever talk to [`Driver`], which carries the capability
//! set the suite needs: navigate, act (click/fill/select), observe
//! (text/visibility/count), and capture. That keeps the page objects
//! substitutable against a different backend, or against the in-memory
//! [`MockDriver`] for driving business flows without a real browser.

use async_trait::async_trait;

use crate::error::Result;

mod mock;
mod playwright;

pub use mock::MockDriver;
pub use playwright::PlaywrightSession;

/// One browser tab (or its stand-in) for the duration of one test.
///
/// Contract notes:
/// - `text_content` on a selector matching zero elements is
///   [`Error::ElementNotFound`](crate::Error::ElementNotFound);
/// - `is_visible` on zero matches is `Ok(false)` and `count` is `Ok(0)`;
/// - `all_text_contents` on zero matches is an empty vector;
/// - `screenshot` may return an empty buffer when the backend has no
///   viewport to capture.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the tab to an absolute URL.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Current address as reported by the backend.
    async fn current_url(&self) -> String;

    /// Clicks the first element matching the selector.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Fills the input matching the selector with the given text.
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Selects an option by value in the select element matching the selector.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;

    /// Text content of the first element matching the selector.
    async fn text_content(&self, selector: &str) -> Result<String>;

    /// Text contents of all matching elements, in DOM order.
    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>>;

    /// Whether at least one matching element is visible.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Number of elements matching the selector.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// PNG capture of the current viewport.
    async fn screenshot(&self) -> Result<Vec<u8>>;
}
