// Assertions - Auto-retry assertions over the Driver seam
//
// Each assertion re-checks its condition at a fixed interval until it
// passes or the deadline elapses, then fails with the expected and the
// last observed value. Deadline and interval are configuration
// (see Config), not hidden magic.

use std::time::{Duration, Instant};

use crate::config::{DEFAULT_ASSERTION_TIMEOUT, DEFAULT_POLL_INTERVAL};
use crate::driver::Driver;
use crate::error::{Error, Result};

/// Creates an expectation for a selector with auto-retry behavior.
pub fn expect<'a>(driver: &'a dyn Driver, selector: &str) -> Expectation<'a> {
    Expectation {
        driver,
        selector: selector.to_string(),
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
        negate: false,
    }
}

/// Creates an expectation about the page itself (currently: its address).
pub fn expect_page(driver: &dyn Driver) -> PageExpectation<'_> {
    PageExpectation {
        driver,
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    }
}

/// Expectation wraps a selector and provides assertion methods with auto-retry.
pub struct Expectation<'a> {
    driver: &'a dyn Driver,
    selector: String,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, matching Playwright's expect API pattern.
#[allow(clippy::wrong_self_convention)]
impl<'a> Expectation<'a> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Asserts that at least one matching element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        let start = Instant::now();
        loop {
            let is_visible = self.driver.is_visible(&self.selector).await?;
            let matches = if self.negate { !is_visible } else { is_visible };
            if matches {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(self.failure(
                    &format!(
                        "element '{}' to be {}",
                        self.selector,
                        if self.negate { "hidden" } else { "visible" }
                    ),
                    &format!(
                        "{} after {:?}",
                        if is_visible { "visible" } else { "hidden" },
                        self.timeout
                    ),
                ));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the element has the exact text (trimmed).
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let expected = expected.trim().to_string();
        let description = format!("element '{}' to have text '{expected}'", self.selector);
        self.poll_text(&description, move |actual| actual == expected)
            .await
    }

    /// Asserts that the element's text contains the given substring.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let expected = expected.to_string();
        let description = format!("element '{}' to contain text '{expected}'", self.selector);
        self.poll_text(&description, move |actual| actual.contains(expected.as_str()))
            .await
    }

    /// Asserts the number of matching elements.
    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        let start = Instant::now();
        loop {
            let count = self.driver.count(&self.selector).await?;
            let matches = if self.negate {
                count != expected
            } else {
                count == expected
            };
            if matches {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(self.failure(
                    &format!("{expected} elements matching '{}'", self.selector),
                    &format!("{count} after {:?}", self.timeout),
                ));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    // Shared retry loop for text conditions. A transiently missing element
    // counts as a mismatch and keeps polling rather than aborting.
    async fn poll_text<F>(self, expected_description: &str, matches_text: F) -> Result<()>
    where
        F: Fn(&str) -> bool,
    {
        let start = Instant::now();
        loop {
            let observed = match self.driver.text_content(&self.selector).await {
                Ok(text) => text.trim().to_string(),
                Err(Error::ElementNotFound(_)) => "<element not found>".to_string(),
                Err(other) => return Err(other),
            };
            let matched = matches_text(&observed);
            let matches = if self.negate { !matched } else { matched };
            if matches {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(self.failure(
                    expected_description,
                    &format!("'{observed}' after {:?}", self.timeout),
                ));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    fn failure(&self, expected: &str, actual: &str) -> Error {
        let expected = if self.negate {
            format!("NOT {expected}")
        } else {
            expected.to_string()
        };
        Error::AssertionFailed {
            expected,
            actual: actual.to_string(),
        }
    }
}

/// Page-level expectations with auto-retry.
pub struct PageExpectation<'a> {
    driver: &'a dyn Driver,
    timeout: Duration,
    poll_interval: Duration,
}

impl<'a> PageExpectation<'a> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Asserts that the page address equals the expected URL.
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let actual = self.driver.current_url().await;
            if actual == expected {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::AssertionFailed {
                    expected: format!("page URL '{expected}'"),
                    actual: format!("'{actual}' after {:?}", self.timeout),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
