// Base page capability object
//
// Every concrete page holds one of these by value (composition instead of
// class inheritance): it carries the shared driver handle, composes URLs
// against the configured origin, and forwards the primitive interaction
// and assertion helpers. It is the single seam through which a different
// automation backend reaches the page-object layer.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::expect::{Expectation, expect, expect_page};

#[derive(Clone)]
pub struct BasePage {
    driver: Arc<dyn Driver>,
    config: Config,
}

impl BasePage {
    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self { driver, config }
    }

    pub fn driver(&self) -> &dyn Driver {
        self.driver.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Composes `origin + path` into an absolute URL.
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Navigates to a path below the configured origin.
    pub async fn navigate_to(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!(%url, "navigate");
        self.driver.navigate(&url).await
    }

    /// Current address as reported by the driver.
    pub async fn current_url(&self) -> String {
        self.driver.current_url().await
    }

    /// Polls the address until it equals `url` or the timeout elapses.
    pub async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<()> {
        let start = std::time::Instant::now();
        loop {
            let current = self.driver.current_url().await;
            if current == url {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(Error::Timeout(format!(
                    "waited {timeout:?} for URL '{url}', still at '{current}'"
                )));
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Waits using the configured navigation budget.
    pub async fn wait_for_url_default(&self, url: &str) -> Result<()> {
        self.wait_for_url(url, self.config.navigation_timeout).await
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        self.driver.click(selector).await
    }

    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.driver.fill(selector, text).await
    }

    pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        self.driver.select_option(selector, value).await
    }

    /// Text content of the first match; fails if nothing matches.
    pub async fn text_of(&self, selector: &str) -> Result<String> {
        self.driver.text_content(selector).await
    }

    /// Text contents of every match, in DOM order.
    pub async fn texts_of(&self, selector: &str) -> Result<Vec<String>> {
        self.driver.all_text_contents(selector).await
    }

    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        self.driver.is_visible(selector).await
    }

    pub async fn count(&self, selector: &str) -> Result<usize> {
        self.driver.count(selector).await
    }

    // Assertion forwards, wired to the configured deadline and interval.

    fn expectation(&self, selector: &str) -> Expectation<'_> {
        expect(self.driver.as_ref(), selector)
            .with_timeout(self.config.assertion_timeout)
            .with_poll_interval(self.config.poll_interval)
    }

    pub async fn expect_url(&self, url: &str) -> Result<()> {
        expect_page(self.driver.as_ref())
            .with_timeout(self.config.assertion_timeout)
            .with_poll_interval(self.config.poll_interval)
            .to_have_url(url)
            .await
    }

    pub async fn expect_visible(&self, selector: &str) -> Result<()> {
        self.expectation(selector).to_be_visible().await
    }

    pub async fn expect_not_visible(&self, selector: &str) -> Result<()> {
        self.expectation(selector).not().to_be_visible().await
    }

    pub async fn expect_text(&self, selector: &str, text: &str) -> Result<()> {
        self.expectation(selector).to_have_text(text).await
    }

    pub async fn expect_contains_text(&self, selector: &str, text: &str) -> Result<()> {
        self.expectation(selector).to_contain_text(text).await
    }

    pub async fn expect_count(&self, selector: &str, count: usize) -> Result<()> {
        self.expectation(selector).to_have_count(count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;

    fn base() -> BasePage {
        BasePage::new(Arc::new(MockDriver::default()), Config::default())
    }

    #[tokio::test]
    async fn composes_urls_against_the_origin() {
        let page = base();
        assert_eq!(page.url("/cart.html"), "https://www.saucedemo.com/cart.html");
    }

    #[tokio::test]
    async fn wait_for_url_times_out_with_current_address() {
        let page = base();
        page.navigate_to("/").await.unwrap();
        let err = page
            .wait_for_url(
                &page.url("/inventory.html"),
                Duration::from_millis(50),
            )
            .await
            .expect_err("never leaves the login page");
        match err {
            Error::Timeout(message) => {
                assert!(message.contains("/inventory.html"));
                assert!(message.contains("still at"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
