// Playwright-backed driver
//
// One PlaywrightSession is one Driver Handle: it owns the Playwright
// connection, the browser, and a single page for the duration of one test.
// Sessions are never shared across tests.

use async_trait::async_trait;
use playwright_rs::api::LaunchOptions;
use playwright_rs::{Browser, Page, Playwright};
use tracing::debug;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::{Error, Result};

/// Session-scoped handle to one real browser tab.
pub struct PlaywrightSession {
    // Kept alive for the lifetime of the session; dropping it tears down
    // the server connection under the browser.
    _playwright: Playwright,
    browser: Browser,
    page: Page,
}

impl PlaywrightSession {
    /// Launches Playwright, a Chromium browser, and a fresh page.
    pub async fn launch(config: &Config) -> Result<Self> {
        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("launching Playwright"))?;
        let options = LaunchOptions {
            headless: Some(config.headless),
            ..LaunchOptions::default()
        };
        let browser = playwright
            .chromium()
            .launch_with_options(options)
            .await
            .map_err(|e| Error::from(e).context("launching browser"))?;
        let page = browser.new_page().await?;
        debug!(headless = config.headless, "playwright session ready");
        Ok(Self {
            _playwright: playwright,
            browser,
            page,
        })
    }

    /// Closes the browser. Must be called at test teardown, pass or fail.
    pub async fn close(&self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Driver for PlaywrightSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url, None)
            .await
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn current_url(&self) -> String {
        self.page.url()
    }

    async fn click(&self, selector: &str) -> Result<()> {
        debug!(selector, "click");
        self.page.locator(selector).await.click(None).await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!(selector, "fill");
        self.page.locator(selector).await.fill(text, None).await?;
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        debug!(selector, value, "select option");
        self.page
            .locator(selector)
            .await
            .select_option(value, None)
            .await?;
        Ok(())
    }

    async fn text_content(&self, selector: &str) -> Result<String> {
        let text = self.page.locator(selector).await.text_content().await?;
        text.ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>> {
        // The binding has no bulk text call; walk the matches in order.
        let locator = self.page.locator(selector).await;
        let count = locator.count().await?;
        let mut texts = Vec::with_capacity(count);
        for index in 0..count {
            let nth = i32::try_from(index)
                .map_err(|_| Error::Driver(format!("match index {index} out of range")))?;
            let text = locator.nth(nth).text_content().await?;
            texts.push(text.unwrap_or_default());
        }
        Ok(texts)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.page.locator(selector).await.is_visible().await?)
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.locator(selector).await.count().await?)
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self.page.screenshot(None).await?)
    }
}
