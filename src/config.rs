// Suite configuration
//
// Every timeout and polling interval the suite uses lives here, so the
// retry behavior of assertions and URL waits is visible configuration
// rather than hidden magic. Values can be overridden per-run through
// SWAGLABS_* environment variables.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Origin of the target application
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Default timeout for assertions (5 seconds, matching Playwright)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions and URL waits (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default budget for navigation and URL waits
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Directory for failure screenshots, relative to the working directory
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Per-run configuration shared by every page object of one test.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base origin the page objects compose paths against
    pub base_url: Url,
    /// Deadline for assertion polling
    pub assertion_timeout: Duration,
    /// Interval between condition re-checks
    pub poll_interval: Duration,
    /// Deadline for `wait_for_url`
    pub navigation_timeout: Duration,
    /// Launch browsers headless
    pub headless: bool,
    /// Where failure screenshots are written
    pub screenshot_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            assertion_timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            headless: true,
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
        }
    }
}

impl Config {
    /// Builds a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `SWAGLABS_BASE_URL`, `SWAGLABS_HEADLESS`,
    /// `SWAGLABS_ASSERTION_TIMEOUT_MS`, `SWAGLABS_POLL_INTERVAL_MS`,
    /// `SWAGLABS_NAVIGATION_TIMEOUT_MS`, `SWAGLABS_SCREENSHOT_DIR`.
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("SWAGLABS_BASE_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.base_url = url,
                Err(err) => {
                    tracing::warn!(%raw, %err, "ignoring invalid SWAGLABS_BASE_URL")
                }
            }
        }
        if let Ok(raw) = std::env::var("SWAGLABS_HEADLESS") {
            config.headless = parse_bool(&raw).unwrap_or(config.headless);
        }
        if let Some(timeout) = env_duration_ms("SWAGLABS_ASSERTION_TIMEOUT_MS") {
            config.assertion_timeout = timeout;
        }
        if let Some(interval) = env_duration_ms("SWAGLABS_POLL_INTERVAL_MS") {
            config.poll_interval = interval;
        }
        if let Some(timeout) = env_duration_ms("SWAGLABS_NAVIGATION_TIMEOUT_MS") {
            config.navigation_timeout = timeout;
        }
        if let Ok(dir) = std::env::var("SWAGLABS_SCREENSHOT_DIR") {
            config.screenshot_dir = PathBuf::from(dir);
        }
        config
    }

    /// Composes an absolute URL from the base origin and a path.
    pub fn url(&self, path: &str) -> String {
        match self.base_url.join(path) {
            Ok(url) => url.to_string(),
            // join only fails on malformed input; fall back to concatenation
            Err(_) => format!("{}{path}", self.base_url.as_str().trim_end_matches('/')),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_assertion_timeout(mut self, timeout: Duration) -> Self {
        self.assertion_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }
}

fn env_duration_ms(key: &str) -> Option<Duration> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            tracing::warn!(key, %raw, %err, "ignoring unparseable duration override");
            None
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_composition_from_base_origin() {
        let config = Config::default();
        assert_eq!(config.url("/"), "https://www.saucedemo.com/");
        assert_eq!(
            config.url("/inventory.html"),
            "https://www.saucedemo.com/inventory.html"
        );
        assert_eq!(
            config.url("/inventory-item.html?id=4"),
            "https://www.saucedemo.com/inventory-item.html?id=4"
        );
    }

    #[test]
    fn url_composition_tolerates_trailing_slash() {
        let config = Config::default()
            .with_base_url(Url::parse("http://localhost:3000/").expect("valid"));
        assert_eq!(config.url("/cart.html"), "http://localhost:3000/cart.html");
    }

    #[test]
    fn defaults_match_playwright_conventions() {
        let config = Config::default();
        assert_eq!(config.assertion_timeout, Duration::from_secs(5));
        assert_eq!(config.poll_interval, Duration::from_millis(100));
        assert!(config.headless);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
