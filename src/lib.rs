//! saucedemo-e2e: page-object end-to-end test suite for the Swag Labs
//! demo shop (<https://www.saucedemo.com>).
//!
//! The library holds the structural pieces the scenario suites compose:
//!
//! - [`Driver`]: the seam to the automation backend, one browser tab (or
//!   its in-memory stand-in) per test. [`PlaywrightSession`] drives a real
//!   Chromium through playwright-rs; [`MockDriver`] emulates the shop so
//!   business flows run without a browser.
//! - [`pages`]: one page object per screen (login, inventory, cart,
//!   checkout), each composing a [`BasePage`] capability object that owns
//!   URL composition and the primitive act/observe/assert helpers.
//! - [`expect`](crate::expect()) / [`expect_page`]: auto-retry assertions
//!   that poll a condition at a configured interval until a configured
//!   deadline, then report expected vs. last observed.
//! - [`Config`]: base origin, timeouts, polling interval, headless flag,
//!   screenshot directory; overridable through `SWAGLABS_*` environment
//!   variables.
//! - [`artifacts`]: best-effort screenshot capture on test failure.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use saucedemo_e2e::{Config, Driver, MockDriver, LoginPage, data};
//!
//! #[tokio::main]
//! async fn main() -> saucedemo_e2e::Result<()> {
//!     let config = Config::from_env();
//!     let driver: Arc<dyn Driver> = Arc::new(MockDriver::default());
//!     let login = LoginPage::new(driver, config);
//!
//!     login.navigate().await?;
//!     login.login(data::VALID_USERNAME, data::VALID_PASSWORD).await?;
//!     login.expect_login_successful().await?;
//!     Ok(())
//! }
//! ```

pub mod artifacts;
pub mod config;
pub mod data;
pub mod driver;
mod error;
mod expect;
pub mod pages;

pub use config::Config;
pub use driver::{Driver, MockDriver, PlaywrightSession};
pub use error::{Error, Result};
pub use expect::{Expectation, PageExpectation, expect, expect_page};
pub use pages::{BasePage, CartPage, CheckoutPage, InventoryPage, LoginPage, SortOption};
