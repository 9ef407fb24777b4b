// Shared fixture for the scenario suites
//
// Every test owns one fresh driver session and a fresh set of page objects
// built around it; the session is closed after the body runs, pass or fail,
// and a failure (error or panic) triggers a best-effort viewport screenshot
// named after the test.
//
// By default tests run against the in-memory MockDriver, so the business
// flows are exercised without browsers installed. Set SWAGLABS_LIVE=1 to
// run the same suites through playwright-rs against the real site.

#![allow(dead_code)]

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use saucedemo_e2e::{
    CartPage, CheckoutPage, Config, Driver, InventoryPage, LoginPage, MockDriver,
    PlaywrightSession, artifacts, data,
};

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn live_mode() -> bool {
    matches!(
        std::env::var("SWAGLABS_LIVE").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

/// One Driver Handle session per test.
pub enum Session {
    Mock(Arc<MockDriver>),
    Live(Arc<PlaywrightSession>),
}

impl Session {
    /// Launches the backend selected by the environment.
    pub async fn launch(config: &Config) -> anyhow::Result<Self> {
        if live_mode() {
            Self::launch_live(config).await
        } else {
            Ok(Session::Mock(Arc::new(MockDriver::new(&config.base_url))))
        }
    }

    /// Launches a real browser session regardless of the environment.
    pub async fn launch_live(config: &Config) -> anyhow::Result<Self> {
        Ok(Session::Live(Arc::new(
            PlaywrightSession::launch(config).await?,
        )))
    }

    pub fn driver(&self) -> Arc<dyn Driver> {
        match self {
            Session::Mock(driver) => driver.clone(),
            Session::Live(session) => session.clone(),
        }
    }

    pub async fn close(&self) -> saucedemo_e2e::Result<()> {
        match self {
            Session::Mock(_) => Ok(()),
            Session::Live(session) => session.close().await,
        }
    }
}

/// Fresh page objects around one shared driver handle.
pub struct Pages {
    pub login: LoginPage,
    pub inventory: InventoryPage,
    pub cart: CartPage,
    pub checkout: CheckoutPage,
}

impl Pages {
    pub fn new(driver: Arc<dyn Driver>, config: &Config) -> Self {
        Self {
            login: LoginPage::new(driver.clone(), config.clone()),
            inventory: InventoryPage::new(driver.clone(), config.clone()),
            cart: CartPage::new(driver.clone(), config.clone()),
            checkout: CheckoutPage::new(driver, config.clone()),
        }
    }

    /// Opens the login screen.
    pub async fn open_login(&self) -> saucedemo_e2e::Result<()> {
        self.login.navigate().await
    }

    /// Logs in with the valid credentials and waits for the inventory screen.
    pub async fn login_as_standard_user(&self) -> saucedemo_e2e::Result<()> {
        self.open_login().await?;
        self.login
            .login(data::VALID_USERNAME, data::VALID_PASSWORD)
            .await?;
        self.login
            .base()
            .wait_for_url_default(&self.login.base().url("/inventory.html"))
            .await
    }

    /// Logs in, puts one product in the cart, and opens the cart page.
    pub async fn open_cart_with_item(&self, product_slug: &str) -> saucedemo_e2e::Result<()> {
        self.login_as_standard_user().await?;
        self.inventory.add_to_cart(product_slug).await?;
        self.inventory.open_cart().await?;
        self.cart.expect_on_cart_page().await
    }
}

/// Runs one scenario: fresh session, fresh pages, teardown on every path,
/// screenshot on failure or panic.
pub async fn run<F, Fut>(test_name: &str, body: F) -> anyhow::Result<()>
where
    F: FnOnce(Pages) -> Fut,
    Fut: Future<Output = saucedemo_e2e::Result<()>>,
{
    run_on(Session::launch(&Config::from_env()).await?, test_name, body).await
}

/// Like [`run`], but always against a real browser.
pub async fn run_live<F, Fut>(test_name: &str, body: F) -> anyhow::Result<()>
where
    F: FnOnce(Pages) -> Fut,
    Fut: Future<Output = saucedemo_e2e::Result<()>>,
{
    run_on(
        Session::launch_live(&Config::from_env()).await?,
        test_name,
        body,
    )
    .await
}

async fn run_on<F, Fut>(session: Session, test_name: &str, body: F) -> anyhow::Result<()>
where
    F: FnOnce(Pages) -> Fut,
    Fut: Future<Output = saucedemo_e2e::Result<()>>,
{
    init_tracing();
    let config = Config::from_env();
    let driver = session.driver();
    let pages = Pages::new(driver.clone(), &config);

    let outcome = AssertUnwindSafe(body(pages)).catch_unwind().await;

    if !matches!(outcome, Ok(Ok(()))) {
        artifacts::capture_failure(driver.as_ref(), &config.screenshot_dir, test_name).await;
    }
    session.close().await?;

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.into()),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
