// Login page object

use std::sync::Arc;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::base::BasePage;

/// The login screen: two required inputs and a submit action. Validation
/// rules (empty-field messages, bad-credential message) belong to the
/// application; this object only surfaces them verbatim.
#[derive(Clone)]
pub struct LoginPage {
    base: BasePage,
}

impl LoginPage {
    pub const USERNAME_INPUT: &'static str = "#user-name";
    pub const PASSWORD_INPUT: &'static str = "#password";
    pub const LOGIN_BUTTON: &'static str = "#login-button";
    pub const ERROR_MESSAGE: &'static str = "[data-test='error']";

    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Opens the login screen.
    pub async fn navigate(&self) -> Result<()> {
        self.base.navigate_to("/").await
    }

    pub async fn enter_username(&self, username: &str) -> Result<()> {
        self.base.fill(Self::USERNAME_INPUT, username).await
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.base.fill(Self::PASSWORD_INPUT, password).await
    }

    pub async fn click_login(&self) -> Result<()> {
        self.base.click(Self::LOGIN_BUTTON).await
    }

    /// Fills both credentials and submits. A convenience composition, not a
    /// transaction: a failure mid-sequence leaves whatever was already filled.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login().await
    }

    pub async fn error_message(&self) -> Result<String> {
        self.base.text_of(Self::ERROR_MESSAGE).await
    }

    pub async fn is_error_displayed(&self) -> Result<bool> {
        self.base.is_visible(Self::ERROR_MESSAGE).await
    }

    pub async fn expect_error_message(&self, message: &str) -> Result<()> {
        self.base
            .expect_contains_text(Self::ERROR_MESSAGE, message)
            .await
    }

    /// Asserts that login landed on the inventory screen.
    pub async fn expect_login_successful(&self) -> Result<()> {
        self.base
            .expect_url(&self.base.url("/inventory.html"))
            .await
    }
}
