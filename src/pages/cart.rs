// Shopping cart page object

use std::sync::Arc;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::base::BasePage;

#[derive(Clone)]
pub struct CartPage {
    base: BasePage,
}

impl CartPage {
    pub const CART_ITEMS: &'static str = ".cart_item";
    pub const CART_ITEM_NAME: &'static str = ".inventory_item_name";
    pub const CONTINUE_SHOPPING_BUTTON: &'static str = "#continue-shopping";
    pub const CHECKOUT_BUTTON: &'static str = "#checkout";

    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn item_count(&self) -> Result<usize> {
        self.base.count(Self::CART_ITEMS).await
    }

    /// Names of the items in the cart, in display order.
    pub async fn item_names(&self) -> Result<Vec<String>> {
        self.base.texts_of(Self::CART_ITEM_NAME).await
    }

    pub async fn remove_item(&self, product_slug: &str) -> Result<()> {
        self.base.click(&format!("#remove-{product_slug}")).await
    }

    pub async fn continue_shopping(&self) -> Result<()> {
        self.base.click(Self::CONTINUE_SHOPPING_BUTTON).await
    }

    pub async fn proceed_to_checkout(&self) -> Result<()> {
        self.base.click(Self::CHECKOUT_BUTTON).await
    }

    pub async fn expect_item_count(&self, count: usize) -> Result<()> {
        self.base.expect_count(Self::CART_ITEMS, count).await
    }

    pub async fn expect_on_cart_page(&self) -> Result<()> {
        self.base.expect_url(&self.base.url("/cart.html")).await
    }
}
