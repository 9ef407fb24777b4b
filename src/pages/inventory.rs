// Inventory (product listing) page object

use std::sync::Arc;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::pages::base::BasePage;

/// Values of the shop's sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// Name A to Z
    NameAscending,
    /// Name Z to A
    NameDescending,
    /// Price low to high
    PriceLowToHigh,
    /// Price high to low
    PriceHighToLow,
}

impl SortOption {
    /// The value attribute of the corresponding `<option>`.
    pub fn as_value(self) -> &'static str {
        match self {
            SortOption::NameAscending => "az",
            SortOption::NameDescending => "za",
            SortOption::PriceLowToHigh => "lohi",
            SortOption::PriceHighToLow => "hilo",
        }
    }
}

#[derive(Clone)]
pub struct InventoryPage {
    base: BasePage,
}

impl InventoryPage {
    pub const TITLE: &'static str = ".title";
    pub const INVENTORY_ITEMS: &'static str = ".inventory_item";
    pub const INVENTORY_ITEM_NAME: &'static str = ".inventory_item_name";
    pub const INVENTORY_ITEM_PRICE: &'static str = ".inventory_item_price";
    pub const SHOPPING_CART_LINK: &'static str = ".shopping_cart_link";
    pub const SHOPPING_CART_BADGE: &'static str = ".shopping_cart_badge";
    pub const SORT_DROPDOWN: &'static str = ".product_sort_container";
    pub const BURGER_MENU: &'static str = "#react-burger-menu-btn";
    pub const LOGOUT_LINK: &'static str = "#logout_sidebar_link";

    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn page_title(&self) -> Result<String> {
        self.base.text_of(Self::TITLE).await
    }

    pub async fn product_count(&self) -> Result<usize> {
        self.base.count(Self::INVENTORY_ITEMS).await
    }

    /// Adds a product to the cart by its stable slug
    /// (e.g. `sauce-labs-backpack`).
    pub async fn add_to_cart(&self, product_slug: &str) -> Result<()> {
        self.base
            .click(&format!("#add-to-cart-{product_slug}"))
            .await
    }

    pub async fn remove_from_cart(&self, product_slug: &str) -> Result<()> {
        self.base.click(&format!("#remove-{product_slug}")).await
    }

    /// Number shown on the cart badge. The badge element is absent while
    /// the cart is empty, so absence reads as `"0"` rather than an error.
    pub async fn cart_badge_count(&self) -> Result<String> {
        if self.base.is_visible(Self::SHOPPING_CART_BADGE).await? {
            self.base.text_of(Self::SHOPPING_CART_BADGE).await
        } else {
            Ok("0".to_string())
        }
    }

    pub async fn open_cart(&self) -> Result<()> {
        self.base.click(Self::SHOPPING_CART_LINK).await
    }

    pub async fn sort_by(&self, option: SortOption) -> Result<()> {
        self.base
            .select_option(Self::SORT_DROPDOWN, option.as_value())
            .await
    }

    /// Product names in current display order.
    pub async fn product_names(&self) -> Result<Vec<String>> {
        self.base.texts_of(Self::INVENTORY_ITEM_NAME).await
    }

    /// Product prices in current display order, parsed from the `"$12.34"`
    /// display strings. A non-numeric price display is a hard error.
    pub async fn product_prices(&self) -> Result<Vec<f64>> {
        let raw = self.base.texts_of(Self::INVENTORY_ITEM_PRICE).await?;
        raw.iter().map(|text| parse_price(text)).collect()
    }

    /// Opens the detail view of a product by its numeric item id.
    pub async fn open_product_details(&self, item_id: u32) -> Result<()> {
        self.base
            .click(&format!("#item_{item_id}_title_link"))
            .await
    }

    pub async fn open_menu(&self) -> Result<()> {
        self.base.click(Self::BURGER_MENU).await
    }

    /// Logs out: opens the burger menu, then activates the logout link.
    pub async fn logout(&self) -> Result<()> {
        self.open_menu().await?;
        self.base.click(Self::LOGOUT_LINK).await
    }

    pub async fn expect_cart_badge_count(&self, count: &str) -> Result<()> {
        self.base.expect_text(Self::SHOPPING_CART_BADGE, count).await
    }

    pub async fn expect_cart_badge_not_visible(&self) -> Result<()> {
        self.base.expect_not_visible(Self::SHOPPING_CART_BADGE).await
    }

    pub async fn expect_product_count(&self, count: usize) -> Result<()> {
        self.base.expect_count(Self::INVENTORY_ITEMS, count).await
    }
}

/// Parses a `"$12.34"`-style display string into its numeric value.
fn parse_price(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let numeric = trimmed.strip_prefix('$').unwrap_or(trimmed);
    numeric
        .parse::<f64>()
        .map_err(|_| Error::Parse(format!("price display '{text}' is not numeric")))
}
