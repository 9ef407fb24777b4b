// In-memory driver emulating the Swag Labs demo shop
//
// Implements the same Driver contract as the Playwright backend, but against
// a small state machine instead of a browser: login validation, the
// six-product catalog, cart and badge semantics, sorting, and the three-step
// checkout with its field-validation precedence. This is what lets the
// business-flow suites run without browsers installed.
//
// The emulation is selector-driven and screen-aware: a selector that the
// current screen does not render behaves exactly like a missing element.

use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::driver::Driver;
use crate::error::{Error, Result};

const MSG_USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
const MSG_PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
const MSG_BAD_CREDENTIALS: &str =
    "Epic sadface: Username and password do not match any user in this service";
const MSG_FIRST_NAME_REQUIRED: &str = "Error: First Name is required";
const MSG_LAST_NAME_REQUIRED: &str = "Error: Last Name is required";
const MSG_POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";
const MSG_ORDER_COMPLETE: &str = "Thank you for your order!";

const VALID_USERNAME: &str = "standard_user";
const VALID_PASSWORD: &str = "secret_sauce";

struct Product {
    id: u32,
    slug: &'static str,
    name: &'static str,
    price: f64,
}

// Catalog in the shop's default (A-Z) display order.
const CATALOG: [Product; 6] = [
    Product {
        id: 4,
        slug: "sauce-labs-backpack",
        name: "Sauce Labs Backpack",
        price: 29.99,
    },
    Product {
        id: 0,
        slug: "sauce-labs-bike-light",
        name: "Sauce Labs Bike Light",
        price: 9.99,
    },
    Product {
        id: 1,
        slug: "sauce-labs-bolt-t-shirt",
        name: "Sauce Labs Bolt T-Shirt",
        price: 15.99,
    },
    Product {
        id: 5,
        slug: "sauce-labs-fleece-jacket",
        name: "Sauce Labs Fleece Jacket",
        price: 49.99,
    },
    Product {
        id: 2,
        slug: "sauce-labs-onesie",
        name: "Sauce Labs Onesie",
        price: 7.99,
    },
    Product {
        id: 3,
        slug: "test.allthethings()-t-shirt-(red)",
        name: "Test.allTheThings() T-Shirt (Red)",
        price: 15.99,
    },
];

fn product_by_slug(slug: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.slug == slug)
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    CheckoutComplete,
    ItemDetail(u32),
}

impl Screen {
    fn path(self) -> String {
        match self {
            Screen::Login => "/".to_string(),
            Screen::Inventory => "/inventory.html".to_string(),
            Screen::Cart => "/cart.html".to_string(),
            Screen::CheckoutStepOne => "/checkout-step-one.html".to_string(),
            Screen::CheckoutStepTwo => "/checkout-step-two.html".to_string(),
            Screen::CheckoutComplete => "/checkout-complete.html".to_string(),
            Screen::ItemDetail(id) => format!("/inventory-item.html?id={id}"),
        }
    }

    fn title(self) -> Option<&'static str> {
        match self {
            Screen::Login | Screen::ItemDetail(_) => None,
            Screen::Inventory => Some("Products"),
            Screen::Cart => Some("Your Cart"),
            Screen::CheckoutStepOne => Some("Checkout: Your Information"),
            Screen::CheckoutStepTwo => Some("Checkout: Overview"),
            Screen::CheckoutComplete => Some("Checkout: Complete!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

struct AppState {
    screen: Screen,
    logged_in: bool,
    menu_open: bool,
    /// Slugs of items in the cart, in insertion order
    cart: Vec<&'static str>,
    sort: SortKey,
    error: Option<String>,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    postal_code: String,
}

impl AppState {
    fn new() -> Self {
        Self {
            screen: Screen::Login,
            logged_in: false,
            menu_open: false,
            cart: Vec::new(),
            sort: SortKey::NameAsc,
            error: None,
            username: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            postal_code: String::new(),
        }
    }

    fn sorted_catalog(&self) -> Vec<&'static Product> {
        let mut products: Vec<&'static Product> = CATALOG.iter().collect();
        match self.sort {
            SortKey::NameAsc => products.sort_by(|a, b| a.name.cmp(b.name)),
            SortKey::NameDesc => products.sort_by(|a, b| b.name.cmp(a.name)),
            SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        products
    }

    fn cart_products(&self) -> Vec<&'static Product> {
        self.cart
            .iter()
            .filter_map(|slug| product_by_slug(slug))
            .collect()
    }

    fn submit_login(&mut self) {
        if self.username.is_empty() {
            self.error = Some(MSG_USERNAME_REQUIRED.to_string());
        } else if self.password.is_empty() {
            self.error = Some(MSG_PASSWORD_REQUIRED.to_string());
        } else if self.username == VALID_USERNAME && self.password == VALID_PASSWORD {
            self.error = None;
            self.logged_in = true;
            self.screen = Screen::Inventory;
        } else {
            self.error = Some(MSG_BAD_CREDENTIALS.to_string());
        }
    }

    // First empty field in declared order wins, as the real shop validates.
    fn submit_checkout_information(&mut self) {
        if self.first_name.is_empty() {
            self.error = Some(MSG_FIRST_NAME_REQUIRED.to_string());
        } else if self.last_name.is_empty() {
            self.error = Some(MSG_LAST_NAME_REQUIRED.to_string());
        } else if self.postal_code.is_empty() {
            self.error = Some(MSG_POSTAL_CODE_REQUIRED.to_string());
        } else {
            self.error = None;
            self.screen = Screen::CheckoutStepTwo;
        }
    }
}

/// Driver over an in-memory rendition of the demo shop.
pub struct MockDriver {
    origin: String,
    state: Mutex<AppState>,
}

impl MockDriver {
    pub fn new(base_url: &Url) -> Self {
        Self {
            origin: base_url.as_str().trim_end_matches('/').to_string(),
            state: Mutex::new(AppState::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AppState> {
        // Poisoning only happens if a panic hit mid-update inside this
        // module; state is still consistent enough for a failure report.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn not_found(selector: &str) -> Error {
        Error::ElementNotFound(selector.to_string())
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new(&Url::parse(crate::config::DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        let path = url
            .strip_prefix(&self.origin)
            .ok_or_else(|| Error::Navigation {
                url: url.to_string(),
                message: format!("outside test origin {}", self.origin),
            })?;
        let path = if path.is_empty() { "/" } else { path };

        let mut state = self.lock();
        state.menu_open = false;
        state.error = None;
        // The shop bounces unauthenticated sessions back to the login form.
        if !state.logged_in {
            state.screen = Screen::Login;
            return Ok(());
        }
        state.screen = match path {
            "/" => {
                state.logged_in = false;
                Screen::Login
            }
            "/inventory.html" => Screen::Inventory,
            "/cart.html" => Screen::Cart,
            "/checkout-step-one.html" => Screen::CheckoutStepOne,
            "/checkout-step-two.html" => Screen::CheckoutStepTwo,
            "/checkout-complete.html" => Screen::CheckoutComplete,
            other => match other
                .strip_prefix("/inventory-item.html?id=")
                .and_then(|id| id.parse::<u32>().ok())
            {
                Some(id) => Screen::ItemDetail(id),
                None => {
                    return Err(Error::Navigation {
                        url: url.to_string(),
                        message: "unknown path".to_string(),
                    });
                }
            },
        };
        Ok(())
    }

    async fn current_url(&self) -> String {
        let state = self.lock();
        format!("{}{}", self.origin, state.screen.path())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let mut state = self.lock();
        match (state.screen, selector) {
            (Screen::Login, "#login-button") => {
                state.submit_login();
                Ok(())
            }
            (Screen::Inventory | Screen::ItemDetail(_), sel)
                if sel.starts_with("#add-to-cart-") =>
            {
                let slug = sel.trim_start_matches("#add-to-cart-");
                let product = product_by_slug(slug).ok_or_else(|| Self::not_found(selector))?;
                // Once an item is in the cart its add button is replaced by
                // a remove button, so a second add finds nothing.
                if state.cart.contains(&product.slug) {
                    return Err(Self::not_found(selector));
                }
                state.cart.push(product.slug);
                Ok(())
            }
            (Screen::Inventory | Screen::Cart | Screen::ItemDetail(_), sel)
                if sel.starts_with("#remove-") =>
            {
                let slug = sel.trim_start_matches("#remove-");
                let position = state
                    .cart
                    .iter()
                    .position(|s| *s == slug)
                    .ok_or_else(|| Self::not_found(selector))?;
                state.cart.remove(position);
                Ok(())
            }
            (
                Screen::Inventory
                | Screen::Cart
                | Screen::ItemDetail(_)
                | Screen::CheckoutComplete,
                ".shopping_cart_link",
            ) => {
                state.screen = Screen::Cart;
                Ok(())
            }
            (Screen::Cart, "#continue-shopping") => {
                state.screen = Screen::Inventory;
                Ok(())
            }
            (Screen::Cart, "#checkout") => {
                state.screen = Screen::CheckoutStepOne;
                state.first_name.clear();
                state.last_name.clear();
                state.postal_code.clear();
                state.error = None;
                Ok(())
            }
            (Screen::CheckoutStepOne, "#continue") => {
                state.submit_checkout_information();
                Ok(())
            }
            (Screen::CheckoutStepOne, "#cancel") => {
                state.screen = Screen::Cart;
                state.error = None;
                Ok(())
            }
            (Screen::CheckoutStepTwo, "#cancel") => {
                state.screen = Screen::Inventory;
                Ok(())
            }
            (Screen::CheckoutStepTwo, "#finish") => {
                state.screen = Screen::CheckoutComplete;
                state.cart.clear();
                Ok(())
            }
            (Screen::CheckoutComplete, "#back-to-products") => {
                state.screen = Screen::Inventory;
                Ok(())
            }
            (Screen::Inventory | Screen::ItemDetail(_), "#react-burger-menu-btn") => {
                state.menu_open = true;
                Ok(())
            }
            (_, "#logout_sidebar_link") => {
                if !state.menu_open {
                    return Err(Error::NotInteractable {
                        selector: selector.to_string(),
                        message: "menu is closed".to_string(),
                    });
                }
                *state = AppState::new();
                Ok(())
            }
            (Screen::Inventory, sel) if sel.starts_with("#item_") => {
                let id = sel
                    .trim_start_matches("#item_")
                    .strip_suffix("_title_link")
                    .and_then(|id| id.parse::<u32>().ok())
                    .ok_or_else(|| Self::not_found(selector))?;
                if !CATALOG.iter().any(|p| p.id == id) {
                    return Err(Self::not_found(selector));
                }
                state.screen = Screen::ItemDetail(id);
                Ok(())
            }
            _ => Err(Self::not_found(selector)),
        }
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let mut state = self.lock();
        match (state.screen, selector) {
            (Screen::Login, "#user-name") => state.username = text.to_string(),
            (Screen::Login, "#password") => state.password = text.to_string(),
            (Screen::CheckoutStepOne, "#first-name") => state.first_name = text.to_string(),
            (Screen::CheckoutStepOne, "#last-name") => state.last_name = text.to_string(),
            (Screen::CheckoutStepOne, "#postal-code") => state.postal_code = text.to_string(),
            _ => return Err(Self::not_found(selector)),
        }
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        let mut state = self.lock();
        if state.screen != Screen::Inventory || selector != ".product_sort_container" {
            return Err(Self::not_found(selector));
        }
        state.sort = match value {
            "az" => SortKey::NameAsc,
            "za" => SortKey::NameDesc,
            "lohi" => SortKey::PriceAsc,
            "hilo" => SortKey::PriceDesc,
            other => {
                return Err(Error::NotInteractable {
                    selector: selector.to_string(),
                    message: format!("no option with value '{other}'"),
                });
            }
        };
        Ok(())
    }

    async fn text_content(&self, selector: &str) -> Result<String> {
        // Delegated before the state lock is taken so the guard is never
        // held across an await point.
        if matches!(selector, ".inventory_item_name" | ".inventory_item_price") {
            let mut texts = self.all_text_contents(selector).await?;
            return if texts.is_empty() {
                Err(Self::not_found(selector))
            } else {
                Ok(texts.remove(0))
            };
        }
        let state = self.lock();
        match selector {
            ".title" => state
                .screen
                .title()
                .map(str::to_string)
                .ok_or_else(|| Self::not_found(selector)),
            ".shopping_cart_badge" => {
                if state.logged_in && !state.cart.is_empty() {
                    Ok(state.cart.len().to_string())
                } else {
                    Err(Self::not_found(selector))
                }
            }
            "[data-test='error']" => state
                .error
                .clone()
                .ok_or_else(|| Self::not_found(selector)),
            ".complete-header" if state.screen == Screen::CheckoutComplete => {
                Ok(MSG_ORDER_COMPLETE.to_string())
            }
            ".inventory_details_name" => match state.screen {
                Screen::ItemDetail(id) => CATALOG
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.name.to_string())
                    .ok_or_else(|| Self::not_found(selector)),
                _ => Err(Self::not_found(selector)),
            },
            _ => Err(Self::not_found(selector)),
        }
    }

    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>> {
        let state = self.lock();
        let texts = match (state.screen, selector) {
            (Screen::Inventory, ".inventory_item_name") => state
                .sorted_catalog()
                .iter()
                .map(|p| p.name.to_string())
                .collect(),
            (Screen::Inventory, ".inventory_item_price") => state
                .sorted_catalog()
                .iter()
                .map(|p| format_price(p.price))
                .collect(),
            (Screen::Cart | Screen::CheckoutStepTwo, ".inventory_item_name") => state
                .cart_products()
                .iter()
                .map(|p| p.name.to_string())
                .collect(),
            (Screen::Cart | Screen::CheckoutStepTwo, ".inventory_item_price") => state
                .cart_products()
                .iter()
                .map(|p| format_price(p.price))
                .collect(),
            _ => Vec::new(),
        };
        Ok(texts)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let state = self.lock();
        let visible = match selector {
            "#login-button" | "#user-name" | "#password" => state.screen == Screen::Login,
            "[data-test='error']" => state.error.is_some(),
            ".shopping_cart_badge" => state.logged_in && !state.cart.is_empty(),
            ".title" => state.screen.title().is_some(),
            ".inventory_item" | ".product_sort_container" => state.screen == Screen::Inventory,
            ".cart_item" => {
                matches!(state.screen, Screen::Cart | Screen::CheckoutStepTwo)
                    && !state.cart.is_empty()
            }
            "#continue-shopping" | "#checkout" => state.screen == Screen::Cart,
            "#first-name" | "#last-name" | "#postal-code" | "#continue" => {
                state.screen == Screen::CheckoutStepOne
            }
            "#cancel" => matches!(
                state.screen,
                Screen::CheckoutStepOne | Screen::CheckoutStepTwo
            ),
            ".summary_info" | ".summary_total_label" | "#finish" => {
                state.screen == Screen::CheckoutStepTwo
            }
            ".complete-header" | "#back-to-products" => {
                state.screen == Screen::CheckoutComplete
            }
            ".inventory_details_name" => matches!(state.screen, Screen::ItemDetail(_)),
            sel if sel.starts_with("#add-to-cart-") => {
                let slug = sel.trim_start_matches("#add-to-cart-");
                matches!(state.screen, Screen::Inventory | Screen::ItemDetail(_))
                    && product_by_slug(slug).is_some()
                    && !state.cart.iter().any(|s| *s == slug)
            }
            sel if sel.starts_with("#remove-") => {
                let slug = sel.trim_start_matches("#remove-");
                matches!(
                    state.screen,
                    Screen::Inventory | Screen::Cart | Screen::ItemDetail(_)
                ) && state.cart.iter().any(|s| *s == slug)
            }
            "#react-burger-menu-btn" => state.logged_in,
            "#logout_sidebar_link" => state.menu_open,
            _ => false,
        };
        Ok(visible)
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let state = self.lock();
        let count = match (state.screen, selector) {
            (Screen::Inventory, ".inventory_item" | ".inventory_item_name") => CATALOG.len(),
            (Screen::Cart | Screen::CheckoutStepTwo, ".cart_item" | ".inventory_item_name") => {
                state.cart.len()
            }
            (_, ".shopping_cart_badge") => usize::from(state.logged_in && !state.cart.is_empty()),
            (_, "[data-test='error']") => usize::from(state.error.is_some()),
            _ => 0,
        };
        Ok(count)
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        // Nothing to rasterize; callers treat an empty buffer as "no capture".
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn logged_in_driver() -> MockDriver {
        let driver = MockDriver::default();
        driver
            .navigate("https://www.saucedemo.com/")
            .await
            .expect("navigate");
        driver.fill("#user-name", VALID_USERNAME).await.expect("fill");
        driver.fill("#password", VALID_PASSWORD).await.expect("fill");
        driver.click("#login-button").await.expect("login");
        driver
    }

    #[tokio::test]
    async fn login_validation_precedence_username_first() {
        let driver = MockDriver::default();
        driver.navigate("https://www.saucedemo.com/").await.unwrap();

        // Both fields empty: username message wins.
        driver.click("#login-button").await.unwrap();
        let message = driver.text_content("[data-test='error']").await.unwrap();
        assert_eq!(message, MSG_USERNAME_REQUIRED);

        // Username present, password empty.
        driver.fill("#user-name", "anyone").await.unwrap();
        driver.click("#login-button").await.unwrap();
        let message = driver.text_content("[data-test='error']").await.unwrap();
        assert_eq!(message, MSG_PASSWORD_REQUIRED);

        // Both present but wrong.
        driver.fill("#password", "nope").await.unwrap();
        driver.click("#login-button").await.unwrap();
        let message = driver.text_content("[data-test='error']").await.unwrap();
        assert_eq!(message, MSG_BAD_CREDENTIALS);
        assert_eq!(
            driver.current_url().await,
            "https://www.saucedemo.com/",
            "failed login must not navigate"
        );
    }

    #[tokio::test]
    async fn badge_is_absent_when_cart_is_empty() {
        let driver = logged_in_driver().await;
        assert!(!driver.is_visible(".shopping_cart_badge").await.unwrap());
        assert!(matches!(
            driver.text_content(".shopping_cart_badge").await,
            Err(Error::ElementNotFound(_))
        ));

        driver.click("#add-to-cart-sauce-labs-backpack").await.unwrap();
        assert_eq!(
            driver.text_content(".shopping_cart_badge").await.unwrap(),
            "1"
        );
    }

    #[tokio::test]
    async fn removing_a_missing_item_is_element_not_found() {
        let driver = logged_in_driver().await;
        let result = driver.click("#remove-sauce-labs-backpack").await;
        assert!(matches!(result, Err(Error::ElementNotFound(_))));
    }

    #[tokio::test]
    async fn double_add_finds_no_button() {
        let driver = logged_in_driver().await;
        driver.click("#add-to-cart-sauce-labs-onesie").await.unwrap();
        let result = driver.click("#add-to-cart-sauce-labs-onesie").await;
        assert!(matches!(result, Err(Error::ElementNotFound(_))));
    }

    #[tokio::test]
    async fn sort_orders_follow_the_select_value() {
        let driver = logged_in_driver().await;

        driver
            .select_option(".product_sort_container", "za")
            .await
            .unwrap();
        let names = driver.all_text_contents(".inventory_item_name").await.unwrap();
        let mut descending = names.clone();
        descending.sort_by(|a, b| b.cmp(a));
        assert_eq!(names, descending);

        driver
            .select_option(".product_sort_container", "lohi")
            .await
            .unwrap();
        let prices = driver
            .all_text_contents(".inventory_item_price")
            .await
            .unwrap();
        assert_eq!(prices.first().map(String::as_str), Some("$7.99"));
        assert_eq!(prices.last().map(String::as_str), Some("$49.99"));
    }

    #[tokio::test]
    async fn checkout_validation_precedence() {
        let driver = logged_in_driver().await;
        driver.click("#add-to-cart-sauce-labs-backpack").await.unwrap();
        driver.click(".shopping_cart_link").await.unwrap();
        driver.click("#checkout").await.unwrap();

        driver.click("#continue").await.unwrap();
        assert_eq!(
            driver.text_content("[data-test='error']").await.unwrap(),
            MSG_FIRST_NAME_REQUIRED
        );

        driver.fill("#first-name", "Jane").await.unwrap();
        driver.click("#continue").await.unwrap();
        assert_eq!(
            driver.text_content("[data-test='error']").await.unwrap(),
            MSG_LAST_NAME_REQUIRED
        );

        driver.fill("#last-name", "Smith").await.unwrap();
        driver.click("#continue").await.unwrap();
        assert_eq!(
            driver.text_content("[data-test='error']").await.unwrap(),
            MSG_POSTAL_CODE_REQUIRED
        );

        driver.fill("#postal-code", "54321").await.unwrap();
        driver.click("#continue").await.unwrap();
        assert_eq!(
            driver.current_url().await,
            "https://www.saucedemo.com/checkout-step-two.html"
        );
    }

    #[tokio::test]
    async fn logout_requires_the_menu_to_be_open() {
        let driver = logged_in_driver().await;
        let result = driver.click("#logout_sidebar_link").await;
        assert!(matches!(result, Err(Error::NotInteractable { .. })));

        driver.click("#react-burger-menu-btn").await.unwrap();
        driver.click("#logout_sidebar_link").await.unwrap();
        assert!(driver.is_visible("#login-button").await.unwrap());
    }

    #[tokio::test]
    async fn unauthenticated_navigation_bounces_to_login() {
        let driver = MockDriver::default();
        driver
            .navigate("https://www.saucedemo.com/inventory.html")
            .await
            .unwrap();
        assert_eq!(driver.current_url().await, "https://www.saucedemo.com/");
    }

    #[tokio::test]
    async fn foreign_origin_is_a_navigation_error() {
        let driver = MockDriver::default();
        let result = driver.navigate("https://example.com/").await;
        assert!(matches!(result, Err(Error::Navigation { .. })));
    }

    // Spawning the call requires the future to be Send, which rules out
    // holding the state lock across the delegated await in text_content.
    #[tokio::test]
    async fn item_text_lookup_is_send() {
        use std::sync::Arc;

        let driver = Arc::new(logged_in_driver().await);
        let handle = tokio::spawn({
            let driver = Arc::clone(&driver);
            async move { driver.text_content(".inventory_item_name").await }
        });
        let first = handle.await.expect("join").expect("text");
        assert_eq!(first, "Sauce Labs Backpack");

        let price = driver.text_content(".inventory_item_price").await.unwrap();
        assert_eq!(price, "$29.99");
    }
}
