// Checkout page object
//
// Models the three sequential checkout screens (information entry, order
// overview, completion) as one object, matching the application's own flow:
// step one --continue with valid fields--> overview --finish--> complete;
// step one --cancel--> cart; overview --cancel--> inventory.

use std::sync::Arc;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::base::BasePage;

#[derive(Clone)]
pub struct CheckoutPage {
    base: BasePage,
}

impl CheckoutPage {
    // Step one
    pub const FIRST_NAME_INPUT: &'static str = "#first-name";
    pub const LAST_NAME_INPUT: &'static str = "#last-name";
    pub const POSTAL_CODE_INPUT: &'static str = "#postal-code";
    pub const CONTINUE_BUTTON: &'static str = "#continue";
    pub const CANCEL_BUTTON: &'static str = "#cancel";
    pub const ERROR_MESSAGE: &'static str = "[data-test='error']";

    // Overview
    pub const CART_ITEMS: &'static str = ".cart_item";
    pub const SUMMARY_INFO: &'static str = ".summary_info";
    pub const SUMMARY_TOTAL: &'static str = ".summary_total_label";
    pub const FINISH_BUTTON: &'static str = "#finish";

    // Completion
    pub const COMPLETE_HEADER: &'static str = ".complete-header";
    pub const BACK_TO_PRODUCTS_BUTTON: &'static str = "#back-to-products";

    /// Exact completion banner the shop renders after a finished order.
    pub const ORDER_COMPLETE_MESSAGE: &'static str = "Thank you for your order!";

    pub fn new(driver: Arc<dyn Driver>, config: Config) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    // Step one

    pub async fn enter_first_name(&self, first_name: &str) -> Result<()> {
        self.base.fill(Self::FIRST_NAME_INPUT, first_name).await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> Result<()> {
        self.base.fill(Self::LAST_NAME_INPUT, last_name).await
    }

    pub async fn enter_postal_code(&self, postal_code: &str) -> Result<()> {
        self.base.fill(Self::POSTAL_CODE_INPUT, postal_code).await
    }

    /// Fills all three information fields in declared order.
    pub async fn fill_checkout_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<()> {
        self.enter_first_name(first_name).await?;
        self.enter_last_name(last_name).await?;
        self.enter_postal_code(postal_code).await
    }

    pub async fn click_continue(&self) -> Result<()> {
        self.base.click(Self::CONTINUE_BUTTON).await
    }

    pub async fn click_cancel(&self) -> Result<()> {
        self.base.click(Self::CANCEL_BUTTON).await
    }

    /// Required-field message as the application's validator reports it;
    /// when several fields are empty the first missing field in declared
    /// order (first name, last name, postal code) wins.
    pub async fn error_message(&self) -> Result<String> {
        self.base.text_of(Self::ERROR_MESSAGE).await
    }

    pub async fn expect_error_message(&self, message: &str) -> Result<()> {
        self.base
            .expect_contains_text(Self::ERROR_MESSAGE, message)
            .await
    }

    pub async fn expect_on_step_one(&self) -> Result<()> {
        self.base
            .expect_url(&self.base.url("/checkout-step-one.html"))
            .await
    }

    // Overview

    pub async fn overview_item_count(&self) -> Result<usize> {
        self.base.count(Self::CART_ITEMS).await
    }

    pub async fn click_finish(&self) -> Result<()> {
        self.base.click(Self::FINISH_BUTTON).await
    }

    pub async fn expect_on_overview(&self) -> Result<()> {
        self.base
            .expect_url(&self.base.url("/checkout-step-two.html"))
            .await
    }

    pub async fn expect_summary_visible(&self) -> Result<()> {
        self.base.expect_visible(Self::SUMMARY_INFO).await
    }

    // Completion

    pub async fn completion_message(&self) -> Result<String> {
        self.base.text_of(Self::COMPLETE_HEADER).await
    }

    pub async fn click_back_to_products(&self) -> Result<()> {
        self.base.click(Self::BACK_TO_PRODUCTS_BUTTON).await
    }

    pub async fn expect_on_complete(&self) -> Result<()> {
        self.base
            .expect_url(&self.base.url("/checkout-complete.html"))
            .await
    }

    pub async fn expect_order_complete(&self) -> Result<()> {
        self.base
            .expect_text(Self::COMPLETE_HEADER, Self::ORDER_COMPLETE_MESSAGE)
            .await
    }
}
