// Smoke run against the real site
//
// Ignored by default: needs Playwright (npm install playwright +
// npx playwright install chromium) and network access to saucedemo.com.
// The regular suites cover the same journey against the mock backend, or
// against a live browser with SWAGLABS_LIVE=1.

mod common;

use saucedemo_e2e::data::{CHECKOUT_INFO_ALT, PRODUCT_BACKPACK, PRODUCT_BIKE_LIGHT};

#[tokio::test]
#[ignore = "requires Playwright browsers and network access"]
async fn smoke_purchase_against_live_site() -> anyhow::Result<()> {
    common::run_live("smoke_purchase_against_live_site", |pages| async move {
        pages.login_as_standard_user().await?;

        pages.inventory.add_to_cart(PRODUCT_BACKPACK).await?;
        pages.inventory.add_to_cart(PRODUCT_BIKE_LIGHT).await?;
        pages.inventory.expect_cart_badge_count("2").await?;

        pages.inventory.open_cart().await?;
        pages.cart.expect_item_count(2).await?;

        pages.cart.proceed_to_checkout().await?;
        pages
            .checkout
            .fill_checkout_information(
                CHECKOUT_INFO_ALT.first_name,
                CHECKOUT_INFO_ALT.last_name,
                CHECKOUT_INFO_ALT.postal_code,
            )
            .await?;
        pages.checkout.click_continue().await?;
        pages.checkout.click_finish().await?;

        pages.checkout.expect_order_complete().await
    })
    .await
}
