//! Test data: credentials, product slugs, and expected messages.
//!
//! Process-wide, read-only constants; tests never mutate these. Message
//! constants are the substrings the application embeds in its full error
//! banners, matched with contain-style assertions.

/// Credentials the shop accepts
pub const VALID_USERNAME: &str = "standard_user";
pub const VALID_PASSWORD: &str = "secret_sauce";

/// Credentials the shop rejects
pub const INVALID_USERNAME: &str = "invalid_user";
pub const INVALID_PASSWORD: &str = "wrong_password";

/// Stable product slugs used in add-to-cart / remove action selectors
pub const PRODUCT_BACKPACK: &str = "sauce-labs-backpack";
pub const PRODUCT_BIKE_LIGHT: &str = "sauce-labs-bike-light";
pub const PRODUCT_BOLT_TSHIRT: &str = "sauce-labs-bolt-t-shirt";
pub const PRODUCT_FLEECE_JACKET: &str = "sauce-labs-fleece-jacket";
pub const PRODUCT_ONESIE: &str = "sauce-labs-onesie";
pub const PRODUCT_TSHIRT_RED: &str = "test.allthethings()-t-shirt-(red)";

/// Checkout form data
#[derive(Debug, Clone, Copy)]
pub struct CheckoutInfo {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub postal_code: &'static str,
}

pub const CHECKOUT_INFO: CheckoutInfo = CheckoutInfo {
    first_name: "John",
    last_name: "Doe",
    postal_code: "12345",
};

pub const CHECKOUT_INFO_ALT: CheckoutInfo = CheckoutInfo {
    first_name: "Jane",
    last_name: "Smith",
    postal_code: "54321",
};

/// Expected error message fragments
pub const ERROR_USERNAME_REQUIRED: &str = "Username is required";
pub const ERROR_PASSWORD_REQUIRED: &str = "Password is required";
pub const ERROR_CREDENTIALS_INVALID: &str = "Username and password do not match";
pub const ERROR_FIRSTNAME_REQUIRED: &str = "First Name is required";
pub const ERROR_LASTNAME_REQUIRED: &str = "Last Name is required";
pub const ERROR_POSTALCODE_REQUIRED: &str = "Postal Code is required";

/// Expected success messages
pub const SUCCESS_ORDER_COMPLETE: &str = "Thank you for your order!";
