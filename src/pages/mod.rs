//! Page objects for the Swag Labs screens.
//!
//! One object per logical screen, each composing a [`BasePage`] capability
//! object around the shared driver handle. Page objects are constructed
//! fresh per test and never outlive the test's teardown.

mod base;
mod cart;
mod checkout;
mod inventory;
mod login;

pub use base::BasePage;
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::{InventoryPage, SortOption};
pub use login::LoginPage;
