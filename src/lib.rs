//! Billing Configuration - Thiruchendur Murugan Restaurant
//!
//! Runtime configuration for the restaurant billing application: UPI
//! payment identifiers, branding metadata, security toggles, and logging
//! preferences. The record is built once from compiled-in defaults,
//! optionally merged with a TOML file, and selectively overridden from
//! environment variables; afterwards it is treated as read-only and
//! passed by value to every collaborator.
//!
//! # Environment overrides
//!
//! Exactly two variables are consulted:
//! - `BILLING_UPI_ID` replaces the UPI address when set and non-empty.
//! - `BILLING_HTTPS_ENABLED` disables HTTPS only when its value is the
//!   exact string `"false"`; any other value keeps it enabled.
//!
//! # Examples
//!
//! ```rust
//! use murugan_billing_config::ConfigLoader;
//!
//! # fn example() -> murugan_billing_config::Result<()> {
//! let loader = ConfigLoader::new();
//! let settings = loader.load(None)?;
//! assert_eq!(settings.restaurant.currency_symbol, "₹");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::{
    ConfigLoader, ENV_HTTPS_ENABLED, ENV_UPI_ID, LogLevel, LoggingSettings, PaymentSettings,
    RestaurantSettings, SecuritySettings, Settings,
};
pub use error::{Error, Result};
