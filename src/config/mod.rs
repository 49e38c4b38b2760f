//! Configuration management for the billing application
//!
//! This module defines the settings record with its compiled-in defaults
//! and the loader that merges file and environment sources.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{
    ENV_HTTPS_ENABLED, ENV_UPI_ID, LogLevel, LoggingSettings, PaymentSettings, RestaurantSettings,
    SecuritySettings, Settings,
};
