//! Configuration settings structure
//!
//! Defines the main settings structure and the environment override logic
//! for the billing application.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the UPI payment address.
pub const ENV_UPI_ID: &str = "BILLING_UPI_ID";

/// Environment variable overriding the HTTPS flag.
///
/// Only the exact string `"false"` disables HTTPS; every other value,
/// including unset, leaves it enabled.
pub const ENV_HTTPS_ENABLED: &str = "BILLING_HTTPS_ENABLED";

/// Main configuration settings for the billing application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Payment configuration
    pub payment: PaymentSettings,
    /// Restaurant branding
    pub restaurant: RestaurantSettings,
    /// Security settings
    pub security: SecuritySettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// UPI payment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    /// UPI payment address
    pub upi_id: String,
    /// Merchant name shown on payment screens
    pub merchant_name: String,
    /// Relative path to the payment QR code image
    pub qr_code_path: String,
}

/// Restaurant branding metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantSettings {
    /// Display name of the restaurant
    pub name: String,
    /// Relative path to the logo image
    pub logo_path: String,
    /// Currency symbol used on bills
    pub currency_symbol: String,
}

/// Security settings
///
/// The HSTS and CSP fields are pass-through data for an HTTP response
/// pipeline; nothing in this crate consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    /// Serve over HTTPS
    pub enable_https: bool,
    /// HSTS max-age in seconds
    pub hsts_max_age_seconds: u64,
    /// Emit a Content-Security-Policy header
    pub csp_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Enable event logging
    pub enable_logs: bool,
    /// Minimum log level
    pub log_level: LogLevel,
    /// Event names to record; order is not significant
    pub log_events: Vec<String>,
}

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose diagnostic output
    Debug,
    /// Routine operational events
    #[default]
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            upi_id: "vijayakumarfeb28@oksbi".to_string(),
            merchant_name: "Thiruchendur Murugan Restaurant".to_string(),
            qr_code_path: "images/qr-code.jpg".to_string(),
        }
    }
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: "Thiruchendur Murugan Restaurant".to_string(),
            logo_path: "images/thiruchendur-murugan.jpg".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            enable_https: true,
            // 1 year in seconds
            hsts_max_age_seconds: 31_536_000,
            csp_enabled: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enable_logs: true,
            log_level: LogLevel::Info,
            log_events: vec![
                "button_click".to_string(),
                "bill_creation".to_string(),
                "bill_reset".to_string(),
                "print_action".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    ///
    /// Starts from the compiled-in defaults and applies the two supported
    /// overrides. Absent or malformed variables fall back silently, so
    /// this never fails.
    pub fn from_env() -> Self {
        Self::default().merge_with_env()
    }

    /// Apply environment variable overrides to an existing record
    ///
    /// Only two variables are consulted: [`ENV_UPI_ID`] replaces the UPI
    /// address when set and non-empty, and [`ENV_HTTPS_ENABLED`] disables
    /// HTTPS only when its value is exactly `"false"`.
    pub fn merge_with_env(mut self) -> Self {
        if let Ok(upi_id) = std::env::var(ENV_UPI_ID) {
            if !upi_id.is_empty() {
                self.payment.upi_id = upi_id;
            }
        }

        if let Ok(flag) = std::env::var(ENV_HTTPS_ENABLED) {
            self.security.enable_https = flag != "false";
        }

        self
    }

    /// Load settings from a TOML file
    ///
    /// Sections and fields missing from the file keep their defaults.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)
            .map_err(|e| crate::Error::config(format!("invalid TOML in {path:?}: {e}")))?;
        Ok(settings)
    }
}
