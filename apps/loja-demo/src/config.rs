//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable            | Values                          | Default    |
//! |---------------------|---------------------------------|------------|
//! | `LOJA_DISCOUNT`     | `none`, `category`, `quantity`  | `quantity` |
//! | `LOJA_OUTPUT`       | `text`, `json`                  | `text`     |
//! | `LOJA_ACTIVITY_LOG` | `console`, `tracing`            | `console`  |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use loja_core::DiscountPolicy;
use std::env;

/// How the order report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where "Pedido criado" activity lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivitySink {
    /// `[LOG] ...` on stdout.
    #[default]
    Console,
    /// `tracing` info events on stderr.
    Tracing,
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Discount applied to the sample order
    pub discount: DiscountPolicy,

    /// Report output format
    pub output: OutputFormat,

    /// Activity log destination
    pub activity_log: ActivitySink,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            discount: DiscountPolicy::Quantity,
            output: OutputFormat::default(),
            activity_log: ActivitySink::default(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = DemoConfig::default();

        let discount: DiscountPolicy = match lookup("LOJA_DISCOUNT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LOJA_DISCOUNT".to_string()))?,
            None => defaults.discount,
        };

        let output = match lookup("LOJA_OUTPUT").as_deref().map(str::trim) {
            None => defaults.output,
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOJA_OUTPUT".to_string())),
        };

        let activity_log = match lookup("LOJA_ACTIVITY_LOG").as_deref().map(str::trim) {
            None => defaults.activity_log,
            Some(v) if v.eq_ignore_ascii_case("console") => ActivitySink::Console,
            Some(v) if v.eq_ignore_ascii_case("tracing") => ActivitySink::Tracing,
            Some(_) => return Err(ConfigError::InvalidValue("LOJA_ACTIVITY_LOG".to_string())),
        };

        Ok(DemoConfig {
            discount,
            output,
            activity_log,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
