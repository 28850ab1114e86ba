// Manager configuration: hotel name and nightly rate per client

use crate::error::ConfigError;
use serde::Deserialize;

pub const DEFAULT_HOTEL_NAME: &str = "Hotel Luchadores";
pub const DEFAULT_PRICE_PER_CLIENT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    pub hotel_name: String,
    pub price_per_client: f64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            price_per_client: DEFAULT_PRICE_PER_CLIENT,
        }
    }
}

impl ManagerConfig {
    pub fn new(hotel_name: impl Into<String>, price_per_client: f64) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            price_per_client,
        }
    }

    /// Parses a configuration from JSON. Missing fields fall back to the defaults.
    ///
    /// The parsed values are validated before being returned.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: ManagerConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hotel_name.trim().is_empty() {
            return Err(ConfigError::InvalidHotelName);
        }

        if !self.price_per_client.is_finite() || self.price_per_client < 0.0 {
            return Err(ConfigError::InvalidPrice(self.price_per_client));
        }

        Ok(())
    }
}
