use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub demo: DemoConfig,
}

/// Settings for the demo transcript: which products to seed the registry
/// with, and which names the search and removal steps use.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DemoConfig {
    pub seed: Vec<SeedProduct>,
    pub search_name: String,
    pub remove_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedProduct {
    pub name: String,
    /// Prefer quoting prices in config files ("45.99") so they parse as
    /// exact decimals rather than floats.
    pub price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                SeedProduct {
                    name: "Laptop Gamer".into(),
                    price: dec!(1200.50),
                    discount: Decimal::ZERO,
                },
                SeedProduct {
                    name: "Mouse RGB".into(),
                    price: dec!(45.99),
                    discount: dec!(10),
                },
                SeedProduct {
                    name: "Teclado Mecanico".into(),
                    price: dec!(89.99),
                    discount: dec!(15),
                },
                SeedProduct {
                    name: "Monitor 24 pulgadas".into(),
                    price: dec!(250.00),
                    discount: Decimal::ZERO,
                },
                SeedProduct {
                    name: "Audifonos Bluetooth".into(),
                    price: dec!(35.50),
                    discount: dec!(5),
                },
            ],
            search_name: "mouse rgb".into(),
            remove_name: "Mouse RGB".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of VITRINA)
            .add_source(config::Environment::with_prefix("VITRINA"))
            .build()?;

        s.try_deserialize()
    }
}
