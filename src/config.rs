use std::env;

use crate::models::Formatting;

/// Default cap on snapshot request bodies.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub locale: String,
    pub currency: String,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7070,
            locale: "de-DE".into(),
            currency: "EUR".into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            host: env::var("DASHBOARD_HOST").unwrap_or(defaults.host),
            port: env::var("DASHBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            locale: env::var("DASHBOARD_LOCALE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.locale),
            currency: env::var("DASHBOARD_CURRENCY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.to_uppercase())
                .unwrap_or(defaults.currency),
            body_limit: env::var("DASHBOARD_BODY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.body_limit),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn formatting(&self) -> Formatting {
        Formatting::new(self.locale.clone(), self.currency.clone())
    }
}
