use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 7;
pub const DEFAULT_UNAVAILABLE_DATE_RATIO: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub booking_horizon_days: u32,
    pub availability_seed: Option<u64>,
    pub unavailable_date_ratio: f64,
    pub identity_store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            availability_seed: None,
            unavailable_date_ratio: DEFAULT_UNAVAILABLE_DATE_RATIO,
            identity_store_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let config = Self {
            booking_horizon_days: parse_var("BOOKING_HORIZON_DAYS")
                .unwrap_or_else(|| {
                    warn!("BOOKING_HORIZON_DAYS not set, using default");
                    DEFAULT_BOOKING_HORIZON_DAYS
                }),
            availability_seed: parse_var("AVAILABILITY_SEED"),
            unavailable_date_ratio: unavailable_ratio_or_default(parse_var(
                "UNAVAILABLE_DATE_RATIO",
            )),
            identity_store_path: env::var("IDENTITY_STORE_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        if !config.is_persistent_identity() {
            warn!("IDENTITY_STORE_PATH not set, signed-in identity will not survive restarts");
        }

        config
    }

    pub fn is_persistent_identity(&self) -> bool {
        self.identity_store_path.is_some()
    }

    pub fn uses_seeded_availability(&self) -> bool {
        self.availability_seed.is_some()
    }
}

/// Falls back to the default for a missing or non-finite ratio and clamps the rest into 0..=1.
fn unavailable_ratio_or_default(raw: Option<f64>) -> f64 {
    match raw {
        None => DEFAULT_UNAVAILABLE_DATE_RATIO,
        Some(ratio) if !ratio.is_finite() => {
            warn!("UNAVAILABLE_DATE_RATIO {} is not a finite number, using default", ratio);
            DEFAULT_UNAVAILABLE_DATE_RATIO
        }
        Some(ratio) if !(0.0..=1.0).contains(&ratio) => {
            warn!("UNAVAILABLE_DATE_RATIO {} outside 0..=1, clamping", ratio);
            ratio.clamp(0.0, 1.0)
        }
        Some(ratio) => ratio,
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} has an unparseable value {:?}, ignoring", key, raw);
            None
        }
    }
}
