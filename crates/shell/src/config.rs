//! Startup configuration, read from the environment.

use shopinv_inventory::{DEFAULT_CAPACITY, ValidationPolicy};

pub const ALLOW_NEGATIVE_PRICE_VAR: &str = "SHOPINV_ALLOW_NEGATIVE_PRICE";
pub const ALLOW_NEGATIVE_QUANTITY_VAR: &str = "SHOPINV_ALLOW_NEGATIVE_QUANTITY";
pub const CAPACITY_VAR: &str = "SHOPINV_CAPACITY";

/// Largest reservation hint accepted from the environment.
pub const MAX_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub policy: ValidationPolicy,
    /// Items reserved up front; not a limit.
    pub capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults;
    /// malformed values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let allow_negative_price = lookup(ALLOW_NEGATIVE_PRICE_VAR)
            .map(|raw| {
                parse_flag(&raw).unwrap_or_else(|| {
                    tracing::warn!(var = ALLOW_NEGATIVE_PRICE_VAR, value = %raw, "not a boolean; using default");
                    defaults.policy.allow_negative_price
                })
            })
            .unwrap_or(defaults.policy.allow_negative_price);

        let allow_negative_quantity = lookup(ALLOW_NEGATIVE_QUANTITY_VAR)
            .map(|raw| {
                parse_flag(&raw).unwrap_or_else(|| {
                    tracing::warn!(var = ALLOW_NEGATIVE_QUANTITY_VAR, value = %raw, "not a boolean; using default");
                    defaults.policy.allow_negative_quantity
                })
            })
            .unwrap_or(defaults.policy.allow_negative_quantity);

        let capacity = lookup(CAPACITY_VAR)
            .map(|raw| {
                match raw.trim().parse::<usize>() {
                    Ok(capacity) if capacity <= MAX_CAPACITY => capacity,
                    Ok(_) => {
                        tracing::warn!(var = CAPACITY_VAR, value = %raw, max = MAX_CAPACITY, "capacity too large; using default");
                        defaults.capacity
                    }
                    Err(_) => {
                        tracing::warn!(var = CAPACITY_VAR, value = %raw, "not a count; using default");
                        defaults.capacity
                    }
                }
            })
            .unwrap_or(defaults.capacity);

        Self {
            policy: ValidationPolicy {
                allow_negative_price,
                allow_negative_quantity,
            },
            capacity,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
