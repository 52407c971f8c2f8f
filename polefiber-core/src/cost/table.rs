use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::model::{FiberBracket, InstallationMethod};

/// Unit prices used by the cost estimator
///
/// Fiber and installation prices are per meter and indexed by the rank of
/// the bracket or method, so a lookup can never miss.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    fiber: [f64; 11],
    installation: [f64; 2],
    pole: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            fiber: [0.50, 0.45, 0.40, 0.35, 0.30, 0.25, 0.20, 0.15, 0.10, 0.08, 0.05],
            installation: [1.00, 2.50],
            pole: 100.00,
        }
    }
}

impl CostTable {
    pub fn fiber_rate(&self, bracket: FiberBracket) -> f64 {
        self.fiber[bracket.rank()]
    }

    pub fn installation_rate(&self, method: InstallationMethod) -> f64 {
        self.installation[method.rank()]
    }

    pub fn pole_price(&self) -> f64 {
        self.pole
    }

    /// Fiber price per meter looked up by bracket label, e.g. `"Fibra 50m"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] for a label that names no bracket.
    pub fn fiber_rate_by_label(&self, label: &str) -> Result<f64, Error> {
        label.parse::<FiberBracket>().map(|b| self.fiber_rate(b))
    }

    /// Installation price per meter looked up by method name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] for an unknown method.
    pub fn installation_rate_by_name(&self, name: &str) -> Result<f64, Error> {
        name.parse::<InstallationMethod>()
            .map(|m| self.installation_rate(m))
    }

    /// Applies user-supplied price overrides on top of this table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if an override names an unknown
    /// bracket or method, or carries a negative or non-finite price.
    pub fn with_overrides(mut self, overrides: &CostOverrides) -> Result<Self, Error> {
        if let Some(pole) = overrides.pole {
            self.pole = validate_price("pole", pole)?;
        }
        for (label, &price) in &overrides.fiber {
            let bracket: FiberBracket = label.parse()?;
            self.fiber[bracket.rank()] = validate_price(label, price)?;
        }
        for (name, &price) in &overrides.installation {
            let method: InstallationMethod = name.parse()?;
            self.installation[method.rank()] = validate_price(name, price)?;
        }
        Ok(self)
    }
}

fn validate_price(key: &str, price: f64) -> Result<f64, Error> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(Error::ConfigurationError(format!(
            "price for '{key}' must be a non-negative number, got {price}"
        )))
    }
}

/// Price overrides as written in configuration files
///
/// Keys are bracket labels (`"Fibra 50m"`) and method names (`"aerial"`);
/// anything not listed keeps its default price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostOverrides {
    pub pole: Option<f64>,
    pub fiber: BTreeMap<String, f64>,
    pub installation: BTreeMap<String, f64>,
}
