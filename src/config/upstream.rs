use crate::domain::model::{Category, Unit};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherservice.example";

/// Where and how one category is fetched upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamEndpoint {
    pub url: String,
    pub param_name: String,
    /// Falls back to the category's canonical unit when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_unit: Option<Unit>,
}

/// Per-category upstream settings. Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamTable {
    pub timeout_seconds: u64,
    pub temperature: UpstreamEndpoint,
    pub pressure: UpstreamEndpoint,
    pub pollutant: UpstreamEndpoint,
}

impl Default for UpstreamTable {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl UpstreamTable {
    /// Standard layout under a single host: `<base>/temp`, `<base>/pressure`, `<base>/pollutant`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let endpoint = |path: &str, param: &str, category: Category| UpstreamEndpoint {
            url: format!("{}/{}", base, path),
            param_name: param.to_string(),
            canonical_unit: Some(category.canonical_unit()),
        };

        Self {
            timeout_seconds: 10,
            temperature: endpoint("temp", "temp", Category::Temperature),
            pressure: endpoint("pressure", "pressure", Category::Pressure),
            pollutant: endpoint("pollutant", "aqi", Category::Pollutant),
        }
    }

    pub fn endpoint(&self, category: Category) -> &UpstreamEndpoint {
        match category {
            Category::Temperature => &self.temperature,
            Category::Pressure => &self.pressure,
            Category::Pollutant => &self.pollutant,
        }
    }

    pub fn canonical_unit(&self, category: Category) -> Unit {
        self.endpoint(category)
            .canonical_unit
            .unwrap_or_else(|| category.canonical_unit())
    }
}

impl Validate for UpstreamTable {
    fn validate(&self) -> Result<()> {
        if !(1..=300).contains(&self.timeout_seconds) {
            return Err(ServiceError::InvalidConfigValue {
                field: "upstream.timeout_seconds".to_string(),
                value: self.timeout_seconds.to_string(),
                reason: "Value must be between 1 and 300".to_string(),
            });
        }

        for category in Category::ALL {
            let endpoint = self.endpoint(category);
            validate_url(&format!("upstream.{}.url", category), &endpoint.url)?;
            validate_non_empty_string(
                &format!("upstream.{}.param_name", category),
                &endpoint.param_name,
            )?;

            let unit = self.canonical_unit(category);
            if !category.contains(unit) {
                return Err(ServiceError::InvalidConfigValue {
                    field: format!("upstream.{}.canonical_unit", category),
                    value: unit.to_string(),
                    reason: format!("Unit does not measure {}", category),
                });
            }
        }

        Ok(())
    }
}
