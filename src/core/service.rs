use crate::config::upstream::UpstreamTable;
use crate::core::converter::convert_request;
use crate::core::validator::validate_units_in;
use crate::domain::model::{Category, ConversionRequest, ConversionResult, Reading, Unit};
use crate::domain::ports::Gateway;
use crate::utils::error::{ConversionError, Result, ServiceError};
use std::sync::Arc;

/// Validates the requested unit, fetches the current reading and converts it.
pub struct MeasurementService {
    gateway: Arc<dyn Gateway>,
    upstream: UpstreamTable,
}

impl MeasurementService {
    pub fn new(gateway: Arc<dyn Gateway>, upstream: UpstreamTable) -> Self {
        Self { gateway, upstream }
    }

    /// `units` is checked against `allowed` before any upstream traffic.
    pub async fn measure(
        &self,
        category: Category,
        units: &str,
        allowed: &[Unit],
        city: Option<&str>,
    ) -> Result<ConversionResult> {
        let target = validate_units_in(category, &units.to_lowercase(), allowed)?;

        let reading = self.fetch_reading(category, city).await?;
        let request = ConversionRequest { reading, target };
        let measured_value = convert_request(&request)?;

        tracing::debug!(
            "{}: {} {} -> {} {}",
            category,
            reading.value,
            reading.unit,
            measured_value,
            target
        );

        Ok(ConversionResult {
            parameter: category,
            measured_value,
            units: target,
            original_value: reading.value,
            original_units: reading.unit,
            city: city.map(str::to_string),
        })
    }

    async fn fetch_reading(&self, category: Category, city: Option<&str>) -> Result<Reading> {
        let endpoint = self.upstream.endpoint(category);
        let payload = self
            .gateway
            .fetch(&endpoint.url, &endpoint.param_name, city)
            .await
            .map_err(|e| ServiceError::upstream(category, e))?;

        let raw = payload.get("value").ok_or_else(|| {
            ServiceError::internal(format!("{} payload has no 'value' field", category))
        })?;
        let value = raw.as_f64().ok_or_else(|| ConversionError::NonNumeric {
            raw: raw.to_string(),
        })?;

        Ok(Reading::new(value, category, self.upstream.canonical_unit(category)))
    }
}
