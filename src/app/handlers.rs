use crate::app::profile::RouteProfile;
use crate::core::service::MeasurementService;
use crate::domain::model::{Category, ConversionResult};
use crate::utils::error::{Result, ValidationError};
use axum::body::Bytes;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MeasurementService>,
    pub profile: RouteProfile,
}

/// Body of a successful measurement response.
///
/// The weather layout also reports the value under the category's own name,
/// e.g. `"temperature": 26.85`.
#[derive(Debug, Serialize)]
pub struct MeasureResponse {
    #[serde(flatten)]
    result: ConversionResult,
    #[serde(flatten)]
    named: BTreeMap<&'static str, f64>,
}

impl MeasureResponse {
    fn new(result: ConversionResult, profile: RouteProfile) -> Self {
        let mut named = BTreeMap::new();
        if profile == RouteProfile::Weather {
            named.insert(result.parameter.as_str(), result.measured_value);
        }
        Self { result, named }
    }
}

/// Fields pulled out of a measurement request body.
#[derive(Debug, PartialEq)]
struct MeasureParams {
    units: String,
    city: Option<String>,
}

pub async fn measure(
    state: AppState,
    category: Category,
    body: Bytes,
) -> Result<Json<MeasureResponse>> {
    let params = parse_params(&body, state.profile)?;
    tracing::info!(
        "{} request: units={} city={:?}",
        category,
        params.units,
        params.city
    );

    let allowed = state.profile.allowed_units(category);
    let result = state
        .service
        .measure(category, &params.units, allowed, params.city.as_deref())
        .await?;

    tracing::info!(
        "✅ {} {} {} -> {} {}",
        category,
        result.original_value,
        result.original_units,
        result.measured_value,
        result.units
    );
    Ok(Json(MeasureResponse::new(result, state.profile)))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// An unreadable body counts as an empty one, so the caller gets the missing-field message.
fn parse_params(body: &[u8], profile: RouteProfile) -> Result<MeasureParams> {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    let units = payload.get("units").filter(|v| !v.is_null());
    // Only the weather layout forwards a location upstream.
    let city = payload
        .get("city")
        .and_then(Value::as_str)
        .filter(|c| profile.requires_city() && !c.trim().is_empty());

    if profile.requires_city() && (units.is_none() || city.is_none()) {
        return Err(ValidationError::MissingFields {
            fields: vec!["city".to_string(), "units".to_string()],
        }
        .into());
    }

    let units = match units {
        None => {
            return Err(ValidationError::MissingField {
                field: "units".to_string(),
            }
            .into())
        }
        Some(Value::String(s)) => s.clone(),
        // A non-string unit cannot match anything; let validation report it.
        Some(other) => other.to_string(),
    };

    Ok(MeasureParams {
        units,
        city: city.map(str::to_string),
    })
}
