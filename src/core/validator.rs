use crate::domain::model::{Category, Unit};
use crate::utils::error::ValidationError;

/// Checks `units` against the full unit set of the category named by `parameter`.
///
/// Both arguments are raw request strings. The unit comparison ignores case; the
/// category identifier does not. On success the typed unit is returned.
pub fn validate_units(parameter: &str, units: &str) -> Result<Unit, ValidationError> {
    let category = Category::parse(parameter).ok_or_else(|| ValidationError::InvalidCategory {
        value: parameter.to_string(),
    })?;
    validate_units_in(category, units, category.units())
}

/// Same as [`validate_units`] for an already-known category and a narrower allowed set.
pub fn validate_units_in(
    category: Category,
    units: &str,
    allowed: &[Unit],
) -> Result<Unit, ValidationError> {
    let invalid = || ValidationError::InvalidUnit {
        category,
        value: units.to_string(),
        allowed: allowed.to_vec(),
    };

    let unit = Unit::parse(units).ok_or_else(invalid)?;
    if category.contains(unit) && allowed.contains(&unit) {
        Ok(unit)
    } else {
        Err(invalid())
    }
}
