use crate::domain::model::{Category, ConversionRequest, Unit};
use crate::utils::error::ConversionError;

const KELVIN_OFFSET: f64 = 273.15;
const HPA_PER_ATM: f64 = 1013.25;
const MMHG_PER_HPA: f64 = 0.750062;
const MMHG_PER_ATM: f64 = 760.0;
const PPB_PER_PPM: f64 = 1000.0;
// Substance-dependent in reality; a flat factor stands in for molar mass.
const UG_M3_PER_PPM: f64 = 1000.0;

/// Converts `value` from one unit to another within `category`.
///
/// Membership is not checked here. Pairs with no rule (including units from another
/// category) return `value` untouched; same-unit pairs inside the category are rounded
/// to [`Category::precision`].
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
    category: Category,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteInput { value });
    }

    let converted = match apply(value, from, to, category) {
        Some((raw, places)) => round_to(raw, places),
        None => value,
    };

    if converted.is_finite() {
        Ok(converted)
    } else {
        Err(ConversionError::NonFiniteResult { value, from, to })
    }
}

pub fn convert_request(request: &ConversionRequest) -> Result<f64, ConversionError> {
    let reading = request.reading;
    convert(reading.value, reading.unit, request.target, reading.category)
}

/// Unrounded result and the decimal places it is reported with, or `None` when no rule
/// covers the pair.
fn apply(v: f64, from: Unit, to: Unit, category: Category) -> Option<(f64, u32)> {
    use Category::*;
    use Unit::*;

    if from == to {
        return category.contains(from).then_some((v, category.precision()));
    }

    let found = match (category, from, to) {
        (Temperature, Kelvin, Celsius) => (v - KELVIN_OFFSET, 2),
        (Temperature, Kelvin, Fahrenheit) => ((v - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0, 2),
        (Temperature, Celsius, Kelvin) => (v + KELVIN_OFFSET, 2),
        (Temperature, Celsius, Fahrenheit) => (v * 9.0 / 5.0 + 32.0, 2),
        (Temperature, Fahrenheit, Celsius) => ((v - 32.0) * 5.0 / 9.0, 2),
        (Temperature, Fahrenheit, Kelvin) => ((v - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET, 2),

        (Pressure, Hpa, Atm) => (v / HPA_PER_ATM, 4),
        (Pressure, Hpa, Mmhg) => (v * MMHG_PER_HPA, 2),
        (Pressure, Atm, Hpa) => (v * HPA_PER_ATM, 2),
        (Pressure, Atm, Mmhg) => (v * MMHG_PER_ATM, 2),
        (Pressure, Mmhg, Hpa) => (v / MMHG_PER_HPA, 2),
        (Pressure, Mmhg, Atm) => (v / MMHG_PER_ATM, 4),

        (Pollutant, Ppm, Ppb) => (v * PPB_PER_PPM, 2),
        (Pollutant, Ppm, MicrogramsPerCubicMeter) => (v * UG_M3_PER_PPM, 2),
        (Pollutant, Ppb, Ppm) => (v / PPB_PER_PPM, 4),
        // TODO: ppb <-> µg/m³ needs a molar mass per substance; the value passes through for now.
        (Pollutant, Ppb, MicrogramsPerCubicMeter) => (v, 2),
        (Pollutant, MicrogramsPerCubicMeter, Ppm) => (v / UG_M3_PER_PPM, 4),
        (Pollutant, MicrogramsPerCubicMeter, Ppb) => (v, 2),

        _ => return None,
    };
    Some(found)
}

/// Rounds to `places` decimal places from the exact binary value; exact ties go to even.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Reading;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(
            convert(273.15, Unit::Kelvin, Unit::Celsius, Category::Temperature).unwrap(),
            0.0
        );
        approx(
            convert(300.0, Unit::Kelvin, Unit::Celsius, Category::Temperature).unwrap(),
            26.85,
            1e-9,
        );
        approx(
            convert(300.0, Unit::Kelvin, Unit::Fahrenheit, Category::Temperature).unwrap(),
            80.33,
            1e-9,
        );
        approx(
            convert(100.0, Unit::Celsius, Unit::Fahrenheit, Category::Temperature).unwrap(),
            212.0,
            1e-9,
        );
        approx(
            convert(212.0, Unit::Fahrenheit, Unit::Kelvin, Category::Temperature).unwrap(),
            373.15,
            1e-9,
        );
        approx(
            convert(-40.0, Unit::Fahrenheit, Unit::Celsius, Category::Temperature).unwrap(),
            -40.0,
            1e-9,
        );
    }

    #[test]
    fn test_pressure_conversions() {
        approx(
            convert(1013.25, Unit::Hpa, Unit::Atm, Category::Pressure).unwrap(),
            1.0,
            0.001,
        );
        approx(
            convert(1013.0, Unit::Hpa, Unit::Atm, Category::Pressure).unwrap(),
            0.9998,
            1e-9,
        );
        approx(
            convert(1013.25, Unit::Hpa, Unit::Mmhg, Category::Pressure).unwrap(),
            760.0,
            1e-9,
        );
        approx(
            convert(1.0, Unit::Atm, Unit::Mmhg, Category::Pressure).unwrap(),
            760.0,
            1e-9,
        );
        approx(
            convert(380.0, Unit::Mmhg, Unit::Atm, Category::Pressure).unwrap(),
            0.5,
            1e-9,
        );
    }

    #[test]
    fn test_pollutant_conversions() {
        assert_eq!(
            convert(1.0, Unit::Ppm, Unit::Ppb, Category::Pollutant).unwrap(),
            1000.0
        );
        assert_eq!(
            convert(1000.0, Unit::Ppb, Unit::Ppm, Category::Pollutant).unwrap(),
            1.0
        );
        assert_eq!(
            convert(
                0.25,
                Unit::Ppm,
                Unit::MicrogramsPerCubicMeter,
                Category::Pollutant
            )
            .unwrap(),
            250.0
        );
        assert_eq!(
            convert(
                12.346,
                Unit::Ppb,
                Unit::MicrogramsPerCubicMeter,
                Category::Pollutant
            )
            .unwrap(),
            12.35
        );
    }

    #[test]
    fn test_round_trips() {
        for kelvin in [0.0, 250.5, 273.15, 293.15, 310.42] {
            let celsius =
                convert(kelvin, Unit::Kelvin, Unit::Celsius, Category::Temperature).unwrap();
            let back =
                convert(celsius, Unit::Celsius, Unit::Kelvin, Category::Temperature).unwrap();
            approx(back, kelvin, 0.01);
        }

        for atm in [0.5, 0.9869, 1.0, 1.2345] {
            let hpa = convert(atm, Unit::Atm, Unit::Hpa, Category::Pressure).unwrap();
            let back = convert(hpa, Unit::Hpa, Unit::Atm, Category::Pressure).unwrap();
            approx(back, atm, 0.0001);
        }
    }

    #[test]
    fn test_same_unit_rounds_to_category_precision() {
        for category in Category::ALL {
            for &unit in category.units() {
                let value = 12.34567;
                assert_eq!(
                    convert(value, unit, unit, category).unwrap(),
                    round_to(value, category.precision())
                );
            }
        }
    }

    #[test]
    fn test_pairs_without_rule_pass_through() {
        // Unit outside the category.
        assert_eq!(
            convert(1.23456, Unit::Hpa, Unit::Celsius, Category::Temperature).unwrap(),
            1.23456
        );
        assert_eq!(
            convert(1.23456, Unit::Kelvin, Unit::Kelvin, Category::Pressure).unwrap(),
            1.23456
        );
        // Cross-category pair in a matching category.
        assert_eq!(
            convert(7.891011, Unit::Ppm, Unit::Atm, Category::Pressure).unwrap(),
            7.891011
        );
    }

    #[test]
    fn test_non_finite_values_fail() {
        assert!(matches!(
            convert(f64::NAN, Unit::Kelvin, Unit::Celsius, Category::Temperature),
            Err(ConversionError::NonFiniteInput { .. })
        ));
        assert!(matches!(
            convert(f64::MAX, Unit::Atm, Unit::Hpa, Category::Pressure),
            Err(ConversionError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_convert_request_uses_reading_unit() {
        let request = ConversionRequest {
            reading: Reading::new(293.15, Category::Temperature, Unit::Kelvin),
            target: Unit::Celsius,
        };
        assert_eq!(convert_request(&request).unwrap(), 20.0);
    }

    #[test]
    fn test_every_formula_row() {
        use Category::*;
        use Unit::*;

        let rows = [
            (Temperature, Kelvin, Celsius, 300.0, 26.85),
            (Temperature, Kelvin, Fahrenheit, 300.0, 80.33),
            (Temperature, Celsius, Kelvin, 20.0, 293.15),
            (Temperature, Celsius, Fahrenheit, 100.0, 212.0),
            (Temperature, Fahrenheit, Celsius, 212.0, 100.0),
            (Temperature, Fahrenheit, Kelvin, 32.0, 273.15),
            (Pressure, Hpa, Atm, 1013.0, 0.9998),
            (Pressure, Hpa, Mmhg, 1000.0, 750.06),
            (Pressure, Atm, Hpa, 2.0, 2026.5),
            (Pressure, Atm, Mmhg, 1.5, 1140.0),
            (Pressure, Mmhg, Hpa, 750.062, 1000.0),
            (Pressure, Mmhg, Atm, 380.0, 0.5),
            (Pollutant, Ppm, Ppb, 1.5, 1500.0),
            (Pollutant, Ppm, MicrogramsPerCubicMeter, 0.25, 250.0),
            (Pollutant, Ppb, Ppm, 1234.0, 1.234),
            (Pollutant, Ppb, MicrogramsPerCubicMeter, 12.346, 12.35),
            (Pollutant, MicrogramsPerCubicMeter, Ppm, 1234.56, 1.2346),
            (Pollutant, MicrogramsPerCubicMeter, Ppb, 42.1, 42.1),
        ];

        for (category, from, to, value, expected) in rows {
            let actual = convert(value, from, to, category).unwrap();
            assert!(
                (actual - expected).abs() < 1e-9,
                "{} {} -> {}: got {}, expected {}",
                value,
                from,
                to,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_values_just_below_a_half_round_down() {
        // 375.775 is stored as 375.77499999999997...
        assert_eq!(
            convert(375.775, Unit::Kelvin, Unit::Kelvin, Category::Temperature).unwrap(),
            375.77
        );
        assert_eq!(
            convert(1192.395, Unit::Hpa, Unit::Hpa, Category::Pressure).unwrap(),
            1192.39
        );
        assert_eq!(
            convert(293.275, Unit::Kelvin, Unit::Celsius, Category::Temperature).unwrap(),
            20.12
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.675_1, 2), 2.68);
        assert_eq!(round_to(-1.005_01, 2), -1.01);
        assert_eq!(round_to(0.98692, 4), 0.9869);
        // exact binary ties go to even
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }
}
