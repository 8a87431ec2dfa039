use serde::{Serialize, Serializer};
use std::fmt;

/// Measurement domain served by the API. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Pressure,
    Pollutant,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Pressure, Category::Pollutant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Pressure => "pressure",
            Category::Pollutant => "pollutant",
        }
    }

    /// Capitalised name used in upstream error messages.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Pressure => "Pressure",
            Category::Pollutant => "Pollutant",
        }
    }

    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
            Category::Pressure => &[Unit::Hpa, Unit::Atm, Unit::Mmhg],
            Category::Pollutant => &[Unit::Ppm, Unit::Ppb, Unit::MicrogramsPerCubicMeter],
        }
    }

    /// Unit the upstream provider reports in.
    pub fn canonical_unit(&self) -> Unit {
        match self {
            Category::Temperature => Unit::Kelvin,
            Category::Pressure => Unit::Hpa,
            Category::Pollutant => Unit::Ppm,
        }
    }

    /// Decimal places used when a value is passed through without a formula.
    pub fn precision(&self) -> u32 {
        2
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Hpa,
    Atm,
    Mmhg,
    Ppm,
    Ppb,
    MicrogramsPerCubicMeter,
}

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Hpa,
        Unit::Atm,
        Unit::Mmhg,
        Unit::Ppm,
        Unit::Ppb,
        Unit::MicrogramsPerCubicMeter,
    ];

    /// Wire token, always lower case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Hpa => "hpa",
            Unit::Atm => "atm",
            Unit::Mmhg => "mmhg",
            Unit::Ppm => "ppm",
            Unit::Ppb => "ppb",
            Unit::MicrogramsPerCubicMeter => "µg/m³",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Hpa | Unit::Atm | Unit::Mmhg => Category::Pressure,
            Unit::Ppm | Unit::Ppb | Unit::MicrogramsPerCubicMeter => Category::Pollutant,
        }
    }

    /// Case-insensitive lookup across every category.
    pub fn parse(value: &str) -> Option<Unit> {
        let token = value.to_lowercase();
        Unit::ALL.into_iter().find(|unit| unit.as_str() == token)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Unit::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown unit '{}'", raw)))
    }
}

/// Raw measurement in the canonical unit of its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub category: Category,
    pub unit: Unit,
}

impl Reading {
    pub fn new(value: f64, category: Category, unit: Unit) -> Self {
        Self {
            value,
            category,
            unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub reading: Reading,
    pub target: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub parameter: Category,
    pub measured_value: f64,
    pub units: Unit,
    pub original_value: f64,
    pub original_units: Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}
