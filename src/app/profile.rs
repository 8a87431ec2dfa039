use crate::domain::model::{Category, Unit};
use serde::{Deserialize, Serialize};

/// Which route layout the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RouteProfile {
    /// `/temperature`, `/pressure`, `/pollutant` with every unit of each category.
    #[default]
    Standard,
    /// `/weather/temperature`, `/weather/pressure`; needs a `city` and accepts fewer units.
    Weather,
}

impl RouteProfile {
    pub fn categories(&self) -> &'static [Category] {
        match self {
            RouteProfile::Standard => &Category::ALL,
            RouteProfile::Weather => &[Category::Temperature, Category::Pressure],
        }
    }

    pub fn allowed_units(&self, category: Category) -> &'static [Unit] {
        match (self, category) {
            (RouteProfile::Weather, Category::Temperature) => &[Unit::Celsius, Unit::Fahrenheit],
            (RouteProfile::Weather, Category::Pressure) => &[Unit::Hpa, Unit::Atm],
            _ => category.units(),
        }
    }

    pub fn path(&self, category: Category) -> String {
        match self {
            RouteProfile::Standard => format!("/{}", category),
            RouteProfile::Weather => format!("/weather/{}", category),
        }
    }

    pub fn requires_city(&self) -> bool {
        matches!(self, RouteProfile::Weather)
    }
}
