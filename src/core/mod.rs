pub mod converter;
pub mod service;
pub mod validator;

pub use crate::domain::model::{Category, ConversionRequest, ConversionResult, Reading, Unit};
pub use crate::domain::ports::Gateway;
pub use crate::utils::error::Result;
pub use converter::convert;
pub use validator::{validate_units, validate_units_in};
