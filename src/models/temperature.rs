use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature scale a value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which unit is the conversion target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionDirection {
    #[default]
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl ConversionDirection {
    /// Unit the user types the input in
    pub fn source_unit(self) -> TemperatureUnit {
        match self {
            ConversionDirection::CelsiusToFahrenheit => TemperatureUnit::Celsius,
            ConversionDirection::FahrenheitToCelsius => TemperatureUnit::Fahrenheit,
        }
    }

    pub fn target_unit(self) -> TemperatureUnit {
        match self {
            ConversionDirection::CelsiusToFahrenheit => TemperatureUnit::Fahrenheit,
            ConversionDirection::FahrenheitToCelsius => TemperatureUnit::Celsius,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ConversionDirection::CelsiusToFahrenheit => ConversionDirection::FahrenheitToCelsius,
            ConversionDirection::FahrenheitToCelsius => ConversionDirection::CelsiusToFahrenheit,
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source_unit(), self.target_unit())
    }
}

/// Raw user input paired with the selected direction, built per action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub direction: ConversionDirection,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, direction: ConversionDirection) -> Self {
        Self { raw_input: raw_input.into(), direction }
    }
}

/// Converted value in its target unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

/// A completed conversion: the parsed input and what it converted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub input: f64,
    pub direction: ConversionDirection,
    pub result: ConversionResult,
}

impl Conversion {
    /// History label for the source side, e.g. `25°C`
    pub fn from_label(&self) -> String {
        format!("{}{}", format_number(self.input), self.direction.source_unit())
    }

    /// History label for the result side, e.g. `77°F`
    pub fn to_label(&self) -> String {
        self.result.to_string()
    }
}

/// Shortest decimal rendering of a value; negative zero prints as `0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}
