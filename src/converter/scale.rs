use crate::models::{ConversionResult, TemperatureUnit};

/// Coarse colour band of a scale position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleBand {
    Cold,
    Mild,
    Hot,
}

/// Position of a temperature on the thermometer indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleReading {
    /// 0.0 to 100.0
    pub percent: f64,
    pub band: ScaleBand,
}

impl ScaleReading {
    /// Visible range of the indicator for each unit
    pub fn range(unit: TemperatureUnit) -> (f64, f64) {
        match unit {
            TemperatureUnit::Celsius => (-50.0, 100.0),
            TemperatureUnit::Fahrenheit => (-58.0, 212.0),
        }
    }

    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        let (min, max) = Self::range(unit);
        let clamped = value.clamp(min, max);
        let percent = ((clamped - min) / (max - min) * 100.0).clamp(0.0, 100.0);
        let band = if percent < 33.0 {
            ScaleBand::Cold
        } else if percent < 66.0 {
            ScaleBand::Mild
        } else {
            ScaleBand::Hot
        };
        Self { percent, band }
    }

    pub fn for_result(result: &ConversionResult) -> Self {
        Self::new(result.value, result.unit)
    }

    /// Fraction in `0.0..=1.0`, as gauges expect it
    pub fn ratio(&self) -> f64 {
        self.percent / 100.0
    }
}

impl Default for ScaleReading {
    /// Empty indicator, shown before the first conversion
    fn default() -> Self {
        Self { percent: 0.0, band: ScaleBand::Cold }
    }
}
