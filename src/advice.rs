use std::fmt;

const MIN_TEMP: f64 = 0.0;
const MAX_TEMP: f64 = 30.0;

/// Farming advisory for one day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FarmingAdvice {
    Suitable,
    NotSuitable,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for FarmingAdvice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FarmingAdvice {
    pub fn label(&self) -> &'static str {
        match self {
            FarmingAdvice::Suitable    => "Suitable for farming",
            FarmingAdvice::NotSuitable => "Not suitable for farming",
        }
    }
}

/// Classifies a forecast reading as suitable for farming or not.
/// A day is suitable when the temperature is strictly between 0 and 30 degrees Celsius
/// and no rain at all is expected.
///
/// # Arguments
///
/// * 'temp' - temperature in degrees Celsius
/// * 'rain_volume' - rain volume in mm over the last three hours
pub fn classify(temp: f64, rain_volume: f64) -> FarmingAdvice {
    if temp > MIN_TEMP && temp < MAX_TEMP && rain_volume == 0.0 {
        FarmingAdvice::Suitable
    } else {
        FarmingAdvice::NotSuitable
    }
}
