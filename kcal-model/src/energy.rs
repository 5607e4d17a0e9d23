use serde::Serialize;
use strum::EnumString;

/// Output unit for the calorie calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "lowercase")]
pub enum ResultsUnit {
    Calories,
    Kilojoules,
}

/// Energy units accepted by the conversion request. `CalSmall` is the
/// "small calorie", 1000 of which make one nutritional calorie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EnergyUnit {
    CalNutritional,
    CalSmall,
    Kilojoules,
    Joules,
}
