use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use strum::{Display, EnumString};

use crate::biometrics::UnitSystem;
use crate::energy::ResultsUnit;

/// Daily calorie targets for common weight management goals, derived from
/// the maintenance figure by fixed kilocalorie offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightManagement {
    pub extreme_loss: i64,
    pub moderate_loss: i64,
    pub mild_loss: i64,
    pub maintain: i64,
    pub mild_gain: i64,
    pub moderate_gain: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieResult {
    pub bmr: i64,
    pub daily_calories: i64,
    pub activity_description: String,
    pub weight_management: WeightManagement,
    pub formula_used: String,
    pub results_unit: ResultsUnit,
}

/// WHO BMI buckets, lower bound inclusive, upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum BmiClassification {
    #[strum(serialize = "Severe Thinness")]
    SevereThinness,
    #[strum(serialize = "Moderate Thinness")]
    ModerateThinness,
    #[strum(serialize = "Mild Thinness")]
    MildThinness,
    #[strum(serialize = "Normal")]
    Normal,
    #[strum(serialize = "Overweight")]
    Overweight,
    #[strum(serialize = "Obese Class I")]
    ObeseClassI,
    #[strum(serialize = "Obese Class II")]
    ObeseClassII,
    #[strum(serialize = "Obese Class III")]
    ObeseClassIII,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub classification: BmiClassification,
    pub min_healthy_weight_kg: f64,
    pub max_healthy_weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_healthy_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_healthy_weight_lbs: Option<f64>,
    pub bmi_prime: f64,
    pub ponderal_index: f64,
    pub unit_system: UnitSystem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyConversionResult {
    pub original_value: f64,
    pub converted_value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_displays_reference_labels() {
        let test_data = [
            (BmiClassification::SevereThinness, "Severe Thinness"),
            (BmiClassification::ModerateThinness, "Moderate Thinness"),
            (BmiClassification::MildThinness, "Mild Thinness"),
            (BmiClassification::Normal, "Normal"),
            (BmiClassification::Overweight, "Overweight"),
            (BmiClassification::ObeseClassI, "Obese Class I"),
            (BmiClassification::ObeseClassII, "Obese Class II"),
            (BmiClassification::ObeseClassIII, "Obese Class III"),
        ];

        for (i, (classification, expected_label)) in test_data.into_iter().enumerate() {
            assert_eq!(
                classification.to_string(),
                expected_label,
                "Test case #{}",
                i
            );
        }
    }
}
