use kcal_model::biometrics::UnitSystem;
use kcal_model::results::{BmiClassification, BmiResult};

use crate::units::round_to;

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 25.0;

/// Compute BMI and the derived indices from metric measurements. The
/// returned result is kg-denominated; the caller fills in the pound
/// figures and the unit system when the request used US units.
pub fn analyze(weight_kg: f64, height_cm: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / height_m.powf(2.0);

    let min_healthy_weight = HEALTHY_BMI_MIN * height_m.powf(2.0);
    let max_healthy_weight = HEALTHY_BMI_MAX * height_m.powf(2.0);
    let bmi_prime = bmi / HEALTHY_BMI_MAX;
    let ponderal_index = weight_kg / height_m.powf(3.0);

    BmiResult {
        bmi: round_to(bmi, 1),
        classification: classify(bmi),
        min_healthy_weight_kg: round_to(min_healthy_weight, 1),
        max_healthy_weight_kg: round_to(max_healthy_weight, 1),
        min_healthy_weight_lbs: None,
        max_healthy_weight_lbs: None,
        bmi_prime: round_to(bmi_prime, 2),
        ponderal_index: round_to(ponderal_index, 1),
        unit_system: UnitSystem::Metric,
    }
}

/// WHO buckets, each lower bound inclusive and upper bound exclusive.
/// Classifies the unrounded BMI.
fn classify(bmi: f64) -> BmiClassification {
    if bmi < 16.0 {
        BmiClassification::SevereThinness
    } else if bmi < 17.0 {
        BmiClassification::ModerateThinness
    } else if bmi < 18.5 {
        BmiClassification::MildThinness
    } else if bmi < 25.0 {
        BmiClassification::Normal
    } else if bmi < 30.0 {
        BmiClassification::Overweight
    } else if bmi < 35.0 {
        BmiClassification::ObeseClassI
    } else if bmi < 40.0 {
        BmiClassification::ObeseClassII
    } else {
        BmiClassification::ObeseClassIII
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_is_weight_over_height_squared() {
        // 80 kg at 180 cm: 80 / 1.8^2 = 24.69...
        let result = analyze(80.0, 180.0);
        assert_eq!(result.bmi, 24.7);
        assert_eq!(result.classification, BmiClassification::Normal);
    }

    #[test]
    fn classification_boundaries_are_closed_open() {
        // Weights chosen against a 2 m frame so the raw BMI lands exactly
        // on each threshold.
        let test_data = [
            (63.9, BmiClassification::SevereThinness),
            (64.0, BmiClassification::ModerateThinness),
            (68.0, BmiClassification::MildThinness),
            (74.0, BmiClassification::Normal),
            (99.9, BmiClassification::Normal),
            (100.0, BmiClassification::Overweight),
            (120.0, BmiClassification::ObeseClassI),
            (140.0, BmiClassification::ObeseClassII),
            (160.0, BmiClassification::ObeseClassIII),
        ];

        for (i, (weight_kg, expected)) in test_data.into_iter().enumerate() {
            let result = analyze(weight_kg, 200.0);
            assert_eq!(result.classification, expected, "Test case #{}", i);
        }
    }

    #[test]
    fn healthy_weight_range_spans_normal_bucket() {
        let result = analyze(80.0, 200.0);
        assert_eq!(result.min_healthy_weight_kg, 74.0);
        assert_eq!(result.max_healthy_weight_kg, 100.0);
    }

    #[test]
    fn derived_indices_round_at_assembly() {
        let result = analyze(80.0, 180.0);
        // BMI prime: 24.69... / 25 = 0.9876..., two decimals.
        assert_eq!(result.bmi_prime, 0.99);
        // Ponderal index: 80 / 1.8^3 = 13.717..., one decimal.
        assert_eq!(result.ponderal_index, 13.7);
    }

    #[test]
    fn pound_figures_are_left_for_the_caller() {
        let result = analyze(80.0, 180.0);
        assert_eq!(result.min_healthy_weight_lbs, None);
        assert_eq!(result.max_healthy_weight_lbs, None);
        assert_eq!(result.unit_system, UnitSystem::Metric);
    }
}
