use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use kcal_model::biometrics::{BmrFormula, UnitSystem};
use kcal_model::energy::{EnergyUnit, ResultsUnit};
use kcal_model::results::{
    BmiResult, CalorieResult, EnergyConversionResult, WeightManagement,
};

use crate::error::CalculationError;
use crate::units::{self, round_to, Unit};
use crate::{bmi, formulas, validate};

/// Body fat percentage assumed by Katch-McArdle when the field is absent.
const DEFAULT_BODY_FAT_PERCENT: f64 = 15.0;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Calorie(CalorieResult),
    Bmi(BmiResult),
    Energy(EnergyConversionResult),
}

/// Entry point of the calculation engine. One call per request, no state
/// in between.
#[mockall::automock]
pub trait Calculator: Send + Sync {
    fn calculate(
        &self,
        kind: &str,
        fields: &HashMap<String, String>,
    ) -> Result<CalculationResponse, CalculationError>;
}

pub struct CalculatorImpl;

impl Calculator for CalculatorImpl {
    fn calculate(
        &self,
        kind: &str,
        fields: &HashMap<String, String>,
    ) -> Result<CalculationResponse, CalculationError> {
        debug!("Dispatching {} calculation", kind);
        match kind {
            "calorie" => calorie(fields),
            "bmi" => body_mass_index(fields),
            "energy" => energy(fields),
            _ => Err(CalculationError::validation("Invalid calculation type.")),
        }
    }
}

fn calorie(fields: &HashMap<String, String>) -> Result<CalculationResponse, CalculationError> {
    let request = validate::calorie_request(fields)?;
    let input = &request.biometrics;

    let bmr = match request.formula {
        BmrFormula::MifflinStJeor => {
            formulas::mifflin_st_jeor(input.weight_kg, input.height_cm, input.age_years, input.gender)
        }
        BmrFormula::HarrisBenedict => {
            formulas::harris_benedict(input.weight_kg, input.height_cm, input.age_years, input.gender)
        }
        BmrFormula::KatchMcardle => formulas::katch_mcardle(
            input.weight_kg,
            input.body_fat_percent.unwrap_or(DEFAULT_BODY_FAT_PERCENT),
        ),
    };
    if !bmr.is_finite() {
        return Err(CalculationError::Internal(format!(
            "{} produced a non-finite BMR",
            request.formula.display_name()
        )));
    }

    let daily_calories = bmr * request.activity.multiplier();

    // Each figure is converted (when kilojoules were requested) and rounded
    // independently.
    let to_output = |kilocalories: f64| -> i64 {
        let value = match request.results_unit {
            ResultsUnit::Calories => kilocalories,
            ResultsUnit::Kilojoules => units::convert(kilocalories, Unit::Cal, Unit::Kj),
        };
        value.round() as i64
    };

    Ok(CalculationResponse::Calorie(CalorieResult {
        bmr: to_output(bmr),
        daily_calories: to_output(daily_calories),
        activity_description: request.activity.description().to_string(),
        weight_management: WeightManagement {
            extreme_loss: to_output(daily_calories - 1000.0),
            moderate_loss: to_output(daily_calories - 500.0),
            mild_loss: to_output(daily_calories - 250.0),
            maintain: to_output(daily_calories),
            mild_gain: to_output(daily_calories + 250.0),
            moderate_gain: to_output(daily_calories + 500.0),
        },
        formula_used: request.formula.display_name().to_string(),
        results_unit: request.results_unit,
    }))
}

fn body_mass_index(
    fields: &HashMap<String, String>,
) -> Result<CalculationResponse, CalculationError> {
    let request = validate::bmi_request(fields)?;
    let mut result: BmiResult =
        bmi::analyze(request.biometrics.weight_kg, request.biometrics.height_cm);

    if request.unit_system == UnitSystem::Us {
        result.min_healthy_weight_lbs = Some(round_to(
            units::convert(result.min_healthy_weight_kg, Unit::Kg, Unit::Lbs),
            1,
        ));
        result.max_healthy_weight_lbs = Some(round_to(
            units::convert(result.max_healthy_weight_kg, Unit::Kg, Unit::Lbs),
            1,
        ));
    }
    result.unit_system = request.unit_system;

    Ok(CalculationResponse::Bmi(result))
}

fn energy(fields: &HashMap<String, String>) -> Result<CalculationResponse, CalculationError> {
    let request = validate::energy_request(fields)?;

    // Small calories scale to nutritional calories before the tag-based
    // conversion and back after it.
    let mut value = request.value;
    if request.from_unit == EnergyUnit::CalSmall {
        value /= 1000.0;
    }
    let mut converted = units::convert(value, request.from_unit.into(), request.to_unit.into());
    if request.to_unit == EnergyUnit::CalSmall {
        converted *= 1000.0;
    }

    Ok(CalculationResponse::Energy(EnergyConversionResult {
        original_value: request.value,
        converted_value: round_to(converted, 4),
        from_unit: request.raw_from,
        to_unit: request.raw_to,
    }))
}

#[cfg(test)]
mod tests {
    use kcal_model::results::BmiClassification;

    use super::*;

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn calorie_result(fields: &HashMap<String, String>) -> CalorieResult {
        match CalculatorImpl.calculate("calorie", fields).unwrap() {
            CalculationResponse::Calorie(result) => result,
            other => panic!("Expected calorie result, got {:?}", other),
        }
    }

    fn bmi_result(fields: &HashMap<String, String>) -> BmiResult {
        match CalculatorImpl.calculate("bmi", fields).unwrap() {
            CalculationResponse::Bmi(result) => result,
            other => panic!("Expected BMI result, got {:?}", other),
        }
    }

    fn energy_result(fields: &HashMap<String, String>) -> EnergyConversionResult {
        match CalculatorImpl.calculate("energy", fields).unwrap() {
            CalculationResponse::Energy(result) => result,
            other => panic!("Expected energy result, got {:?}", other),
        }
    }

    #[test]
    fn calorie_flow_derives_weight_management_offsets() {
        // Mifflin-St Jeor for a 31-year-old male, 80 kg, 180 cm: 1775 kcal.
        // Sedentary multiplier 1.2 gives 2130 kcal/day.
        let fields = form(&[
            ("age", "31"),
            ("gender", "male"),
            ("unit_system", "metric"),
            ("height_cm", "180"),
            ("weight_kg", "80"),
            ("activity_level", "sedentary"),
        ]);

        let result = calorie_result(&fields);
        assert_eq!(result.bmr, 1775);
        assert_eq!(result.daily_calories, 2130);
        assert_eq!(
            result.weight_management,
            WeightManagement {
                extreme_loss: 1130,
                moderate_loss: 1630,
                mild_loss: 1880,
                maintain: 2130,
                mild_gain: 2380,
                moderate_gain: 2630,
            }
        );
        assert_eq!(result.formula_used, "Mifflin St Jeor");
        assert_eq!(result.results_unit, ResultsUnit::Calories);
        assert_eq!(
            result.activity_description,
            "Sedentary: little or no exercise"
        );
    }

    #[test]
    fn kilojoule_output_converts_every_figure() {
        let fields = form(&[
            ("age", "31"),
            ("gender", "male"),
            ("unit_system", "metric"),
            ("height_cm", "180"),
            ("weight_kg", "80"),
            ("activity_level", "sedentary"),
            ("results_unit", "kilojoules"),
        ]);

        let result = calorie_result(&fields);
        // 1775 kcal * 4.1868 = 7431.57 kJ; 2130 kcal * 4.1868 = 8917.884 kJ.
        assert_eq!(result.bmr, 7432);
        assert_eq!(result.daily_calories, 8918);
        // Offsets are applied in kilocalories, then each figure converts
        // on its own: (2130 - 1000) * 4.1868 = 4731.084.
        assert_eq!(result.weight_management.extreme_loss, 4731);
        assert_eq!(result.weight_management.moderate_gain, 11011);
        assert_eq!(result.results_unit, ResultsUnit::Kilojoules);
    }

    #[test]
    fn katch_mcardle_defaults_body_fat_to_fifteen_percent() {
        let fields = form(&[
            ("age", "30"),
            ("gender", "male"),
            ("unit_system", "metric"),
            ("height_cm", "180"),
            ("weight_kg", "80"),
            ("activity_level", "bmr"),
            ("bmr_formula", "katch_mcardle"),
        ]);

        // 370 + 21.6 * 68 = 1838.8, rounded to 1839.
        let result = calorie_result(&fields);
        assert_eq!(result.bmr, 1839);
        assert_eq!(result.formula_used, "Katch Mcardle");
    }

    #[test]
    fn unrecognized_formula_falls_back_to_mifflin() {
        let fields = form(&[
            ("age", "31"),
            ("gender", "male"),
            ("unit_system", "metric"),
            ("height_cm", "180"),
            ("weight_kg", "80"),
            ("activity_level", "bmr"),
            ("bmr_formula", "cunningham"),
        ]);

        let result = calorie_result(&fields);
        assert_eq!(result.bmr, 1775);
        assert_eq!(result.formula_used, "Mifflin St Jeor");
    }

    #[test]
    fn bmi_flow_adds_pound_range_for_us_requests() {
        let fields = form(&[
            ("bmi_age", "30"),
            ("bmi_unit_system", "us"),
            ("bmi_feet", "6"),
            ("bmi_inches", "0"),
            ("bmi_weight_lbs", "200"),
        ]);

        let result = bmi_result(&fields);
        assert_eq!(result.unit_system, UnitSystem::Us);
        let min_lbs = result.min_healthy_weight_lbs.unwrap();
        let max_lbs = result.max_healthy_weight_lbs.unwrap();
        // The kg range converts back to roughly 135-183 lbs for 6 ft.
        assert!(min_lbs > 135.0 && min_lbs < 137.0, "min was {}", min_lbs);
        assert!(max_lbs > 182.0 && max_lbs < 185.0, "max was {}", max_lbs);
    }

    #[test]
    fn bmi_flow_keeps_metric_results_metric() {
        let fields = form(&[
            ("bmi_age", "30"),
            ("bmi_unit_system", "metric"),
            ("bmi_height_cm", "200"),
            ("bmi_weight_kg", "100"),
        ]);

        let result = bmi_result(&fields);
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.classification, BmiClassification::Overweight);
        assert_eq!(result.min_healthy_weight_lbs, None);
        assert_eq!(result.max_healthy_weight_lbs, None);
        assert_eq!(result.unit_system, UnitSystem::Metric);
    }

    #[test]
    fn energy_flow_converts_and_rounds_to_four_decimals() {
        let fields = form(&[
            ("energy_value", "100"),
            ("energy_from_unit", "cal_nutritional"),
            ("energy_to_unit", "kilojoules"),
        ]);

        let result = energy_result(&fields);
        assert_eq!(result.original_value, 100.0);
        assert_eq!(result.converted_value, 418.68);
        assert_eq!(result.from_unit, "cal_nutritional");
        assert_eq!(result.to_unit, "kilojoules");
    }

    #[test]
    fn small_calories_scale_around_the_conversion() {
        // 1000 small calories are one nutritional calorie: 4.1868 kJ.
        let fields = form(&[
            ("energy_value", "1000"),
            ("energy_from_unit", "cal_small"),
            ("energy_to_unit", "kilojoules"),
        ]);
        assert_eq!(energy_result(&fields).converted_value, 4.1868);

        // And back out: 4.1868 kJ is 1000 small calories.
        let fields = form(&[
            ("energy_value", "4.1868"),
            ("energy_from_unit", "kilojoules"),
            ("energy_to_unit", "cal_small"),
        ]);
        assert_eq!(energy_result(&fields).converted_value, 1000.0);
    }

    #[test]
    fn unknown_calculation_kind_is_a_validation_error() {
        let result = CalculatorImpl.calculate("astrology", &HashMap::new());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid calculation type."
        );
    }
}
