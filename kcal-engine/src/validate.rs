use std::collections::HashMap;

use kcal_model::biometrics::{ActivityLevel, BiometricInput, BmrFormula, Gender, UnitSystem};
use kcal_model::energy::{EnergyUnit, ResultsUnit};

use crate::error::CalculationError;
use crate::units::{self, Unit};

const INVALID_BODY_NUMBERS: &str = "Please enter valid numbers for height and weight.";

/// Form field names for one set of body measurements. The BMI form carries
/// the same fields under a `bmi_` prefix.
struct BodyFields {
    feet: &'static str,
    inches: &'static str,
    weight_lbs: &'static str,
    height_cm: &'static str,
    weight_kg: &'static str,
}

const CALORIE_BODY: BodyFields = BodyFields {
    feet: "feet",
    inches: "inches",
    weight_lbs: "weight_lbs",
    height_cm: "height_cm",
    weight_kg: "weight_kg",
};

const BMI_BODY: BodyFields = BodyFields {
    feet: "bmi_feet",
    inches: "bmi_inches",
    weight_lbs: "bmi_weight_lbs",
    height_cm: "bmi_height_cm",
    weight_kg: "bmi_weight_kg",
};

#[derive(Debug, Clone, PartialEq)]
pub struct CalorieRequest {
    pub biometrics: BiometricInput,
    pub activity: ActivityLevel,
    pub formula: BmrFormula,
    pub results_unit: ResultsUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BmiRequest {
    pub biometrics: BiometricInput,
    pub unit_system: UnitSystem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRequest {
    pub value: f64,
    pub from_unit: EnergyUnit,
    pub to_unit: EnergyUnit,
    pub raw_from: String,
    pub raw_to: String,
}

pub fn calorie_request(
    fields: &HashMap<String, String>,
) -> Result<CalorieRequest, CalculationError> {
    let age_years = parse_age(fields, "age", 15, 80)?;
    let gender = Gender::from_raw(field(fields, "gender").unwrap_or(""));
    let unit_system = UnitSystem::from_raw(field(fields, "unit_system"));
    let (height_cm, weight_kg) = body_measurements(fields, unit_system, &CALORIE_BODY)?;

    // Unrecognized selector values fall back silently instead of failing
    // the request.
    let activity = field(fields, "activity_level")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(ActivityLevel::Sedentary);
    let formula = field(fields, "bmr_formula")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(BmrFormula::MifflinStJeor);
    let results_unit = field(fields, "results_unit")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(ResultsUnit::Calories);

    let body_fat_percent = field(fields, "body_fat")
        .map(|raw| {
            raw.parse::<f64>().map_err(|_| {
                CalculationError::validation("Please enter a valid body fat percentage.")
            })
        })
        .transpose()?;

    Ok(CalorieRequest {
        biometrics: BiometricInput {
            age_years,
            gender,
            height_cm,
            weight_kg,
            body_fat_percent,
        },
        activity,
        formula,
        results_unit,
    })
}

pub fn bmi_request(fields: &HashMap<String, String>) -> Result<BmiRequest, CalculationError> {
    let age_years = parse_age(fields, "bmi_age", 2, 120)?;
    let gender = Gender::from_raw(field(fields, "bmi_gender").unwrap_or(""));
    let unit_system = UnitSystem::from_raw(field(fields, "bmi_unit_system"));
    let (height_cm, weight_kg) = body_measurements(fields, unit_system, &BMI_BODY)?;

    Ok(BmiRequest {
        biometrics: BiometricInput {
            age_years,
            gender,
            height_cm,
            weight_kg,
            body_fat_percent: None,
        },
        unit_system,
    })
}

pub fn energy_request(fields: &HashMap<String, String>) -> Result<EnergyRequest, CalculationError> {
    let (raw_from, raw_to) = match (
        field(fields, "energy_from_unit"),
        field(fields, "energy_to_unit"),
    ) {
        (Some(from), Some(to)) => (from.to_string(), to.to_string()),
        _ => {
            return Err(CalculationError::validation(
                "Both from and to units are required.",
            ))
        }
    };

    let from_unit = raw_from
        .parse()
        .map_err(|_| CalculationError::validation("Unknown energy unit."))?;
    let to_unit = raw_to
        .parse()
        .map_err(|_| CalculationError::validation("Unknown energy unit."))?;

    let value = match field(fields, "energy_value") {
        None => 0.0,
        Some(raw) => raw.parse().map_err(|_| {
            CalculationError::validation("Energy value must be a valid number.")
        })?,
    };

    Ok(EnergyRequest {
        value,
        from_unit,
        to_unit,
        raw_from,
        raw_to,
    })
}

/// Fetch a form field, treating blank values the same as missing ones.
fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_age(
    fields: &HashMap<String, String>,
    name: &str,
    min: i32,
    max: i32,
) -> Result<i32, CalculationError> {
    let raw = field(fields, name)
        .ok_or_else(|| CalculationError::validation("Age is required."))?;
    let age = raw
        .parse::<i32>()
        .map_err(|_| CalculationError::validation("Age must be a valid number."))?;
    if !(min..=max).contains(&age) {
        return Err(CalculationError::Validation(format!(
            "Age must be between {} and {} years.",
            min, max
        )));
    }
    Ok(age)
}

/// Read height and weight under the given field names and normalize them
/// to centimeters and kilograms.
fn body_measurements(
    fields: &HashMap<String, String>,
    unit_system: UnitSystem,
    names: &BodyFields,
) -> Result<(f64, f64), CalculationError> {
    let (height_cm, weight_kg) = match unit_system {
        UnitSystem::Us => {
            let feet = parse_or_zero(fields, names.feet)?;
            let inches = parse_or_zero(fields, names.inches)?;
            let weight_lbs = field(fields, names.weight_lbs)
                .ok_or_else(|| CalculationError::validation("Weight is required."))?
                .parse::<f64>()
                .map_err(|_| CalculationError::validation(INVALID_BODY_NUMBERS))?;

            let total_inches = f64::from(feet * 12 + inches);
            (
                units::convert(total_inches, Unit::Inches, Unit::Cm),
                units::convert(weight_lbs, Unit::Lbs, Unit::Kg),
            )
        }
        UnitSystem::Metric => {
            let (height_raw, weight_raw) = match (
                field(fields, names.height_cm),
                field(fields, names.weight_kg),
            ) {
                (Some(height), Some(weight)) => (height, weight),
                _ => {
                    return Err(CalculationError::validation(
                        "Height and weight are required.",
                    ))
                }
            };
            let height_cm = height_raw
                .parse::<f64>()
                .map_err(|_| CalculationError::validation(INVALID_BODY_NUMBERS))?;
            let weight_kg = weight_raw
                .parse::<f64>()
                .map_err(|_| CalculationError::validation(INVALID_BODY_NUMBERS))?;
            (height_cm, weight_kg)
        }
    };

    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(CalculationError::validation(
            "Height and weight must be positive numbers.",
        ));
    }
    Ok((height_cm, weight_kg))
}

/// Feet and inches may be left blank on the US form and default to zero.
fn parse_or_zero(fields: &HashMap<String, String>, name: &str) -> Result<i32, CalculationError> {
    field(fields, name)
        .map(|raw| {
            raw.parse::<i32>()
                .map_err(|_| CalculationError::validation(INVALID_BODY_NUMBERS))
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(0))
}
